//! Reflection kinds and kind classes.
//!
//! Every reflection carries one concrete kind. The resolver never cares about
//! the concrete kind directly; it works with the four kind classes exposed as
//! predicates here:
//!
//! - **project**: the synthetic root of the tree
//! - **container**: owns members that are themselves symbols (module, class, ...)
//! - **declaration**: a single named member (function, property, ...)
//! - **signature**: one call/construct signature of a possibly-overloaded declaration

use std::fmt;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReflectionKind {
    Project,
    Module,
    Namespace,
    Class,
    Interface,
    Enum,
    Function,
    Method,
    Constructor,
    Property,
    Variable,
    TypeAlias,
    CallSignature,
    ConstructorSignature,
}

impl ReflectionKind {
    /// Returns true for the synthetic project root kind.
    pub fn is_project(&self) -> bool {
        matches!(self, ReflectionKind::Project)
    }

    /// Returns true for kinds that own child symbols (the project included).
    pub fn is_container(&self) -> bool {
        matches!(
            self,
            ReflectionKind::Project
                | ReflectionKind::Module
                | ReflectionKind::Namespace
                | ReflectionKind::Class
                | ReflectionKind::Interface
                | ReflectionKind::Enum
        )
    }

    /// Returns true for kinds representing a single named member.
    pub fn is_declaration(&self) -> bool {
        matches!(
            self,
            ReflectionKind::Function
                | ReflectionKind::Method
                | ReflectionKind::Constructor
                | ReflectionKind::Property
                | ReflectionKind::Variable
                | ReflectionKind::TypeAlias
        )
    }

    /// Returns true for kinds representing one call/construct signature.
    pub fn is_signature(&self) -> bool {
        matches!(
            self,
            ReflectionKind::CallSignature | ReflectionKind::ConstructorSignature
        )
    }

    /// Returns true for declarations that carry overload signatures.
    ///
    /// Only these participate in positional signature alignment; other
    /// declaration kinds are inherited from as-is.
    pub fn is_function_or_method(&self) -> bool {
        matches!(self, ReflectionKind::Function | ReflectionKind::Method)
    }
}

impl fmt::Display for ReflectionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ReflectionKind::Project => "project",
            ReflectionKind::Module => "module",
            ReflectionKind::Namespace => "namespace",
            ReflectionKind::Class => "class",
            ReflectionKind::Interface => "interface",
            ReflectionKind::Enum => "enum",
            ReflectionKind::Function => "function",
            ReflectionKind::Method => "method",
            ReflectionKind::Constructor => "constructor",
            ReflectionKind::Property => "property",
            ReflectionKind::Variable => "variable",
            ReflectionKind::TypeAlias => "type alias",
            ReflectionKind::CallSignature => "call signature",
            ReflectionKind::ConstructorSignature => "constructor signature",
        };
        write!(f, "{}", name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classes_are_disjoint() {
        let all = [
            ReflectionKind::Project,
            ReflectionKind::Module,
            ReflectionKind::Namespace,
            ReflectionKind::Class,
            ReflectionKind::Interface,
            ReflectionKind::Enum,
            ReflectionKind::Function,
            ReflectionKind::Method,
            ReflectionKind::Constructor,
            ReflectionKind::Property,
            ReflectionKind::Variable,
            ReflectionKind::TypeAlias,
            ReflectionKind::CallSignature,
            ReflectionKind::ConstructorSignature,
        ];

        for kind in all {
            let classes = [
                kind.is_container(),
                kind.is_declaration(),
                kind.is_signature(),
            ];
            assert_eq!(
                classes.iter().filter(|c| **c).count(),
                1,
                "{} must belong to exactly one kind class",
                kind
            );
        }
    }

    #[test]
    fn test_function_or_method_subset_of_declarations() {
        assert!(ReflectionKind::Function.is_function_or_method());
        assert!(ReflectionKind::Method.is_function_or_method());
        assert!(!ReflectionKind::Property.is_function_or_method());
        assert!(!ReflectionKind::Constructor.is_function_or_method());
        assert!(!ReflectionKind::Class.is_function_or_method());
    }

    #[test]
    fn test_project_is_container() {
        assert!(ReflectionKind::Project.is_project());
        assert!(ReflectionKind::Project.is_container());
        assert!(!ReflectionKind::Class.is_project());
    }

    #[test]
    fn test_kind_serde_names_are_camel_case() {
        let json = serde_json::to_string(&ReflectionKind::CallSignature).unwrap();
        assert_eq!(json, "\"callSignature\"");

        let kind: ReflectionKind = serde_json::from_str("\"typeAlias\"").unwrap();
        assert_eq!(kind, ReflectionKind::TypeAlias);
    }
}
