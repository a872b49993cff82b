//! Positional alignment of overload signatures.
//!
//! When a signature inherits documentation from an overloaded declaration,
//! nothing in the model links a derived overload to its corresponding source
//! overload. The position of the signature within its own declaration is used
//! as a heuristic instead, assuming overloads are declared in the same
//! relative order on both sides. This is a known limitation, not a guarantee,
//! which is why alignment is an explicit fallible operation.

use crate::model::{ReflectionId, ReflectionTree};

/// Select the inheritance target for a signature that references
/// `source_declaration`.
///
/// For a function-or-method-like source, the derived signature's position
/// within its parent's signature sequence picks the source signature at the
/// same index; `None` when that index is out of range. Callers must treat
/// `None` as a skip, never falling back to the unaligned declaration.
///
/// A source that is not function-or-method-like has no overload sequence to
/// align against; the declaration itself is the target, unchanged.
pub fn align_signature(
    tree: &ReflectionTree,
    derived_signature: ReflectionId,
    source_declaration: ReflectionId,
) -> Option<ReflectionId> {
    debug_assert!(tree.get(derived_signature).kind.is_signature());

    if !tree.get(source_declaration).kind.is_function_or_method() {
        return Some(source_declaration);
    }

    let index = tree.signature_index(derived_signature);
    tree.signatures(source_declaration).get(index).copied()
}
