//! The reflection tree: an arena of documentation symbols.
//!
//! Nodes are owned by the [`ReflectionTree`] arena and reference each other by
//! [`ReflectionId`]. Children are owned in declaration order; the parent link
//! is a plain id used only for upward context during resolution, never for
//! lifetime management.
//!
//! The tree is acyclic by construction: [`ReflectionTree::add_child`] is the
//! only way to create a node and always appends a fresh one, so traversal
//! performs no cycle detection.

use crate::model::{Comment, ReflectionKind};

/// Stable identifier of a reflection within one tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ReflectionId(u32);

impl ReflectionId {
    fn index(self) -> usize {
        self.0 as usize
    }
}

/// One node in the documentation symbol tree.
#[derive(Debug, Clone)]
pub struct Reflection {
    pub id: ReflectionId,
    /// Symbol name. Not required to be unique among siblings; overload
    /// signatures all carry their declaration's name.
    pub name: String,
    pub kind: ReflectionKind,
    /// Back-reference to the owning parent. `None` only for the root.
    pub parent: Option<ReflectionId>,
    /// Owned children in declaration order. For an overloaded declaration the
    /// relative order of signature children is meaningful and mirrors the
    /// declaration order seen at extraction time.
    pub children: Vec<ReflectionId>,
    pub comment: Option<Comment>,
}

/// Arena-owned documentation symbol tree.
#[derive(Debug, Clone)]
pub struct ReflectionTree {
    nodes: Vec<Reflection>,
}

impl ReflectionTree {
    /// Create a tree whose root is a project reflection with the given name.
    pub fn new(project_name: impl Into<String>) -> Self {
        Self::with_root(project_name, ReflectionKind::Project)
    }

    /// Create a tree with an explicit root kind.
    pub fn with_root(name: impl Into<String>, kind: ReflectionKind) -> Self {
        Self {
            nodes: vec![Reflection {
                id: ReflectionId(0),
                name: name.into(),
                kind,
                parent: None,
                children: Vec::new(),
                comment: None,
            }],
        }
    }

    pub fn root(&self) -> ReflectionId {
        ReflectionId(0)
    }

    /// Append a new child under `parent` and return its id.
    pub fn add_child(
        &mut self,
        parent: ReflectionId,
        name: impl Into<String>,
        kind: ReflectionKind,
    ) -> ReflectionId {
        let id = ReflectionId(self.nodes.len() as u32);
        self.nodes.push(Reflection {
            id,
            name: name.into(),
            kind,
            parent: Some(parent),
            children: Vec::new(),
            comment: None,
        });
        self.nodes[parent.index()].children.push(id);
        id
    }

    pub fn get(&self, id: ReflectionId) -> &Reflection {
        &self.nodes[id.index()]
    }

    pub fn get_mut(&mut self, id: ReflectionId) -> &mut Reflection {
        &mut self.nodes[id.index()]
    }

    pub fn set_comment(&mut self, id: ReflectionId, comment: Comment) {
        self.nodes[id.index()].comment = Some(comment);
    }

    /// Number of nodes in the tree, root included.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Ids of all nodes in creation order.
    pub fn ids(&self) -> impl Iterator<Item = ReflectionId> + '_ {
        (0..self.nodes.len() as u32).map(ReflectionId)
    }

    /// The signature children of a declaration, in declaration order.
    pub fn signatures(&self, declaration: ReflectionId) -> Vec<ReflectionId> {
        self.get(declaration)
            .children
            .iter()
            .copied()
            .filter(|&c| self.get(c).kind.is_signature())
            .collect()
    }

    /// Position of a signature within its parent declaration's signature
    /// sequence. Falls back to 0 when the signature has no parent.
    pub fn signature_index(&self, signature: ReflectionId) -> usize {
        let Some(parent) = self.get(signature).parent else {
            return 0;
        };
        self.signatures(parent)
            .iter()
            .position(|&s| s == signature)
            .unwrap_or(0)
    }

    /// Visit every descendant of `node` post-order.
    ///
    /// Children are visited in declaration order; each child's subtree is
    /// traversed before the callback sees the child itself, so descendants
    /// are always visited before their ancestors. `node` itself is not
    /// visited.
    ///
    /// Returning `false` from the callback stops traversal of subsequent
    /// siblings at that level only; recursion already in progress at outer
    /// levels still completes.
    pub fn traverse(&self, node: ReflectionId, callback: &mut dyn FnMut(ReflectionId) -> bool) {
        // Children list is cloned so the callback may look up nodes freely.
        let children = self.get(node).children.clone();
        for child in children {
            self.traverse(child, callback);
            if !callback(child) {
                break;
            }
        }
    }

    /// Descendants of `node` in post-order, as a flat list.
    ///
    /// Useful when the caller needs to mutate nodes while walking; the order
    /// is fixed up front so mutation cannot disturb the visit.
    pub fn descendants_post_order(&self, node: ReflectionId) -> Vec<ReflectionId> {
        let mut order = Vec::new();
        self.traverse(node, &mut |id| {
            order.push(id);
            true
        });
        order
    }
}
