//! Resolution stage: priority-ordered passes over the reflection tree.
//!
//! After the front end has fully populated a tree, registered passes run in a
//! strictly ordered, single-threaded stage. Each pass declares a priority;
//! higher priorities run earlier, and registration order breaks ties. The
//! inherit-doc pass registers at [`INHERIT_DOC_PRIORITY`] so that passes
//! which synthesize implicit members have already produced the nodes it may
//! need to find.
//!
//! The stage invokes each pass once per top-level container, which for a
//! tree arriving over the JSON boundary is its root. Passes themselves take
//! an arbitrary container root, so an embedding pipeline with several
//! top-level modules can invoke them per module and get module-relative
//! name resolution.

mod inherit_doc;
mod name;
mod signature;

pub use inherit_doc::{
    INHERIT_DOC_PRIORITY, InheritDocPass, InheritDocStats, inherit_doc_comment,
    resolve_inherit_docs,
};
pub use name::{NAME_PATH_DELIMITER, find_reflection_by_name};
pub use signature::align_signature;

use crate::model::{ReflectionId, ReflectionTree};

/// Aggregate outcome of one pass over one scope.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PassStats {
    pub applied: usize,
    pub skipped: usize,
}

/// Outcome of one pass across the whole stage.
#[derive(Debug, Clone)]
pub struct PassResult {
    pub name: &'static str,
    pub stats: PassStats,
}

/// One resolution pass.
///
/// Passes mutate the tree they are given but never observe each other
/// directly; ordering is enforced by the stage, not by locking.
pub trait ResolvePass {
    fn name(&self) -> &'static str;

    /// Stage priority. Higher runs earlier; defaults to 0.
    fn priority(&self) -> i32 {
        0
    }

    fn run(&self, tree: &mut ReflectionTree, root: ReflectionId) -> PassStats;
}

/// The resolution stage scheduler.
pub struct Resolver {
    passes: Vec<Box<dyn ResolvePass>>,
}

impl Resolver {
    /// An empty stage with no registered passes.
    pub fn new() -> Self {
        Self { passes: Vec::new() }
    }

    /// The default stage: currently just the inherit-doc pass.
    pub fn with_defaults() -> Self {
        let mut resolver = Self::new();
        resolver.register(Box::new(InheritDocPass));
        resolver
    }

    pub fn register(&mut self, pass: Box<dyn ResolvePass>) {
        self.passes.push(pass);
    }

    /// Passes in execution order (priority descending, registration order for
    /// ties).
    pub fn passes(&self) -> Vec<&dyn ResolvePass> {
        let mut ordered: Vec<&dyn ResolvePass> =
            self.passes.iter().map(|p| p.as_ref()).collect();
        // Stable sort keeps registration order among equal priorities.
        ordered.sort_by_key(|p| std::cmp::Reverse(p.priority()));
        ordered
    }

    /// Run every registered pass over the tree, rooted at its top-level
    /// container. Each pass completes before the next one starts.
    pub fn run(&self, tree: &mut ReflectionTree) -> Vec<PassResult> {
        let root = tree.root();

        self.passes()
            .into_iter()
            .map(|pass| PassResult {
                name: pass.name(),
                stats: pass.run(tree, root),
            })
            .collect()
    }
}

impl Default for Resolver {
    fn default() -> Self {
        Self::with_defaults()
    }
}
