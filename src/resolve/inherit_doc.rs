//! The inherit-doc resolution pass.
//!
//! Sweeps a container's descendants post-order looking for comments carrying
//! an `inheritdoc` tag, resolves the tag's name path to a source reflection,
//! aligns overload signatures positionally, and copies the source's
//! documentation fields into the destination comment.
//!
//! Every failure mode degrades to "no inheritance applied" for that one
//! directive; nothing in this pass aborts the run. The skip taxonomy is
//! tallied in [`InheritDocStats`] for diagnostics only.

use crate::model::{Comment, ReflectionId, ReflectionTree, TAG_INHERIT_DOC};
use crate::resolve::name::find_reflection_by_name;
use crate::resolve::signature::align_signature;
use crate::resolve::{PassStats, ResolvePass};

/// Stage priority of the inherit-doc pass. Runs near the end of the
/// resolution stage so that passes synthesizing implicit members have already
/// produced the nodes this pass may need to find.
pub const INHERIT_DOC_PRIORITY: i32 = -200;

/// Outcome tally of one inherit-doc sweep.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InheritDocStats {
    /// Directives whose documentation was copied.
    pub applied: usize,
    /// Directives with an empty target path.
    pub skipped_malformed: usize,
    /// Directives whose name path matched no reflection.
    pub skipped_unresolved: usize,
    /// Signature directives whose overload index was out of range on the
    /// source.
    pub skipped_unaligned: usize,
    /// Directives whose target resolved to an unusable reflection (a
    /// project-kind node).
    pub skipped_ineligible: usize,
}

impl InheritDocStats {
    pub fn skipped(&self) -> usize {
        self.skipped_malformed
            + self.skipped_unresolved
            + self.skipped_unaligned
            + self.skipped_ineligible
    }
}

/// The pass as registered with the resolution stage.
pub struct InheritDocPass;

impl ResolvePass for InheritDocPass {
    fn name(&self) -> &'static str {
        "inherit-doc"
    }

    fn priority(&self) -> i32 {
        INHERIT_DOC_PRIORITY
    }

    fn run(&self, tree: &mut ReflectionTree, root: ReflectionId) -> PassStats {
        let stats = resolve_inherit_docs(tree, root);
        PassStats {
            applied: stats.applied,
            skipped: stats.skipped(),
        }
    }
}

/// Resolve every `inheritdoc` directive under `container_root`.
///
/// Descendants are visited post-order, so members of a container are handled
/// before the container itself. Name paths resolve relative to
/// `container_root`; an unresolved path is a no-op for that directive.
///
/// The pass mutates only `comment` fields of existing nodes. It never creates
/// or deletes reflections, and re-running it on an already-resolved tree
/// changes nothing.
pub fn resolve_inherit_docs(
    tree: &mut ReflectionTree,
    container_root: ReflectionId,
) -> InheritDocStats {
    let mut stats = InheritDocStats::default();

    for item in tree.descendants_post_order(container_root) {
        let Some(target_path) = inherit_target_path(tree, item) else {
            continue;
        };
        if target_path.is_empty() {
            // Directive without a target path. Malformed, but not an error.
            stats.skipped_malformed += 1;
            continue;
        }

        let Some(source) = find_reflection_by_name(tree, container_root, &target_path) else {
            stats.skipped_unresolved += 1;
            continue;
        };

        let target = if tree.get(item).kind.is_signature() && tree.get(source).kind.is_declaration()
        {
            match align_signature(tree, item, source) {
                Some(aligned) => aligned,
                None => {
                    // Overload index out of range on the source. Do not fall
                    // back to the unaligned declaration.
                    stats.skipped_unaligned += 1;
                    continue;
                }
            }
        } else {
            source
        };

        if tree.get(target).kind.is_project() {
            stats.skipped_ineligible += 1;
            continue;
        }

        // A target without a comment still counts as resolved: the directive
        // adopts its (empty) documentation.
        let source_comment = tree.get(target).comment.clone().unwrap_or_default();
        if let Some(comment) = tree.get_mut(item).comment.as_mut() {
            comment.inherit_from(&source_comment);
            stats.applied += 1;
        }
    }

    stats
}

/// The target name path of `item`'s inheritance directive, if it has one.
fn inherit_target_path(tree: &ReflectionTree, item: ReflectionId) -> Option<String> {
    tree.get(item)
        .comment
        .as_ref()
        .and_then(|c| c.get_tag(TAG_INHERIT_DOC))
        .map(|tag| tag.param_name().to_string())
}

/// Convenience for building destination comments in front-end fixtures and
/// tests: a comment holding only an `inheritdoc` directive.
pub fn inherit_doc_comment(target_path: &str) -> Comment {
    let mut comment = Comment::default();
    comment
        .tags
        .push(crate::model::CommentTag::new(TAG_INHERIT_DOC, target_path, ""));
    comment
}
