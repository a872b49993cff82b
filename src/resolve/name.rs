//! Name-path resolution within a subtree.
//!
//! A name path is a `.`-delimited sequence of identifiers locating a symbol
//! relative to a scope root, e.g. `Base.run`. Resolution walks segment by
//! segment through the children of the current node; a failed segment fails
//! the whole path. An unresolved path is a valid "no inheritance source"
//! outcome for callers, not an error.

use crate::model::{ReflectionId, ReflectionTree};

/// Delimiter between name-path segments.
pub const NAME_PATH_DELIMITER: char = '.';

/// Resolve a dotted name path against the subtree rooted at `root`.
///
/// At each segment the children of the current node are searched for an exact
/// name match. Overload signatures collapse to one declaration name, so
/// several children may share a name; in that case the first declaration-kind
/// match wins (signature selection is the aligner's job, not the resolver's).
///
/// Returns `None` when any segment fails to match. There is no partial
/// result and no upward walk into enclosing scopes.
pub fn find_reflection_by_name(
    tree: &ReflectionTree,
    root: ReflectionId,
    name_path: &str,
) -> Option<ReflectionId> {
    let mut current = root;
    for segment in name_path.split(NAME_PATH_DELIMITER) {
        if segment.is_empty() {
            return None;
        }
        current = find_child_by_name(tree, current, segment)?;
    }
    Some(current)
}

/// Find a child of `node` by exact name, preferring declaration kinds when
/// several children share the name.
fn find_child_by_name(
    tree: &ReflectionTree,
    node: ReflectionId,
    name: &str,
) -> Option<ReflectionId> {
    let mut first_match = None;
    for &child in &tree.get(node).children {
        if tree.get(child).name != name {
            continue;
        }
        if tree.get(child).kind.is_declaration() {
            return Some(child);
        }
        first_match.get_or_insert(child);
    }
    first_match
}
