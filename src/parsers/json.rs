//! JSON boundary with the symbol-extraction front end.
//!
//! The front end hands over a fully constructed reflection tree as nested
//! JSON objects; the renderer later consumes the resolved tree in the same
//! shape. Decoding builds the arena model; encoding walks it back out.
//! Round-trips preserve names, kinds, comments, tag order, and child order.

use anyhow::{Context as _, Result, bail};
use serde::{Deserialize, Serialize};

use crate::model::{Comment, CommentTag, ReflectionId, ReflectionKind, ReflectionTree};

/// Wire shape of one reflection node.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawReflection {
    pub name: String,
    pub kind: ReflectionKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub comment: Option<RawComment>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<RawReflection>,
}

/// Wire shape of a comment.
#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct RawComment {
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_text: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<RawTag>,
}

/// Wire shape of one comment tag.
#[derive(Debug, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RawTag {
    pub tag: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub param: String,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

/// Decode a front-end tree from JSON.
///
/// The top-level node must be a container kind; everything below it may be
/// any kind. Comments are attached as-is, tag names normalized by
/// [`CommentTag::new`].
pub fn parse_tree(json: &str) -> Result<ReflectionTree> {
    let raw: RawReflection =
        serde_json::from_str(json).context("Failed to parse reflection tree JSON")?;

    if !raw.kind.is_container() {
        bail!(
            "Top-level reflection '{}' must be a container kind, got {}",
            raw.name,
            raw.kind
        );
    }

    let mut tree = ReflectionTree::with_root(&raw.name, raw.kind);
    if let Some(comment) = &raw.comment {
        tree.set_comment(tree.root(), decode_comment(comment));
    }
    let root = tree.root();
    for child in &raw.children {
        decode_into(&mut tree, root, child);
    }
    Ok(tree)
}

fn decode_into(tree: &mut ReflectionTree, parent: ReflectionId, raw: &RawReflection) {
    let id = tree.add_child(parent, &raw.name, raw.kind);
    if let Some(comment) = &raw.comment {
        tree.set_comment(id, decode_comment(comment));
    }
    for child in &raw.children {
        decode_into(tree, id, child);
    }
}

fn decode_comment(raw: &RawComment) -> Comment {
    let mut comment = Comment::new(&raw.short_text, &raw.text);
    comment.tags = raw
        .tags
        .iter()
        .map(|t| CommentTag::new(&t.tag, &t.param, &t.text))
        .collect();
    comment
}

/// Encode a tree back to its wire shape.
pub fn tree_to_raw(tree: &ReflectionTree) -> RawReflection {
    encode_node(tree, tree.root())
}

/// Encode a tree to a JSON string, pretty-printed unless `compact`.
pub fn tree_to_json(tree: &ReflectionTree, compact: bool) -> Result<String> {
    let raw = tree_to_raw(tree);
    let json = if compact {
        serde_json::to_string(&raw)
    } else {
        serde_json::to_string_pretty(&raw)
    };
    json.context("Failed to serialize reflection tree")
}

fn encode_node(tree: &ReflectionTree, id: ReflectionId) -> RawReflection {
    let node = tree.get(id);
    RawReflection {
        name: node.name.clone(),
        kind: node.kind,
        comment: node.comment.as_ref().map(encode_comment),
        children: node
            .children
            .iter()
            .map(|&child| encode_node(tree, child))
            .collect(),
    }
}

fn encode_comment(comment: &Comment) -> RawComment {
    RawComment {
        short_text: comment.short_text.clone(),
        text: comment.text.clone(),
        tags: comment
            .tags
            .iter()
            .map(|t| RawTag {
                tag: t.tag_name().to_string(),
                param: t.param_name().to_string(),
                text: t.text().to_string(),
            })
            .collect(),
    }
}
