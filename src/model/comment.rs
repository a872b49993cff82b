//! Documentation comment model.
//!
//! A [`Comment`] holds the documentation attached to one reflection: a short
//! summary, a longer description, and an ordered list of named tags
//! (`remarks`, `param`, `typeparam`, `returns`, `inheritdoc`, ...). Tag order
//! is insertion order and duplicate tag names are allowed (e.g. one `param`
//! tag per parameter).
//!
//! Tag names are lowercased at construction, so `@inheritDoc` and
//! `@inheritdoc` written by different front ends match the same directive.

use serde::{Deserialize, Serialize};

/// Tag name of the inheritance directive.
pub const TAG_INHERIT_DOC: &str = "inheritdoc";
/// Tag name of the remarks block.
pub const TAG_REMARKS: &str = "remarks";
/// Tag name of a parameter description.
pub const TAG_PARAM: &str = "param";
/// Tag name of a type-parameter description.
pub const TAG_TYPE_PARAM: &str = "typeparam";
/// Tag name of the return-value description.
pub const TAG_RETURNS: &str = "returns";

/// A single named tag within a comment.
///
/// Immutable once constructed; merges replace whole tags rather than editing
/// tag contents in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CommentTag {
    /// Normalized (lowercase) tag name.
    #[serde(rename = "tag")]
    tag_name: String,
    /// The related parameter name for `param`/`typeparam` tags, or the target
    /// name path for `inheritdoc`. Empty when not applicable.
    #[serde(rename = "param", default, skip_serializing_if = "String::is_empty")]
    param_name: String,
    /// Body text of the tag.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    text: String,
}

impl CommentTag {
    pub fn new(
        tag_name: impl Into<String>,
        param_name: impl Into<String>,
        text: impl Into<String>,
    ) -> Self {
        Self {
            tag_name: tag_name.into().to_lowercase(),
            param_name: param_name.into(),
            text: text.into(),
        }
    }

    pub fn tag_name(&self) -> &str {
        &self.tag_name
    }

    pub fn param_name(&self) -> &str {
        &self.param_name
    }

    pub fn text(&self) -> &str {
        &self.text
    }
}

/// Documentation content attached to a reflection.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    /// Short summary text (first paragraph of the doc comment).
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub short_text: String,

    /// Full description text following the summary.
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,

    /// Named tags in insertion order. Duplicate tag names are allowed.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<CommentTag>,
}

impl Comment {
    pub fn new(short_text: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            short_text: short_text.into(),
            text: text.into(),
            tags: Vec::new(),
        }
    }

    /// Return the first tag with the given name (matched case-insensitively).
    pub fn get_tag(&self, tag_name: &str) -> Option<&CommentTag> {
        let tag_name = tag_name.to_lowercase();
        self.tags.iter().find(|t| t.tag_name == tag_name)
    }

    /// Return the first tag with the given name and parameter name.
    pub fn get_param_tag(&self, tag_name: &str, param_name: &str) -> Option<&CommentTag> {
        let tag_name = tag_name.to_lowercase();
        self.tags
            .iter()
            .find(|t| t.tag_name == tag_name && t.param_name == param_name)
    }

    pub fn has_tag(&self, tag_name: &str) -> bool {
        self.get_tag(tag_name).is_some()
    }

    /// Copy documentation from an inheritance source into this comment.
    ///
    /// Field-level merge policy:
    /// - `short_text`, `text`: replaced unconditionally. An explicit
    ///   inheritance directive signals intent to adopt the source's primary
    ///   description, even when it is empty.
    /// - `remarks`: replaced with the source's remarks tag when the source
    ///   has one; left untouched otherwise.
    /// - `param` / `typeparam`: per parameter name, an existing tag with
    ///   non-empty text is kept; empty or missing tags adopt the source's.
    /// - `returns`: adopted from the source only when missing or empty here.
    /// - Any other tag on this comment is left untouched, including the
    ///   `inheritdoc` tag itself.
    ///
    /// Re-applying with the same source is a no-op, which makes the
    /// resolution pass idempotent.
    pub fn inherit_from(&mut self, source: &Comment) {
        self.short_text = source.short_text.clone();
        self.text = source.text.clone();

        if let Some(remarks) = source.get_tag(TAG_REMARKS) {
            self.replace_or_push(remarks.clone());
        }

        for tag_name in [TAG_PARAM, TAG_TYPE_PARAM] {
            for source_tag in source.tags.iter().filter(|t| t.tag_name == tag_name) {
                let existing = self.get_param_tag(tag_name, &source_tag.param_name);
                if existing.is_none_or(|t| t.text.is_empty()) {
                    self.replace_or_push(source_tag.clone());
                }
            }
        }

        if let Some(returns) = source.get_tag(TAG_RETURNS)
            && self.get_tag(TAG_RETURNS).is_none_or(|t| t.text.is_empty())
        {
            self.replace_or_push(returns.clone());
        }
    }

    /// Replace the first tag matching `tag`'s name and parameter name, or
    /// append when there is none. Replacement preserves the tag's position.
    fn replace_or_push(&mut self, tag: CommentTag) {
        let slot = self
            .tags
            .iter_mut()
            .find(|t| t.tag_name == tag.tag_name && t.param_name == tag.param_name);
        match slot {
            Some(existing) => *existing = tag,
            None => self.tags.push(tag),
        }
    }
}
