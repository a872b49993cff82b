//! Documentation model: reflections, kinds, and comments.

mod comment;
mod kind;
mod reflection;

pub use comment::{
    Comment, CommentTag, TAG_INHERIT_DOC, TAG_PARAM, TAG_REMARKS, TAG_RETURNS, TAG_TYPE_PARAM,
};
pub use kind::ReflectionKind;
pub use reflection::{Reflection, ReflectionId, ReflectionTree};
