//! Docmodel - documentation symbol tree resolution
//!
//! Docmodel is a CLI tool and library for resolving cross-references in a
//! documentation symbol tree before rendering. Its core job is the
//! `inheritdoc` directive: locating the referenced symbol by name path,
//! aligning overloaded call signatures positionally, and copying
//! documentation fields across the reference.
//!
//! The symbol-extraction front end and the renderer are external
//! collaborators; they meet this crate at a JSON boundary carrying the
//! reflection tree.
//!
//! ## Module Structure
//!
//! - `cli`: Command-line interface layer (user-facing commands)
//! - `model`: Reflection tree, kinds, and the comment model
//! - `parsers`: JSON codec for the front-end boundary
//! - `resolve`: Resolution stage, name resolver, signature aligner, and the
//!   inherit-doc pass
//! - `report`: Colored per-pass summaries

pub mod cli;
pub mod model;
pub mod parsers;
pub mod report;
pub mod resolve;
