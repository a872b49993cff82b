//! Wire-format parsers for the front-end boundary.

pub mod json;
