//! The parse/serialize pipeline.
//!
//! This module contains the two directions of the engine and the query
//! codec they share:
//! - Parsing raw strings into the URL field set
//! - Serializing the field set back, byte for byte
//! - Tokenizing query strings into ordered pairs and back

pub mod parser;
pub mod query;
pub mod serializer;

// Re-export main functionality
pub use self::parser::parse_url;
pub use self::query::{parse_query, serialize_query};
pub use self::serializer::unparse_url;
