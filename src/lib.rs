//! varurl - Template-aware URL value object
//!
//! This crate parses raw, possibly templated URL strings into a
//! structured [`Url`] value and serializes them back without losing a
//! byte. `{{name}}` placeholders are treated as opaque units, so a
//! templated host or path splits on real separators only.
//!
//! # Features
//!
//! - **Loose parsing**: every input string parses; malformed URLs fill
//!   fewer fields instead of failing
//! - **Template-aware**: `{{...}}` spans protect the separators inside
//!   them from splitting
//! - **Exact round-trip**: [`Url::raw`] reproduces the parsed input
//!   byte for byte
//! - **Derived views**: remote authority, OAuth 1.0 signature base URL,
//!   and placeholder-resolved paths
//! - **JSON projection**: serde definitions in the persisted
//!   `{protocol, host, path, query, ...}` layout
//!
//! # Quick Start
//!
//! ```
//! use varurl::{RemoteOptions, Url};
//!
//! // Parse a templated URL
//! let url = Url::parse("http://user@{{host}}.example.com:8080/{{path}}?q=1#top");
//! assert_eq!(url.host, vec!["{{host}}", "example", "com"]);
//!
//! // Serialize back exactly
//! assert_eq!(url.raw(), "http://user@{{host}}.example.com:8080/{{path}}?q=1#top");
//!
//! // Derived views
//! assert_eq!(url.remote(RemoteOptions::default()), "{{host}}.example.com:8080");
//! let path = url.resolved_path(|name| (name == "path").then(|| "users".to_string()));
//! assert_eq!(path, "/users");
//!
//! // JSON projection
//! let def = url.to_definition();
//! assert_eq!(serde_json::to_value(&def).unwrap()["host"], "{{host}}.example.com");
//! ```
//!
//! # URL Fields
//!
//! A parsed URL carries these fields, each optional except `host`:
//!
//! | Field    | Source text                  | Stored as |
//! |----------|------------------------------|-----------|
//! | protocol | before the first `://`       | string, separator dropped |
//! | auth     | `user:password@` prefix      | user plus optional password |
//! | host     | authority up to the port     | segments split on `.` |
//! | port     | after the last authority `:` | string, not validated |
//! | path     | `/` up to `?` or `#`         | segments split on `/` |
//! | query    | `?` up to `#`                | ordered key/value pairs |
//! | hash     | after the first `#`          | string, kept verbatim |
//!
//! # Error Handling
//!
//! Parsing and serialization never fail. The one fallible entry point
//! is [`Url::from_value`], which rejects JSON input that is neither a
//! raw string nor a definition object with [`VarurlError`].

// Re-export the value object and its views
pub use crate::url::{RemoteOptions, Url};

// Re-export the parse/serialize pipeline
pub use crate::codec::{parse_query, parse_url, serialize_query, unparse_url};

// Re-export template scanning helpers
pub use crate::template::{
    next_template, resolve_templates, rfind_unprotected, split_protected, TemplateSpan,
};

// Re-export public types
pub use crate::error::VarurlError;
pub use crate::types::{QueryParam, SegmentedField, UrlAuth, UrlDef, UrlVariable};

// Module declarations
pub mod codec;
pub mod error;
pub mod template;
pub mod types;
pub mod url;
