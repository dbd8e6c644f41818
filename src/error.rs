//! Error types for URL construction.

use thiserror::Error;

/// Errors that can occur while constructing a [`Url`](crate::Url).
///
/// Parsing a raw string never fails: every character sequence has a
/// defined (possibly degenerate) parse. The only failure mode is
/// handing the constructor a dynamic value that is neither a raw
/// string nor a compatible structured definition.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum VarurlError {
    /// The construction input was not a raw URL string and could not be
    /// mapped onto a URL definition object.
    #[error("invalid url definition: {0}")]
    InvalidDefinition(String),
}
