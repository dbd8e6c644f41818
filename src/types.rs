//! Core data structures for the URL field set and its JSON projection.

use serde::{Deserialize, Serialize};

/// Credentials from the authority portion of a URL.
///
/// Present only when an unescaped `@` occurs before the first `/`, `?`
/// or `#`. A trailing-colon user info (`user:@host`) keeps an empty
/// password so serialization can mirror the original text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlAuth {
    pub user: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

impl UrlAuth {
    /// Auth with a user and no password separator.
    pub fn new(user: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: None,
        }
    }

    /// Auth with both user and password (the password may be empty).
    pub fn with_password(user: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            user: user.into(),
            password: Some(password.into()),
        }
    }
}

/// One ordered query pair.
///
/// `value` distinguishes a key with no `=` at all (`None`) from a key
/// with a bare `=` (`Some("")`); both must survive the round trip, so
/// a missing value is serialized as an explicit JSON `null`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QueryParam {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
}

impl QueryParam {
    /// A `key=value` pair (the value may be empty).
    pub fn pair(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
        }
    }

    /// A key with no `=` sign.
    pub fn valueless(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: None,
        }
    }
}

/// One variable record carried alongside the URL fields.
///
/// These feed the path view's own-variable resolution and round-trip
/// through the JSON projection as `{key, value, type}`. The parser and
/// serializer never consult them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UrlVariable {
    pub key: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(default, rename = "type", skip_serializing_if = "Option::is_none")]
    pub kind: Option<String>,
}

impl UrlVariable {
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: Some(value.into()),
            kind: None,
        }
    }
}

/// A host or path field as it appears in a definition object.
///
/// The projection always writes the joined-string form, but definitions
/// are also accepted with the field pre-split into segments, so both
/// shapes hydrate.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SegmentedField {
    Joined(String),
    Segments(Vec<String>),
}

/// The flat textual layout of a URL: the persisted/external form.
///
/// Host and path are `.`/`/`-joined strings, query is the ordered pair
/// list, and absent fields are omitted entirely. Hydrating a definition
/// trusts the fields as given — no parsing beyond the documented
/// host/path splitting takes place.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct UrlDef {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub protocol: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub auth: Option<UrlAuth>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub host: Option<SegmentedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub path: Option<SegmentedField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub query: Option<Vec<QueryParam>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub variable: Option<Vec<UrlVariable>>,
}
