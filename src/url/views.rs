//! Derived read-only views over a parsed URL.
//!
//! Each view computes a string from the structured fields without
//! mutating them: the remote authority for socket-level use, the
//! OAuth 1.0 signature base URL, and the path with placeholders
//! resolved.

use crate::template::resolve_templates;
use crate::url::Url;

/// Options for [`Url::remote`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RemoteOptions {
    /// Fill in the scheme's default port when none is present.
    pub force_port: bool,
}

impl Url {
    /// The remote authority, `host` or `host:port`.
    ///
    /// An explicit port always wins. With `force_port`, a missing port
    /// is inferred from the protocol: `80` for `http` (or no protocol
    /// at all), `443` for `https`. Other protocols have no default and
    /// the port stays omitted.
    ///
    /// # Examples
    ///
    /// ```
    /// use varurl::{RemoteOptions, Url};
    ///
    /// let url = Url::parse("https://example.com/get");
    ///
    /// assert_eq!(url.remote(RemoteOptions::default()), "example.com");
    /// assert_eq!(url.remote(RemoteOptions { force_port: true }), "example.com:443");
    /// ```
    pub fn remote(&self, options: RemoteOptions) -> String {
        let host = self.host.join(".");
        if let Some(port) = &self.port {
            return format!("{}:{}", host, port);
        }
        if options.force_port {
            match self.protocol.as_deref() {
                None | Some("http") => return format!("{}:80", host),
                Some("https") => return format!("{}:443", host),
                _ => {}
            }
        }
        host
    }

    /// The OAuth 1.0 signature base string URL.
    ///
    /// Protocol and host are lowercased, the path keeps its case, and
    /// query and hash are dropped. A missing protocol reads as `http`
    /// and a missing path as `/`. The port is kept unless it is the
    /// scheme's default, compared textually: `"080"` is not `"80"` and
    /// stays.
    ///
    /// # Examples
    ///
    /// ```
    /// use varurl::Url;
    ///
    /// let url = Url::parse("HTTPS://Example.com:443/Resource?a=1#frag");
    /// assert_eq!(url.oauth1_base_url(), "https://example.com/Resource");
    /// ```
    pub fn oauth1_base_url(&self) -> String {
        let protocol = self
            .protocol
            .as_deref()
            .unwrap_or("http")
            .to_lowercase();
        let host = self.host.join(".").to_lowercase();
        let path = match &self.path {
            Some(segments) if !segments.is_empty() => format!("/{}", segments.join("/")),
            _ => "/".to_string(),
        };
        match &self.port {
            Some(port) if !is_scheme_default_port(&protocol, port) => {
                format!("{}://{}:{}{}", protocol, host, port, path)
            }
            _ => format!("{}://{}{}", protocol, host, path),
        }
    }

    /// The path with `{{name}}` placeholders substituted through the
    /// given lookup. Unresolved placeholders stay verbatim; a missing
    /// or empty path resolves to `/`.
    ///
    /// # Examples
    ///
    /// ```
    /// use varurl::Url;
    ///
    /// let url = Url::parse("example.com/users/{{id}}/posts");
    /// let path = url.resolved_path(|name| (name == "id").then(|| "42".to_string()));
    ///
    /// assert_eq!(path, "/users/42/posts");
    /// ```
    pub fn resolved_path<F>(&self, resolve: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        match &self.path {
            Some(segments) if !segments.is_empty() => {
                let resolved: Vec<String> = segments
                    .iter()
                    .map(|segment| resolve_templates(segment, &resolve))
                    .collect();
                format!("/{}", resolved.join("/"))
            }
            _ => "/".to_string(),
        }
    }

    /// The path resolved against this URL's own `variable` list.
    pub fn path_with_variables(&self) -> String {
        self.resolved_path(|name| self.lookup_variable(name))
    }

    /// Looks up a variable value by key in this URL's `variable` list.
    /// The first match wins; a matching variable with no value reads
    /// as unresolved.
    pub fn lookup_variable(&self, name: &str) -> Option<String> {
        self.variable
            .as_ref()?
            .iter()
            .find(|variable| variable.key == name)?
            .value
            .clone()
    }
}

/// Default ports match by literal text; schemes other than `http` and
/// `https` have none.
fn is_scheme_default_port(protocol: &str, port: &str) -> bool {
    matches!((protocol, port), ("http", "80") | ("https", "443"))
}
