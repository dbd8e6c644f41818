//! Raw URL parser.
//!
//! Turns an arbitrary, possibly-templated URL string into the
//! structured field set. The grammar is deliberately loose (URLs as
//! people type them, not RFC 3986), so extraction is a sequence of
//! small slicing steps over the same string — protocol, then authority
//! boundary, then auth, then host/port, then tail — each returning the
//! extracted piece and the remainder. One regular expression cannot
//! express the layered ambiguity (unmatched braces, the last colon
//! outside braces, `@` in query values), and keeping the steps separate
//! keeps each edge case isolated.
//!
//! Parsing is total: every string has a defined, possibly degenerate,
//! parse, and serialization reproduces the input byte for byte.

use crate::codec::query::parse_query;
use crate::template;
use crate::types::UrlAuth;
use crate::url::Url;

/// Parse a raw string into its URL field set. Never fails.
///
/// # Examples
///
/// ```
/// use varurl::parse_url;
///
/// let url = parse_url("{{my-protocol}}://127.0.{{subnet}}.1:{{my-port}}/get");
/// assert_eq!(url.protocol.as_deref(), Some("{{my-protocol}}"));
/// assert_eq!(url.host, vec!["127", "0", "{{subnet}}", "1"]);
/// assert_eq!(url.port.as_deref(), Some("{{my-port}}"));
/// ```
pub fn parse_url(raw: &str) -> Url {
    let (protocol, rest) = take_protocol(raw);
    let (authority, tail) = split_authority(rest);
    let (auth, host_port) = take_auth(authority);
    let (host, port) = take_port(host_port);
    let (path, query, hash) = split_tail(tail);

    Url {
        protocol: protocol.map(str::to_string),
        auth,
        host: template::split_protected(host, '.'),
        port: port.map(str::to_string),
        path: path.map(split_path_portion),
        query: query.map(parse_query),
        hash: hash.map(str::to_string),
        variable: None,
    }
}

/// Step 1: the scheme, when `"://"` occurs and nothing before it is a
/// `/`. The scheme may itself be a placeholder, or empty (`"://x"`).
fn take_protocol(raw: &str) -> (Option<&str>, &str) {
    if let Some(idx) = raw.find("://") {
        let scheme = &raw[..idx];
        if !scheme.contains('/') {
            return (Some(scheme), &raw[idx + 3..]);
        }
    }
    (None, raw)
}

/// Step 2: the authority runs to the first `/`, `?` or `#`; the tail
/// keeps that delimiter. This boundary is computed before auth
/// splitting so an `@` inside a query value can never masquerade as
/// credentials.
fn split_authority(rest: &str) -> (&str, &str) {
    match rest.find(['/', '?', '#']) {
        Some(idx) => rest.split_at(idx),
        None => (rest, ""),
    }
}

/// Step 3: credentials before the first `@` of the authority; the
/// first `:` inside them separates user from password.
fn take_auth(authority: &str) -> (Option<UrlAuth>, &str) {
    match authority.find('@') {
        Some(idx) => {
            let user_info = &authority[..idx];
            let host_port = &authority[idx + 1..];
            let auth = match user_info.find(':') {
                Some(colon) => UrlAuth {
                    user: user_info[..colon].to_string(),
                    password: Some(user_info[colon + 1..].to_string()),
                },
                None => UrlAuth {
                    user: user_info.to_string(),
                    password: None,
                },
            };
            (Some(auth), host_port)
        }
        None => (None, authority),
    }
}

/// Step 4: the port is whatever follows the last `:` not inside a
/// placeholder span. Ports are kept as text — `{{my-port}}` is a valid
/// port here.
fn take_port(host_port: &str) -> (&str, Option<&str>) {
    match template::rfind_unprotected(host_port, ':') {
        Some(idx) => (&host_port[..idx], Some(&host_port[idx + 1..])),
        None => (host_port, None),
    }
}

/// Step 5: dispatch the tail into path portion, query string and hash.
///
/// The path runs to the first `?` or `#`. After it, a `?` opens the
/// query region, which runs to the first `#` — later `?` are literal.
/// Everything past that `#` is the hash, verbatim, whatever it
/// contains. A tail opening directly with `#` has no query at all.
fn split_tail(tail: &str) -> (Option<&str>, Option<&str>, Option<&str>) {
    if tail.is_empty() {
        return (None, None, None);
    }
    let (path, rest) = match tail.find(['?', '#']) {
        Some(idx) => tail.split_at(idx),
        None => (tail, ""),
    };
    let path = (!path.is_empty()).then_some(path);

    if let Some(after_question) = rest.strip_prefix('?') {
        match after_question.find('#') {
            Some(idx) => (
                path,
                Some(&after_question[..idx]),
                Some(&after_question[idx + 1..]),
            ),
            None => (path, Some(after_question), None),
        }
    } else if let Some(after_hash) = rest.strip_prefix('#') {
        (path, None, Some(after_hash))
    } else {
        (path, None, None)
    }
}

/// Step 6: split a path portion into segments, dropping the single
/// empty segment produced by the leading `/` itself but preserving the
/// trailing empty segment of a trailing `/` — `/a/b` and `/a/b/` stay
/// distinguishable.
fn split_path_portion(path_portion: &str) -> Vec<String> {
    let trimmed = path_portion.strip_prefix('/').unwrap_or(path_portion);
    template::split_protected(trimmed, '/')
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_take_protocol() {
        assert_eq!(take_protocol("http://x"), (Some("http"), "x"));
        assert_eq!(
            take_protocol("{{my-protocol}}://x"),
            (Some("{{my-protocol}}"), "x")
        );
        assert_eq!(take_protocol("x"), (None, "x"));
        assert_eq!(take_protocol("://x"), (Some(""), "x"));
    }

    #[test]
    fn test_take_protocol_requires_clean_prefix() {
        // A slash before "://" means the marker is part of the tail.
        assert_eq!(take_protocol("host/a://b"), (None, "host/a://b"));
        // Only the first marker is considered.
        assert_eq!(take_protocol("http://a://b"), (Some("http"), "a://b"));
    }

    #[test]
    fn test_split_authority() {
        assert_eq!(split_authority("host"), ("host", ""));
        assert_eq!(split_authority("host/p/q"), ("host", "/p/q"));
        assert_eq!(split_authority("host?x=1"), ("host", "?x=1"));
        assert_eq!(split_authority("host#frag"), ("host", "#frag"));
        assert_eq!(split_authority("?x=1"), ("", "?x=1"));
    }

    #[test]
    fn test_take_auth() {
        assert_eq!(take_auth("host"), (None, "host"));
        assert_eq!(
            take_auth("user:pass@host"),
            (Some(UrlAuth::with_password("user", "pass")), "host")
        );
        assert_eq!(take_auth("user@host"), (Some(UrlAuth::new("user")), "host"));
        // Trailing colon keeps an empty password; a bare @ an empty user.
        assert_eq!(
            take_auth("user:@host"),
            (Some(UrlAuth::with_password("user", "")), "host")
        );
        assert_eq!(take_auth("@host"), (Some(UrlAuth::new("")), "host"));
    }

    #[test]
    fn test_take_port() {
        assert_eq!(take_port("host:8080"), ("host", Some("8080")));
        assert_eq!(take_port("host"), ("host", None));
        assert_eq!(take_port("host:"), ("host", Some("")));
        assert_eq!(take_port("{{host:port}}"), ("{{host:port}}", None));
        assert_eq!(take_port("{{h:p}}:99"), ("{{h:p}}", Some("99")));
        assert_eq!(take_port(""), ("", None));
    }

    #[test]
    fn test_split_tail() {
        assert_eq!(split_tail(""), (None, None, None));
        assert_eq!(split_tail("/a/b"), (Some("/a/b"), None, None));
        assert_eq!(split_tail("?q=1"), (None, Some("q=1"), None));
        assert_eq!(split_tail("#frag"), (None, None, Some("frag")));
        assert_eq!(
            split_tail("/a/?q=1#?x"),
            (Some("/a/"), Some("q=1"), Some("?x"))
        );
        // A hash before any question mark ends the query region.
        assert_eq!(split_tail("/p#f?x"), (Some("/p"), None, Some("f?x")));
        // Later hashes are part of the hash, verbatim.
        assert_eq!(split_tail("?a=1#b#c"), (None, Some("a=1"), Some("b#c")));
        assert_eq!(split_tail("?#"), (None, Some(""), Some("")));
    }

    #[test]
    fn test_split_path_portion() {
        assert_eq!(split_path_portion("/"), vec![""]);
        assert_eq!(split_path_portion("/hello/world"), vec!["hello", "world"]);
        assert_eq!(
            split_path_portion("/hello/world/"),
            vec!["hello", "world", ""]
        );
        // Only one leading empty segment is dropped.
        assert_eq!(split_path_portion("//b"), vec!["", "b"]);
        assert_eq!(split_path_portion("/a/{{p/q}}/b"), vec!["a", "{{p/q}}", "b"]);
    }

    #[test]
    fn test_parse_url_bare_host() {
        let url = parse_url("127.0.0.1");
        assert_eq!(url.protocol, None);
        assert_eq!(url.auth, None);
        assert_eq!(url.host, vec!["127", "0", "0", "1"]);
        assert_eq!(url.port, None);
        assert_eq!(url.path, None);
        assert_eq!(url.query, None);
        assert_eq!(url.hash, None);
    }

    #[test]
    fn test_parse_url_empty_input() {
        let url = parse_url("");
        assert_eq!(url.host, vec![""]);
        assert_eq!(url.path, None);
    }

    #[test]
    fn test_parse_url_authority_only_forms() {
        assert_eq!(parse_url(":8080").host, vec![""]);
        assert_eq!(parse_url(":8080").port.as_deref(), Some("8080"));
        assert_eq!(parse_url("http://?x=1").host, vec![""]);
        assert_eq!(
            parse_url("http://?x=1").query,
            Some(vec![crate::types::QueryParam::pair("x", "1")])
        );
    }
}
