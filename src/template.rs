//! Template placeholder scanning and protected splitting.
//!
//! Raw URLs may embed `{{name}}` placeholder tokens anywhere, and a
//! delimiter inside a placeholder (a dot in `{{ip.subnet}}`, a colon in
//! `{{host:port}}`) must not act as a field separator. This module is
//! the one place that knows how to locate those spans; every splitter
//! in the crate goes through it.
//!
//! Matching is deliberately simple and total: spans never nest (the
//! first `}}` after a `{{` closes it), and an opener with no closer
//! anywhere ahead is plain text, so splitting degrades to ordinary
//! splitting for that run. This is an explicit index-walking scanner
//! rather than a regex: unmatched braces and the "last colon outside
//! braces" rule do not map onto a single pattern.

/// Byte span of one `{{…}}` placeholder, inclusive of both delimiters.
///
/// `start` and `end` are byte offsets into the scanned string, with the
/// usual half-open `[start, end)` convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TemplateSpan {
    pub start: usize,
    pub end: usize,
}

impl TemplateSpan {
    /// The placeholder name: the text between the braces, verbatim.
    pub fn name<'a>(&self, s: &'a str) -> &'a str {
        &s[self.start + 2..self.end - 2]
    }
}

/// Find the next placeholder span at or after byte offset `from`.
///
/// Returns `None` when no `{{` remains, and also when the next `{{` has
/// no closing `}}` anywhere ahead of it — in that case nothing after
/// the opener can be protected either, so callers fall back to plain
/// splitting for the rest of the string.
pub fn next_template(s: &str, from: usize) -> Option<TemplateSpan> {
    let bytes = s.as_bytes();
    let mut i = from;
    while i + 1 < bytes.len() {
        if bytes[i] == b'{' && bytes[i + 1] == b'{' {
            let mut j = i + 2;
            while j + 1 < bytes.len() {
                if bytes[j] == b'}' && bytes[j + 1] == b'}' {
                    return Some(TemplateSpan { start: i, end: j + 2 });
                }
                j += 1;
            }

            // Unmatched opener: no closer exists ahead of it, so no
            // later opener can be closed either.
            return None;
        }
        i += 1;
    }
    None
}

/// Split `s` on `delimiter`, keeping placeholder spans atomic.
///
/// Segments are accumulated verbatim, braces included. Consecutive
/// delimiters produce empty segments (the path splitter relies on this
/// for trailing-slash markers), and an unmatched `{{` degrades to plain
/// splitting for the remainder of the string.
///
/// # Examples
///
/// ```
/// use varurl::split_protected;
///
/// assert_eq!(
///     split_protected("127.0.{{ip.subnet}}.1", '.'),
///     vec!["127", "0", "{{ip.subnet}}", "1"]
/// );
/// // Unmatched opener: plain split for the rest of the string.
/// assert_eq!(
///     split_protected("127.0.{{ip.subnet.1", '.'),
///     vec!["127", "0", "{{ip", "subnet", "1"]
/// );
/// ```
pub fn split_protected(s: &str, delimiter: char) -> Vec<String> {
    debug_assert!(delimiter.is_ascii());

    let bytes = s.as_bytes();
    let delim = delimiter as u8;
    let mut segments = Vec::new();
    let mut segment_start = 0usize;
    let mut span = next_template(s, 0);
    let mut i = 0usize;

    while i < bytes.len() {
        if let Some(current) = span {
            if i == current.start {
                i = current.end;
                span = next_template(s, i);
                continue;
            }
        }
        if bytes[i] == delim {
            segments.push(s[segment_start..i].to_string());
            segment_start = i + 1;
        }
        i += 1;
    }
    segments.push(s[segment_start..].to_string());
    segments
}

/// Byte offset of the last `delimiter` occurrence outside any
/// placeholder span, or `None` when every occurrence is protected.
///
/// This drives the port rule: the port is whatever follows the last
/// colon that is not inside braces.
pub fn rfind_unprotected(s: &str, delimiter: char) -> Option<usize> {
    debug_assert!(delimiter.is_ascii());

    let bytes = s.as_bytes();
    let delim = delimiter as u8;
    let mut last = None;
    let mut span = next_template(s, 0);
    let mut i = 0usize;

    while i < bytes.len() {
        if let Some(current) = span {
            if i == current.start {
                i = current.end;
                span = next_template(s, i);
                continue;
            }
        }
        if bytes[i] == delim {
            last = Some(i);
        }
        i += 1;
    }
    last
}

/// Replace every placeholder in `s` via `resolve`, leaving unresolved
/// tokens verbatim.
///
/// The placeholder name is handed to `resolve` exactly as written
/// between the braces — no trimming, so function-style names such as
/// `$guid` resolve by their literal text.
///
/// # Examples
///
/// ```
/// use varurl::resolve_templates;
///
/// let resolved = resolve_templates("v{{major}}/items", |name| {
///     (name == "major").then(|| "2".to_string())
/// });
/// assert_eq!(resolved, "v2/items");
///
/// // Unknown names stay in place.
/// let kept = resolve_templates("v{{minor}}/items", |_| None);
/// assert_eq!(kept, "v{{minor}}/items");
/// ```
pub fn resolve_templates<F>(s: &str, resolve: F) -> String
where
    F: Fn(&str) -> Option<String>,
{
    let mut out = String::with_capacity(s.len());
    let mut cursor = 0usize;

    while let Some(span) = next_template(s, cursor) {
        out.push_str(&s[cursor..span.start]);
        match resolve(span.name(s)) {
            Some(value) => out.push_str(&value),
            None => out.push_str(&s[span.start..span.end]),
        }
        cursor = span.end;
    }
    out.push_str(&s[cursor..]);
    out
}
