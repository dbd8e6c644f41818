//! Query string codec.
//!
//! Tokenizes a query string into ordered key/value pairs and serializes
//! them back. The codec is total in both directions: every input string
//! is representable, nothing is ever rejected, deduplicated or
//! case-normalized. Null values (no `=`), blank values (bare `=`) and
//! empty chunks from `&&` runs are all distinct and all round-trip.

use crate::types::QueryParam;

/// Decode a query string into its ordered pairs.
///
/// Chunks split on `&`; within a chunk the first `=` separates key from
/// value, so later `=` (or `?`, `@`, …) stay literal in the value. A
/// chunk with no `=` carries `value: None`; an empty chunk becomes an
/// empty key with `value: None`, which is how `&&` runs survive.
///
/// # Examples
///
/// ```
/// use varurl::{parse_query, QueryParam};
///
/// assert_eq!(
///     parse_query("a=1&valueless&b="),
///     vec![
///         QueryParam::pair("a", "1"),
///         QueryParam::valueless("valueless"),
///         QueryParam::pair("b", ""),
///     ]
/// );
/// ```
pub fn parse_query(query: &str) -> Vec<QueryParam> {
    query
        .split('&')
        .map(|chunk| match chunk.find('=') {
            Some(idx) => QueryParam {
                key: chunk[..idx].to_string(),
                value: Some(chunk[idx + 1..].to_string()),
            },
            None => QueryParam {
                key: chunk.to_string(),
                value: None,
            },
        })
        .collect()
}

/// Encode ordered pairs back into a query string.
///
/// The exact inverse of [`parse_query`] for anything it produced: a
/// `None` value emits the key alone, everything else emits `key=value`,
/// and empty pairs naturally reproduce `&&` runs on re-join.
pub fn serialize_query(params: &[QueryParam]) -> String {
    params
        .iter()
        .map(|param| match &param.value {
            Some(value) => format!("{}={}", param.key, value),
            None => param.key.clone(),
        })
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query_null_and_blank_values() {
        assert_eq!(
            parse_query("query=param&valueless1&valueless2"),
            vec![
                QueryParam::pair("query", "param"),
                QueryParam::valueless("valueless1"),
                QueryParam::valueless("valueless2"),
            ]
        );
        assert_eq!(
            parse_query("param1=&param2"),
            vec![QueryParam::pair("param1", ""), QueryParam::valueless("param2")]
        );
    }

    #[test]
    fn test_parse_query_empty_chunks() {
        assert_eq!(
            parse_query("param1=&&&param2"),
            vec![
                QueryParam::pair("param1", ""),
                QueryParam::valueless(""),
                QueryParam::valueless(""),
                QueryParam::valueless("param2"),
            ]
        );
    }

    #[test]
    fn test_parse_query_empty_string_is_one_empty_chunk() {
        assert_eq!(parse_query(""), vec![QueryParam::valueless("")]);
    }

    #[test]
    fn test_parse_query_first_equals_wins() {
        assert_eq!(
            parse_query("param=(key==value)"),
            vec![QueryParam::pair("param", "(key==value)")]
        );
    }

    #[test]
    fn test_parse_query_literal_separators_in_values() {
        assert_eq!(
            parse_query("query=param&err?ng=v_l?e@!"),
            vec![
                QueryParam::pair("query", "param"),
                QueryParam::pair("err?ng", "v_l?e@!"),
            ]
        );
    }

    #[test]
    fn test_parse_query_preserves_duplicates_and_order() {
        assert_eq!(
            parse_query("a=1&a=2&A=3"),
            vec![
                QueryParam::pair("a", "1"),
                QueryParam::pair("a", "2"),
                QueryParam::pair("A", "3"),
            ]
        );
    }

    #[test]
    fn test_serialize_query_inverse() {
        let corpus = vec![
            "query=param&valueless1&valueless2",
            "param1=&&&param2",
            "param=(key==value)",
            "a=1&a=2&A=3",
            "w=x%y",
            "",
        ];
        for raw in corpus {
            assert_eq!(serialize_query(&parse_query(raw)), raw, "failed for: {}", raw);
        }
    }
}
