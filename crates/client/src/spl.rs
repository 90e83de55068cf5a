//! SPL query construction.
//!
//! Responsibilities:
//! - Quote caller-supplied expressions as SPL double-quoted strings.
//! - Build the filter, limit and field-extraction pipeline submitted by
//!   [`SessionClient::search`](crate::SessionClient::search).
//! - Redact query text for logging.
//!
//! Invariants:
//! - A quoted value always ends at the closing quote this module writes; no
//!   input can terminate it early, so pipes or commands inside the caller's
//!   expression stay inside the string literal.
//! - Values without `"` or `\` are emitted verbatim between the quotes.

/// Quote `value` as an SPL string literal.
///
/// Double quotes are escaped as `\"`. A run of backslashes is doubled only
/// when it precedes an escaped quote or the closing quote, so regex escapes
/// such as `\d` pass through untouched.
///
/// # Examples
///
/// ```
/// use splunk_search_client::spl::quote;
///
/// assert_eq!(quote("error.*"), r#""error.*""#);
/// assert_eq!(quote(r#"say "hi""#), r#""say \"hi\"""#);
/// assert_eq!(quote(r"\d+"), r#""\d+""#);
/// assert_eq!(quote(r"trailing\"), r#""trailing\\""#);
/// ```
pub fn quote(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    let mut pending_backslashes = 0usize;

    out.push('"');
    for ch in value.chars() {
        match ch {
            '\\' => pending_backslashes += 1,
            '"' => {
                push_backslashes(&mut out, pending_backslashes * 2 + 1);
                pending_backslashes = 0;
                out.push('"');
            }
            _ => {
                push_backslashes(&mut out, pending_backslashes);
                pending_backslashes = 0;
                out.push(ch);
            }
        }
    }
    push_backslashes(&mut out, pending_backslashes * 2);
    out.push('"');
    out
}

fn push_backslashes(out: &mut String, count: usize) {
    out.extend(std::iter::repeat_n('\\', count));
}

/// Build the composite search submitted for `query`.
///
/// The expression filters all indexed events, keeps the first
/// `max_results`, then re-applies the expression to extract its named
/// capture groups as fields:
///
/// ```text
/// search index=* | regex "<query>" | head <max_results> | rex "<query>"
/// ```
///
/// # Examples
///
/// ```
/// use splunk_search_client::spl::composite_search;
///
/// assert_eq!(
///     composite_search("error.*", 5),
///     r#"search index=* | regex "error.*" | head 5 | rex "error.*""#
/// );
/// ```
pub fn composite_search(query: &str, max_results: u64) -> String {
    let quoted = quote(query);
    format!("search index=* | regex {quoted} | head {max_results} | rex {quoted}")
}

/// Describe a query for logs without revealing its contents.
///
/// Search text may carry tokens or personal data, so only its length is
/// logged.
pub fn redact_query(query: &str) -> String {
    format!("<redacted {} chars>", query.chars().count())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_quote_plain() {
        assert_eq!(quote("error.*"), "\"error.*\"");
        assert_eq!(quote(""), "\"\"");
    }

    #[test]
    fn test_quote_escapes_double_quote() {
        assert_eq!(quote(r#"a"b"#), r#""a\"b""#);
    }

    #[test]
    fn test_quote_keeps_regex_escapes() {
        assert_eq!(quote(r"(?<code>\d{3})"), r#""(?<code>\d{3})""#);
        assert_eq!(quote(r"a\\b"), r#""a\\b""#);
    }

    #[test]
    fn test_quote_doubles_backslashes_before_quote() {
        // `a\"` must not turn into `"a\""` which would end the string at the
        // caller's quote.
        assert_eq!(quote(r#"a\""#), r#""a\\\"""#);
    }

    #[test]
    fn test_quote_doubles_trailing_backslashes() {
        assert_eq!(quote(r"a\"), r#""a\\""#);
        assert_eq!(quote(r"a\\"), r#""a\\\\""#);
    }

    #[test]
    fn test_quote_keeps_pipes_inside_string() {
        let quoted = quote(r#"x" | delete | search "y"#);
        assert_eq!(quoted, r#""x\" | delete | search \"y""#);
    }

    #[test]
    fn test_composite_search_template() {
        assert_eq!(
            composite_search("error.*", 5),
            r#"search index=* | regex "error.*" | head 5 | rex "error.*""#
        );
        assert_eq!(
            composite_search("x", 0),
            r#"search index=* | regex "x" | head 0 | rex "x""#
        );
    }

    #[test]
    fn test_composite_search_escapes_both_positions() {
        let search = composite_search(r#"a"b"#, 10);
        assert_eq!(
            search,
            r#"search index=* | regex "a\"b" | head 10 | rex "a\"b""#
        );
    }

    #[test]
    fn test_redact_query_hides_contents() {
        let redacted = redact_query("password=hunter2");
        assert_eq!(redacted, "<redacted 16 chars>");
        assert!(!redacted.contains("hunter2"));
    }
}
