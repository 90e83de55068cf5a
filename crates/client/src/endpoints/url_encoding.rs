//! Percent-encoding for values placed in URL paths.
//!
//! Search job ids come back from the server and are spliced into
//! `/services/search/jobs/{sid}/results`. Splunk sids are normally
//! `[A-Za-z0-9_.]`, but scheduled and ad hoc searches can carry `__` owner
//! prefixes and arbitrary app names, so the segment is always encoded.
//!
//! # Example
//!
//! ```
//! use splunk_search_client::endpoints::url_encoding::encode_path_segment;
//!
//! assert_eq!(encode_path_segment("1700000000.42"), "1700000000.42");
//! assert_eq!(encode_path_segment("../../auth"), "..%2F..%2Fauth");
//! ```

use percent_encoding::{AsciiSet, CONTROLS, percent_encode};

/// Characters encoded in a URL path segment.
///
/// RFC 3986 section 3.3 reserved and unsafe characters, plus `/` (path
/// traversal) and `%` (double decoding).
pub const PATH_SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'{')
    .add(b'}')
    .add(b'|')
    .add(b'\\')
    .add(b'^')
    .add(b'%')
    .add(b'/')
    .add(b'?')
    .add(b'#')
    .add(b'+')
    .add(b';')
    .add(b'[')
    .add(b']');

/// Percent-encode a string for use as a single URL path segment.
pub fn encode_path_segment(segment: &str) -> String {
    percent_encode(segment.as_bytes(), PATH_SEGMENT_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_typical_sids_unchanged() {
        assert_eq!(encode_path_segment("sid42"), "sid42");
        assert_eq!(encode_path_segment("1700000000.12345"), "1700000000.12345");
        assert_eq!(
            encode_path_segment("scheduler__admin__search__RMD5abc_at_1700000000_1"),
            "scheduler__admin__search__RMD5abc_at_1700000000_1"
        );
    }

    #[test]
    fn test_encode_slash() {
        assert_eq!(encode_path_segment("a/b"), "a%2Fb");
        assert_eq!(encode_path_segment("../control"), "..%2Fcontrol");
    }

    #[test]
    fn test_encode_query_and_fragment() {
        assert_eq!(encode_path_segment("sid?x=1"), "sid%3Fx=1");
        assert_eq!(encode_path_segment("sid#frag"), "sid%23frag");
    }

    #[test]
    fn test_encode_percent() {
        assert_eq!(encode_path_segment("sid%20x"), "sid%2520x");
    }

    #[test]
    fn test_encode_space_and_unicode() {
        assert_eq!(encode_path_segment("my sid"), "my%20sid");
        assert_eq!(encode_path_segment("sid\u{00e9}"), "sid%C3%A9");
    }

    #[test]
    fn test_empty_string() {
        assert_eq!(encode_path_segment(""), "");
    }
}
