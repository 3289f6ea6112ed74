//! Bounded text formatting for addresses, descriptions and dapp origins.
//!
//! Lengths are counted in `char`s, so multi-byte text is never split inside
//! a code point.

use regex::Regex;
use std::sync::LazyLock;

/// Suffix appended to shortened text
pub const ELLIPSIS: &str = "...";

pub const DEFAULT_TRUNCATE_LEN: usize = 5;
pub const DEFAULT_ADDRESS_EDGE_LEN: usize = 5;
pub const DEFAULT_DESCRIPTION_LEN: usize = 50;

static URL_SCHEME: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"https?://").unwrap());

static HEX_PAIR: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"[0-9a-f]{2}").unwrap());

/// Optional leading label, then the label in front of the next dot
static ORIGIN_LABEL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^([^.]+\.)?(\S+)\.").unwrap());

/// Cut `s` to `max_len` characters and append `...`.
///
/// Text that already fits is returned unchanged. With `strip_trailing_comma`,
/// a comma left at the end of the cut is dropped before the ellipsis.
pub fn truncate_with_ellipsis(s: &str, max_len: usize, strip_trailing_comma: bool) -> String {
    if s.chars().count() <= max_len {
        return s.to_string();
    }

    let mut cut: String = s.chars().take(max_len).collect();
    if strip_trailing_comma && cut.ends_with(',') {
        cut.pop();
    }
    format!("{}{}", cut, ELLIPSIS)
}

/// Keep `edge_len` characters on each side of an address: `bc1qx...0wlh`
pub fn shorten_address(address: Option<&str>, edge_len: usize) -> String {
    let Some(address) = address.filter(|a| !a.is_empty()) else {
        return String::new();
    };

    let chars: Vec<char> = address.chars().collect();
    if chars.len() <= edge_len * 2 {
        return address.to_string();
    }

    let head: String = chars[..edge_len].iter().collect();
    let tail: String = chars[chars.len() - edge_len..].iter().collect();
    format!("{}{}{}", head, ELLIPSIS, tail)
}

/// Keep the first `max_len` characters of a description
pub fn shorten_description(desc: Option<&str>, max_len: usize) -> String {
    match desc {
        None | Some("") => String::new(),
        Some(desc) if desc.chars().count() <= max_len => desc.to_string(),
        Some(desc) => {
            let head: String = desc.chars().take(max_len).collect();
            format!("{}{}", head, ELLIPSIS)
        }
    }
}

/// Decode a `0x`-prefixed hex payload as UTF-8 text.
///
/// Each pair of lowercase hex digits is read as one escaped byte; any other
/// character passes through as written, so `0x686` decodes to `h6`. A stray
/// `%` or bytes that are not UTF-8 make the whole payload undecodable, and
/// then the input is returned as given. Callers can render the result
/// without checking it.
pub fn decode_hex_payload(hex: &str) -> String {
    let Some(body) = hex.strip_prefix("0x") else {
        return hex.to_string();
    };

    let escaped = HEX_PAIR.replace_all(body, "%$0");
    if !has_complete_escapes(&escaped) {
        return hex.to_string();
    }

    urlencoding::decode(&escaped)
        .map(|text| text.into_owned())
        .unwrap_or_else(|_| hex.to_string())
}

/// Every `%` must start a two-hex-digit escape
fn has_complete_escapes(s: &str) -> bool {
    s.match_indices('%').all(|(i, _)| {
        s.as_bytes()
            .get(i + 1..i + 3)
            .is_some_and(|pair| pair.iter().all(u8::is_ascii_hexdigit))
    })
}

/// Short site label for a dapp origin: `https://app.uniswap.org` -> `uniswap`.
///
/// Origins without a dotted host are returned unchanged.
pub fn extract_origin_label(origin: &str) -> String {
    let host = URL_SCHEME.replace(origin, "");
    ORIGIN_LABEL
        .captures(&host)
        .and_then(|caps| caps.get(2))
        .map(|label| label.as_str().to_string())
        .unwrap_or_else(|| origin.to_string())
}

/// Presence check for an address string
pub fn is_valid_address(address: &str) -> bool {
    !address.is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_keeps_short_text() {
        assert_eq!(truncate_with_ellipsis("hello", 5, false), "hello");
        assert_eq!(truncate_with_ellipsis("", 0, false), "");
    }

    #[test]
    fn test_truncate_long_text() {
        assert_eq!(truncate_with_ellipsis("hello world", 5, false), "hello...");
    }

    #[test]
    fn test_truncate_strips_trailing_comma() {
        assert_eq!(truncate_with_ellipsis("abcd,efgh", 5, true), "abcd...");
        assert_eq!(truncate_with_ellipsis("abcd,efgh", 5, false), "abcd,...");
    }

    #[test]
    fn test_truncate_counts_chars() {
        assert_eq!(truncate_with_ellipsis("ビットコイン送金", 3, false), "ビット...");
    }

    #[test]
    fn test_shorten_address() {
        assert_eq!(shorten_address(None, 5), "");
        assert_eq!(shorten_address(Some(""), 5), "");
        assert_eq!(shorten_address(Some("abc"), 5), "abc");
        assert_eq!(shorten_address(Some("0123456789"), 5), "0123456789");
        assert_eq!(shorten_address(Some("0123456789abcdef"), 4), "0123...cdef");
    }

    #[test]
    fn test_shorten_description() {
        assert_eq!(shorten_description(None, 10), "");
        assert_eq!(shorten_description(Some("short"), 10), "short");
        assert_eq!(
            shorten_description(Some("Sign this message to log in"), 9),
            "Sign this..."
        );
    }

    #[test]
    fn test_decode_hex_payload() {
        assert_eq!(decode_hex_payload("0x68656c6c6f"), "hello");
        assert_eq!(decode_hex_payload("0x"), "");
        assert_eq!(decode_hex_payload("not-hex"), "not-hex");
        assert_eq!(decode_hex_payload("68656c6c6f"), "68656c6c6f");
    }

    #[test]
    fn test_decode_hex_payload_passes_unpaired_characters_through() {
        assert_eq!(decode_hex_payload("0x686"), "h6");
        assert_eq!(decode_hex_payload("0x68656c6c6fzz"), "hellozz");
        assert_eq!(decode_hex_payload("0xzz"), "zz");
        // only lowercase pairs are escaped
        assert_eq!(decode_hex_payload("0x4A"), "4A");
    }

    #[test]
    fn test_decode_hex_payload_failures_return_input() {
        // lone continuation byte is not UTF-8
        assert_eq!(decode_hex_payload("0x80"), "0x80");
        assert_eq!(decode_hex_payload("0x%"), "0x%");
        assert_eq!(decode_hex_payload("0x%zz"), "0x%zz");
        assert_eq!(decode_hex_payload("0x%41"), "0x%41");
    }

    #[test]
    fn test_decode_hex_payload_multibyte() {
        assert_eq!(decode_hex_payload("0xe282bf"), "\u{20BF}");
    }

    #[test]
    fn test_extract_origin_label() {
        assert_eq!(extract_origin_label("https://www.example.com/path"), "example");
        assert_eq!(extract_origin_label("https://example.com"), "example");
        assert_eq!(extract_origin_label("http://app.uniswap.org"), "uniswap");
        assert_eq!(extract_origin_label("http://localhost:3000"), "http://localhost:3000");
    }

    #[test]
    fn test_is_valid_address() {
        assert!(is_valid_address("bc1q"));
        assert!(!is_valid_address(""));
    }
}
