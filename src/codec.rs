//! Shareable-state codec.
//!
//! Turns program text into a string that can ride in a URL fragment and
//! back again. Fragments are tagged with a scheme version:
//!
//! ```text
//! 1:io.stdout%20-%3E%20io.writeln%20'hi'%3B
//! ^ ^
//! | +-- payload
//! +---- scheme version
//! ```
//!
//! - `1`: percent-encoded UTF-8, escaping everything a browser's
//!   `encodeURIComponent` escapes. Readable, and the default.
//! - `2`: zlib-compressed UTF-8 in URL-safe base64 without padding. Shorter
//!   for long programs.
//!
//! Neither payload ever contains a raw `:`, so a fragment without one is an
//! untagged link from before versioning and is decoded as a bare scheme `1`
//! payload.

use std::borrow::Cow;
use std::io::{self, Read, Write};

use base64::Engine;
use base64::engine::general_purpose::URL_SAFE_NO_PAD;
use flate2::Compression;
use flate2::read::ZlibDecoder;
use flate2::write::ZlibEncoder;
use percent_encoding::{AsciiSet, NON_ALPHANUMERIC, percent_decode_str, utf8_percent_encode};

use crate::error::DecodeError;

/// Percent-encoded scheme, written by [`encode`].
pub const SCHEME_V1: &str = "1";
/// Compressed scheme, written by [`encode_compact`].
pub const SCHEME_V2: &str = "2";

const SEPARATOR: char = ':';

/// Bytes escaped by scheme `1`: all but `A-Z a-z 0-9 - _ . ! ~ * ' ( )`.
const URI_COMPONENT: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'_')
    .remove(b'.')
    .remove(b'!')
    .remove(b'~')
    .remove(b'*')
    .remove(b'\'')
    .remove(b'(')
    .remove(b')');

/// Encode program text as a tagged URL fragment (without the leading `#`).
pub fn encode(text: &str) -> String {
    format!("{}{}{}", SCHEME_V1, SEPARATOR, utf8_percent_encode(text, URI_COMPONENT))
}

/// Like [`encode`], but compressed.
pub fn encode_compact(text: &str) -> String {
    match deflate(text) {
        Ok(bytes) => format!("{}{}{}", SCHEME_V2, SEPARATOR, URL_SAFE_NO_PAD.encode(bytes)),
        Err(e) => {
            log::warn!("compression failed, using plain share scheme: {}", e);
            encode(text)
        }
    }
}

fn deflate(text: &str) -> io::Result<Vec<u8>> {
    let mut encoder = ZlibEncoder::new(Vec::new(), Compression::best());
    encoder.write_all(text.as_bytes())?;
    encoder.finish()
}

/// Decode a fragment produced by [`encode`], [`encode_compact`], or an
/// untagged legacy link.
pub fn decode(fragment: &str) -> Result<String, DecodeError> {
    match fragment.split_once(SEPARATOR) {
        Some((SCHEME_V1, payload)) => decode_percent(payload, SCHEME_V1.len() + 1),
        Some((SCHEME_V2, payload)) => decode_compact(payload),
        Some((tag, _)) => Err(DecodeError::UnknownScheme(tag.to_string())),
        None => decode_percent(fragment, 0),
    }
}

fn decode_percent(payload: &str, offset: usize) -> Result<String, DecodeError> {
    check_alphabet(payload, offset)?;
    percent_decode_str(payload)
        .decode_utf8()
        .map(Cow::into_owned)
        .map_err(|_| DecodeError::InvalidUtf8)
}

/// Reject anything [`encode`] would not have written.
///
/// `percent_decode_str` passes stray characters and broken escapes through
/// unchanged, so those are caught here. `offset` is where `payload` starts
/// inside the full fragment.
fn check_alphabet(payload: &str, offset: usize) -> Result<(), DecodeError> {
    let bytes = payload.as_bytes();
    let mut i = 0;
    while i < bytes.len() {
        match bytes[i] {
            b'%' => {
                let hex = |at: usize| bytes.get(at).is_some_and(u8::is_ascii_hexdigit);
                if !(hex(i + 1) && hex(i + 2)) {
                    return Err(DecodeError::MalformedEscape { offset: offset + i });
                }
                i += 3;
            }
            b if is_unescaped(b) => i += 1,
            _ => {
                // Only ASCII has been consumed so far, so `i` is a char boundary.
                let ch = payload[i..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
                return Err(DecodeError::InvalidCharacter { ch, offset: offset + i });
            }
        }
    }
    Ok(())
}

fn is_unescaped(b: u8) -> bool {
    b.is_ascii_alphanumeric()
        || matches!(b, b'-' | b'_' | b'.' | b'!' | b'~' | b'*' | b'\'' | b'(' | b')')
}

fn decode_compact(payload: &str) -> Result<String, DecodeError> {
    let compressed = URL_SAFE_NO_PAD
        .decode(payload)
        .map_err(|_| DecodeError::InvalidBase64)?;
    let mut bytes = Vec::new();
    ZlibDecoder::new(compressed.as_slice())
        .read_to_end(&mut bytes)
        .map_err(|_| DecodeError::InvalidCompression)?;
    String::from_utf8(bytes).map_err(|_| DecodeError::InvalidUtf8)
}

/// Build the full link a user can paste: `<origin><path>#<fragment>`.
pub fn share_url(origin: &str, path: &str, fragment: &str) -> String {
    format!("{}{}#{}", origin, path, fragment)
}

/// Strip everything up to and including the first `#`.
///
/// Accepts a full link, a `#`-prefixed hash, or a bare fragment.
pub fn fragment_of(url: &str) -> &str {
    match url.split_once('#') {
        Some((_, fragment)) => fragment,
        None => url,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_encode_tags_and_escapes() {
        assert_eq!(encode("a b"), "1:a%20b");
        assert_eq!(encode(""), "1:");
        assert_eq!(encode("#%&?:"), "1:%23%25%26%3F%3A");
    }

    #[test]
    fn test_encode_leaves_uri_component_set_alone() {
        assert_eq!(encode("Az09-_.!~*'()"), "1:Az09-_.!~*'()");
    }

    #[test]
    fn test_roundtrip_special_text() {
        let samples = [
            "",
            "1+1",
            "io.stdout -> io.writeln 'Greetings, pocket universe.';",
            "let q => \"quoted\";\n\tnext line\r\n",
            "#fragment%25&a=b?c",
            "emoji \u{1F600} and \u{10FFFF}",
            "日本語",
            "1:looks tagged",
        ];
        for s in samples {
            assert_eq!(decode(&encode(s)).unwrap(), s, "roundtrip of {s:?}");
        }
    }

    #[test]
    fn test_roundtrip_large_text() {
        let text = "fib 30 -- io.writeln io.stdout;\n".repeat(64 * 1024);
        assert!(text.len() >= 2 * 1024 * 1024);
        assert_eq!(decode(&encode(&text)).unwrap(), text);
    }

    fn is_url_safe(fragment: &str) -> bool {
        fragment
            .bytes()
            .all(|b| is_unescaped(b) || b == b'%' || b == b':')
    }

    #[test]
    fn test_compact_roundtrip_and_tag() {
        let text = "let s => import 'stream';\n".repeat(200) + "\u{1F600} #%";
        let fragment = encode_compact(&text);
        assert!(fragment.starts_with("2:"));
        assert!(fragment.len() < encode(&text).len());
        assert!(is_url_safe(&fragment));
        assert_eq!(decode(&fragment).unwrap(), text);
        assert_eq!(decode(&encode_compact("")).unwrap(), "");
    }

    #[test]
    fn test_decode_rejects_bad_compact_payloads() {
        assert_eq!(decode("2:not base64!"), Err(DecodeError::InvalidBase64));
        // Valid base64 ("hello"), but not a zlib stream.
        assert_eq!(decode("2:aGVsbG8"), Err(DecodeError::InvalidCompression));
    }

    #[test]
    fn test_decode_rejects_stray_separators() {
        assert_eq!(decode("1:%"), Err(DecodeError::MalformedEscape { offset: 2 }));
        assert_eq!(decode(":x"), Err(DecodeError::UnknownScheme(String::new())));
        assert_eq!(
            decode("1:a:b"),
            Err(DecodeError::InvalidCharacter { ch: ':', offset: 3 })
        );
    }

    #[test]
    fn test_decode_legacy_untagged() {
        // encodeURIComponent("io.stdout -> io.writeln 'hi';")
        let legacy = "io.stdout%20-%3E%20io.writeln%20'hi'%3B";
        assert_eq!(decode(legacy).unwrap(), "io.stdout -> io.writeln 'hi';");
    }

    #[test]
    fn test_decode_accepts_lowercase_hex() {
        assert_eq!(decode("1:%e6%97%a5").unwrap(), "日");
    }

    #[test]
    fn test_decode_rejects_garbage() {
        assert_eq!(
            decode("not a valid fragment!!"),
            Err(DecodeError::InvalidCharacter { ch: ' ', offset: 3 })
        );
    }

    #[test]
    fn test_decode_rejects_unknown_scheme() {
        assert_eq!(
            decode("9:abc"),
            Err(DecodeError::UnknownScheme("9".to_string()))
        );
    }

    #[test]
    fn test_decode_rejects_bad_escapes() {
        assert_eq!(
            decode("1:abc%2"),
            Err(DecodeError::MalformedEscape { offset: 5 })
        );
        assert_eq!(
            decode("1:%zz"),
            Err(DecodeError::MalformedEscape { offset: 2 })
        );
    }

    #[test]
    fn test_decode_rejects_invalid_utf8() {
        assert_eq!(decode("1:%FF%FE"), Err(DecodeError::InvalidUtf8));
    }

    #[test]
    fn test_decode_reports_non_ascii_character() {
        assert_eq!(
            decode("1:é"),
            Err(DecodeError::InvalidCharacter { ch: 'é', offset: 2 })
        );
    }

    #[test]
    fn test_share_url_and_fragment_of() {
        let url = share_url("https://play.example", "/wdte/", "1:a%20b");
        assert_eq!(url, "https://play.example/wdte/#1:a%20b");
        assert_eq!(fragment_of(&url), "1:a%20b");
        assert_eq!(fragment_of("#1:x"), "1:x");
        assert_eq!(fragment_of("1:x"), "1:x");
    }

    proptest! {
        #[test]
        fn prop_roundtrip(s in any::<String>()) {
            prop_assert_eq!(decode(&encode(&s)).unwrap(), s);
        }

        #[test]
        fn prop_fragment_is_url_safe(s in any::<String>()) {
            prop_assert!(is_url_safe(&encode(&s)));
        }

        #[test]
        fn prop_compact_roundtrip(s in any::<String>()) {
            prop_assert_eq!(decode(&encode_compact(&s)).unwrap(), s);
        }

        #[test]
        fn prop_decode_never_panics(s in any::<String>()) {
            let _ = decode(&s);
        }
    }
}
