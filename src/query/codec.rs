//! Search key encoding.
//!
//! Generated search data stores keys lowercased, with every ASCII character
//! outside `[a-z0-9]` written as `_` plus two lowercase hex digits:
//!
//! ```
//! use docsearch::query::{decode_key, encode_key};
//!
//! assert_eq!(encode_key("Wolk.h"), "wolk_2eh");
//! assert_eq!(encode_key("WOLK_DEMO_HOST"), "wolk_5fdemo_5fhost");
//! assert_eq!(decode_key("wolkbuilder_2ecpp"), "wolkbuilder.cpp");
//! ```
//!
//! User input goes through the same encoding before it is compared with keys.

use std::fmt::Write;

/// Encode text the way search keys are encoded
pub fn encode_key(text: &str) -> String {
    let mut out = String::with_capacity(text.len());

    for ch in text.to_lowercase().chars() {
        if ch.is_ascii_lowercase() || ch.is_ascii_digit() || !ch.is_ascii() {
            out.push(ch);
        } else {
            // ASCII only here, so two hex digits always suffice
            let _ = write!(out, "_{:02x}", ch as u32);
        }
    }

    out
}

/// Decode `_XX` escapes back to characters.
///
/// Underscores not followed by two hex digits are kept as-is.
pub fn decode_key(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    let mut rest = key;

    while let Some(pos) = memchr::memchr(b'_', rest.as_bytes()) {
        out.push_str(&rest[..pos]);
        let tail = &rest[pos + 1..];

        let decoded = tail
            .get(..2)
            .filter(|hex| hex.bytes().all(|b| b.is_ascii_hexdigit()))
            .and_then(|hex| u8::from_str_radix(hex, 16).ok());

        match decoded {
            Some(byte) => {
                out.push(byte as char);
                rest = &tail[2..];
            }
            None => {
                out.push('_');
                rest = tail;
            }
        }
    }

    out.push_str(rest);
    out
}
