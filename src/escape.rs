//! Reference token escaping (RFC 6901 §3–4).
//!
//! Decoding is a single left-to-right scan: `~` and the character after it are
//! consumed together, so `~01` decodes to `~1` and `~10` to `/0`.

use crate::constants::{DELIMITER, ESCAPE_CHARACTER, ESCAPED_DELIMITER, ESCAPED_ESCAPE_CHARACTER};
use std::borrow::Cow;

/// Decode one raw reference token.
///
/// `~0` becomes `~` and `~1` becomes `/`. A `~` followed by anything else, or
/// ending the token, is kept as is.
pub fn decode_token(raw: &str) -> Cow<'_, str> {
    if !raw.contains(ESCAPE_CHARACTER) {
        return Cow::Borrowed(raw);
    }
    let mut out = String::with_capacity(raw.len());
    let mut chars = raw.chars().peekable();
    while let Some(c) = chars.next() {
        if c != ESCAPE_CHARACTER {
            out.push(c);
            continue;
        }
        match chars.peek() {
            Some('0') => {
                chars.next();
                out.push(ESCAPE_CHARACTER);
            }
            Some('1') => {
                chars.next();
                out.push(DELIMITER);
            }
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}

/// Encode a decoded token for use in a pointer: `~` → `~0`, `/` → `~1`.
pub fn escape_token(token: &str) -> Cow<'_, str> {
    if !token.contains([ESCAPE_CHARACTER, DELIMITER]) {
        return Cow::Borrowed(token);
    }
    let mut out = String::with_capacity(token.len() + 2);
    for c in token.chars() {
        match c {
            ESCAPE_CHARACTER => out.push_str(ESCAPED_ESCAPE_CHARACTER),
            DELIMITER => out.push_str(ESCAPED_DELIMITER),
            _ => out.push(c),
        }
    }
    Cow::Owned(out)
}
