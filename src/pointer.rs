use crate::constants::DELIMITER;
use crate::error::{PointerError, PointerResult, ResolveError};
use crate::escape::{decode_token, escape_token};
use crate::resolve;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// A validated RFC 6901 JSON Pointer.
///
/// Holds the raw text exactly as given together with its decoded reference
/// tokens. The raw text is either empty (the whole document) or starts with
/// `/`, and never contains an empty token.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Pointer {
    raw: String,
    tokens: Vec<String>,
}

impl Pointer {
    /// Validate and parse `raw`. Either the whole input is accepted or an error
    /// is returned.
    pub fn parse(raw: impl Into<String>) -> PointerResult<Self> {
        let raw = raw.into();
        match split_tokens(&raw) {
            Ok(tokens) => {
                log::trace!("parsed json pointer `{raw}` into {} tokens", tokens.len());
                Ok(Self { raw, tokens })
            }
            Err(err) => {
                log::debug!("rejected json pointer: {err}");
                Err(err)
            }
        }
    }

    /// The empty pointer, addressing the whole document.
    pub fn root() -> Self {
        Self::default()
    }

    /// Build a pointer from decoded tokens, escaping each one.
    pub fn from_tokens<I, S>(tokens: I) -> PointerResult<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let tokens: Vec<String> = tokens.into_iter().map(Into::into).collect();
        if let Some(position) = tokens.iter().position(String::is_empty) {
            return Err(PointerError::EmptyReferenceToken {
                pointer: encode(&tokens),
                position,
            });
        }
        Ok(Self::from_valid_tokens(tokens))
    }

    fn from_valid_tokens(tokens: Vec<String>) -> Self {
        Self {
            raw: encode(&tokens),
            tokens,
        }
    }

    /// The pointer text as supplied, or as re-serialized by [`traverse`](Self::traverse).
    pub fn raw_value(&self) -> &str {
        &self.raw
    }

    /// Decoded reference tokens, in order.
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    pub fn is_root(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn first(&self) -> Option<&str> {
        self.tokens.first().map(String::as_str)
    }

    /// The pointer left after consuming the first token.
    ///
    /// `/a/b` becomes `/b`; pointers with zero or one token become the root.
    pub fn traverse(&self) -> Pointer {
        let next = match self.tokens.split_first() {
            Some((_, rest)) if !rest.is_empty() => Self::from_valid_tokens(rest.to_vec()),
            _ => Self::root(),
        };
        log::trace!("traversed json pointer `{}` to `{}`", self.raw, next.raw);
        next
    }

    /// A child pointer with `token` appended.
    pub fn push(&self, token: impl Into<String>) -> PointerResult<Pointer> {
        let token = token.into();
        if token.is_empty() {
            return Err(PointerError::EmptyReferenceToken {
                pointer: format!("{}{}", self.raw, DELIMITER),
                position: self.tokens.len(),
            });
        }
        let mut raw = String::with_capacity(self.raw.len() + token.len() + 1);
        raw.push_str(&self.raw);
        raw.push(DELIMITER);
        raw.push_str(&escape_token(&token));
        let mut tokens = self.tokens.clone();
        tokens.push(token);
        Ok(Self { raw, tokens })
    }

    pub fn resolve<'v>(&self, value: &'v Value) -> Result<&'v Value, ResolveError> {
        resolve::resolve(value, self)
    }

    pub fn resolve_mut<'v>(&self, value: &'v mut Value) -> Result<&'v mut Value, ResolveError> {
        resolve::resolve_mut(value, self)
    }
}

/// Free-function form of [`Pointer::parse`].
pub fn parse(raw: &str) -> PointerResult<Pointer> {
    Pointer::parse(raw)
}

/// Free-function form of [`Pointer::traverse`].
pub fn traverse(pointer: &Pointer) -> Pointer {
    pointer.traverse()
}

fn split_tokens(raw: &str) -> PointerResult<Vec<String>> {
    if raw.is_empty() {
        return Ok(Vec::new());
    }
    let Some(rest) = raw.strip_prefix(DELIMITER) else {
        return Err(PointerError::MissingLeadingDelimiter {
            pointer: raw.to_string(),
        });
    };
    // split on the raw text first so a decoded `~1` is never treated as a delimiter
    rest.split(DELIMITER)
        .enumerate()
        .map(|(position, segment)| {
            if segment.is_empty() {
                Err(PointerError::EmptyReferenceToken {
                    pointer: raw.to_string(),
                    position,
                })
            } else {
                Ok(decode_token(segment).into_owned())
            }
        })
        .collect()
}

pub(crate) fn encode(tokens: &[String]) -> String {
    let mut s = String::new();
    for token in tokens {
        s.push(DELIMITER);
        s.push_str(&escape_token(token));
    }
    s
}

impl Display for Pointer {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.raw)
    }
}

impl FromStr for Pointer {
    type Err = PointerError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<&str> for Pointer {
    type Error = PointerError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl TryFrom<String> for Pointer {
    type Error = PointerError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(value)
    }
}

impl From<Pointer> for String {
    fn from(p: Pointer) -> Self {
        p.raw
    }
}

impl AsRef<str> for Pointer {
    fn as_ref(&self) -> &str {
        &self.raw
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_pointer_is_root() {
        let p = Pointer::parse("").unwrap();
        assert_eq!(p.raw_value(), "");
        assert!(p.is_root());
        assert_eq!(p, Pointer::root());
        assert_eq!(p.first(), None);
    }

    #[test]
    fn rejects_missing_leading_delimiter() {
        for raw in ["ab", "a/b/c", "~0", " /a"] {
            assert_eq!(
                Pointer::parse(raw).unwrap_err(),
                PointerError::MissingLeadingDelimiter {
                    pointer: raw.to_string()
                }
            );
        }
    }

    #[test]
    fn reports_position_of_empty_token() {
        let cases = [("/", 0), ("/a//c", 1), ("//a", 0), ("/a/", 1), ("/a/b//", 2)];
        for (raw, position) in cases {
            assert_eq!(
                Pointer::parse(raw).unwrap_err(),
                PointerError::EmptyReferenceToken {
                    pointer: raw.to_string(),
                    position
                }
            );
        }
    }

    #[test]
    fn accepts_control_and_nul_characters() {
        let p = Pointer::parse("/a\u{0}b/\t\n").unwrap();
        assert_eq!(p.tokens(), ["a\u{0}b", "\t\n"]);
    }

    #[test]
    fn traverse_drops_first_token() {
        let p = Pointer::parse("/a/b/c").unwrap();
        let next = p.traverse();
        assert_eq!(next.raw_value(), "/b/c");
        assert_eq!(next.tokens(), ["b", "c"]);
        assert_eq!(next.traverse().traverse(), Pointer::root());
        assert_eq!(Pointer::root().traverse(), Pointer::root());
    }

    #[test]
    fn traverse_reescapes_retained_tokens() {
        let p = Pointer::parse("/x/a~1b/~0c/~01").unwrap();
        let next = traverse(&p);
        assert_eq!(next.raw_value(), "/a~1b/~0c/~01");
        assert_eq!(next.tokens(), ["a/b", "~c", "~1"]);
        assert_eq!(Pointer::parse(next.raw_value()).unwrap(), next);
    }

    #[test]
    fn traverse_normalizes_unknown_escapes() {
        // `~x` decodes to itself, then the `~` is written back as `~0`
        let p = Pointer::parse("/a/~x").unwrap();
        let next = p.traverse();
        assert_eq!(next.raw_value(), "/~0x");
        assert_eq!(next.tokens(), ["~x"]);
    }

    #[test]
    fn from_tokens_escapes() {
        let p = Pointer::from_tokens(["a/b", "~", "c"]).unwrap();
        assert_eq!(p.raw_value(), "/a~1b/~0/c");
        assert_eq!(Pointer::from_tokens(Vec::<String>::new()).unwrap(), Pointer::root());
        assert_eq!(
            Pointer::from_tokens(["a", ""]).unwrap_err(),
            PointerError::EmptyReferenceToken {
                pointer: "/a/".into(),
                position: 1
            }
        );
    }

    #[test]
    fn push_appends_escaped_token() {
        let p = Pointer::root().push("a").unwrap().push("b/c").unwrap();
        assert_eq!(p.raw_value(), "/a/b~1c");
        assert_eq!(p.tokens(), ["a", "b/c"]);
        assert_eq!(
            p.push("").unwrap_err(),
            PointerError::EmptyReferenceToken {
                pointer: "/a/b~1c/".into(),
                position: 2
            }
        );
    }

    #[test]
    fn string_conversions() {
        let p: Pointer = "/a/b".parse().unwrap();
        assert_eq!(p.to_string(), "/a/b");
        assert_eq!(p.as_ref(), "/a/b");
        assert_eq!(Pointer::try_from(String::from("/a/b")).unwrap(), p);
        assert_eq!(String::from(p), "/a/b");
        assert!(Pointer::try_from("nope").is_err());
    }
}
