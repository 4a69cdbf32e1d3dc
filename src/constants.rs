//! Grammar constants from RFC 6901.

/// Separates reference tokens and prefixes every token in a non-empty pointer.
pub const DELIMITER: char = '/';

/// Introduces an escape sequence inside a reference token.
pub const ESCAPE_CHARACTER: char = '~';

/// Encoded form of a literal `~` inside a token.
pub const ESCAPED_ESCAPE_CHARACTER: &str = "~0";

/// Encoded form of a literal `/` inside a token.
pub const ESCAPED_DELIMITER: &str = "~1";

/// Array token addressing the position after the last element.
pub const APPEND_TOKEN: &str = "-";
