//! JSON Pointer (RFC 6901) - Rust implementation
//!
//! Parses and validates pointers, decodes `~0`/`~1` escapes, derives the
//! pointer for the next level down, and resolves pointers against
//! `serde_json::Value` documents.
//! Spec reference: <https://datatracker.ietf.org/doc/html/rfc6901>

pub mod constants;
pub mod error;
pub mod escape;
pub mod pointer;
pub mod resolve;

pub use constants::{
    APPEND_TOKEN, DELIMITER, ESCAPED_DELIMITER, ESCAPED_ESCAPE_CHARACTER, ESCAPE_CHARACTER,
};
pub use error::{ErrorCode, PointerError, PointerResult, ResolveError};
pub use escape::{decode_token, escape_token};
pub use pointer::{parse as parse_json_pointer, traverse, Pointer};
pub use resolve::{resolve, resolve_mut};
