use std::fmt::{Display, Formatter};

/// Coarse classification shared by parse and resolve failures.
#[repr(u32)]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
pub enum ErrorCode {
    /// The pointer text does not match the RFC 6901 grammar.
    InvalidSyntax = 1,
    /// The pointer is well formed but addresses nothing in the document.
    NotFound = 2,
    /// An array was addressed with something other than a base-10 index.
    InvalidIndex = 3,
}

impl From<ErrorCode> for u32 {
    fn from(v: ErrorCode) -> Self {
        v as u32
    }
}

impl Display for ErrorCode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            ErrorCode::InvalidSyntax => "Invalid syntax",
            ErrorCode::NotFound => "Not found",
            ErrorCode::InvalidIndex => "Invalid index",
        };
        f.write_str(s)
    }
}

/// Errors raised while constructing a [`Pointer`](crate::Pointer).
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PointerError {
    #[error("pointer `{pointer}` must be empty or start with `/`")]
    MissingLeadingDelimiter { pointer: String },
    /// `position` is the zero-based index of the empty segment.
    #[error("pointer `{pointer}` has an empty reference token at position {position}")]
    EmptyReferenceToken { pointer: String, position: usize },
}

impl PointerError {
    pub fn code(&self) -> ErrorCode {
        ErrorCode::InvalidSyntax
    }

    /// The raw text that was rejected.
    pub fn pointer(&self) -> &str {
        match self {
            PointerError::MissingLeadingDelimiter { pointer }
            | PointerError::EmptyReferenceToken { pointer, .. } => pointer,
        }
    }
}

/// Errors raised while resolving a pointer against a JSON value.
///
/// `pointer` is always the prefix walked so far, ending with the token that failed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("no value at `{pointer}`")]
    NotFound { pointer: String },
    #[error("invalid array index `{token}` at `{pointer}`")]
    InvalidIndex { pointer: String, token: String },
    #[error("`-` at `{pointer}` refers to a nonexistent array element")]
    AppendPosition { pointer: String },
    #[error("value before `{pointer}` is neither an object nor an array")]
    NotContainer { pointer: String },
}

impl ResolveError {
    pub fn code(&self) -> ErrorCode {
        match self {
            ResolveError::NotFound { .. }
            | ResolveError::AppendPosition { .. }
            | ResolveError::NotContainer { .. } => ErrorCode::NotFound,
            ResolveError::InvalidIndex { .. } => ErrorCode::InvalidIndex,
        }
    }

    pub fn pointer(&self) -> &str {
        match self {
            ResolveError::NotFound { pointer }
            | ResolveError::InvalidIndex { pointer, .. }
            | ResolveError::AppendPosition { pointer }
            | ResolveError::NotContainer { pointer } => pointer,
        }
    }
}

/// Convenience alias for pointer construction results.
pub type PointerResult<T> = Result<T, PointerError>;
