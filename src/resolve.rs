//! Resolve a [`Pointer`] against a `serde_json::Value` (RFC 6901 §4).

use crate::constants::APPEND_TOKEN;
use crate::error::ResolveError;
use crate::pointer::{encode, Pointer};
use serde_json::Value;

/// Evaluate `pointer` against `value` and return a reference to the target.
pub fn resolve<'v>(value: &'v Value, pointer: &Pointer) -> Result<&'v Value, ResolveError> {
    let mut cur = value;
    for (depth, token) in pointer.tokens().iter().enumerate() {
        cur = match cur {
            Value::Object(map) => map.get(token.as_str()),
            Value::Array(arr) => arr.get(array_index(pointer, depth, token)?),
            _ => {
                return Err(failed(ResolveError::NotContainer {
                    pointer: prefix(pointer, depth),
                }))
            }
        }
        .ok_or_else(|| not_found(pointer, depth))?;
    }
    log::trace!("resolved json pointer `{pointer}`");
    Ok(cur)
}

/// Mutable counterpart of [`resolve`].
pub fn resolve_mut<'v>(
    value: &'v mut Value,
    pointer: &Pointer,
) -> Result<&'v mut Value, ResolveError> {
    let target = pointer
        .tokens()
        .iter()
        .enumerate()
        .try_fold(value, |cur, (depth, token)| {
            match cur {
                Value::Object(map) => map.get_mut(token.as_str()),
                Value::Array(arr) => arr.get_mut(array_index(pointer, depth, token)?),
                _ => {
                    return Err(failed(ResolveError::NotContainer {
                        pointer: prefix(pointer, depth),
                    }))
                }
            }
            .ok_or_else(|| not_found(pointer, depth))
        })?;
    log::trace!("resolved json pointer `{pointer}` for update");
    Ok(target)
}

/// Parse an array token: base-10, no sign, no leading zeros.
fn array_index(pointer: &Pointer, depth: usize, token: &str) -> Result<usize, ResolveError> {
    if token == APPEND_TOKEN {
        return Err(failed(ResolveError::AppendPosition {
            pointer: prefix(pointer, depth),
        }));
    }
    let digits = !token.is_empty() && token.bytes().all(|b| b.is_ascii_digit());
    if !digits || (token.len() > 1 && token.starts_with('0')) {
        return Err(failed(ResolveError::InvalidIndex {
            pointer: prefix(pointer, depth),
            token: token.to_string(),
        }));
    }
    // too large for usize means past the end of any array
    token.parse().map_err(|_| not_found(pointer, depth))
}

fn not_found(pointer: &Pointer, depth: usize) -> ResolveError {
    failed(ResolveError::NotFound {
        pointer: prefix(pointer, depth),
    })
}

fn failed(err: ResolveError) -> ResolveError {
    log::debug!("json pointer resolution failed: {err}");
    err
}

fn prefix(pointer: &Pointer, depth: usize) -> String {
    encode(&pointer.tokens()[..=depth])
}
