//! Serde helpers for request bodies.

use serde::Serializer;

/// Flags are sent as `0` or `1`.
pub fn option_bool_as_int<S>(value: &Option<bool>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(value) => s.serialize_u8(u8::from(*value)),
        None => s.serialize_none(),
    }
}
