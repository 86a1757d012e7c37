//! Shared serialization utilities for outbound order payloads.
//!
//! The venue expects prices and amounts as decimal strings and boolean
//! switches as `0`/`1` integers.

use serde::{ser::Error as _, Serializer};

/// Serialize an f64 as a decimal string. NaN and infinities are rejected.
pub fn serialize_f64_as_string<S>(val: &f64, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    if !val.is_finite() {
        return Err(S::Error::custom(format!("non-finite number {val}")));
    }
    s.serialize_str(&val.to_string())
}

/// Serialize an optional f64 as a decimal string. Pair with
/// `skip_serializing_if = "Option::is_none"`.
pub fn serialize_opt_f64_as_string<S>(val: &Option<f64>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match val {
        Some(v) => serialize_f64_as_string(v, s),
        None => s.serialize_none(),
    }
}

/// Serialize an optional bool as `1`/`0`. Pair with
/// `skip_serializing_if = "Option::is_none"`.
pub fn serialize_opt_bool_as_int<S>(val: &Option<bool>, s: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match val {
        Some(v) => s.serialize_u8(u8::from(*v)),
        None => s.serialize_none(),
    }
}

/// `skip_serializing_if` predicate for list filters: unset and empty are both omitted.
pub(crate) fn is_none_or_empty<T>(val: &Option<Vec<T>>) -> bool {
    val.as_ref().map_or(true, Vec::is_empty)
}

/// `skip_serializing_if` predicate for flag sums.
pub(crate) fn is_zero(val: &i64) -> bool {
    *val == 0
}
