//! Helpers for reading control values.
//!
//! Control values are `serde_json::Value`s. A value is *empty* when it is
//! `null`, an empty string or an empty array; every other value (including
//! `false` and `0`) counts as present. A value is *falsy* when it is empty,
//! `false` or numeric zero.

use std::borrow::Cow;

use serde_json::Value;

/// Returns true if the value counts as "no input".
#[inline]
#[must_use]
pub fn is_empty(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::String(s) => s.is_empty(),
        Value::Array(items) => items.is_empty(),
        _ => false,
    }
}

/// Returns true if the value is empty or falsy (`false`, numeric zero).
///
/// Pattern rules skip falsy values; requirement rules still count `false`
/// and `0` as input through [`has_value`].
#[inline]
#[must_use]
pub fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Bool(b) => !b,
        Value::Number(n) => n.as_f64() == Some(0.0),
        other => is_empty(other),
    }
}

/// Returns true if the value holds input.
#[inline]
#[must_use]
pub fn has_value(value: &Value) -> bool {
    !is_empty(value)
}

/// Textual form of a scalar value.
///
/// Strings are borrowed; numbers and booleans are rendered. Arrays, objects
/// and `null` have no textual form.
#[must_use]
pub fn as_text(value: &Value) -> Option<Cow<'_, str>> {
    match value {
        Value::String(s) => Some(Cow::Borrowed(s.as_str())),
        Value::Number(n) => Some(Cow::Owned(n.to_string())),
        Value::Bool(b) => Some(Cow::Owned(b.to_string())),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Length of a value: chars for text, elements for arrays.
#[must_use]
pub fn measure_length(value: &Value) -> Option<usize> {
    match value {
        Value::Array(items) => Some(items.len()),
        other => as_text(other).map(|text| text.chars().count()),
    }
}

/// Number of whitespace-separated words in the textual form.
#[must_use]
pub fn count_words(value: &Value) -> Option<usize> {
    as_text(value).map(|text| text.split_whitespace().count())
}
