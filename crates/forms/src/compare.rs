//! Comparison helpers shared by the date, cross-field and length rules.
//!
//! Values are first *prepared*: anything that reads as a date becomes its
//! epoch-millisecond timestamp, numbers stay numbers, strings that are not
//! dates stay text. The prepared values are then compared with one of the six
//! [`Comparison`] operators.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ConfigError;

// ============================================================================
// COMPARISON OPERATOR
// ============================================================================

/// Relational operator used by threshold and cross-field rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Comparison {
    /// `<`
    #[serde(rename = "<")]
    Less,
    /// `>`
    #[serde(rename = ">")]
    Greater,
    /// `==`, equality after numeric coercion.
    #[serde(rename = "==")]
    Equal,
    /// `===`, equality of kind and value.
    #[serde(rename = "===")]
    StrictEqual,
    /// `<=`
    #[serde(rename = "<=")]
    LessOrEqual,
    /// `>=`
    #[serde(rename = ">=")]
    GreaterOrEqual,
}

impl Comparison {
    /// Operator text.
    #[must_use]
    pub fn symbol(self) -> &'static str {
        match self {
            Comparison::Less => "<",
            Comparison::Greater => ">",
            Comparison::Equal => "==",
            Comparison::StrictEqual => "===",
            Comparison::LessOrEqual => "<=",
            Comparison::GreaterOrEqual => ">=",
        }
    }

    /// Applies the operator to two values of the same type.
    ///
    /// `==` and `===` coincide here because both sides already share a type.
    ///
    /// ```
    /// use nebula_forms::compare::Comparison;
    ///
    /// assert!(Comparison::LessOrEqual.evaluate(&8, &8));
    /// assert!(!Comparison::Greater.evaluate(&3, &5));
    /// ```
    #[must_use]
    pub fn evaluate<T: PartialOrd + ?Sized>(self, left: &T, right: &T) -> bool {
        self.holds(left.partial_cmp(right))
    }

    /// Applies the operator to two prepared values.
    #[must_use]
    pub fn compare(self, left: &Comparable, right: &Comparable) -> bool {
        match self {
            Comparison::Equal => left.loose_eq(right),
            Comparison::StrictEqual => left.strict_eq(right),
            _ => self.holds(left.loose_cmp(right)),
        }
    }

    fn holds(self, ordering: Option<Ordering>) -> bool {
        match (self, ordering) {
            (_, None) => false,
            (Comparison::Less, Some(o)) => o.is_lt(),
            (Comparison::Greater, Some(o)) => o.is_gt(),
            (Comparison::Equal | Comparison::StrictEqual, Some(o)) => o.is_eq(),
            (Comparison::LessOrEqual, Some(o)) => o.is_le(),
            (Comparison::GreaterOrEqual, Some(o)) => o.is_ge(),
        }
    }
}

impl fmt::Display for Comparison {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

impl FromStr for Comparison {
    type Err = ConfigError;

    fn from_str(symbol: &str) -> Result<Self, Self::Err> {
        match symbol.trim() {
            "<" => Ok(Comparison::Less),
            ">" => Ok(Comparison::Greater),
            "==" => Ok(Comparison::Equal),
            "===" => Ok(Comparison::StrictEqual),
            "<=" => Ok(Comparison::LessOrEqual),
            ">=" => Ok(Comparison::GreaterOrEqual),
            other => Err(ConfigError::UnknownComparison(other.to_owned())),
        }
    }
}

// ============================================================================
// PREPARED VALUES
// ============================================================================

/// A control value normalised for comparison.
#[derive(Debug, Clone, PartialEq)]
pub enum Comparable {
    /// No value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number, or a date as epoch milliseconds.
    Number(f64),
    /// Text that is not a date.
    Text(String),
}

impl Comparable {
    /// Numeric reading used by loose comparisons. `None` stands for NaN.
    fn to_number(&self) -> Option<f64> {
        match self {
            Comparable::Null => Some(0.0),
            Comparable::Bool(b) => Some(f64::from(u8::from(*b))),
            Comparable::Number(n) => Some(*n),
            Comparable::Text(text) => {
                let trimmed = text.trim();
                if trimmed.is_empty() {
                    Some(0.0)
                } else {
                    trimmed.parse::<f64>().ok().filter(|n| !n.is_nan())
                }
            }
        }
    }

    fn strict_eq(&self, other: &Comparable) -> bool {
        self == other
    }

    fn loose_eq(&self, other: &Comparable) -> bool {
        match (self, other) {
            (Comparable::Null, Comparable::Null) => true,
            (Comparable::Null, _) | (_, Comparable::Null) => false,
            (Comparable::Text(a), Comparable::Text(b)) => a == b,
            _ => matches!(self.loose_cmp(other), Some(Ordering::Equal)),
        }
    }

    fn loose_cmp(&self, other: &Comparable) -> Option<Ordering> {
        match (self, other) {
            (Comparable::Text(a), Comparable::Text(b)) => Some(a.cmp(b)),
            _ => self.to_number()?.partial_cmp(&other.to_number()?),
        }
    }
}

/// Normalises a control value for comparison.
///
/// ```
/// use nebula_forms::compare::{prepare_to_compare, Comparable};
/// use serde_json::json;
///
/// assert_eq!(prepare_to_compare(&json!(5)), Comparable::Number(5.0));
/// assert_eq!(prepare_to_compare(&json!("abc")), Comparable::Text("abc".into()));
/// assert_eq!(
///     prepare_to_compare(&json!("1970-01-02")),
///     Comparable::Number(86_400_000.0)
/// );
/// ```
#[must_use]
pub fn prepare_to_compare(value: &Value) -> Comparable {
    match value {
        Value::Null => Comparable::Null,
        Value::Bool(b) => Comparable::Bool(*b),
        Value::Number(n) => n.as_f64().map_or(Comparable::Null, Comparable::Number),
        Value::String(text) => match parse_date(text) {
            Some(date) => Comparable::Number(date.timestamp_millis() as f64),
            None => Comparable::Text(text.clone()),
        },
        composite => Comparable::Text(composite.to_string()),
    }
}

// ============================================================================
// DATES
// ============================================================================

const DATE_TIME_FORMATS: [&str; 4] = [
    "%Y-%m-%dT%H:%M:%S%.f",
    "%Y-%m-%d %H:%M:%S%.f",
    "%Y-%m-%dT%H:%M",
    "%Y-%m-%d %H:%M",
];

const DATE_FORMATS: [&str; 2] = ["%Y-%m-%d", "%m/%d/%Y"];

/// Parses date text: RFC 3339, ISO date-time without offset (seconds
/// optional), `YYYY-MM-DD` or `MM/DD/YYYY`. Text without an offset is read
/// as UTC.
#[must_use]
pub fn parse_date(text: &str) -> Option<DateTime<Utc>> {
    let text = text.trim();

    if let Ok(date) = DateTime::parse_from_rfc3339(text) {
        return Some(date.with_timezone(&Utc));
    }

    for format in DATE_TIME_FORMATS {
        if let Ok(naive) = NaiveDateTime::parse_from_str(text, format) {
            return Some(naive.and_utc());
        }
    }

    DATE_FORMATS
        .into_iter()
        .find_map(|format| NaiveDate::parse_from_str(text, format).ok())
        .and_then(|date| date.and_hms_opt(0, 0, 0))
        .map(|naive| naive.and_utc())
}

/// Normalises a control value to a date.
///
/// Strings go through [`parse_date`]; numbers are epoch milliseconds.
/// Anything else, or text that does not parse, yields `None`.
#[must_use]
pub fn prepare_date(value: &Value) -> Option<DateTime<Utc>> {
    let date = match value {
        Value::String(text) => parse_date(text),
        Value::Number(n) => n
            .as_i64()
            .or_else(|| n.as_f64().filter(|f| f.is_finite()).map(|f| f as i64))
            .and_then(DateTime::from_timestamp_millis),
        _ => None,
    };

    if date.is_none() {
        tracing::trace!(value = %value, "value does not normalise to a date");
    }
    date
}

/// Parses a reference date given as text in a rule configuration.
pub fn parse_reference(text: &str) -> Result<DateTime<Utc>, ConfigError> {
    parse_date(text).ok_or_else(|| ConfigError::InvalidDate(text.to_owned()))
}

/// Returns true if `value` is a date strictly before `reference`.
/// Values that are not dates are never earlier.
#[must_use]
pub fn is_earlier(value: &Value, reference: &DateTime<Utc>) -> bool {
    prepare_date(value).is_some_and(|date| date < *reference)
}

/// Returns true if `value` is a date strictly after `reference`.
/// Values that are not dates are never later.
#[must_use]
pub fn is_later(value: &Value, reference: &DateTime<Utc>) -> bool {
    prepare_date(value).is_some_and(|date| date > *reference)
}

/// Returns true if `value` is a date at the same instant as `reference`.
#[must_use]
pub fn is_same_instant(value: &Value, reference: &DateTime<Utc>) -> bool {
    prepare_date(value).is_some_and(|date| date == *reference)
}
