//! Date-ordering rules.

use chrono::{DateTime, SecondsFormat, Utc};
use serde_json::Value;

use crate::compare;
use crate::foundation::value;
use crate::validators::ErrorSpec;

crate::form_rule! {
    /// Validates that a date is strictly before `reference`.
    ///
    /// Empty values are valid. Values that do not read as a date are invalid.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::{TimeZone, Utc};
    /// use nebula_forms::foundation::Validate;
    /// use nebula_forms::validators::earlier_then;
    /// use serde_json::json;
    ///
    /// let rule = earlier_then(Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap());
    /// assert!(rule.validate(&json!("2023-12-31")).is_ok());
    /// assert!(rule.validate(&json!("2024-01-01")).is_err());
    /// ```
    pub EarlierThen { reference: DateTime<Utc> } for Value;
    rule(self, input) { value::is_empty(input) || compare::is_earlier(input, &self.reference) }
    error(self, input) { self.report.error().with_param("reference", rfc3339(&self.reference)) }
}

impl EarlierThen {
    /// Creates the rule. Reports `earlierThen` by default.
    #[must_use]
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self {
            reference,
            report: ErrorSpec::new("earlierThen", "Date must be earlier than the reference date"),
        }
    }
}

crate::form_rule! {
    /// Validates that a date is strictly after `reference`.
    ///
    /// Empty values are valid. Values that do not read as a date are invalid.
    pub LaterThen { reference: DateTime<Utc> } for Value;
    rule(self, input) { value::is_empty(input) || compare::is_later(input, &self.reference) }
    error(self, input) { self.report.error().with_param("reference", rfc3339(&self.reference)) }
}

impl LaterThen {
    /// Creates the rule. Reports `laterThen` by default.
    #[must_use]
    pub fn new(reference: DateTime<Utc>) -> Self {
        Self {
            reference,
            report: ErrorSpec::new("laterThen", "Date must be later than the reference date"),
        }
    }
}

fn rfc3339(date: &DateTime<Utc>) -> String {
    date.to_rfc3339_opts(SecondsFormat::Millis, true)
}

/// Creates an [`EarlierThen`] rule.
#[must_use]
pub fn earlier_then(reference: DateTime<Utc>) -> EarlierThen {
    EarlierThen::new(reference)
}

/// Creates a [`LaterThen`] rule.
#[must_use]
pub fn later_then(reference: DateTime<Utc>) -> LaterThen {
    LaterThen::new(reference)
}
