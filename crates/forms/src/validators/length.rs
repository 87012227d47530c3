//! Length and word-count rules.
//!
//! Length is the char count of text (numbers and booleans through their
//! textual form) or the element count of an array. Word count is the number
//! of whitespace-separated tokens. Empty values are valid; objects have no
//! length and are invalid.

use serde_json::Value;

use crate::ConfigError;
use crate::compare::Comparison;
use crate::foundation::value;
use crate::validators::ErrorSpec;

fn measured(input: &Value) -> String {
    value::measure_length(input).map_or_else(|| "n/a".to_owned(), |n| n.to_string())
}

fn counted(input: &Value) -> String {
    value::count_words(input).map_or_else(|| "n/a".to_owned(), |n| n.to_string())
}

fn check_range(start: usize, end: usize) -> Result<(), ConfigError> {
    if start > end {
        Err(ConfigError::InvalidRange { start, end })
    } else {
        Ok(())
    }
}

// ============================================================================
// LENGTH
// ============================================================================

crate::form_rule! {
    /// Validates `length <op> threshold`.
    ///
    /// # Examples
    ///
    /// ```
    /// use nebula_forms::compare::Comparison;
    /// use nebula_forms::foundation::Validate;
    /// use nebula_forms::validators::length;
    /// use serde_json::json;
    ///
    /// let rule = length(5, Comparison::LessOrEqual);
    /// assert!(rule.validate(&json!("hello")).is_ok());
    /// assert!(rule.validate(&json!("hello!")).is_err());
    /// ```
    pub Length { threshold: usize, comparison: Comparison } for Value;
    rule(self, input) {
        value::is_empty(input)
            || value::measure_length(input)
                .is_some_and(|len| self.comparison.evaluate(&len, &self.threshold))
    }
    error(self, input) {
        self.report
            .error()
            .with_param("threshold", self.threshold.to_string())
            .with_param("comparison", self.comparison.symbol())
            .with_param("actual", measured(input))
    }
}

impl Length {
    /// Creates the rule. Reports `length` by default.
    #[must_use]
    pub fn new(threshold: usize, comparison: Comparison) -> Self {
        Self {
            threshold,
            comparison,
            report: ErrorSpec::new("length", "Value length is out of bounds"),
        }
    }
}

crate::form_rule! {
    /// Validates `start <= length <= end`.
    pub Range { start: usize, end: usize } for Value;
    rule(self, input) {
        value::is_empty(input)
            || value::measure_length(input).is_some_and(|len| (self.start..=self.end).contains(&len))
    }
    error(self, input) {
        self.report
            .error()
            .with_param("start", self.start.to_string())
            .with_param("end", self.end.to_string())
            .with_param("actual", measured(input))
    }
}

impl Range {
    /// Creates the rule. Reports `range` by default.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRange`] if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, ConfigError> {
        check_range(start, end)?;
        Ok(Self {
            start,
            end,
            report: ErrorSpec::new("range", "Value length must be within the allowed range"),
        })
    }
}

// ============================================================================
// WORD COUNT
// ============================================================================

crate::form_rule! {
    /// Validates `word count <op> threshold`.
    pub WordCount { threshold: usize, comparison: Comparison } for Value;
    rule(self, input) {
        value::is_empty(input)
            || value::count_words(input)
                .is_some_and(|words| self.comparison.evaluate(&words, &self.threshold))
    }
    error(self, input) {
        self.report
            .error()
            .with_param("threshold", self.threshold.to_string())
            .with_param("comparison", self.comparison.symbol())
            .with_param("actual", counted(input))
    }
}

impl WordCount {
    /// Creates the rule. Reports `wordCount` by default.
    #[must_use]
    pub fn new(threshold: usize, comparison: Comparison) -> Self {
        Self {
            threshold,
            comparison,
            report: ErrorSpec::new("wordCount", "Word count is out of bounds"),
        }
    }
}

crate::form_rule! {
    /// Validates `start <= word count <= end`.
    pub WordCountRange { start: usize, end: usize } for Value;
    rule(self, input) {
        value::is_empty(input)
            || value::count_words(input).is_some_and(|words| (self.start..=self.end).contains(&words))
    }
    error(self, input) {
        self.report
            .error()
            .with_param("start", self.start.to_string())
            .with_param("end", self.end.to_string())
            .with_param("actual", counted(input))
    }
}

impl WordCountRange {
    /// Creates the rule. Reports `wordCountRange` by default.
    ///
    /// # Errors
    ///
    /// [`ConfigError::InvalidRange`] if `start > end`.
    pub fn new(start: usize, end: usize) -> Result<Self, ConfigError> {
        check_range(start, end)?;
        Ok(Self {
            start,
            end,
            report: ErrorSpec::new("wordCountRange", "Word count must be within the allowed range"),
        })
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Creates a [`Length`] rule.
#[must_use]
pub fn length(threshold: usize, comparison: Comparison) -> Length {
    Length::new(threshold, comparison)
}

/// Creates a [`Range`] rule.
pub fn range(start: usize, end: usize) -> Result<Range, ConfigError> {
    Range::new(start, end)
}

/// Creates a [`WordCount`] rule.
#[must_use]
pub fn word_count(threshold: usize, comparison: Comparison) -> WordCount {
    WordCount::new(threshold, comparison)
}

/// Creates a [`WordCountRange`] rule.
pub fn word_count_range(start: usize, end: usize) -> Result<WordCountRange, ConfigError> {
    WordCountRange::new(start, end)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::foundation::Validate;
    use serde_json::json;

    #[test]
    fn test_range_bounds_are_inclusive() {
        let rule = range(8, 14).unwrap();
        assert!(rule.validate(&json!("a".repeat(8))).is_ok());
        assert!(rule.validate(&json!("a".repeat(14))).is_ok());

        let error = rule.validate(&json!("a".repeat(7))).unwrap_err();
        assert_eq!(error.code, "range");
        assert_eq!(error.param("actual"), Some("7"));
        assert!(rule.validate(&json!("a".repeat(15))).is_err());
    }

    #[test]
    fn test_inverted_range_is_rejected() {
        assert!(matches!(
            range(5, 2),
            Err(ConfigError::InvalidRange { start: 5, end: 2 })
        ));
        assert!(word_count_range(3, 1).is_err());
        assert!(range(4, 4).is_ok());
    }

    #[test]
    fn test_length_counts_chars_not_bytes() {
        let rule = length(3, Comparison::Equal);
        assert!(rule.validate(&json!("żółw")).is_err());
        assert!(rule.validate(&json!("żół")).is_ok());
    }

    #[test]
    fn test_length_of_arrays_and_numbers() {
        let rule = length(2, Comparison::GreaterOrEqual);
        assert!(rule.validate(&json!([1, 2])).is_ok());
        assert!(rule.validate(&json!([1])).is_err());
        assert!(rule.validate(&json!(12)).is_ok());
        assert!(rule.validate(&json!({ "a": 1, "b": 2 })).is_err());
    }

    #[test]
    fn test_length_error_params() {
        let error = length(3, Comparison::Less)
            .validate(&json!("abcd"))
            .unwrap_err();
        assert_eq!(error.code, "length");
        assert_eq!(error.param("threshold"), Some("3"));
        assert_eq!(error.param("comparison"), Some("<"));
        assert_eq!(error.param("actual"), Some("4"));
    }

    #[test]
    fn test_word_count() {
        let rule = word_count(3, Comparison::LessOrEqual);
        assert!(rule.validate(&json!("one two  three")).is_ok());
        assert_eq!(
            rule.validate(&json!("one two three four")).unwrap_err().code,
            "wordCount"
        );
    }

    #[test]
    fn test_word_count_range() {
        let rule = word_count_range(2, 3).unwrap();
        assert!(rule.validate(&json!("  two words ")).is_ok());
        assert_eq!(
            rule.validate(&json!("single")).unwrap_err().code,
            "wordCountRange"
        );
    }

    #[test]
    fn test_word_count_range_bounds_are_inclusive() {
        let rule = word_count_range(2, 3).unwrap();
        assert!(rule.validate(&json!("one two")).is_ok());
        assert!(rule.validate(&json!("one two three")).is_ok());

        let error = rule.validate(&json!("one two three four")).unwrap_err();
        assert_eq!(error.code, "wordCountRange");
        assert_eq!(error.param("actual"), Some("4"));
        assert_eq!(
            rule.validate(&json!("one")).unwrap_err().param("actual"),
            Some("1")
        );
    }

    #[test]
    fn test_empty_is_valid() {
        assert!(length(1, Comparison::Greater).validate(&json!("")).is_ok());
        assert!(range(1, 2).unwrap().validate(&json!([])).is_ok());
        assert!(word_count(5, Comparison::Equal).validate(&Value::Null).is_ok());
        assert!(word_count_range(1, 2).unwrap().validate(&json!("")).is_ok());
    }
}
