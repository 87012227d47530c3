//! Declarative rule configuration.
//!
//! The host attaches rules to controls as attribute objects such as
//! `{ "rule": "range", "start": 8, "end": 14 }`. These are pure data; calling
//! `build` turns one into a validator, reporting bad configuration as a
//! [`ConfigError`] before any value is validated.
//!
//! Named formats accept a shorthand: `{ "rule": "email" }` is read as
//! `{ "rule": "format", "format": "email" }`.
//!
//! # Examples
//!
//! ```
//! use nebula_forms::adapter::ControlValidator;
//! use nebula_forms::control::Control;
//! use nebula_forms::directive::RuleConfig;
//! use serde_json::json;
//!
//! let rule = RuleConfig::from_value(json!({
//!     "rule": "email",
//!     "errorName": "workEmail",
//! }))
//! .unwrap()
//! .build()
//! .unwrap();
//!
//! let value = json!("nope");
//! let error = rule.validate_control(&Control::new(&value)).unwrap_err();
//! assert_eq!(error.code, "workEmail");
//! ```

use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::ConfigError;
use crate::adapter::ControlValidator;
use crate::compare::{Comparison, parse_reference};
use crate::control::FormGroup;
use crate::foundation::Validate;
use crate::patterns::Format;
use crate::validators;

/// A boxed control rule, as built from a [`RuleConfig`].
pub type BoxedControlValidator = Box<dyn ControlValidator>;

/// A boxed group rule, as built from a [`GroupRuleConfig`].
pub type BoxedGroupValidator = Box<dyn Validate<Input = FormGroup> + Send + Sync>;

/// Optional error key and message overrides shared by every rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorOverrides {
    /// Replaces the rule's default error key.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_name: Option<String>,
    /// Replaces the rule's default error message.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

// ============================================================================
// CONTROL RULES
// ============================================================================

/// Declarative form of a rule attached to one control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum RuleConfig {
    /// Value must match `reg_exp`.
    Regexp {
        #[serde(rename = "regExp")]
        reg_exp: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Value must not match `reg_exp`.
    RegexpNot {
        #[serde(rename = "regExp")]
        reg_exp: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Value must satisfy a named format.
    Format {
        format: Format,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Date must be before `date`.
    EarlierThen {
        date: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Date must be after `date`.
    LaterThen {
        date: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Value compared with the sibling `field_name`.
    #[serde(rename_all = "camelCase")]
    CompareTo {
        field_name: String,
        comparison: Comparison,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Sibling `field_name` must be filled when this control is.
    #[serde(rename_all = "camelCase")]
    LinkTo {
        field_name: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// This control must be filled when sibling `field_name` is.
    #[serde(rename_all = "camelCase")]
    LinkedTo {
        field_name: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Value required while `condition` is true.
    RequiredWhen {
        condition: bool,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Length compared with `length`.
    Length {
        length: usize,
        comparison: Comparison,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Length within `start..=end`.
    Range {
        start: usize,
        end: usize,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Word count compared with `length`.
    WordCount {
        length: usize,
        comparison: Comparison,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// Word count within `start..=end`.
    WordCountRange {
        start: usize,
        end: usize,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },
}

impl RuleConfig {
    /// Reads a config from a JSON value, expanding the named-format shorthand.
    pub fn from_value(mut config: Value) -> Result<Self, ConfigError> {
        if let Some(object) = config.as_object_mut() {
            let shorthand = object
                .get("rule")
                .and_then(Value::as_str)
                .and_then(|rule| rule.parse::<Format>().ok());
            if let Some(format) = shorthand {
                object.insert("rule".to_owned(), Value::from("format"));
                object.insert("format".to_owned(), Value::from(format.name()));
            }
        }
        Ok(serde_json::from_value(config)?)
    }

    /// Reads a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Self::from_value(serde_json::from_str(text)?)
    }

    /// Tag this config is serialized under.
    #[must_use]
    pub fn rule_name(&self) -> &'static str {
        match self {
            RuleConfig::Regexp { .. } => "regexp",
            RuleConfig::RegexpNot { .. } => "regexpNot",
            RuleConfig::Format { .. } => "format",
            RuleConfig::EarlierThen { .. } => "earlierThen",
            RuleConfig::LaterThen { .. } => "laterThen",
            RuleConfig::CompareTo { .. } => "compareTo",
            RuleConfig::LinkTo { .. } => "linkTo",
            RuleConfig::LinkedTo { .. } => "linkedTo",
            RuleConfig::RequiredWhen { .. } => "requiredWhen",
            RuleConfig::Length { .. } => "length",
            RuleConfig::Range { .. } => "range",
            RuleConfig::WordCount { .. } => "wordCount",
            RuleConfig::WordCountRange { .. } => "wordCountRange",
        }
    }

    /// Builds the validator this config describes.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] for an invalid regex, an unparsable reference
    /// date or an inverted range.
    pub fn build(&self) -> Result<BoxedControlValidator, ConfigError> {
        let rule: BoxedControlValidator = match self {
            RuleConfig::Regexp { reg_exp, overrides } => {
                Box::new(validators::regexp(reg_exp)?.with_overrides(
                    overrides.error_name.clone(),
                    overrides.error.clone(),
                ))
            }
            RuleConfig::RegexpNot { reg_exp, overrides } => {
                Box::new(validators::regexp_not(reg_exp)?.with_overrides(
                    overrides.error_name.clone(),
                    overrides.error.clone(),
                ))
            }
            RuleConfig::Format { format, overrides } => Box::new(
                validators::named(*format)
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::EarlierThen { date, overrides } => Box::new(
                validators::earlier_then(parse_reference(date)?)
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::LaterThen { date, overrides } => Box::new(
                validators::later_then(parse_reference(date)?)
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::CompareTo {
                field_name,
                comparison,
                overrides,
            } => Box::new(
                validators::compare_to(field_name.clone(), *comparison)
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::LinkTo {
                field_name,
                overrides,
            } => Box::new(
                validators::link_to(field_name.clone())
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::LinkedTo {
                field_name,
                overrides,
            } => Box::new(
                validators::linked_to(field_name.clone())
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::RequiredWhen {
                condition,
                overrides,
            } => Box::new(
                validators::required_when(*condition)
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::Length {
                length,
                comparison,
                overrides,
            } => Box::new(
                validators::length(*length, *comparison)
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::Range {
                start,
                end,
                overrides,
            } => Box::new(
                validators::range(*start, *end)?
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::WordCount {
                length,
                comparison,
                overrides,
            } => Box::new(
                validators::word_count(*length, *comparison)
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            RuleConfig::WordCountRange {
                start,
                end,
                overrides,
            } => Box::new(
                validators::word_count_range(*start, *end)?
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
        };

        tracing::debug!(rule = self.rule_name(), "built control rule from config");
        Ok(rule)
    }
}

// ============================================================================
// GROUP RULES
// ============================================================================

/// Declarative form of a rule attached to a group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "camelCase")]
pub enum GroupRuleConfig {
    /// `required` must be filled when `check` is.
    RequiredIf {
        required: String,
        check: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// `required` must be filled when `check` is empty.
    RequiredIfNot {
        required: String,
        check: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },

    /// At least one of `first` and `second` must be filled.
    RequiredEither {
        first: String,
        second: String,
        #[serde(flatten)]
        overrides: ErrorOverrides,
    },
}

impl GroupRuleConfig {
    /// Reads a config from a JSON value.
    pub fn from_value(config: Value) -> Result<Self, ConfigError> {
        Ok(serde_json::from_value(config)?)
    }

    /// Reads a config from JSON text.
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    /// Tag this config is serialized under.
    #[must_use]
    pub fn rule_name(&self) -> &'static str {
        match self {
            GroupRuleConfig::RequiredIf { .. } => "requiredIf",
            GroupRuleConfig::RequiredIfNot { .. } => "requiredIfNot",
            GroupRuleConfig::RequiredEither { .. } => "requiredEither",
        }
    }

    /// Builds the group validator this config describes.
    ///
    /// Group rules have no fallible parameters today; the `Result` keeps the
    /// signature in line with [`RuleConfig::build`].
    pub fn build(&self) -> Result<BoxedGroupValidator, ConfigError> {
        let rule: BoxedGroupValidator = match self {
            GroupRuleConfig::RequiredIf {
                required,
                check,
                overrides,
            } => Box::new(
                validators::required_if(required.clone(), check.clone())
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            GroupRuleConfig::RequiredIfNot {
                required,
                check,
                overrides,
            } => Box::new(
                validators::required_if_not(required.clone(), check.clone())
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
            GroupRuleConfig::RequiredEither {
                first,
                second,
                overrides,
            } => Box::new(
                validators::required_either(first.clone(), second.clone())
                    .with_overrides(overrides.error_name.clone(), overrides.error.clone()),
            ),
        };

        tracing::debug!(rule = self.rule_name(), "built group rule from config");
        Ok(rule)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::Control;
    use serde_json::json;

    fn check(config: Value, value: Value) -> Result<(), String> {
        let rule = RuleConfig::from_value(config).unwrap().build().unwrap();
        rule.validate_control(&Control::new(&value))
            .map_err(|error| error.code.into_owned())
    }

    #[test]
    fn test_regexp_config() {
        let config = json!({ "rule": "regexp", "regExp": "^[a-z]+$" });
        assert!(check(config.clone(), json!("abc")).is_ok());
        assert_eq!(check(config, json!("ABC")), Err("regexp".to_owned()));
    }

    #[test]
    fn test_named_format_shorthand() {
        let config = RuleConfig::from_value(json!({ "rule": "zipCode" })).unwrap();
        assert_eq!(
            config,
            RuleConfig::Format {
                format: Format::ZipCode,
                overrides: ErrorOverrides::default(),
            }
        );
        assert_eq!(check(json!({ "rule": "ssn" }), json!("12")), Err("ssn".to_owned()));
    }

    #[test]
    fn test_overrides_flow_through() {
        let config = json!({ "rule": "range", "start": 2, "end": 3, "errorName": "size", "error": "2 or 3" });
        let rule = RuleConfig::from_value(config).unwrap().build().unwrap();
        let value = json!("a");
        let error = rule.validate_control(&Control::new(&value)).unwrap_err();
        assert_eq!(error.code, "size");
        assert_eq!(error.message, "2 or 3");
    }

    #[test]
    fn test_comparison_symbols() {
        let config = json!({ "rule": "length", "length": 3, "comparison": "<=" });
        assert!(check(config.clone(), json!("abc")).is_ok());
        assert_eq!(check(config, json!("abcd")), Err("length".to_owned()));
    }

    #[test]
    fn test_dates() {
        let config = json!({ "rule": "laterThen", "date": "2024-01-01" });
        assert!(check(config.clone(), json!("2024-01-02")).is_ok());
        assert_eq!(check(config, json!("2023-12-31")), Err("laterThen".to_owned()));
    }

    #[test]
    fn test_build_errors() {
        let bad_regex = RuleConfig::from_value(json!({ "rule": "regexp", "regExp": "(" })).unwrap();
        assert!(matches!(bad_regex.build(), Err(ConfigError::InvalidPattern(_))));

        let bad_date = RuleConfig::from_value(json!({ "rule": "earlierThen", "date": "later" })).unwrap();
        assert!(matches!(bad_date.build(), Err(ConfigError::InvalidDate(_))));

        let inverted = RuleConfig::from_value(json!({ "rule": "range", "start": 5, "end": 1 })).unwrap();
        assert!(matches!(inverted.build(), Err(ConfigError::InvalidRange { .. })));
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            RuleConfig::from_value(json!({ "rule": "nonsense" })),
            Err(ConfigError::Directive(_))
        ));
        assert!(matches!(
            RuleConfig::from_value(json!({ "rule": "compareTo", "fieldName": "a", "comparison": "=>" })),
            Err(ConfigError::Directive(_))
        ));
        assert!(RuleConfig::from_json("{").is_err());
    }

    #[test]
    fn test_serialization_shape() {
        let config = RuleConfig::CompareTo {
            field_name: "password".into(),
            comparison: Comparison::StrictEqual,
            overrides: ErrorOverrides::default(),
        };
        assert_eq!(
            serde_json::to_value(&config).unwrap(),
            json!({ "rule": "compareTo", "fieldName": "password", "comparison": "===" })
        );
    }

    #[test]
    fn test_compare_to_reads_siblings() {
        let rule = RuleConfig::from_json(
            r#"{ "rule": "compareTo", "fieldName": "password", "comparison": "===" }"#,
        )
        .unwrap()
        .build()
        .unwrap();
        let group = FormGroup::new()
            .with_control("password", "a")
            .with_control("confirm", "b");
        let error = rule.validate_control(&group.control("confirm").unwrap()).unwrap_err();
        assert_eq!(error.code, "compareTo");
    }

    #[test]
    fn test_group_config() {
        let rule = GroupRuleConfig::from_json(
            r#"{ "rule": "requiredEither", "first": "email", "second": "phone", "errorName": "contact" }"#,
        )
        .unwrap()
        .build()
        .unwrap();

        let group = FormGroup::new()
            .with_control("email", "")
            .with_control("phone", "");
        assert_eq!(rule.validate(&group).unwrap_err().code, "contact");
        assert!(group.get("email").unwrap().has_error("required"));
    }
}
