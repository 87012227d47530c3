//! Group-level requirement rules.
//!
//! These rules validate a whole [`FormGroup`] and, as a side effect, set or
//! clear the `required` key on the sibling controls they govern so the host
//! can show the error next to the right field. Each rule also returns its own
//! error, keyed by its error name.
//!
//! Controls that do not exist in the group read as empty and are skipped
//! when writing error keys.

use std::borrow::Cow;

use crate::control::FormGroup;
use crate::foundation::{Validate, ValidationError};
use crate::validators::ErrorSpec;

// ============================================================================
// SIBLING WRITES
// ============================================================================

fn mark_required(group: &FormGroup, name: &str, rule: &'static str) {
    if let Some(control) = group.get(name) {
        control.set_error(ValidationError::required());
        tracing::debug!(control = name, rule, "set required on sibling");
    }
}

fn clear_required(group: &FormGroup, name: &str, rule: &'static str) {
    if let Some(control) = group.get(name) {
        if control.has_error("required") {
            tracing::debug!(control = name, rule, "cleared required on sibling");
        }
        control.clear_error("required");
    }
}

// ============================================================================
// REQUIRED IF / IF NOT
// ============================================================================

/// Requires `required` whenever `check` has a value.
///
/// # Examples
///
/// ```
/// use nebula_forms::prelude::*;
///
/// let group = FormGroup::new()
///     .with_control("country", "NL")
///     .with_control("postcode", "");
///
/// let rule = required_if("postcode", "country");
/// assert!(rule.validate(&group).is_err());
/// assert!(group.get("postcode").unwrap().has_error("required"));
/// ```
#[derive(Debug, Clone)]
pub struct RequiredIf {
    /// Control that becomes required.
    pub required: Cow<'static, str>,
    /// Control whose value triggers the requirement.
    pub check: Cow<'static, str>,
    report: ErrorSpec,
}

impl RequiredIf {
    /// Creates the rule. Reports `required` by default.
    pub fn new(required: impl Into<Cow<'static, str>>, check: impl Into<Cow<'static, str>>) -> Self {
        Self {
            required: required.into(),
            check: check.into(),
            report: ErrorSpec::new("required", "This field is required"),
        }
    }
}

crate::impl_error_overrides!(RequiredIf);

impl Validate for RequiredIf {
    type Input = FormGroup;

    fn validate(&self, group: &FormGroup) -> Result<(), ValidationError> {
        let triggered = group.has_value(&self.check);
        require_when(group, &self.required, triggered, "requiredIf", &self.report)
    }
}

/// Requires `required` whenever `check` is empty.
#[derive(Debug, Clone)]
pub struct RequiredIfNot {
    /// Control that becomes required.
    pub required: Cow<'static, str>,
    /// Control whose absence triggers the requirement.
    pub check: Cow<'static, str>,
    report: ErrorSpec,
}

impl RequiredIfNot {
    /// Creates the rule. Reports `required` by default.
    pub fn new(required: impl Into<Cow<'static, str>>, check: impl Into<Cow<'static, str>>) -> Self {
        Self {
            required: required.into(),
            check: check.into(),
            report: ErrorSpec::new("required", "This field is required"),
        }
    }
}

crate::impl_error_overrides!(RequiredIfNot);

impl Validate for RequiredIfNot {
    type Input = FormGroup;

    fn validate(&self, group: &FormGroup) -> Result<(), ValidationError> {
        let triggered = !group.has_value(&self.check);
        require_when(group, &self.required, triggered, "requiredIfNot", &self.report)
    }
}

fn require_when(
    group: &FormGroup,
    required: &str,
    triggered: bool,
    rule: &'static str,
    report: &ErrorSpec,
) -> Result<(), ValidationError> {
    if triggered && !group.has_value(required) {
        mark_required(group, required, rule);
        Err(report.error().with_field(required.to_owned()))
    } else {
        clear_required(group, required, rule);
        Ok(())
    }
}

// ============================================================================
// REQUIRED EITHER
// ============================================================================

/// Requires at least one of two controls to hold a value.
#[derive(Debug, Clone)]
pub struct RequiredEither {
    /// First control of the pair.
    pub first: Cow<'static, str>,
    /// Second control of the pair.
    pub second: Cow<'static, str>,
    report: ErrorSpec,
}

impl RequiredEither {
    /// Creates the rule. Reports `required` by default.
    pub fn new(first: impl Into<Cow<'static, str>>, second: impl Into<Cow<'static, str>>) -> Self {
        Self {
            first: first.into(),
            second: second.into(),
            report: ErrorSpec::new("required", "One of these fields is required"),
        }
    }
}

crate::impl_error_overrides!(RequiredEither);

impl Validate for RequiredEither {
    type Input = FormGroup;

    fn validate(&self, group: &FormGroup) -> Result<(), ValidationError> {
        const RULE: &str = "requiredEither";

        if group.has_value(&self.first) || group.has_value(&self.second) {
            clear_required(group, &self.first, RULE);
            clear_required(group, &self.second, RULE);
            Ok(())
        } else {
            mark_required(group, &self.first, RULE);
            mark_required(group, &self.second, RULE);
            Err(self
                .report
                .error()
                .with_param("first", self.first.clone())
                .with_param("second", self.second.clone()))
        }
    }
}

// ============================================================================
// FACTORIES
// ============================================================================

/// Creates a [`RequiredIf`] rule.
pub fn required_if(
    required: impl Into<Cow<'static, str>>,
    check: impl Into<Cow<'static, str>>,
) -> RequiredIf {
    RequiredIf::new(required, check)
}

/// Creates a [`RequiredIfNot`] rule.
pub fn required_if_not(
    required: impl Into<Cow<'static, str>>,
    check: impl Into<Cow<'static, str>>,
) -> RequiredIfNot {
    RequiredIfNot::new(required, check)
}

/// Creates a [`RequiredEither`] rule.
pub fn required_either(
    first: impl Into<Cow<'static, str>>,
    second: impl Into<Cow<'static, str>>,
) -> RequiredEither {
    RequiredEither::new(first, second)
}
