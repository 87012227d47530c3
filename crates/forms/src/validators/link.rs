//! Paired-field presence rules.
//!
//! [`LinkTo`] sits on the control that drags a sibling along; [`LinkedTo`]
//! sits on the control that gets dragged.

use std::borrow::Cow;

use crate::adapter::ControlValidator;
use crate::control::Control;
use crate::foundation::{ValidationError, value};
use crate::validators::ErrorSpec;

/// Errors when this control has a value and the named sibling is empty.
#[derive(Debug, Clone)]
pub struct LinkTo {
    /// Sibling that must be filled alongside this control.
    pub field_name: Cow<'static, str>,
    report: ErrorSpec,
}

impl LinkTo {
    /// Creates the rule. Reports `linkTo` by default.
    pub fn new(field_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field_name: field_name.into(),
            report: ErrorSpec::new("linkTo", "A linked field must also be filled"),
        }
    }
}

crate::impl_error_overrides!(LinkTo);

impl ControlValidator for LinkTo {
    fn validate_control(&self, control: &Control<'_>) -> Result<(), ValidationError> {
        if control.has_value() && !sibling_has_value(control, &self.field_name) {
            Err(self.report.error().with_param("field", self.field_name.clone()))
        } else {
            Ok(())
        }
    }
}

/// Errors when the named sibling has a value and this control is empty.
#[derive(Debug, Clone)]
pub struct LinkedTo {
    /// Sibling whose value makes this control required.
    pub field_name: Cow<'static, str>,
    report: ErrorSpec,
}

impl LinkedTo {
    /// Creates the rule. Reports `linkedTo` by default.
    pub fn new(field_name: impl Into<Cow<'static, str>>) -> Self {
        Self {
            field_name: field_name.into(),
            report: ErrorSpec::new("linkedTo", "This field is required by a linked field"),
        }
    }
}

crate::impl_error_overrides!(LinkedTo);

impl ControlValidator for LinkedTo {
    fn validate_control(&self, control: &Control<'_>) -> Result<(), ValidationError> {
        if !control.has_value() && sibling_has_value(control, &self.field_name) {
            Err(self.report.error().with_param("field", self.field_name.clone()))
        } else {
            Ok(())
        }
    }
}

// Missing parent or sibling reads as empty.
fn sibling_has_value(control: &Control<'_>, name: &str) -> bool {
    control.sibling_value(name).is_some_and(value::has_value)
}

/// Creates a [`LinkTo`] rule.
pub fn link_to(field_name: impl Into<Cow<'static, str>>) -> LinkTo {
    LinkTo::new(field_name)
}

/// Creates a [`LinkedTo`] rule.
pub fn linked_to(field_name: impl Into<Cow<'static, str>>) -> LinkedTo {
    LinkedTo::new(field_name)
}
