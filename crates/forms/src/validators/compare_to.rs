//! Cross-field comparison.

use std::borrow::Cow;

use crate::adapter::ControlValidator;
use crate::compare::{Comparison, prepare_to_compare};
use crate::control::Control;
use crate::foundation::{ValidationError, value};
use crate::validators::ErrorSpec;

/// Compares this control's value with a sibling's.
///
/// The rule is inapplicable, and so valid, when the control has no parent,
/// the sibling does not exist, or the sibling is empty. This control's own
/// value is compared even when empty. Dates on either side are compared as
/// instants.
///
/// # Examples
///
/// ```
/// use nebula_forms::prelude::*;
///
/// let group = FormGroup::new()
///     .with_control("password", "s3cret")
///     .with_control("confirm", "s3cret");
///
/// let rule = compare_to("password", Comparison::StrictEqual);
/// let confirm = group.control("confirm").unwrap();
/// assert!(rule.validate_control(&confirm).is_ok());
/// ```
#[derive(Debug, Clone)]
pub struct CompareTo {
    /// Sibling to compare against.
    pub field_name: Cow<'static, str>,
    /// Operator applied as `this <op> sibling`.
    pub comparison: Comparison,
    report: ErrorSpec,
}

impl CompareTo {
    /// Creates the rule. Reports `compareTo` by default.
    pub fn new(field_name: impl Into<Cow<'static, str>>, comparison: Comparison) -> Self {
        Self {
            field_name: field_name.into(),
            comparison,
            report: ErrorSpec::new("compareTo", "Value does not satisfy the comparison"),
        }
    }
}

crate::impl_error_overrides!(CompareTo);

impl ControlValidator for CompareTo {
    fn validate_control(&self, control: &Control<'_>) -> Result<(), ValidationError> {
        let Some(other) = control.sibling_value(&self.field_name) else {
            return Ok(());
        };
        if value::is_empty(other) {
            return Ok(());
        }

        let left = prepare_to_compare(control.value());
        let right = prepare_to_compare(other);
        if self.comparison.compare(&left, &right) {
            Ok(())
        } else {
            Err(self
                .report
                .error()
                .with_param("field", self.field_name.clone())
                .with_param("comparison", self.comparison.symbol()))
        }
    }
}

/// Creates a [`CompareTo`] rule.
pub fn compare_to(field_name: impl Into<Cow<'static, str>>, comparison: Comparison) -> CompareTo {
    CompareTo::new(field_name, comparison)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::control::FormGroup;
    use serde_json::json;

    fn check(group: &FormGroup, rule: &CompareTo) -> Result<(), ValidationError> {
        let view = group.control("value").unwrap();
        rule.validate_control(&view)
    }

    #[test]
    fn test_strict_equal() {
        let rule = compare_to("other", Comparison::StrictEqual);

        let equal = FormGroup::new()
            .with_control("value", "abc")
            .with_control("other", "abc");
        assert!(check(&equal, &rule).is_ok());

        let unequal = FormGroup::new()
            .with_control("value", "abc")
            .with_control("other", "abd");
        let error = check(&unequal, &rule).unwrap_err();
        assert_eq!(error.code, "compareTo");
        assert_eq!(error.param("field"), Some("other"));
        assert_eq!(error.param("comparison"), Some("==="));
    }

    #[test]
    fn test_inapplicable_cases_are_valid() {
        let rule = compare_to("other", Comparison::StrictEqual);

        let empty_sibling = FormGroup::new()
            .with_control("value", "abc")
            .with_control("other", "");
        assert!(check(&empty_sibling, &rule).is_ok());

        let missing_sibling = FormGroup::new().with_control("value", "abc");
        assert!(check(&missing_sibling, &rule).is_ok());

        let orphan = json!("abc");
        assert!(rule.validate_control(&Control::new(&orphan)).is_ok());
    }

    #[test]
    fn test_empty_self_is_still_compared() {
        let rule = compare_to("other", Comparison::StrictEqual);
        let group = FormGroup::new()
            .with_control("value", json!(null))
            .with_control("other", "abc");
        assert!(check(&group, &rule).is_err());
    }

    #[test]
    fn test_loose_equal_coerces_numbers() {
        let group = FormGroup::new()
            .with_control("value", "5")
            .with_control("other", 5);
        assert!(check(&group, &compare_to("other", Comparison::Equal)).is_ok());
        assert!(check(&group, &compare_to("other", Comparison::StrictEqual)).is_err());
    }

    #[test]
    fn test_dates_compare_as_instants() {
        let group = FormGroup::new()
            .with_control("value", "2024-03-01")
            .with_control("other", "02/01/2024");
        assert!(check(&group, &compare_to("other", Comparison::Greater)).is_ok());
        assert!(check(&group, &compare_to("other", Comparison::LessOrEqual)).is_err());
    }

    #[test]
    fn test_numeric_thresholds() {
        let group = FormGroup::new()
            .with_control("value", 10)
            .with_control("other", 9);
        assert!(check(&group, &compare_to("other", Comparison::GreaterOrEqual)).is_ok());
        assert!(check(&group, &compare_to("other", Comparison::Less)).is_err());
    }
}
