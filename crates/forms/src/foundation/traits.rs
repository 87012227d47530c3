//! Core trait for the validation system

use crate::foundation::ValidationError;

/// The trait every value-level and group-level rule implements.
///
/// Rules are pure: the same input always produces the same result. Group
/// rules that report on sibling controls write to those controls' error bags
/// through `&FormControl`, never through hidden state of their own.
///
/// # Type Parameters
///
/// * `Input` - The type being validated (`serde_json::Value` for control
///   values, `FormGroup` for group rules, `str` for raw text)
///
/// # Examples
///
/// ```
/// use nebula_forms::foundation::{Validate, ValidationError};
/// use serde_json::Value;
///
/// struct NotBlank;
///
/// impl Validate for NotBlank {
///     type Input = Value;
///
///     fn validate(&self, input: &Value) -> Result<(), ValidationError> {
///         match input.as_str() {
///             Some(s) if s.trim().is_empty() => {
///                 Err(ValidationError::new("blank", "Must not be blank"))
///             }
///             _ => Ok(()),
///         }
///     }
/// }
///
/// assert!(NotBlank.validate(&Value::from("  ")).is_err());
/// ```
pub trait Validate {
    /// The type of input being validated.
    type Input: ?Sized;

    /// Validates the input value.
    ///
    /// * `Ok(())` if validation succeeds
    /// * `Err(ValidationError)` with exactly one entry otherwise
    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError>;
}

impl<V: Validate + ?Sized> Validate for Box<V> {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}

impl<V: Validate + ?Sized> Validate for &V {
    type Input = V::Input;

    fn validate(&self, input: &Self::Input) -> Result<(), ValidationError> {
        (**self).validate(input)
    }
}
