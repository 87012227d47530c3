//! Host framework adapter.
//!
//! A host form engine calls validators as `(control) -> errors | valid`.
//! [`ControlValidator`] is that calling convention. Value rules get it for
//! free through a blanket impl; rules that read siblings implement it
//! directly. [`validate_control`] is the host-side merge: run every validator
//! attached to a control and key-union the failures.

use std::fmt;

use serde_json::Value;

use crate::control::Control;
use crate::foundation::{Validate, ValidationError, ValidationErrors};

/// The host calling convention for a validator attached to one control.
pub trait ControlValidator: Send + Sync {
    /// Validates the control, reading siblings through its parent if needed.
    fn validate_control(&self, control: &Control<'_>) -> Result<(), ValidationError>;
}

impl<V> ControlValidator for V
where
    V: Validate<Input = Value> + Send + Sync,
{
    fn validate_control(&self, control: &Control<'_>) -> Result<(), ValidationError> {
        self.validate(control.value())
    }
}

// ============================================================================
// FN VALIDATOR
// ============================================================================

/// Adapts a closure to the host calling convention.
///
/// # Examples
///
/// ```
/// use nebula_forms::adapter::{validator_fn, ControlValidator};
/// use nebula_forms::control::Control;
/// use nebula_forms::foundation::ValidationError;
/// use serde_json::json;
///
/// let even = validator_fn(|control: &Control<'_>| {
///     match control.value().as_i64() {
///         Some(n) if n % 2 != 0 => Err(ValidationError::new("even", "Must be even")),
///         _ => Ok(()),
///     }
/// });
///
/// assert!(even.validate_control(&Control::new(&json!(4))).is_ok());
/// assert!(even.validate_control(&Control::new(&json!(3))).is_err());
/// ```
#[derive(Clone)]
pub struct FnValidator<F> {
    func: F,
}

impl<F> FnValidator<F>
where
    F: Fn(&Control<'_>) -> Result<(), ValidationError> + Send + Sync,
{
    /// Wraps `func`.
    pub fn new(func: F) -> Self {
        Self { func }
    }
}

impl<F> ControlValidator for FnValidator<F>
where
    F: Fn(&Control<'_>) -> Result<(), ValidationError> + Send + Sync,
{
    fn validate_control(&self, control: &Control<'_>) -> Result<(), ValidationError> {
        (self.func)(control)
    }
}

impl<F> fmt::Debug for FnValidator<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnValidator")
            .field("func", &"<function>")
            .finish()
    }
}

/// Creates a [`FnValidator`].
pub fn validator_fn<F>(func: F) -> FnValidator<F>
where
    F: Fn(&Control<'_>) -> Result<(), ValidationError> + Send + Sync,
{
    FnValidator::new(func)
}

// ============================================================================
// MERGE
// ============================================================================

/// Runs every validator against `control` and key-unions their failures.
///
/// Later validators win when two of them report the same key. An empty
/// result is valid.
pub fn validate_control(
    control: &Control<'_>,
    validators: &[&dyn ControlValidator],
) -> Result<(), ValidationErrors> {
    validators
        .iter()
        .filter_map(|validator| validator.validate_control(control).err())
        .collect::<ValidationErrors>()
        .into_result()
}
