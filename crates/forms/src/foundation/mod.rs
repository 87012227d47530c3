//! Core validation types and traits
//!
//! - **Trait**: [`Validate`]
//! - **Errors**: [`ValidationError`] (one entry), [`ValidationErrors`] (the error map)
//! - **Values**: emptiness and measurement helpers in [`value`]
//!
//! Every rule has exactly two outcomes: `Ok(())` means valid, `Err` carries at
//! least one entry. There is no third "indeterminate" state; values that
//! cannot be interpreted resolve to one of the two according to each rule's
//! contract.

pub mod error;
pub mod traits;
pub mod value;

pub use error::{ValidationError, ValidationErrors};
pub use traits::Validate;

// ============================================================================
// UTILITIES
// ============================================================================

/// Runs several validators against one input and key-unions their failures.
///
/// # Examples
///
/// ```
/// use nebula_forms::foundation::{Validate, validate_with_all};
/// use nebula_forms::validators::{email, length};
/// use nebula_forms::compare::Comparison;
/// use serde_json::{json, Value};
///
/// let rules: [&dyn Validate<Input = Value>; 2] =
///     [&email(), &length(20, Comparison::LessOrEqual)];
/// let errors = validate_with_all(&json!("definitely-not-an-email-address"), &rules).unwrap_err();
/// assert!(errors.contains("email"));
/// assert!(errors.contains("length"));
/// ```
pub fn validate_with_all<V>(value: &V::Input, validators: &[&V]) -> Result<(), ValidationErrors>
where
    V: Validate + ?Sized,
{
    validators
        .iter()
        .filter_map(|validator| validator.validate(value).err())
        .collect::<ValidationErrors>()
        .into_result()
}

// ============================================================================
// TYPE ALIASES
// ============================================================================

/// Outcome of a single rule.
pub type ValidationResult<T> = Result<T, ValidationError>;

/// Outcome of several rules merged into an error map.
pub type ValidationResultMulti<T> = Result<T, ValidationErrors>;
