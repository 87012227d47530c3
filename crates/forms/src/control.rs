//! Minimal control model.
//!
//! The host form engine owns the real control tree; this module provides the
//! two things the rules need from it: a value holder with an error bag
//! ([`FormControl`]) and a named collection of siblings ([`FormGroup`]).
//! Rules receive a borrowed [`Control`] view that pairs a value with its
//! optional parent group.

use std::fmt;

use indexmap::IndexMap;
use parking_lot::RwLock;
use serde_json::Value;

use crate::adapter::{self, ControlValidator};
use crate::foundation::{ValidationError, ValidationErrors, value};

// ============================================================================
// FORM CONTROL
// ============================================================================

/// A value holder with an error bag.
///
/// The error bag sits behind a lock so group rules can set or clear keys on a
/// sibling through a shared reference while the group is being validated.
#[derive(Default)]
pub struct FormControl {
    value: Value,
    errors: RwLock<Option<ValidationErrors>>,
}

impl FormControl {
    /// Creates a control holding `value` with no errors.
    pub fn new(value: impl Into<Value>) -> Self {
        Self {
            value: value.into(),
            errors: RwLock::new(None),
        }
    }

    /// Creates a control with no input.
    #[must_use]
    pub fn empty() -> Self {
        Self::new(Value::Null)
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &Value {
        &self.value
    }

    /// Replaces the current value. Errors are left to the next validation pass.
    pub fn set_value(&mut self, value: impl Into<Value>) {
        self.value = value.into();
    }

    /// Returns true if the control holds input.
    #[must_use]
    pub fn has_value(&self) -> bool {
        value::has_value(&self.value)
    }

    /// Snapshot of the error bag. `None` means valid.
    #[must_use]
    pub fn errors(&self) -> Option<ValidationErrors> {
        self.errors.read().clone()
    }

    /// Returns true if the error bag holds `code`.
    #[must_use]
    pub fn has_error(&self, code: &str) -> bool {
        self.errors
            .read()
            .as_ref()
            .is_some_and(|errors| errors.contains(code))
    }

    /// Replaces the whole error bag. An empty map is stored as `None`.
    pub fn set_errors(&self, errors: Option<ValidationErrors>) {
        *self.errors.write() = errors.filter(ValidationErrors::has_errors);
    }

    /// Adds one entry to the error bag, keeping the others.
    pub fn set_error(&self, error: ValidationError) {
        self.errors
            .write()
            .get_or_insert_with(ValidationErrors::new)
            .add(error);
    }

    /// Removes one entry from the error bag. The bag collapses to `None` once
    /// its last entry is gone.
    pub fn clear_error(&self, code: &str) {
        let mut guard = self.errors.write();
        if let Some(errors) = guard.as_mut() {
            errors.remove(code);
            if errors.is_empty() {
                *guard = None;
            }
        }
    }
}

impl Clone for FormControl {
    fn clone(&self) -> Self {
        Self {
            value: self.value.clone(),
            errors: RwLock::new(self.errors()),
        }
    }
}

impl fmt::Debug for FormControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormControl")
            .field("value", &self.value)
            .field("errors", &*self.errors.read())
            .finish()
    }
}

// ============================================================================
// FORM GROUP
// ============================================================================

/// Named collection of sibling controls, in insertion order.
#[derive(Debug, Clone, Default)]
pub struct FormGroup {
    controls: IndexMap<String, FormControl>,
}

impl FormGroup {
    /// Creates an empty group.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a control holding `value`.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_control(mut self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        self.insert(name, FormControl::new(value));
        self
    }

    /// Inserts or replaces a control.
    pub fn insert(&mut self, name: impl Into<String>, control: FormControl) {
        self.controls.insert(name.into(), control);
    }

    /// Looks up a control by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&FormControl> {
        self.controls.get(name)
    }

    /// Looks up a control by name for mutation.
    pub fn get_mut(&mut self, name: &str) -> Option<&mut FormControl> {
        self.controls.get_mut(name)
    }

    /// Value of a control, if the control exists.
    #[must_use]
    pub fn value_of(&self, name: &str) -> Option<&Value> {
        self.get(name).map(FormControl::value)
    }

    /// Returns true if the named control exists and holds input.
    #[must_use]
    pub fn has_value(&self, name: &str) -> bool {
        self.get(name).is_some_and(FormControl::has_value)
    }

    /// Borrowed view of a control with this group as its parent.
    #[must_use]
    pub fn control(&self, name: &str) -> Option<Control<'_>> {
        self.get(name)
            .map(|control| Control::new(control.value()).with_parent(self))
    }

    /// Control names in insertion order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.controls.keys().map(String::as_str)
    }

    /// Runs `validators` against the named control, merges their failures
    /// and stores the result in the control's error bag.
    ///
    /// Returns `None` when the control does not exist.
    pub fn run_validators(
        &self,
        name: &str,
        validators: &[&dyn ControlValidator],
    ) -> Option<Result<(), ValidationErrors>> {
        let view = self.control(name)?;
        let result = adapter::validate_control(&view, validators);
        if let Some(control) = self.get(name) {
            control.set_errors(result.clone().err());
        }
        Some(result)
    }
}

// ============================================================================
// CONTROL VIEW
// ============================================================================

/// What a rule sees of a control: its value and, optionally, its parent.
#[derive(Debug, Clone, Copy)]
pub struct Control<'a> {
    value: &'a Value,
    parent: Option<&'a FormGroup>,
}

impl<'a> Control<'a> {
    /// A standalone control without a parent.
    #[must_use]
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            parent: None,
        }
    }

    /// Attaches the parent group used for sibling lookups.
    #[must_use]
    pub fn with_parent(mut self, parent: &'a FormGroup) -> Self {
        self.parent = Some(parent);
        self
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> &'a Value {
        self.value
    }

    /// Parent group, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&'a FormGroup> {
        self.parent
    }

    /// Returns true if this control holds input.
    #[must_use]
    pub fn has_value(&self) -> bool {
        value::has_value(self.value)
    }

    /// Value of a sibling reached through the parent.
    #[must_use]
    pub fn sibling_value(&self, name: &str) -> Option<&'a Value> {
        self.parent?.value_of(name)
    }
}

impl<'a> From<&'a Value> for Control<'a> {
    fn from(value: &'a Value) -> Self {
        Self::new(value)
    }
}
