//! Error types for validation failures
//!
//! A single failing rule produces one [`ValidationError`]: an error key
//! (`code`) and a payload (`message` plus optional `params`). The host merges
//! the failures of every rule attached to a control into a
//! [`ValidationErrors`] map keyed by code.
//!
//! All string fields use `Cow<'static, str>` so the default keys and messages
//! of the built-in rules never allocate.

use std::borrow::Cow;
use std::fmt;

use indexmap::IndexMap;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

// ============================================================================
// VALIDATION ERROR
// ============================================================================

/// One entry of an error map.
///
/// # Examples
///
/// ```
/// use nebula_forms::foundation::ValidationError;
///
/// let error = ValidationError::new("range", "Length must be between 8 and 14")
///     .with_param("start", "8")
///     .with_param("end", "14");
///
/// assert_eq!(error.code, "range");
/// assert_eq!(error.param("end"), Some("14"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Error key the host UI keys its messages off.
    ///
    /// Examples: "email", "required", "compareTo"
    pub code: Cow<'static, str>,

    /// Human-readable message.
    pub message: Cow<'static, str>,

    /// Control name, set by group rules that report on a specific control.
    pub field: Option<Cow<'static, str>>,

    /// Structured payload, stored as ordered key-value pairs.
    pub params: Vec<(Cow<'static, str>, Cow<'static, str>)>,
}

impl ValidationError {
    /// Creates a new validation error with a code and message.
    pub fn new(code: impl Into<Cow<'static, str>>, message: impl Into<Cow<'static, str>>) -> Self {
        Self {
            code: code.into(),
            message: message.into(),
            field: None,
            params: Vec::new(),
        }
    }

    /// Sets the control name this error refers to.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_field(mut self, field: impl Into<Cow<'static, str>>) -> Self {
        self.field = Some(field.into());
        self
    }

    /// Adds a parameter to the payload.
    #[must_use = "builder methods must be chained or built"]
    pub fn with_param(
        mut self,
        key: impl Into<Cow<'static, str>>,
        value: impl Into<Cow<'static, str>>,
    ) -> Self {
        self.params.push((key.into(), value.into()));
        self
    }

    /// Looks up a parameter value by key.
    #[must_use]
    pub fn param(&self, key: &str) -> Option<&str> {
        self.params
            .iter()
            .find(|(k, _)| k.as_ref() == key)
            .map(|(_, v)| v.as_ref())
    }

    /// Returns the payload the host shows for this error.
    ///
    /// A bare message becomes a JSON string; an error with params becomes an
    /// object holding `message` and every param.
    #[must_use]
    pub fn payload(&self) -> Value {
        if self.params.is_empty() && self.field.is_none() {
            return Value::String(self.message.to_string());
        }

        let mut object = Map::new();
        object.insert("message".into(), Value::String(self.message.to_string()));
        if let Some(field) = &self.field {
            object.insert("field".into(), Value::String(field.to_string()));
        }
        for (k, v) in &self.params {
            object.insert(k.to_string(), Value::String(v.to_string()));
        }
        Value::Object(object)
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(field) = &self.field {
            write!(f, "[{}] {}: {}", field, self.code, self.message)?;
        } else {
            write!(f, "{}: {}", self.code, self.message)?;
        }

        if !self.params.is_empty() {
            write!(f, " (params: [")?;
            for (i, (k, v)) in self.params.iter().enumerate() {
                if i > 0 {
                    write!(f, ", ")?;
                }
                write!(f, "{k}={v}")?;
            }
            write!(f, "])")?;
        }

        Ok(())
    }
}

impl std::error::Error for ValidationError {}

// ============================================================================
// CONVENIENCE CONSTRUCTORS
// ============================================================================

impl ValidationError {
    /// Creates the standard "required" error.
    pub fn required() -> Self {
        Self::new("required", "This field is required")
    }

    /// Creates a "required" error pointing at a named control.
    pub fn required_field(field: impl Into<Cow<'static, str>>) -> Self {
        Self::required().with_field(field)
    }
}

// ============================================================================
// ERROR MAP
// ============================================================================

/// Error map of a control: error key → error entry.
///
/// Keys are unique and kept in insertion order. Inserting an existing key
/// replaces its entry, which is the key-union the host applies when merging
/// results of several rules.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationErrors {
    errors: IndexMap<Cow<'static, str>, ValidationError>,
}

impl ValidationErrors {
    /// Creates a new empty error map.
    #[must_use]
    pub fn new() -> Self {
        Self {
            errors: IndexMap::new(),
        }
    }

    /// Adds an error under its code, replacing any previous entry.
    pub fn add(&mut self, error: ValidationError) {
        self.errors.insert(error.code.clone(), error);
    }

    /// Key-union with another map. Entries of `other` win on conflicts.
    pub fn merge(&mut self, other: ValidationErrors) {
        self.errors.extend(other.errors);
    }

    /// Removes an entry by key and returns it.
    pub fn remove(&mut self, code: &str) -> Option<ValidationError> {
        self.errors.shift_remove(code)
    }

    /// Returns the entry stored under `code`.
    #[must_use]
    pub fn get(&self, code: &str) -> Option<&ValidationError> {
        self.errors.get(code)
    }

    /// Returns true if an entry exists under `code`.
    #[must_use]
    pub fn contains(&self, code: &str) -> bool {
        self.errors.contains_key(code)
    }

    /// Returns true if there are any errors.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    /// Returns the number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.errors.len()
    }

    /// Returns true if empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    /// Iterates over the error keys in insertion order.
    pub fn codes(&self) -> impl Iterator<Item = &str> {
        self.errors.keys().map(AsRef::as_ref)
    }

    /// Iterates over the entries in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &ValidationError> {
        self.errors.values()
    }

    /// Renders the map in the host's shape: `{ key: payload }`.
    #[must_use]
    pub fn to_json(&self) -> Value {
        Value::Object(
            self.errors
                .iter()
                .map(|(k, e)| (k.to_string(), e.payload()))
                .collect(),
        )
    }

    /// Converts to a Result: an empty map is valid.
    #[must_use = "result must be used"]
    pub fn into_result(self) -> Result<(), ValidationErrors> {
        if self.is_empty() { Ok(()) } else { Err(self) }
    }
}

impl From<ValidationError> for ValidationErrors {
    fn from(error: ValidationError) -> Self {
        let mut errors = Self::new();
        errors.add(error);
        errors
    }
}

impl FromIterator<ValidationError> for ValidationErrors {
    fn from_iter<I: IntoIterator<Item = ValidationError>>(iter: I) -> Self {
        let mut errors = Self::new();
        for error in iter {
            errors.add(error);
        }
        errors
    }
}

impl Serialize for ValidationErrors {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.errors.len()))?;
        for (k, e) in &self.errors {
            map.serialize_entry(k.as_ref(), &e.payload())?;
        }
        map.end()
    }
}

impl fmt::Display for ValidationErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Validation failed with {} error(s):", self.errors.len())?;
        for (i, error) in self.errors.values().enumerate() {
            writeln!(f, "  {}. {}", i + 1, error)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationErrors {}

// ============================================================================
// TESTS
// ============================================================================
