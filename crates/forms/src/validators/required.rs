//! Conditional requirement on a single control.

use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::foundation::value;
use crate::validators::ErrorSpec;

/// Decides whether a [`RequiredWhen`] rule applies.
///
/// A predicate is evaluated on every validation call; its result is never
/// cached.
#[derive(Clone)]
pub enum Condition {
    /// Fixed at configuration time.
    Flag(bool),
    /// Evaluated on each call.
    Predicate(Arc<dyn Fn() -> bool + Send + Sync>),
}

impl Condition {
    /// Wraps a closure.
    pub fn predicate<F>(f: F) -> Self
    where
        F: Fn() -> bool + Send + Sync + 'static,
    {
        Condition::Predicate(Arc::new(f))
    }

    /// Current truth value.
    #[must_use]
    pub fn evaluate(&self) -> bool {
        match self {
            Condition::Flag(flag) => *flag,
            Condition::Predicate(f) => f(),
        }
    }
}

impl From<bool> for Condition {
    fn from(flag: bool) -> Self {
        Condition::Flag(flag)
    }
}

impl fmt::Debug for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Condition::Flag(flag) => f.debug_tuple("Flag").field(flag).finish(),
            Condition::Predicate(_) => f.debug_tuple("Predicate").field(&"<function>").finish(),
        }
    }
}

crate::form_rule! {
    /// Requires a value while `condition` holds.
    ///
    /// # Examples
    ///
    /// ```
    /// use std::sync::Arc;
    /// use std::sync::atomic::{AtomicBool, Ordering};
    ///
    /// use nebula_forms::foundation::Validate;
    /// use nebula_forms::validators::{required_when, Condition};
    /// use serde_json::json;
    ///
    /// let switch = Arc::new(AtomicBool::new(false));
    /// let flag = Arc::clone(&switch);
    /// let rule = required_when(Condition::predicate(move || flag.load(Ordering::SeqCst)));
    ///
    /// assert!(rule.validate(&json!("")).is_ok());
    /// switch.store(true, Ordering::SeqCst);
    /// assert!(rule.validate(&json!("")).is_err());
    /// ```
    pub RequiredWhen { condition: Condition } for Value;
    rule(self, input) { value::has_value(input) || !self.condition.evaluate() }
    error(self, input) { self.report.error() }
}

impl RequiredWhen {
    /// Creates the rule. Reports `required` by default.
    pub fn new(condition: impl Into<Condition>) -> Self {
        Self {
            condition: condition.into(),
            report: ErrorSpec::new("required", "This field is required"),
        }
    }
}

/// Creates a [`RequiredWhen`] rule.
pub fn required_when(condition: impl Into<Condition>) -> RequiredWhen {
    RequiredWhen::new(condition)
}
