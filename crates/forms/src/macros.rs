//! Macros for declaring rules with minimal boilerplate.
//!
//! - [`form_rule!`]: struct + `Validate` impl + error-override builders
//! - [`impl_error_overrides!`]: only the error-override builders, for rules
//!   whose `Validate`/`ControlValidator` impl is written by hand
//!
//! # Examples
//!
//! ```rust,ignore
//! form_rule! {
//!     /// Validates that the value is not the literal "n/a".
//!     pub NotNa {} for serde_json::Value;
//!     rule(self, input) { input.as_str() != Some("n/a") }
//!     error(self, input) { self.report.error() }
//! }
//!
//! impl NotNa {
//!     pub fn new() -> Self {
//!         Self { report: ErrorSpec::new("notNa", "n/a is not an answer") }
//!     }
//! }
//! ```

// ============================================================================
// ERROR OVERRIDES
// ============================================================================

/// Adds `with_error_name`, `with_error`, `with_overrides` and `error_name` to
/// a rule struct holding a `report: ErrorSpec` field.
#[macro_export]
macro_rules! impl_error_overrides {
    ($name:ident) => {
        impl $name {
            /// Overrides the error key this rule reports under.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_error_name(
                mut self,
                name: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> Self {
                self.report.name = name.into();
                self
            }

            /// Overrides the error message.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_error(
                mut self,
                message: impl Into<::std::borrow::Cow<'static, str>>,
            ) -> Self {
                self.report.message = message.into();
                self
            }

            /// Applies optional overrides; `None` keeps the rule's default.
            #[must_use = "builder methods must be chained or built"]
            pub fn with_overrides(self, name: Option<String>, message: Option<String>) -> Self {
                let rule = match name {
                    Some(name) => self.with_error_name(name),
                    None => self,
                };
                match message {
                    Some(message) => rule.with_error(message),
                    None => rule,
                }
            }

            /// Error key this rule reports under.
            #[must_use]
            pub fn error_name(&self) -> &str {
                &self.report.name
            }
        }
    };
}

// ============================================================================
// RULE MACRO
// ============================================================================

/// Declares a value rule: struct definition (public parameter fields plus a
/// private `report: ErrorSpec`), `Validate` implementation and the error
/// override builders. Constructors are written by hand because every rule has
/// its own default error key and message.
///
/// `#[derive(Debug, Clone)]` is always applied.
#[macro_export]
macro_rules! form_rule {
    (
        $(#[$meta:meta])*
        $vis:vis $name:ident { $($field:ident: $fty:ty),* $(,)? } for $input:ty;
        rule($self_:ident, $inp:ident) $rule:block
        error($self2:ident, $einp:ident) $err:block
    ) => {
        $(#[$meta])*
        #[derive(Debug, Clone)]
        $vis struct $name {
            $(pub $field: $fty,)*
            report: $crate::validators::ErrorSpec,
        }

        $crate::impl_error_overrides!($name);

        impl $crate::foundation::Validate for $name {
            type Input = $input;

            #[allow(unused_variables)]
            fn validate(&$self_, $inp: &Self::Input) -> Result<(), $crate::foundation::ValidationError> {
                if $rule {
                    Ok(())
                } else {
                    let $einp = $inp;
                    Err($err)
                }
            }
        }
    };
}
