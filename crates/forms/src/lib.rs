//! # nebula-forms
//!
//! Form-validation predicates for a host form engine: pattern checks, date
//! ordering, cross-field comparison, conditional requirements and
//! length/word-count limits.
//!
//! ## Quick Start
//!
//! ```
//! use nebula_forms::prelude::*;
//! use serde_json::json;
//!
//! let value = json!("someone@example");
//! let control = Control::new(&value);
//!
//! let email = email();
//! let short = length(20, Comparison::LessOrEqual);
//! let errors = validate_control(&control, &[&email, &short]).unwrap_err();
//!
//! assert_eq!(errors.to_json(), json!({ "email": "Please enter a valid email address" }));
//! ```
//!
//! ## Calling Convention
//!
//! Every rule answers `Ok(())` or one [`ValidationError`](foundation::ValidationError).
//! Value rules implement [`Validate`](foundation::Validate) over a
//! `serde_json::Value`; rules that read siblings implement
//! [`ControlValidator`](adapter::ControlValidator) and look them up through
//! the control's parent [`FormGroup`](control::FormGroup). The host runs a
//! list of rules and key-unions the failures with
//! [`validate_control`](adapter::validate_control).
//!
//! ## Built-in Rules
//!
//! - **Pattern**: [`regexp`](validators::regexp), [`email`](validators::email),
//!   [`ssn`](validators::ssn) and the rest of [`Format`](patterns::Format)
//! - **Date**: [`earlier_then`](validators::earlier_then),
//!   [`later_then`](validators::later_then)
//! - **Cross-field**: [`compare_to`](validators::compare_to),
//!   [`link_to`](validators::link_to), [`linked_to`](validators::linked_to)
//! - **Requirement**: [`required_when`](validators::required_when),
//!   [`required_if`](validators::required_if),
//!   [`required_either`](validators::required_either)
//! - **Length**: [`length`](validators::length), [`range`](validators::range),
//!   [`word_count`](validators::word_count)
//!
//! Rules can also be declared as data and built with
//! [`RuleConfig`](directive::RuleConfig).

pub mod adapter;
pub mod compare;
pub mod control;
pub mod directive;
mod error;
pub mod foundation;
mod macros;
pub mod patterns;
pub mod prelude;
pub mod validators;

pub use error::ConfigError;
