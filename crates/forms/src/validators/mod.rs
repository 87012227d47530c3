//! Built-in rules
//!
//! # Categories
//!
//! - **Pattern**: [`regexp`], [`regexp_not`] and the named formats ([`email`],
//!   [`ssn`], [`ip_address`], ...)
//! - **Date**: [`earlier_then`], [`later_then`]
//! - **Cross-field**: [`compare_to`], [`link_to`], [`linked_to`]
//! - **Requirement**: [`required_when`] and the group rules [`required_if`],
//!   [`required_if_not`], [`required_either`]
//! - **Length**: [`length`], [`range`], [`word_count`], [`word_count_range`]
//!
//! Every rule treats "no input" (`null`, `""`, `[]`) as outside its concern
//! unless its whole purpose is requiring input.
//!
//! # Examples
//!
//! ```
//! use nebula_forms::prelude::*;
//! use serde_json::json;
//!
//! let rule = email().with_error_name("workEmail");
//! let error = rule.validate(&json!("nope")).unwrap_err();
//! assert_eq!(error.code, "workEmail");
//! assert!(rule.validate(&json!("")).is_ok());
//! ```

use std::borrow::Cow;

use crate::foundation::ValidationError;

pub mod compare_to;
pub mod date;
pub mod group;
pub mod length;
pub mod link;
pub mod pattern;
pub mod required;

/// Error key and message a rule reports with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ErrorSpec {
    /// Error key.
    pub name: Cow<'static, str>,
    /// Error message.
    pub message: Cow<'static, str>,
}

impl ErrorSpec {
    /// Creates a report from static defaults.
    #[must_use]
    pub const fn new(name: &'static str, message: &'static str) -> Self {
        Self {
            name: Cow::Borrowed(name),
            message: Cow::Borrowed(message),
        }
    }

    /// Builds the error entry for this report.
    #[must_use]
    pub fn error(&self) -> ValidationError {
        ValidationError::new(self.name.clone(), self.message.clone())
    }
}

// ============================================================================
// RE-EXPORTS
// ============================================================================

pub use pattern::{
    PatternValidator, address, alphabet_only, date_dd_mm_yyyy, date_mm_dd_yyyy, date_yyyy_mm_dd,
    email, ip_address, ipv4, ipv6, named, no_special_chars, numerics_only, passport,
    password_strength, phone, regexp, regexp_not, single_space, space, space_restriction, ssn,
    time_12h, time_24h, time_24h_seconds, url, zip_code,
};

pub use date::{EarlierThen, LaterThen, earlier_then, later_then};

pub use compare_to::{CompareTo, compare_to};

pub use link::{LinkTo, LinkedTo, link_to, linked_to};

pub use required::{Condition, RequiredWhen, required_when};

pub use group::{
    RequiredEither, RequiredIf, RequiredIfNot, required_either, required_if, required_if_not,
};

pub use length::{
    Length, Range, WordCount, WordCountRange, length, range, word_count, word_count_range,
};
