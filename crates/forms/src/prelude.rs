//! Prelude module for convenient imports.
//!
//! `use nebula_forms::prelude::*;` brings in the traits, the control model,
//! every built-in rule and the declarative configs.
//!
//! # Examples
//!
//! ```
//! use nebula_forms::prelude::*;
//!
//! let group = FormGroup::new()
//!     .with_control("email", "")
//!     .with_control("phone", "");
//! assert!(required_either("email", "phone").validate(&group).is_err());
//! ```

// ============================================================================
// FOUNDATION
// ============================================================================

pub use crate::ConfigError;
pub use crate::foundation::{Validate, ValidationError, ValidationErrors};

// ============================================================================
// CONTROL MODEL AND ADAPTER
// ============================================================================

pub use crate::adapter::{ControlValidator, FnValidator, validate_control, validator_fn};
pub use crate::control::{Control, FormControl, FormGroup};

// ============================================================================
// RULES
// ============================================================================

pub use crate::compare::Comparison;
pub use crate::patterns::Format;
#[allow(clippy::wildcard_imports)]
pub use crate::validators::*;

// ============================================================================
// DECLARATIVE CONFIG
// ============================================================================

pub use crate::directive::{GroupRuleConfig, RuleConfig};
