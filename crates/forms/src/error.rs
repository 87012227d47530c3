//! Configuration errors.
//!
//! These are raised while *building* a rule (bad regex, unknown operator,
//! inverted range, unparsable reference date, malformed directive config).
//! Validation itself never fails this way: a built rule always answers with
//! valid or invalid.

/// Error raised when a rule cannot be constructed from its configuration.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum ConfigError {
    /// The pattern source does not compile.
    #[error("invalid pattern: {0}")]
    InvalidPattern(#[from] regex::Error),

    /// The comparison operator is not one of `<`, `>`, `==`, `===`, `<=`, `>=`.
    #[error("unknown comparison operator '{0}'")]
    UnknownComparison(String),

    /// No named pattern with this name exists.
    #[error("unknown pattern format '{0}'")]
    UnknownFormat(String),

    /// A range whose start lies after its end.
    #[error("invalid range: start {start} is greater than end {end}")]
    InvalidRange {
        /// Lower bound as given.
        start: usize,
        /// Upper bound as given.
        end: usize,
    },

    /// The reference date cannot be parsed.
    #[error("invalid reference date '{0}'")]
    InvalidDate(String),

    /// The directive configuration is not valid JSON for any known rule.
    #[error("invalid directive config: {0}")]
    Directive(#[from] serde_json::Error),
}
