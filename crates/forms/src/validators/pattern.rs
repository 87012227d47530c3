//! Pattern-match rules.
//!
//! [`PatternValidator`] is the one predicate behind every pattern rule. The
//! named formats are partial applications of it with a fixed pattern, a fixed
//! polarity and a default error key/message.

use serde_json::Value;

use crate::ConfigError;
use crate::foundation::value;
use crate::patterns::{Format, Matcher, Polarity};
use crate::validators::ErrorSpec;

crate::form_rule! {
    /// Validates a value against a pattern.
    ///
    /// Empty and falsy values (`false`, `0`) are valid. Strings, numbers and
    /// booleans are tested through their textual form; objects and non-empty
    /// arrays cannot be tested and are invalid whatever the polarity.
    ///
    /// # Examples
    ///
    /// ```
    /// use nebula_forms::foundation::Validate;
    /// use nebula_forms::validators::regexp;
    /// use serde_json::json;
    ///
    /// let rule = regexp(r"^[0-9]{3}-[0-9]{4}$").unwrap();
    /// assert!(rule.validate(&json!("123-4567")).is_ok());
    /// assert!(rule.validate(&json!("invalid")).is_err());
    /// assert!(rule.validate(&json!(null)).is_ok());
    /// ```
    pub PatternValidator { matcher: Matcher, polarity: Polarity } for Value;
    rule(self, input) { self.accepts(input) }
    error(self, input) { self.report.error() }
}

impl PatternValidator {
    /// Valid iff the pattern matches. Reports `regexp` by default.
    pub fn matching(matcher: impl Into<Matcher>) -> Self {
        Self {
            matcher: matcher.into(),
            polarity: Polarity::Match,
            report: ErrorSpec::new("regexp", "Value does not match the required pattern"),
        }
    }

    /// Valid iff the pattern does not match. Reports `regexpNot` by default.
    pub fn rejecting(matcher: impl Into<Matcher>) -> Self {
        Self {
            matcher: matcher.into(),
            polarity: Polarity::Reject,
            report: ErrorSpec::new("regexpNot", "Value matches a forbidden pattern"),
        }
    }

    /// Rule for a named format from the pattern library.
    #[must_use]
    pub fn format(format: Format) -> Self {
        Self {
            matcher: format.matcher().clone(),
            polarity: format.polarity(),
            report: ErrorSpec::new(format.name(), format.default_message()),
        }
    }

    fn accepts(&self, input: &Value) -> bool {
        if value::is_falsy(input) {
            return true;
        }
        let Some(text) = value::as_text(input) else {
            return false;
        };
        let matched = self.matcher.is_match(&text);
        match self.polarity {
            Polarity::Match => matched,
            Polarity::Reject => !matched,
        }
    }
}

/// Creates a rule that requires `pattern` to match.
pub fn regexp(pattern: &str) -> Result<PatternValidator, ConfigError> {
    Ok(PatternValidator::matching(pattern.parse::<Matcher>()?))
}

/// Creates a rule that requires `pattern` not to match.
pub fn regexp_not(pattern: &str) -> Result<PatternValidator, ConfigError> {
    Ok(PatternValidator::rejecting(pattern.parse::<Matcher>()?))
}

/// Creates the rule for a named format.
#[must_use]
pub fn named(format: Format) -> PatternValidator {
    PatternValidator::format(format)
}

macro_rules! named_formats {
    ($($(#[$meta:meta])* $factory:ident => $format:ident;)+) => {
        $(
            $(#[$meta])*
            #[must_use]
            pub fn $factory() -> PatternValidator {
                PatternValidator::format(Format::$format)
            }
        )+
    };
}

named_formats! {
    /// Street address: letters, digits, spaces and `, . ' # / -`.
    address => Address;
    /// Latin letters only.
    alphabet_only => AlphabetOnly;
    /// `YYYY-MM-DD`.
    date_yyyy_mm_dd => DateYyyyMmDd;
    /// `MM/DD/YYYY`.
    date_mm_dd_yyyy => DateMmDdYyyy;
    /// `DD/MM/YYYY`.
    date_dd_mm_yyyy => DateDdMmYyyy;
    /// Email address with a dotted domain.
    email => Email;
    /// Dotted-quad IPv4 address.
    ipv4 => Ipv4;
    /// IPv6 address, including `::` shorthand.
    ipv6 => Ipv6;
    /// IPv4 or IPv6 address.
    ip_address => IpAddress;
    /// ASCII digits only.
    numerics_only => NumericsOnly;
    /// Letters, digits and whitespace only.
    no_special_chars => NoSpecialChars;
    /// Six to nine alphanumerics.
    passport => Passport;
    /// Eight or more chars with lowercase, uppercase, digit and symbol.
    password_strength => PasswordStrength;
    /// Phone number with optional country code and separators.
    phone => Phone;
    /// Flags runs of two or more whitespace chars.
    single_space => SingleSpace;
    /// Flags any whitespace.
    space => Space;
    /// Flags leading or trailing whitespace.
    space_restriction => SpaceRestriction;
    /// US social security number, dashes optional.
    ssn => Ssn;
    /// `hh:mm am/pm`.
    time_12h => Time12h;
    /// `HH:MM`, 24-hour clock.
    time_24h => Time24h;
    /// `HH:MM:SS`, 24-hour clock.
    time_24h_seconds => Time24hSeconds;
    /// `http`, `https` or `ftp` URL.
    url => Url;
    /// US zip code, optional `+4`.
    zip_code => ZipCode;
}

// ============================================================================
// TESTS
// ============================================================================
