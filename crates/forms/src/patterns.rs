//! Named pattern library.
//!
//! Every pattern is compiled once, on first use, and never mutated. Digit
//! classes are spelled `[0-9]` because `\d` in the `regex` crate matches all
//! Unicode decimal digits.
//!
//! Password strength needs several independent checks (one lowercase, one
//! uppercase, one digit, one symbol, at least eight chars). The `regex` crate
//! has no look-ahead, so it is expressed as a [`RegexSet`] that must match in
//! full.

use std::fmt;
use std::str::FromStr;
use std::sync::LazyLock;

use regex::{Regex, RegexSet};
use serde::{Deserialize, Serialize};

use crate::ConfigError;

// ============================================================================
// MATCHER
// ============================================================================

/// A compiled pattern: one regex, or a set of regexes that must all match.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A single regular expression.
    Regex(Regex),
    /// Every regex in the set must match.
    AllOf(RegexSet),
}

impl Matcher {
    /// Returns true if `text` satisfies the pattern.
    #[must_use]
    pub fn is_match(&self, text: &str) -> bool {
        match self {
            Matcher::Regex(regex) => regex.is_match(text),
            Matcher::AllOf(set) => set.matches(text).matched_all(),
        }
    }

    /// Source text of the pattern, for error payloads.
    #[must_use]
    pub fn source(&self) -> String {
        match self {
            Matcher::Regex(regex) => regex.as_str().to_owned(),
            Matcher::AllOf(set) => set.patterns().join(" && "),
        }
    }
}

impl From<Regex> for Matcher {
    fn from(regex: Regex) -> Self {
        Matcher::Regex(regex)
    }
}

impl FromStr for Matcher {
    type Err = ConfigError;

    fn from_str(pattern: &str) -> Result<Self, Self::Err> {
        Ok(Matcher::Regex(Regex::new(pattern)?))
    }
}

// ============================================================================
// PATTERN SOURCES
// ============================================================================

const IPV4_BODY: &str = r"(?:(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])\.){3}(?:25[0-5]|2[0-4][0-9]|1[0-9][0-9]|[1-9]?[0-9])";

const IPV6_BODY: &str = concat!(
    r"(?:",
    r"(?:[0-9a-fA-F]{1,4}:){7}[0-9a-fA-F]{1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,7}:",
    r"|(?:[0-9a-fA-F]{1,4}:){1,6}:[0-9a-fA-F]{1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,5}(?::[0-9a-fA-F]{1,4}){1,2}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,4}(?::[0-9a-fA-F]{1,4}){1,3}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,3}(?::[0-9a-fA-F]{1,4}){1,4}",
    r"|(?:[0-9a-fA-F]{1,4}:){1,2}(?::[0-9a-fA-F]{1,4}){1,5}",
    r"|[0-9a-fA-F]{1,4}:(?::[0-9a-fA-F]{1,4}){1,6}",
    r"|:(?:(?::[0-9a-fA-F]{1,4}){1,7}|:)",
    r")"
);

// Sources are literals in this module; the unit tests compile every one.
fn compile(pattern: &str) -> Matcher {
    Matcher::Regex(Regex::new(pattern).unwrap())
}

static ADDRESS: LazyLock<Matcher> = LazyLock::new(|| compile(r"^[a-zA-Z0-9\s,.'#/-]+$"));

static ALPHABET_ONLY: LazyLock<Matcher> = LazyLock::new(|| compile(r"^[a-zA-Z]+$"));

static DATE_YYYY_MM_DD: LazyLock<Matcher> = LazyLock::new(|| {
    compile(r"^[0-9]{4}-(?:0[1-9]|1[0-2])-(?:0[1-9]|[12][0-9]|3[01])$")
});

static DATE_MM_DD_YYYY: LazyLock<Matcher> = LazyLock::new(|| {
    compile(r"^(?:0[1-9]|1[0-2])/(?:0[1-9]|[12][0-9]|3[01])/[0-9]{4}$")
});

static DATE_DD_MM_YYYY: LazyLock<Matcher> = LazyLock::new(|| {
    compile(r"^(?:0[1-9]|[12][0-9]|3[01])/(?:0[1-9]|1[0-2])/[0-9]{4}$")
});

static EMAIL: LazyLock<Matcher> = LazyLock::new(|| {
    compile(
        r"^[a-zA-Z0-9.!#$%&'*+/=?^_`{|}~-]+@[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?(?:\.[a-zA-Z0-9](?:[a-zA-Z0-9-]{0,61}[a-zA-Z0-9])?)+$",
    )
});

static IPV4: LazyLock<Matcher> = LazyLock::new(|| compile(&format!("^{IPV4_BODY}$")));

static IPV6: LazyLock<Matcher> = LazyLock::new(|| compile(&format!("^{IPV6_BODY}$")));

static IP_ADDRESS: LazyLock<Matcher> =
    LazyLock::new(|| compile(&format!("^(?:{IPV4_BODY}|{IPV6_BODY})$")));

static NUMERICS_ONLY: LazyLock<Matcher> = LazyLock::new(|| compile(r"^[0-9]+$"));

static NO_SPECIAL_CHARS: LazyLock<Matcher> = LazyLock::new(|| compile(r"^[a-zA-Z0-9\s]+$"));

static PASSPORT: LazyLock<Matcher> = LazyLock::new(|| compile(r"^[a-zA-Z0-9]{6,9}$"));

static PASSWORD_STRENGTH: LazyLock<Matcher> = LazyLock::new(|| {
    Matcher::AllOf(
        RegexSet::new([r"[a-z]", r"[A-Z]", r"[0-9]", r"[^a-zA-Z0-9]", r"^.{8,}$"]).unwrap(),
    )
});

static PHONE: LazyLock<Matcher> = LazyLock::new(|| {
    compile(r"^(?:\+?[0-9]{1,3}[-. ]?)?\(?[0-9]{3}\)?[-. ]?[0-9]{3}[-. ]?[0-9]{4}$")
});

static DOUBLE_SPACE: LazyLock<Matcher> = LazyLock::new(|| compile(r"\s{2,}"));

static WHITESPACE: LazyLock<Matcher> = LazyLock::new(|| compile(r"\s"));

static EDGE_WHITESPACE: LazyLock<Matcher> = LazyLock::new(|| compile(r"^\s|\s$"));

static SSN: LazyLock<Matcher> = LazyLock::new(|| compile(r"^[0-9]{3}-?[0-9]{2}-?[0-9]{4}$"));

static TIME_12H: LazyLock<Matcher> =
    LazyLock::new(|| compile(r"^(?:0?[1-9]|1[0-2]):[0-5][0-9]\s?(?i:[ap]m)$"));

static TIME_24H: LazyLock<Matcher> =
    LazyLock::new(|| compile(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]$"));

static TIME_24H_SECONDS: LazyLock<Matcher> =
    LazyLock::new(|| compile(r"^(?:[01][0-9]|2[0-3]):[0-5][0-9]:[0-5][0-9]$"));

static URL: LazyLock<Matcher> =
    LazyLock::new(|| compile(r"^(?:https?|ftp)://[^\s/$.?#][^\s]*$"));

static ZIP_CODE: LazyLock<Matcher> = LazyLock::new(|| compile(r"^[0-9]{5}(?:-[0-9]{4})?$"));

// ============================================================================
// FORMAT TABLE
// ============================================================================

/// Whether a value is valid when the pattern matches or when it does not.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Valid iff the pattern matches.
    Match,
    /// Valid iff the pattern does not match.
    Reject,
}

/// Every named format in the library.
///
/// Serializes as its [`name`](Format::name).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "&'static str")]
pub enum Format {
    /// Street address: letters, digits, spaces and `, . ' # / -`.
    Address,
    /// Latin letters only.
    AlphabetOnly,
    /// `YYYY-MM-DD`.
    DateYyyyMmDd,
    /// `MM/DD/YYYY`.
    DateMmDdYyyy,
    /// `DD/MM/YYYY`.
    DateDdMmYyyy,
    /// Email address with a dotted domain.
    Email,
    /// Dotted-quad IPv4 address.
    Ipv4,
    /// IPv6 address, including `::` shorthand.
    Ipv6,
    /// IPv4 or IPv6 address.
    IpAddress,
    /// ASCII digits only.
    NumericsOnly,
    /// Letters, digits and whitespace only.
    NoSpecialChars,
    /// Six to nine alphanumerics.
    Passport,
    /// Eight or more chars with lowercase, uppercase, digit and symbol.
    PasswordStrength,
    /// Phone number with optional country code and separators.
    Phone,
    /// Rejects runs of two or more whitespace chars.
    SingleSpace,
    /// Rejects any whitespace.
    Space,
    /// Rejects leading or trailing whitespace.
    SpaceRestriction,
    /// US social security number, dashes optional.
    Ssn,
    /// `hh:mm am/pm`.
    Time12h,
    /// `HH:MM`, 24-hour clock.
    Time24h,
    /// `HH:MM:SS`, 24-hour clock.
    Time24hSeconds,
    /// `http`, `https` or `ftp` URL.
    Url,
    /// US zip code, optional `+4`.
    ZipCode,
}

impl Format {
    /// All formats, in declaration order.
    pub const ALL: [Format; 23] = [
        Format::Address,
        Format::AlphabetOnly,
        Format::DateYyyyMmDd,
        Format::DateMmDdYyyy,
        Format::DateDdMmYyyy,
        Format::Email,
        Format::Ipv4,
        Format::Ipv6,
        Format::IpAddress,
        Format::NumericsOnly,
        Format::NoSpecialChars,
        Format::Passport,
        Format::PasswordStrength,
        Format::Phone,
        Format::SingleSpace,
        Format::Space,
        Format::SpaceRestriction,
        Format::Ssn,
        Format::Time12h,
        Format::Time24h,
        Format::Time24hSeconds,
        Format::Url,
        Format::ZipCode,
    ];

    /// The compiled pattern.
    #[must_use]
    pub fn matcher(self) -> &'static Matcher {
        match self {
            Format::Address => &*ADDRESS,
            Format::AlphabetOnly => &*ALPHABET_ONLY,
            Format::DateYyyyMmDd => &*DATE_YYYY_MM_DD,
            Format::DateMmDdYyyy => &*DATE_MM_DD_YYYY,
            Format::DateDdMmYyyy => &*DATE_DD_MM_YYYY,
            Format::Email => &*EMAIL,
            Format::Ipv4 => &*IPV4,
            Format::Ipv6 => &*IPV6,
            Format::IpAddress => &*IP_ADDRESS,
            Format::NumericsOnly => &*NUMERICS_ONLY,
            Format::NoSpecialChars => &*NO_SPECIAL_CHARS,
            Format::Passport => &*PASSPORT,
            Format::PasswordStrength => &*PASSWORD_STRENGTH,
            Format::Phone => &*PHONE,
            Format::SingleSpace => &*DOUBLE_SPACE,
            Format::Space => &*WHITESPACE,
            Format::SpaceRestriction => &*EDGE_WHITESPACE,
            Format::Ssn => &*SSN,
            Format::Time12h => &*TIME_12H,
            Format::Time24h => &*TIME_24H,
            Format::Time24hSeconds => &*TIME_24H_SECONDS,
            Format::Url => &*URL,
            Format::ZipCode => &*ZIP_CODE,
        }
    }

    /// Whitespace formats flag offending input; everything else must match.
    #[must_use]
    pub fn polarity(self) -> Polarity {
        match self {
            Format::SingleSpace | Format::Space | Format::SpaceRestriction => Polarity::Reject,
            _ => Polarity::Match,
        }
    }

    /// Format name, also the default error key.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Format::Address => "address",
            Format::AlphabetOnly => "alphabetOnly",
            Format::DateYyyyMmDd => "dateYYYYMMDD",
            Format::DateMmDdYyyy => "dateMMDDYYYY",
            Format::DateDdMmYyyy => "dateDDMMYYYY",
            Format::Email => "email",
            Format::Ipv4 => "ipv4",
            Format::Ipv6 => "ipv6",
            Format::IpAddress => "ipAddress",
            Format::NumericsOnly => "numericsOnly",
            Format::NoSpecialChars => "noSpecialChars",
            Format::Passport => "passport",
            Format::PasswordStrength => "passwordStrength",
            Format::Phone => "phone",
            Format::SingleSpace => "singleSpace",
            Format::Space => "space",
            Format::SpaceRestriction => "spaceRestriction",
            Format::Ssn => "ssn",
            Format::Time12h => "time12h",
            Format::Time24h => "time24h",
            Format::Time24hSeconds => "time24hSeconds",
            Format::Url => "url",
            Format::ZipCode => "zipCode",
        }
    }

    /// Default error message.
    #[must_use]
    pub fn default_message(self) -> &'static str {
        match self {
            Format::Address => "Please enter a valid address",
            Format::AlphabetOnly => "Only alphabetic characters are allowed",
            Format::DateYyyyMmDd => "Date must be in YYYY-MM-DD format",
            Format::DateMmDdYyyy => "Date must be in MM/DD/YYYY format",
            Format::DateDdMmYyyy => "Date must be in DD/MM/YYYY format",
            Format::Email => "Please enter a valid email address",
            Format::Ipv4 => "Please enter a valid IPv4 address",
            Format::Ipv6 => "Please enter a valid IPv6 address",
            Format::IpAddress => "Please enter a valid IP address",
            Format::NumericsOnly => "Only numeric characters are allowed",
            Format::NoSpecialChars => "Special characters are not allowed",
            Format::Passport => "Please enter a valid passport number",
            Format::PasswordStrength => {
                "Password must be at least 8 characters and contain an uppercase letter, a lowercase letter, a number and a special character"
            }
            Format::Phone => "Please enter a valid phone number",
            Format::SingleSpace => "Only single spaces are allowed between words",
            Format::Space => "Spaces are not allowed",
            Format::SpaceRestriction => "Leading and trailing spaces are not allowed",
            Format::Ssn => "Please enter a valid social security number",
            Format::Time12h => "Time must be in hh:mm am/pm format",
            Format::Time24h => "Time must be in HH:MM format",
            Format::Time24hSeconds => "Time must be in HH:MM:SS format",
            Format::Url => "Please enter a valid URL",
            Format::ZipCode => "Please enter a valid zip code",
        }
    }
}

impl fmt::Display for Format {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Format {
    type Err = ConfigError;

    fn from_str(name: &str) -> Result<Self, Self::Err> {
        Format::ALL
            .into_iter()
            .find(|format| format.name() == name)
            .ok_or_else(|| ConfigError::UnknownFormat(name.to_owned()))
    }
}

impl TryFrom<String> for Format {
    type Error = ConfigError;

    fn try_from(name: String) -> Result<Self, Self::Error> {
        name.parse()
    }
}

impl From<Format> for &'static str {
    fn from(format: Format) -> Self {
        format.name()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn matches(format: Format, text: &str) -> bool {
        format.matcher().is_match(text)
    }

    #[test]
    fn test_every_pattern_compiles() {
        for format in Format::ALL {
            assert!(!format.matcher().source().is_empty(), "{format}");
        }
    }

    #[test]
    fn test_names_round_trip() {
        for format in Format::ALL {
            assert_eq!(format.name().parse::<Format>().unwrap(), format);
        }
        assert!("nope".parse::<Format>().is_err());
    }

    #[test]
    fn test_serde_uses_names() {
        let format: Format = serde_json::from_str(r#""zipCode""#).unwrap();
        assert_eq!(format, Format::ZipCode);
        assert_eq!(serde_json::to_string(&Format::Time12h).unwrap(), r#""time12h""#);
        assert!(serde_json::from_str::<Format>(r#""zip""#).is_err());
    }

    #[test]
    fn test_email() {
        assert!(matches(Format::Email, "a@b.com"));
        assert!(matches(Format::Email, "first.last+tag@example.co.uk"));
        assert!(!matches(Format::Email, "not-an-email"));
        assert!(!matches(Format::Email, "user@"));
        assert!(!matches(Format::Email, "@example.com"));
        assert!(!matches(Format::Email, "user@localhost"));
    }

    #[test]
    fn test_ip_addresses() {
        assert!(matches(Format::Ipv4, "192.168.0.1"));
        assert!(!matches(Format::Ipv4, "256.1.1.1"));
        assert!(!matches(Format::Ipv4, "1.2.3"));
        assert!(matches(Format::Ipv6, "2001:0db8:85a3:0000:0000:8a2e:0370:7334"));
        assert!(matches(Format::Ipv6, "::1"));
        assert!(matches(Format::Ipv6, "fe80::"));
        assert!(!matches(Format::Ipv6, "192.168.0.1"));
        assert!(matches(Format::IpAddress, "10.0.0.1"));
        assert!(matches(Format::IpAddress, "::"));
        assert!(!matches(Format::IpAddress, "not.an.ip"));
    }

    #[test]
    fn test_dates_and_times() {
        assert!(matches(Format::DateYyyyMmDd, "2024-02-29"));
        assert!(!matches(Format::DateYyyyMmDd, "2024-13-01"));
        assert!(matches(Format::DateMmDdYyyy, "12/31/1999"));
        assert!(!matches(Format::DateMmDdYyyy, "31/12/1999"));
        assert!(matches(Format::DateDdMmYyyy, "31/12/1999"));
        assert!(matches(Format::Time12h, "9:05 PM"));
        assert!(matches(Format::Time12h, "12:00am"));
        assert!(!matches(Format::Time12h, "13:00 pm"));
        assert!(matches(Format::Time24h, "23:59"));
        assert!(!matches(Format::Time24h, "24:00"));
        assert!(matches(Format::Time24hSeconds, "00:00:59"));
        assert!(!matches(Format::Time24hSeconds, "00:00:60"));
    }

    #[test]
    fn test_character_classes() {
        assert!(matches(Format::AlphabetOnly, "Hello"));
        assert!(!matches(Format::AlphabetOnly, "Hello1"));
        assert!(matches(Format::NumericsOnly, "0123"));
        assert!(!matches(Format::NumericsOnly, "\u{0663}"));
        assert!(matches(Format::NoSpecialChars, "abc 123"));
        assert!(!matches(Format::NoSpecialChars, "abc!"));
        assert!(matches(Format::Address, "221B Baker St., Apt #2"));
        assert!(!matches(Format::Address, "<script>"));
    }

    #[test]
    fn test_identity_numbers() {
        assert!(matches(Format::Ssn, "123-45-6789"));
        assert!(matches(Format::Ssn, "123456789"));
        assert!(!matches(Format::Ssn, "12-345-6789"));
        assert!(matches(Format::Passport, "A1234567"));
        assert!(!matches(Format::Passport, "A12"));
        assert!(matches(Format::ZipCode, "12345"));
        assert!(matches(Format::ZipCode, "12345-6789"));
        assert!(!matches(Format::ZipCode, "1234"));
        assert!(matches(Format::Phone, "(555) 123-4567"));
        assert!(matches(Format::Phone, "+1 555.123.4567"));
        assert!(!matches(Format::Phone, "12345"));
        assert!(matches(Format::Url, "https://example.com/path?q=1"));
        assert!(matches(Format::Url, "ftp://files.example.com"));
        assert!(!matches(Format::Url, "example.com"));
    }

    #[test]
    fn test_password_strength_requires_every_class() {
        assert!(matches(Format::PasswordStrength, "Passw0rd!"));
        assert!(!matches(Format::PasswordStrength, "Pa0!"));
        assert!(!matches(Format::PasswordStrength, "password0!"));
        assert!(!matches(Format::PasswordStrength, "PASSWORD0!"));
        assert!(!matches(Format::PasswordStrength, "Password!!"));
        assert!(!matches(Format::PasswordStrength, "Password00"));
    }

    #[test]
    fn test_whitespace_patterns_flag_offenders() {
        assert_eq!(Format::Space.polarity(), Polarity::Reject);
        assert!(matches(Format::SingleSpace, "two  spaces"));
        assert!(!matches(Format::SingleSpace, "one space"));
        assert!(matches(Format::Space, "a b"));
        assert!(!matches(Format::Space, "ab"));
        assert!(matches(Format::SpaceRestriction, " lead"));
        assert!(matches(Format::SpaceRestriction, "trail "));
        assert!(!matches(Format::SpaceRestriction, "in side"));
    }

    #[test]
    fn test_custom_matcher_from_str() {
        let matcher: Matcher = r"^[0-9]{3}-[0-9]{4}$".parse().unwrap();
        assert!(matcher.is_match("123-4567"));
        assert!("(".parse::<Matcher>().is_err());
    }
}
