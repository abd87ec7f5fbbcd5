//! Catalog of supported countries and their phone formats.
//!
//! The built-in registry is a fixed table compiled into the binary. Lookups
//! are linear scans over a small, ordered slice and never touch the network.
//!
//! Declaration order is part of the contract: `+1` is shared by the United
//! States and Canada, and a lookup by calling code alone always resolves to
//! the first-declared entry (United States). Callers that need Canada must
//! pass the ISO identifier as well.
//!
//! # Example
//!
//! ```
//! use phone_format::registry;
//!
//! let us = registry::find_by_calling_code("+1").unwrap();
//! assert_eq!(us.iso_country(), "US");
//!
//! let ca = registry::find_by_calling_code_and_iso("+1", "CA").unwrap();
//! assert_eq!(ca.display_name(), "Canada");
//!
//! assert!(registry::lookup_country("+999", None).is_none());
//! assert_eq!(registry::lookup_or_default("+999", None).iso_country(), "US");
//! ```
//!
//! Custom catalogs can be assembled with [`CountryTableBuilder`] or, with the
//! `registry-json` feature, loaded from JSON.

mod table;

#[cfg(feature = "registry-json")]
mod json;

pub use table::{CountryTable, CountryTableBuilder};

#[cfg(feature = "registry-json")]
pub use json::JsonCountryLoader;

use crate::country::CountryPhoneSpec;
use std::fmt;

static COUNTRIES: [CountryPhoneSpec; 14] = [
    CountryPhoneSpec::from_static("+1", "US", "United States", "🇺🇸", "(###) ###-####", "(555) 123-4567", 10),
    CountryPhoneSpec::from_static("+1", "CA", "Canada", "🇨🇦", "(###) ###-####", "(555) 123-4567", 10),
    CountryPhoneSpec::from_static("+91", "IN", "India", "🇮🇳", "#####-#####", "98765-43210", 10),
    CountryPhoneSpec::from_static("+44", "GB", "United Kingdom", "🇬🇧", "#### ### ####", "7911 123 4567", 11),
    CountryPhoneSpec::from_static("+61", "AU", "Australia", "🇦🇺", "#### ### ###", "0412 345 678", 10),
    CountryPhoneSpec::from_static("+49", "DE", "Germany", "🇩🇪", "### ########", "151 23456789", 11),
    CountryPhoneSpec::from_static("+33", "FR", "France", "🇫🇷", "# ## ## ## ##", "6 12 34 56 78", 9),
    CountryPhoneSpec::from_static("+81", "JP", "Japan", "🇯🇵", "##-####-####", "90-1234-5678", 10),
    CountryPhoneSpec::from_static("+86", "CN", "China", "🇨🇳", "### #### ####", "138 0013 8000", 11),
    CountryPhoneSpec::from_static("+971", "AE", "United Arab Emirates", "🇦🇪", "## ### ####", "50 123 4567", 9),
    CountryPhoneSpec::from_static("+65", "SG", "Singapore", "🇸🇬", "#### ####", "8123 4567", 8),
    CountryPhoneSpec::from_static("+52", "MX", "Mexico", "🇲🇽", "## #### ####", "55 1234 5678", 10),
    CountryPhoneSpec::from_static("+55", "BR", "Brazil", "🇧🇷", "(##) #####-####", "(11) 91234-5678", 11),
    CountryPhoneSpec::from_static("+27", "ZA", "South Africa", "🇿🇦", "## ### ####", "82 123 4567", 9),
];

/// Read-only access to an ordered list of countries.
///
/// Lookups have default implementations over `entries()`, so an
/// implementation only needs to expose its slice. The crate provides:
///
/// - `BuiltinCatalog` - the compiled-in table
/// - `CountryTable` - an owned table built at runtime
pub trait CountryCatalog: Send + Sync {
    /// All entries in declaration order.
    fn entries(&self) -> &[CountryPhoneSpec];

    /// First entry whose calling code equals `code`.
    fn find_by_calling_code(&self, code: &str) -> Option<&CountryPhoneSpec> {
        self.entries().iter().find(|c| c.calling_code() == code)
    }

    /// Exact `(calling_code, iso_country)` match.
    fn find_by_calling_code_and_iso(&self, code: &str, iso: &str) -> Option<&CountryPhoneSpec> {
        self.entries()
            .iter()
            .find(|c| c.calling_code() == code && c.iso_country() == iso)
    }

    /// First entry with the given ISO identifier.
    fn find_by_iso(&self, iso: &str) -> Option<&CountryPhoneSpec> {
        self.entries().iter().find(|c| c.iso_country() == iso)
    }

    /// Composite lookup when `iso` is given, first match otherwise.
    fn lookup(&self, code: &str, iso: Option<&str>) -> Option<&CountryPhoneSpec> {
        match iso {
            Some(iso) => self.find_by_calling_code_and_iso(code, iso),
            None => self.find_by_calling_code(code),
        }
    }

    /// Number of entries.
    fn len(&self) -> usize {
        self.entries().len()
    }

    /// Returns true if the catalog has no entries.
    fn is_empty(&self) -> bool {
        self.entries().is_empty()
    }
}

/// The compiled-in country table.
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinCatalog;

impl CountryCatalog for BuiltinCatalog {
    #[inline]
    fn entries(&self) -> &[CountryPhoneSpec] {
        &COUNTRIES
    }
}

/// All built-in countries in declaration order.
#[inline]
pub fn all() -> &'static [CountryPhoneSpec] {
    &COUNTRIES
}

/// First built-in country with the given calling code.
///
/// `"+1"` always resolves to the United States.
#[inline]
pub fn find_by_calling_code(code: &str) -> Option<&'static CountryPhoneSpec> {
    COUNTRIES.iter().find(|c| c.calling_code() == code)
}

/// Built-in country matching both calling code and ISO identifier.
#[inline]
pub fn find_by_calling_code_and_iso(code: &str, iso: &str) -> Option<&'static CountryPhoneSpec> {
    COUNTRIES
        .iter()
        .find(|c| c.calling_code() == code && c.iso_country() == iso)
}

/// First built-in country with the given ISO identifier.
#[inline]
pub fn find_by_iso(iso: &str) -> Option<&'static CountryPhoneSpec> {
    COUNTRIES.iter().find(|c| c.iso_country() == iso)
}

/// Looks up a built-in country by calling code and optional ISO identifier.
///
/// # Example
///
/// ```
/// use phone_format::lookup_country;
///
/// assert_eq!(lookup_country("+1", None).unwrap().iso_country(), "US");
/// assert_eq!(lookup_country("+1", Some("CA")).unwrap().iso_country(), "CA");
/// assert!(lookup_country("+91", Some("US")).is_none());
/// ```
pub fn lookup_country(code: &str, iso: Option<&str>) -> Option<&'static CountryPhoneSpec> {
    match iso {
        Some(iso) => find_by_calling_code_and_iso(code, iso),
        None => find_by_calling_code(code),
    }
}

/// The fallback country used after a lookup miss: the first entry.
#[inline]
pub fn default_country() -> &'static CountryPhoneSpec {
    &COUNTRIES[0]
}

/// `lookup_country` with the default-country fallback applied.
#[inline]
pub fn lookup_or_default(code: &str, iso: Option<&str>) -> &'static CountryPhoneSpec {
    lookup_country(code, iso).unwrap_or_else(default_country)
}

/// Error type for building or loading country tables.
#[derive(Debug)]
pub enum RegistryError {
    /// Failed to read the source file.
    Io(std::io::Error),
    /// Failed to parse the source format.
    Parse(String),
    /// The table has no entries.
    Empty,
    /// An entry has `max_significant_digits` of zero.
    NoDigitPositions {
        /// ISO identifier of the offending entry.
        iso_country: String,
    },
    /// Two entries share a calling code and ISO identifier.
    Duplicate {
        /// The repeated calling code.
        calling_code: String,
        /// The repeated ISO identifier.
        iso_country: String,
    },
    /// The template digit count disagrees with `max_significant_digits`.
    InconsistentTemplate {
        /// ISO identifier of the offending entry.
        iso_country: String,
        /// Digit positions in the template.
        template_digits: usize,
        /// Declared maximum.
        max_significant_digits: usize,
    },
    /// The built-in rule for the calling code groups a different number of
    /// digits than the entry declares.
    RuleMismatch {
        /// ISO identifier of the offending entry.
        iso_country: String,
        /// Calling code whose rule applies.
        calling_code: String,
        /// Digits grouped by the rule.
        rule_digits: usize,
        /// Declared maximum.
        max_significant_digits: usize,
    },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "IO error: {}", e),
            Self::Parse(s) => write!(f, "Parse error: {}", s),
            Self::Empty => write!(f, "country table must contain at least one entry"),
            Self::NoDigitPositions { iso_country } => {
                write!(f, "{}: max_significant_digits must be at least 1", iso_country)
            }
            Self::Duplicate {
                calling_code,
                iso_country,
            } => write!(f, "duplicate country entry {} {}", calling_code, iso_country),
            Self::InconsistentTemplate {
                iso_country,
                template_digits,
                max_significant_digits,
            } => write!(
                f,
                "{}: template has {} digit positions but max_significant_digits is {}",
                iso_country, template_digits, max_significant_digits
            ),
            Self::RuleMismatch {
                iso_country,
                calling_code,
                rule_digits,
                max_significant_digits,
            } => write!(
                f,
                "{}: the {} format groups {} digits but max_significant_digits is {}",
                iso_country, calling_code, rule_digits, max_significant_digits
            ),
        }
    }
}

impl std::error::Error for RegistryError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RegistryError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}
