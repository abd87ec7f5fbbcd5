//! Phone number normalization and display formatting.
//!
//! Formatting is progressive: as digits are typed one at a time, each
//! separator appears only once a digit of the following group exists, so a
//! display string never ends in punctuation.
//!
//! # Format Conventions
//!
//! | Code | Country | Groups | Display |
//! |------|---------|--------|---------|
//! | +1 | US/Canada | 3-3-4 | `(XXX) XXX-XXXX` |
//! | +91 | India | 5-5 | `XXXXX-XXXXX` |
//! | +44 | United Kingdom | 4-3-4 | `XXXX XXX XXXX` |
//! | +61 | Australia | 4-3-3 | `XXXX XXX XXX` |
//! | +49 | Germany | 3-8 | `XXX XXXXXXXX` |
//! | +33 | France | 1-2-2-2-2 | `X XX XX XX XX` |
//! | +81 | Japan | 2-4-4 | `XX-XXXX-XXXX` |
//! | +86 | China | 3-4-4 | `XXX XXXX XXXX` |
//! | +971 | UAE | 2-3-4 | `XX XXX XXXX` |
//! | +65 | Singapore | 4-4 | `XXXX XXXX` |
//! | +52 | Mexico | 2-4-4 | `XX XXXX XXXX` |
//! | +55 | Brazil | 2-5-4 | `(XX) XXXXX-XXXX` |
//! | +27 | South Africa | 2-3-4 | `XX XXX XXXX` |
//!
//! Any other calling code returns the digits unchanged.
//!
//! # Example
//!
//! ```
//! use phone_format::{format, lookup_country};
//!
//! let us = lookup_country("+1", None).unwrap();
//! assert_eq!(format::format_for_display("555123", us), "(555) 123");
//! assert_eq!(format::format_for_display("5551234", us), "(555) 123-4");
//!
//! assert_eq!(format::normalize_digits("(555) 123-4567"), "5551234567");
//! ```

use crate::country::{CountryPhoneSpec, PhoneRule};
use crate::registry;

/// Strips every character that is not an ASCII digit.
///
/// Digit order is preserved. Non-ASCII digits (Arabic-Indic, fullwidth, ...)
/// are dropped. A leading `+` or calling code is not interpreted: pasted
/// calling-code digits stay in the result. See [`strip_calling_code`].
///
/// # Example
///
/// ```
/// use phone_format::format::normalize_digits;
///
/// assert_eq!(normalize_digits("+91 98765-43210"), "919876543210");
/// assert_eq!(normalize_digits("abc"), "");
/// ```
pub fn normalize_digits(input: &str) -> String {
    input.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// Formats digits for display under a country's rule.
///
/// Input is normalized and truncated to the country's
/// `max_significant_digits`; extra digits are dropped silently.
///
/// # Example
///
/// ```
/// use phone_format::{format::format_for_display, lookup_country};
///
/// let india = lookup_country("+91", None).unwrap();
/// assert_eq!(format_for_display("98765", india), "98765");
/// assert_eq!(format_for_display("987654", india), "98765-4");
/// assert_eq!(format_for_display("98765432109999", india), "98765-43210");
/// ```
pub fn format_for_display(digits: &str, country: &CountryPhoneSpec) -> String {
    let mut digits = normalize_digits(digits);
    digits.truncate(country.max_significant_digits());
    format_rule(&digits, country.rule())
}

/// Formats digits for a calling code resolved against the built-in registry.
///
/// Unknown calling codes format as the identity with no truncation.
///
/// # Example
///
/// ```
/// use phone_format::format::format_for_calling_code;
///
/// assert_eq!(format_for_calling_code("7911123456", "+44"), "7911 123 456");
/// assert_eq!(format_for_calling_code("12-34-56-78-90-12", "+999"), "123456789012");
/// ```
pub fn format_for_calling_code(digits: &str, calling_code: &str) -> String {
    match registry::find_by_calling_code(calling_code) {
        Some(country) => format_for_display(digits, country),
        None => normalize_digits(digits),
    }
}

/// Applies one rule to already-normalized, already-truncated digits.
fn format_rule(digits: &str, rule: PhoneRule) -> String {
    if digits.is_empty() {
        return String::new();
    }

    match rule {
        PhoneRule::NorthAmerica => area_coded(digits, 3, &[3, 4], &["-"]),
        PhoneRule::India => grouped(digits, &[5, 5], &["-"]),
        PhoneRule::UnitedKingdom => grouped(digits, &[4, 3, 4], &[" ", " "]),
        PhoneRule::Australia => grouped(digits, &[4, 3, 3], &[" ", " "]),
        PhoneRule::Germany => grouped(digits, &[3, 8], &[" "]),
        PhoneRule::France => grouped(digits, &[1, 2, 2, 2, 2], &[" ", " ", " ", " "]),
        PhoneRule::Japan => grouped(digits, &[2, 4, 4], &["-", "-"]),
        PhoneRule::China => grouped(digits, &[3, 4, 4], &[" ", " "]),
        PhoneRule::UnitedArabEmirates => grouped(digits, &[2, 3, 4], &[" ", " "]),
        PhoneRule::Singapore => grouped(digits, &[4, 4], &[" "]),
        PhoneRule::Mexico => grouped(digits, &[2, 4, 4], &[" ", " "]),
        PhoneRule::Brazil => area_coded(digits, 2, &[5, 4], &["-"]),
        PhoneRule::SouthAfrica => grouped(digits, &[2, 3, 4], &[" ", " "]),
        PhoneRule::Identity => digits.to_string(),
    }
}

/// Joins the present digit groups with the separator preceding each group.
///
/// `separators[i]` sits between group `i` and group `i + 1` and is written
/// only when group `i + 1` has at least one digit.
fn grouped(digits: &str, sizes: &[usize], separators: &[&str]) -> String {
    let mut result = String::with_capacity(digits.len() + separators.len() * 2);
    let mut pos = 0;

    for (i, &size) in sizes.iter().enumerate() {
        if pos >= digits.len() {
            break;
        }
        if i > 0 {
            result.push_str(separators[i - 1]);
        }
        let end = (pos + size).min(digits.len());
        result.push_str(&digits[pos..end]);
        pos = end;
    }

    // Digits past the last group only occur for callers that skip truncation
    if pos < digits.len() {
        result.push_str(&digits[pos..]);
    }

    result
}

/// `(AREA) REST` rendering. The area code stays bare until a digit follows it.
fn area_coded(digits: &str, area: usize, rest_sizes: &[usize], rest_separators: &[&str]) -> String {
    if digits.len() <= area {
        return digits.to_string();
    }
    format!(
        "({}) {}",
        &digits[..area],
        grouped(&digits[area..], rest_sizes, rest_separators)
    )
}

/// Splits digits into the groups shown in the display string.
///
/// Partial input yields a partial last group. `Identity` countries yield a
/// single group.
///
/// # Example
///
/// ```
/// use phone_format::{format::split_into_groups, lookup_country};
///
/// let fr = lookup_country("+33", None).unwrap();
/// assert_eq!(split_into_groups("612345678", fr), vec!["6", "12", "34", "56", "78"]);
/// assert_eq!(split_into_groups("6123", fr), vec!["6", "12", "3"]);
/// ```
pub fn split_into_groups(digits: &str, country: &CountryPhoneSpec) -> Vec<String> {
    let mut digits = normalize_digits(digits);
    digits.truncate(country.max_significant_digits());

    if digits.is_empty() {
        return vec![];
    }

    let sizes = country.rule().groups();
    if sizes.is_empty() {
        return vec![digits];
    }

    let mut groups = Vec::with_capacity(sizes.len());
    let mut pos = 0;
    for &size in sizes {
        if pos >= digits.len() {
            break;
        }
        let end = (pos + size).min(digits.len());
        groups.push(digits[pos..end].to_string());
        pos = end;
    }

    groups
}

/// Renders `+<calling code><digits>` with no separators.
///
/// # Example
///
/// ```
/// use phone_format::{format::format_e164, lookup_country};
///
/// let br = lookup_country("+55", None).unwrap();
/// assert_eq!(format_e164("(11) 91234-5678", br), "+5511912345678");
/// ```
pub fn format_e164(digits: &str, country: &CountryPhoneSpec) -> String {
    let mut digits = normalize_digits(digits);
    digits.truncate(country.max_significant_digits());
    format!("+{}{}", country.calling_code_digits(), digits)
}

/// Removes a pasted calling code from the front of a number.
///
/// The input is normalized first. The calling-code digits are removed only
/// when they prefix the number and the number is longer than the country's
/// `max_significant_digits`, so a national number that happens to start with
/// the same digits is left alone.
///
/// # Example
///
/// ```
/// use phone_format::{format::strip_calling_code, lookup_country};
///
/// let india = lookup_country("+91", None).unwrap();
/// assert_eq!(strip_calling_code("+91 98765 43210", india), "9876543210");
/// assert_eq!(strip_calling_code("9198765432", india), "9198765432");
/// ```
pub fn strip_calling_code(input: &str, country: &CountryPhoneSpec) -> String {
    let digits = normalize_digits(input);
    let code = country.calling_code_digits();

    if digits.len() > country.max_significant_digits() {
        if let Some(rest) = digits.strip_prefix(code) {
            return rest.to_string();
        }
    }

    digits
}

/// Validates that a string contains only characters a formatted number uses.
///
/// Allowed: digits, spaces, `-`, `(`, `)`, `.` and a leading `+`.
///
/// # Example
///
/// ```
/// use phone_format::format::is_valid_format;
///
/// assert!(is_valid_format("+1 (555) 123-4567"));
/// assert!(!is_valid_format("555-CALL-NOW"));
/// ```
pub fn is_valid_format(input: &str) -> bool {
    let body = input.strip_prefix('+').unwrap_or(input);
    body.chars()
        .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '-' | '(' | ')' | '.'))
}
