//! Core country types for phone formatting.
//!
//! This module provides the `CountryPhoneSpec` record describing one
//! supported country, the `PhoneRule` enum selecting the hand-written
//! formatting handler for a calling code, and the `ValidatedPhone` struct
//! holding a complete phone number securely.

use std::borrow::Cow;
use std::fmt;
use zeroize::Zeroize;

/// The filler character marking a digit position in a format template.
pub const TEMPLATE_DIGIT: char = '#';

/// Phone formatting data for a single country.
///
/// Entries are immutable. The built-in registry holds `'static` borrowed
/// strings; tables loaded at runtime own theirs.
///
/// `calling_code` alone is not unique (US and Canada share `+1`); the pair
/// `(calling_code, iso_country)` is.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct CountryPhoneSpec {
    calling_code: Cow<'static, str>,
    iso_country: Cow<'static, str>,
    display_name: Cow<'static, str>,
    symbol: Cow<'static, str>,
    format_template: Cow<'static, str>,
    placeholder_example: Cow<'static, str>,
    max_significant_digits: usize,
}

impl CountryPhoneSpec {
    /// Creates a spec from static strings. Used for the built-in registry.
    #[allow(clippy::too_many_arguments)]
    pub const fn from_static(
        calling_code: &'static str,
        iso_country: &'static str,
        display_name: &'static str,
        symbol: &'static str,
        format_template: &'static str,
        placeholder_example: &'static str,
        max_significant_digits: usize,
    ) -> Self {
        Self {
            calling_code: Cow::Borrowed(calling_code),
            iso_country: Cow::Borrowed(iso_country),
            display_name: Cow::Borrowed(display_name),
            symbol: Cow::Borrowed(symbol),
            format_template: Cow::Borrowed(format_template),
            placeholder_example: Cow::Borrowed(placeholder_example),
            max_significant_digits,
        }
    }

    /// Creates a spec from owned or borrowed strings.
    ///
    /// Consistency is not checked here; `CountryTableBuilder` rejects entries
    /// that fail `is_consistent`.
    ///
    /// Display formatting follows the built-in rule for `calling_code` when
    /// one exists, not `format_template`. Codes without a rule format as
    /// plain digits.
    pub fn new(
        calling_code: impl Into<Cow<'static, str>>,
        iso_country: impl Into<Cow<'static, str>>,
        display_name: impl Into<Cow<'static, str>>,
        format_template: impl Into<Cow<'static, str>>,
        max_significant_digits: usize,
    ) -> Self {
        Self {
            calling_code: calling_code.into(),
            iso_country: iso_country.into(),
            display_name: display_name.into(),
            symbol: Cow::Borrowed(""),
            format_template: format_template.into(),
            placeholder_example: Cow::Borrowed(""),
            max_significant_digits,
        }
    }

    /// Builder method to set the decorative symbol (usually a flag glyph).
    pub fn with_symbol(mut self, symbol: impl Into<Cow<'static, str>>) -> Self {
        self.symbol = symbol.into();
        self
    }

    /// Builder method to set the placeholder example.
    pub fn with_placeholder(mut self, placeholder: impl Into<Cow<'static, str>>) -> Self {
        self.placeholder_example = placeholder.into();
        self
    }

    /// International calling code including the leading `+`, e.g. `"+91"`.
    #[inline]
    pub fn calling_code(&self) -> &str {
        &self.calling_code
    }

    /// Calling code digits without the `+`.
    #[inline]
    pub fn calling_code_digits(&self) -> &str {
        self.calling_code.trim_start_matches('+')
    }

    /// Two-letter country identifier, e.g. `"IN"`.
    #[inline]
    pub fn iso_country(&self) -> &str {
        &self.iso_country
    }

    /// Human-readable country name.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Decorative marker for the country. No behavior depends on it.
    #[inline]
    pub fn symbol(&self) -> &str {
        &self.symbol
    }

    /// Shape of a formatted number, `#` marking digit positions.
    #[inline]
    pub fn format_template(&self) -> &str {
        &self.format_template
    }

    /// Example formatted number for input placeholders.
    #[inline]
    pub fn placeholder_example(&self) -> &str {
        &self.placeholder_example
    }

    /// Number of national digits considered complete.
    #[inline]
    pub const fn max_significant_digits(&self) -> usize {
        self.max_significant_digits
    }

    /// Formatting handler for this country's calling code.
    #[inline]
    pub fn rule(&self) -> PhoneRule {
        PhoneRule::for_calling_code(&self.calling_code)
    }

    /// Number of digit positions in the format template.
    pub fn template_digit_count(&self) -> usize {
        self.format_template
            .chars()
            .filter(|&c| c == TEMPLATE_DIGIT)
            .count()
    }

    /// True when `max_significant_digits` matches the template.
    pub fn is_consistent(&self) -> bool {
        self.template_digit_count() == self.max_significant_digits
    }
}

impl fmt::Display for CountryPhoneSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.display_name, self.calling_code)
    }
}

/// Hand-written formatting handler, one per supported calling code.
///
/// Each variant maps to exactly one branch in `format::format_for_display`.
/// Calling codes without a handler format with `Identity`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhoneRule {
    /// +1 US/Canada - `(XXX) XXX-XXXX`
    NorthAmerica,
    /// +91 India - `XXXXX-XXXXX`
    India,
    /// +44 United Kingdom - `XXXX XXX XXXX`
    UnitedKingdom,
    /// +61 Australia - `XXXX XXX XXX`
    Australia,
    /// +49 Germany - `XXX XXXXXXXX`
    Germany,
    /// +33 France - `X XX XX XX XX`
    France,
    /// +81 Japan - `XX-XXXX-XXXX`
    Japan,
    /// +86 China - `XXX XXXX XXXX`
    China,
    /// +971 United Arab Emirates - `XX XXX XXXX`
    UnitedArabEmirates,
    /// +65 Singapore - `XXXX XXXX`
    Singapore,
    /// +52 Mexico - `XX XXXX XXXX`
    Mexico,
    /// +55 Brazil - `(XX) XXXXX-XXXX`
    Brazil,
    /// +27 South Africa - `XX XXX XXXX`
    SouthAfrica,
    /// Digits are returned unchanged.
    Identity,
}

impl PhoneRule {
    /// Resolves the handler for a calling code such as `"+44"`.
    pub fn for_calling_code(calling_code: &str) -> Self {
        match calling_code {
            "+1" => Self::NorthAmerica,
            "+91" => Self::India,
            "+44" => Self::UnitedKingdom,
            "+61" => Self::Australia,
            "+49" => Self::Germany,
            "+33" => Self::France,
            "+81" => Self::Japan,
            "+86" => Self::China,
            "+971" => Self::UnitedArabEmirates,
            "+65" => Self::Singapore,
            "+52" => Self::Mexico,
            "+55" => Self::Brazil,
            "+27" => Self::SouthAfrica,
            _ => Self::Identity,
        }
    }

    /// Digit group sizes in display order. Empty for `Identity`.
    #[inline]
    pub const fn groups(&self) -> &'static [usize] {
        match self {
            Self::NorthAmerica => &[3, 3, 4],
            Self::India => &[5, 5],
            Self::UnitedKingdom => &[4, 3, 4],
            Self::Australia => &[4, 3, 3],
            Self::Germany => &[3, 8],
            Self::France => &[1, 2, 2, 2, 2],
            Self::Japan => &[2, 4, 4],
            Self::China => &[3, 4, 4],
            Self::UnitedArabEmirates => &[2, 3, 4],
            Self::Singapore => &[4, 4],
            Self::Mexico => &[2, 4, 4],
            Self::Brazil => &[2, 5, 4],
            Self::SouthAfrica => &[2, 3, 4],
            Self::Identity => &[],
        }
    }
}

/// A complete phone number with secure memory handling.
///
/// Phone numbers are patient contact data. The digits are zeroed on drop
/// and never appear in `Debug` or `Display` output.
#[derive(Clone)]
pub struct ValidatedPhone {
    digits: String,
    country: CountryPhoneSpec,
}

impl ValidatedPhone {
    /// Internal constructor. Use `validate()` to create instances.
    #[inline]
    pub(crate) fn new(digits: String, country: CountryPhoneSpec) -> Self {
        Self { digits, country }
    }

    /// National significant digits.
    ///
    /// Exposes the full number. For display, prefer `masked()`.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.digits
    }

    /// The country the number was validated against.
    #[inline]
    pub fn country(&self) -> &CountryPhoneSpec {
        &self.country
    }

    /// Number formatted for display under the country's rule.
    pub fn formatted(&self) -> String {
        crate::format::format_for_display(&self.digits, &self.country)
    }

    /// `+<calling code><digits>` with no separators.
    pub fn e164(&self) -> String {
        crate::format::format_e164(&self.digits, &self.country)
    }

    /// Last four digits, safe for display.
    pub fn last_four(&self) -> &str {
        let start = self.digits.len().saturating_sub(4);
        &self.digits[start..]
    }

    /// Display format with all but the last four digits masked.
    pub fn masked(&self) -> String {
        crate::mask::mask_phone(self)
    }
}

impl fmt::Debug for ValidatedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ValidatedPhone")
            .field("country", &self.country.iso_country())
            .field("calling_code", &self.country.calling_code())
            .field("number", &self.masked())
            .finish()
    }
}

impl fmt::Display for ValidatedPhone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.country.calling_code(), self.masked())
    }
}

impl Drop for ValidatedPhone {
    fn drop(&mut self) {
        self.digits.zeroize();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;

    #[test]
    fn test_builtin_templates_match_max_digits() {
        for country in registry::all() {
            assert!(
                country.is_consistent(),
                "{} template {:?} has {} digits, max is {}",
                country.iso_country(),
                country.format_template(),
                country.template_digit_count(),
                country.max_significant_digits()
            );
        }
    }

    #[test]
    fn test_rule_groups_sum_to_max_digits() {
        for country in registry::all() {
            let sum: usize = country.rule().groups().iter().sum();
            assert_eq!(sum, country.max_significant_digits(), "{}", country);
        }
    }

    #[test]
    fn test_rule_for_calling_code() {
        assert_eq!(PhoneRule::for_calling_code("+1"), PhoneRule::NorthAmerica);
        assert_eq!(PhoneRule::for_calling_code("+971"), PhoneRule::UnitedArabEmirates);
        assert_eq!(PhoneRule::for_calling_code("+999"), PhoneRule::Identity);
        // The leading plus is part of the key
        assert_eq!(PhoneRule::for_calling_code("91"), PhoneRule::Identity);
    }

    #[test]
    fn test_owned_spec() {
        let spec = CountryPhoneSpec::new("+64", "NZ".to_string(), "New Zealand", "## ### ####", 9)
            .with_symbol("🇳🇿")
            .with_placeholder("21 123 4567");
        assert!(spec.is_consistent());
        assert_eq!(spec.calling_code_digits(), "64");
        assert_eq!(spec.rule(), PhoneRule::Identity);
        assert_eq!(spec.to_string(), "New Zealand (+64)");
    }

    #[test]
    fn test_inconsistent_spec() {
        let spec = CountryPhoneSpec::new("+64", "NZ", "New Zealand", "## ###", 9);
        assert!(!spec.is_consistent());
    }

    #[test]
    fn test_validated_phone_last_four() {
        let phone = ValidatedPhone::new("5551234567".to_string(), registry::default_country().clone());
        assert_eq!(phone.last_four(), "4567");
        assert_eq!(phone.e164(), "+15551234567");
        assert_eq!(phone.formatted(), "(555) 123-4567");
    }

    #[test]
    fn test_debug_is_masked() {
        let phone = ValidatedPhone::new("5551234567".to_string(), registry::default_country().clone());
        let debug = format!("{:?}", phone);
        assert!(!debug.contains("5551234567"));
        assert!(!debug.contains("555"));
        assert!(debug.contains("4567"));
    }

    #[test]
    fn test_phone_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<ValidatedPhone>();
        assert_send_sync::<CountryPhoneSpec>();
    }
}
