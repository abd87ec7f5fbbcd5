//! Node.js bindings for phone_format.
//!
//! This crate provides native Node.js bindings using napi-rs.
//!
//! # Installation
//!
//! ```bash
//! npm install phone-format
//! ```
//!
//! # Usage
//!
//! ```javascript
//! const { listCountries, formatForDisplay, validatePhone, PhoneField } = require('phone-format');
//!
//! // Format while typing
//! formatForDisplay("5551234", "+1");        // "(555) 123-4"
//!
//! // Validate on submit
//! const result = validatePhone("98765 43210", "+91");
//! if (result.valid) {
//!     console.log(`E.164: ${result.e164}`);
//! }
//!
//! // Controlled field
//! const field = new PhoneField("", "+1", "CA");
//! const change = field.input("4165550199");
//! ```

use napi::bindgen_prelude::*;
use napi_derive::napi;

use phone_format::{
    format, generate, registry, validate, CountryPhoneSpec, PhoneChange, PhoneInput,
};

/// A supported country.
#[napi(object)]
pub struct Country {
    pub calling_code: String,
    pub iso_country: String,
    pub display_name: String,
    pub symbol: String,
    pub format_template: String,
    pub placeholder_example: String,
    pub max_significant_digits: u32,
}

impl From<&CountryPhoneSpec> for Country {
    fn from(spec: &CountryPhoneSpec) -> Self {
        Self {
            calling_code: spec.calling_code().to_string(),
            iso_country: spec.iso_country().to_string(),
            display_name: spec.display_name().to_string(),
            symbol: spec.symbol().to_string(),
            format_template: spec.format_template().to_string(),
            placeholder_example: spec.placeholder_example().to_string(),
            max_significant_digits: spec.max_significant_digits() as u32,
        }
    }
}

/// Result of phone validation.
#[napi(object)]
pub struct ValidationResult {
    pub valid: bool,
    pub formatted: Option<String>,
    pub e164: Option<String>,
    pub masked: Option<String>,
    pub error: Option<String>,
}

/// Emitted on every edit of a `PhoneField`.
#[napi(object)]
pub struct FieldChange {
    pub digits: String,
    pub display: String,
    pub calling_code: String,
    pub iso_country: String,
}

impl From<PhoneChange> for FieldChange {
    fn from(change: PhoneChange) -> Self {
        Self {
            digits: change.digits,
            display: change.display,
            calling_code: change.calling_code,
            iso_country: change.iso_country,
        }
    }
}

/// Lists supported countries in display order.
///
/// @returns Array of countries, US first
#[napi]
pub fn list_countries() -> Vec<Country> {
    registry::all().iter().map(Country::from).collect()
}

/// Looks up a country by calling code.
///
/// @param callingCode - e.g. "+1"
/// @param isoCountry - optional, e.g. "CA"
/// @returns Country or null
#[napi]
pub fn lookup_country(calling_code: String, iso_country: Option<String>) -> Option<Country> {
    registry::lookup_country(&calling_code, iso_country.as_deref()).map(Country::from)
}

/// Strips everything but ASCII digits.
///
/// @param raw - Arbitrary input
/// @returns Digits only
#[napi]
pub fn normalize_digits(raw: String) -> String {
    format::normalize_digits(&raw)
}

/// Formats a number for display.
///
/// Unknown countries return the digits unformatted.
///
/// @param digits - Number, separators allowed
/// @param callingCode - e.g. "+44"
/// @param isoCountry - optional
/// @returns Display string
#[napi]
pub fn format_for_display(digits: String, calling_code: String, iso_country: Option<String>) -> String {
    match registry::lookup_country(&calling_code, iso_country.as_deref()) {
        Some(country) => format::format_for_display(&digits, country),
        None => format::normalize_digits(&digits),
    }
}

/// Whether the number has exactly the required digit count.
///
/// @returns false for unknown countries
#[napi]
pub fn is_complete(digits: String, calling_code: String, iso_country: Option<String>) -> bool {
    phone_format::validate::is_complete_for_code(&digits, &calling_code, iso_country.as_deref())
}

/// Validates a phone number.
///
/// @param digits - Number, separators allowed
/// @param callingCode - e.g. "+91"
/// @param isoCountry - optional
/// @returns ValidationResult with formatted forms or error
#[napi]
pub fn validate_phone(digits: String, calling_code: String, iso_country: Option<String>) -> ValidationResult {
    let country = registry::lookup_country(&calling_code, iso_country.as_deref());
    to_result(&digits, country)
}

/// Batch validates numbers against one country.
///
/// @param numbers - Array of numbers
/// @returns Array of ValidationResults
#[napi]
pub fn validate_batch(numbers: Vec<String>, calling_code: String, iso_country: Option<String>) -> Vec<ValidationResult> {
    let country = registry::lookup_country(&calling_code, iso_country.as_deref());
    numbers.iter().map(|n| to_result(n, country)).collect()
}

/// Generates a random complete number for tests.
///
/// @param callingCode - e.g. "+81"
/// @returns Digits
#[napi]
pub fn generate_sample(calling_code: String, iso_country: Option<String>) -> Result<String> {
    registry::lookup_country(&calling_code, iso_country.as_deref())
        .map(generate::random_number)
        .ok_or_else(|| Error::new(Status::InvalidArg, format!("Unknown country: {}", calling_code)))
}

/// A controlled phone input.
///
/// Unknown countries fall back to the default country.
#[napi]
pub struct PhoneField {
    inner: PhoneInput,
}

#[napi]
impl PhoneField {
    #[napi(constructor)]
    pub fn new(initial: String, calling_code: String, iso_country: Option<String>) -> Self {
        let country = registry::lookup_or_default(&calling_code, iso_country.as_deref());
        Self {
            inner: PhoneInput::new(&initial, country.clone()),
        }
    }

    /// Replaces the value with what the user typed or pasted.
    #[napi]
    pub fn input(&mut self, raw: String) -> FieldChange {
        self.inner.input(&raw).into()
    }

    /// Switches country and re-formats.
    #[napi]
    pub fn select_country(&mut self, calling_code: String, iso_country: Option<String>) -> FieldChange {
        let country = registry::lookup_or_default(&calling_code, iso_country.as_deref());
        self.inner.select_country(country.clone()).into()
    }

    #[napi]
    pub fn backspace(&mut self) -> FieldChange {
        self.inner.backspace().into()
    }

    #[napi(getter)]
    pub fn display(&self) -> String {
        self.inner.display().to_string()
    }

    #[napi(getter)]
    pub fn digits(&self) -> String {
        self.inner.digits().to_string()
    }

    #[napi]
    pub fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }
}

fn to_result(digits: &str, country: Option<&CountryPhoneSpec>) -> ValidationResult {
    match validate(digits, country) {
        Ok(phone) => ValidationResult {
            valid: true,
            formatted: Some(phone.formatted()),
            e164: Some(phone.e164()),
            masked: Some(phone.masked()),
            error: None,
        },
        Err(e) => ValidationResult {
            valid: false,
            formatted: None,
            e164: None,
            masked: None,
            error: Some(e.to_string()),
        },
    }
}
