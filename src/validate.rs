//! Completeness checks for phone numbers.
//!
//! Validation here is a length check only: a number is complete when its
//! digit count equals the country's `max_significant_digits`. There are no
//! area-code range checks and no carrier checks.
//!
//! Both entry points accept either a `&CountryPhoneSpec` or the
//! `Option<&CountryPhoneSpec>` returned by a registry lookup, so a lookup
//! miss can be passed straight through and is never complete.

use crate::country::{CountryPhoneSpec, ValidatedPhone};
use crate::error::ValidationError;
use crate::format::normalize_digits;

/// Counts ASCII digits without allocating.
#[inline]
fn digit_count(input: &str) -> usize {
    input.chars().filter(|c| c.is_ascii_digit()).count()
}

/// Returns true when the number has exactly the country's digit count.
///
/// Non-digit characters are ignored. An unknown country (`None`) is never
/// complete, and neither is an input with no digits.
///
/// # Example
///
/// ```
/// use phone_format::{is_complete, lookup_country};
///
/// let india = lookup_country("+91", None).unwrap();
/// assert!(is_complete("98765-43210", india));
/// assert!(!is_complete("98765-4321", india));
///
/// assert!(!is_complete("98765-43210", lookup_country("+999", None)));
/// ```
pub fn is_complete<'a>(digits: &str, country: impl Into<Option<&'a CountryPhoneSpec>>) -> bool {
    match country.into() {
        Some(country) => {
            let count = digit_count(digits);
            count != 0 && count == country.max_significant_digits()
        }
        None => false,
    }
}

/// Validates a number against a country, explaining any failure.
///
/// `validate(d, c).is_ok()` always equals `is_complete(d, c)`.
///
/// # Errors
///
/// - `ValidationError::UnknownCountry` when `country` is `None`
/// - `ValidationError::NoDigits` when the input has no digits
/// - `ValidationError::TooShort` / `TooLong` when the count is off
///
/// # Example
///
/// ```
/// use phone_format::{lookup_country, validate, ValidationError};
///
/// let us = lookup_country("+1", None).unwrap();
/// let phone = validate("(555) 123-4567", us).unwrap();
/// assert_eq!(phone.formatted(), "(555) 123-4567");
/// assert_eq!(phone.e164(), "+15551234567");
///
/// let err = validate("555123", us).unwrap_err();
/// assert_eq!(err, ValidationError::TooShort { length: 6, required: 10 });
/// ```
pub fn validate<'a>(
    digits: &str,
    country: impl Into<Option<&'a CountryPhoneSpec>>,
) -> Result<ValidatedPhone, ValidationError> {
    let country = country.into().ok_or(ValidationError::UnknownCountry)?;

    let length = digit_count(digits);
    let required = country.max_significant_digits();

    if length == 0 {
        return Err(ValidationError::NoDigits);
    }
    if length < required {
        return Err(ValidationError::TooShort { length, required });
    }
    if length > required {
        return Err(ValidationError::TooLong {
            length,
            maximum: required,
        });
    }

    Ok(ValidatedPhone::new(normalize_digits(digits), country.clone()))
}

/// Looks up a built-in country and checks completeness in one call.
///
/// # Example
///
/// ```
/// use phone_format::validate::is_complete_for_code;
///
/// assert!(is_complete_for_code("4165550199", "+1", Some("CA")));
/// assert!(!is_complete_for_code("4165550199", "+999", None));
/// ```
pub fn is_complete_for_code(digits: &str, calling_code: &str, iso: Option<&str>) -> bool {
    is_complete(digits, crate::registry::lookup_country(calling_code, iso))
}
