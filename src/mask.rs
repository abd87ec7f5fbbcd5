//! Masking utilities for logging and display of phone numbers.
//!
//! Phone numbers are patient contact data. Anything that may end up in a
//! log line, a toast, or an audit entry should go through these helpers,
//! which keep the country's display shape and reveal only the last four
//! digits.

use crate::ValidatedPhone;

/// Mask character used for hidden digits.
pub const MASK_CHAR: char = '*';

/// Masks a validated phone in its display format.
///
/// # Example
///
/// ```
/// use phone_format::{lookup_country, validate};
///
/// let us = lookup_country("+1", None).unwrap();
/// let phone = validate("5551234567", us).unwrap();
/// assert_eq!(phone.masked(), "(***) ***-4567");
/// ```
#[inline]
pub fn mask_phone(phone: &ValidatedPhone) -> String {
    mask_display(&phone.formatted())
}

/// Masks every digit of a display string except the last four.
///
/// Separators are kept so the masked value still reads like a number of
/// the right country.
///
/// # Example
///
/// ```
/// use phone_format::mask::mask_display;
///
/// assert_eq!(mask_display("98765-43210"), "*****-*3210");
/// assert_eq!(mask_display("123"), "123");
/// ```
pub fn mask_display(display: &str) -> String {
    let digit_count = display.chars().filter(|c| c.is_ascii_digit()).count();
    let hidden = digit_count.saturating_sub(4);

    let mut seen = 0;
    display
        .chars()
        .map(|c| {
            if c.is_ascii_digit() {
                seen += 1;
                if seen <= hidden {
                    return MASK_CHAR;
                }
            }
            c
        })
        .collect()
}

/// Masks a raw digit string, keeping only the last four digits.
///
/// # Example
///
/// ```
/// use phone_format::mask::mask_digits;
///
/// assert_eq!(mask_digits("(555) 123-4567"), "******4567");
/// ```
pub fn mask_digits(input: &str) -> String {
    let digits = crate::format::normalize_digits(input);
    let hidden = digits.len().saturating_sub(4);
    let mut result = String::with_capacity(digits.len());
    for _ in 0..hidden {
        result.push(MASK_CHAR);
    }
    result.push_str(&digits[hidden..]);
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{lookup_country, validate};

    #[test]
    fn test_mask_display_keeps_shape() {
        assert_eq!(mask_display("(555) 123-4567"), "(***) ***-4567");
        assert_eq!(mask_display("6 12 34 56 78"), "* ** ** 56 78");
        assert_eq!(mask_display("(11) 91234-5678"), "(**) *****-5678");
    }

    #[test]
    fn test_mask_short_input() {
        assert_eq!(mask_display(""), "");
        assert_eq!(mask_display("1234"), "1234");
        assert_eq!(mask_digits("12"), "12");
    }

    #[test]
    fn test_mask_digits_strips() {
        assert_eq!(mask_digits("98765-43210"), "******3210");
    }

    #[test]
    fn test_mask_phone() {
        let gb = lookup_country("+44", None).unwrap();
        let phone = validate("7911 123 4567", gb).unwrap();
        let masked = mask_phone(&phone);
        assert_eq!(masked, "**** *** 4567");
        assert!(!masked.contains("7911"));
    }
}
