//! Fuzz target for phone formatting.
//!
//! Formatting must never panic and must keep the digits it was given.

#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_format::{format, registry};

fuzz_target!(|data: &str| {
    let digits = format::normalize_digits(data);
    assert!(digits.bytes().all(|b| b.is_ascii_digit()));
    let _ = format::is_valid_format(data);

    for country in registry::all() {
        let formatted = format::format_for_display(data, country);
        let _ = format::split_into_groups(data, country);
        let _ = format::format_e164(data, country);
        let _ = format::strip_calling_code(data, country);

        // Roundtrip keeps the truncated digits
        let max = country.max_significant_digits();
        let expected = &digits[..digits.len().min(max)];
        assert_eq!(format::normalize_digits(&formatted), expected);

        // Formatting is idempotent
        assert_eq!(format::format_for_display(&formatted, country), formatted);
    }

    // Unknown calling codes pass digits through
    assert_eq!(format::format_for_calling_code(data, "+999"), digits);
});
