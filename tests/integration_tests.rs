//! Integration tests for phone_format.
//!
//! These tests cover per-country formatting, typing sequences, validation
//! boundaries, and runtime country tables.

use phone_format::{
    batch::{count_complete, BatchValidator},
    format, is_complete, list_countries, lookup_country, mask, normalize_digits,
    registry::{self, CountryCatalog, CountryTable, CountryTableBuilder, RegistryError},
    stream::FormatExt,
    validate, CountryPhoneSpec, PhoneInput, PhoneRule, ValidationError,
};

fn country(code: &str, iso: &str) -> &'static CountryPhoneSpec {
    lookup_country(code, Some(iso)).unwrap()
}

// =============================================================================
// REGISTRY
// =============================================================================

#[test]
fn test_registry_order_and_size() {
    let isos: Vec<&str> = list_countries().iter().map(|c| c.iso_country()).collect();
    assert_eq!(
        isos,
        ["US", "CA", "IN", "GB", "AU", "DE", "FR", "JP", "CN", "AE", "SG", "MX", "BR", "ZA"]
    );
}

#[test]
fn test_registry_entries_are_consistent() {
    for c in list_countries() {
        assert!(c.is_consistent(), "{} template disagrees with digit count", c);
        assert!(c.calling_code().starts_with('+'));
        assert_eq!(c.iso_country().len(), 2);
        assert!(!c.symbol().is_empty());
    }
}

#[test]
fn test_calling_codes_unique_except_north_america() {
    for (i, a) in list_countries().iter().enumerate() {
        for b in &list_countries()[i + 1..] {
            if a.calling_code() == b.calling_code() {
                assert_eq!(a.calling_code(), "+1");
            }
        }
    }
}

#[test]
fn test_shared_code_resolution() {
    assert_eq!(lookup_country("+1", None).unwrap().iso_country(), "US");
    assert_eq!(lookup_country("+1", Some("US")).unwrap().iso_country(), "US");
    assert_eq!(lookup_country("+1", Some("CA")).unwrap().display_name(), "Canada");
    assert!(lookup_country("+1", Some("MX")).is_none());
    assert!(lookup_country("+1", Some("ca")).is_none());
}

#[test]
fn test_lookup_misses() {
    assert!(lookup_country("+999", None).is_none());
    assert!(lookup_country("", None).is_none());
    assert!(lookup_country("1", None).is_none());
    assert_eq!(registry::lookup_or_default("+999", None).iso_country(), "US");
    assert_eq!(registry::default_country(), &list_countries()[0]);
}

#[test]
fn test_find_by_iso() {
    assert_eq!(registry::find_by_iso("ZA").unwrap().calling_code(), "+27");
    assert_eq!(registry::find_by_iso("AE").unwrap().calling_code(), "+971");
    assert!(registry::find_by_iso("XX").is_none());
}

#[test]
fn test_rules_follow_calling_code() {
    assert_eq!(country("+1", "CA").rule(), PhoneRule::NorthAmerica);
    assert_eq!(country("+55", "BR").rule(), PhoneRule::Brazil);
    assert_eq!(PhoneRule::for_calling_code("+64"), PhoneRule::Identity);
}

// =============================================================================
// FORMATTING - COMPLETE NUMBERS
// =============================================================================

#[test]
fn test_full_numbers_every_country() {
    let cases = [
        ("+1", "US", "5551234567", "(555) 123-4567"),
        ("+1", "CA", "4165550199", "(416) 555-0199"),
        ("+91", "IN", "9876543210", "98765-43210"),
        ("+44", "GB", "79111234567", "7911 123 4567"),
        ("+61", "AU", "0412345678", "0412 345 678"),
        ("+49", "DE", "15123456789", "151 23456789"),
        ("+33", "FR", "612345678", "6 12 34 56 78"),
        ("+81", "JP", "9012345678", "90-1234-5678"),
        ("+86", "CN", "13800138000", "138 0013 8000"),
        ("+971", "AE", "501234567", "50 123 4567"),
        ("+65", "SG", "81234567", "8123 4567"),
        ("+52", "MX", "5512345678", "55 1234 5678"),
        ("+55", "BR", "11912345678", "(11) 91234-5678"),
        ("+27", "ZA", "821234567", "82 123 4567"),
    ];

    for (code, iso, digits, expected) in cases {
        let c = country(code, iso);
        assert_eq!(format::format_for_display(digits, c), expected, "{}", iso);
        assert!(is_complete(digits, c), "{}", iso);
    }
}

#[test]
fn test_placeholders_match_formatting() {
    for c in list_countries() {
        let digits = normalize_digits(c.placeholder_example());
        assert_eq!(digits.len(), c.max_significant_digits(), "{}", c);
        assert_eq!(format::format_for_display(&digits, c), c.placeholder_example());
    }
}

#[test]
fn test_full_numbers_match_template_shape() {
    for c in list_countries() {
        let digits = "1".repeat(c.max_significant_digits());
        let shaped: String = format::format_for_display(&digits, c)
            .chars()
            .map(|ch| if ch.is_ascii_digit() { '#' } else { ch })
            .collect();
        assert_eq!(shaped, c.format_template(), "{}", c);
    }
}

// =============================================================================
// FORMATTING - PROGRESSIVE
// =============================================================================

#[test]
fn test_us_typing_sequence() {
    let us = country("+1", "US");
    let expected = [
        "",
        "5",
        "55",
        "555",
        "(555) 1",
        "(555) 12",
        "(555) 123",
        "(555) 123-4",
        "(555) 123-45",
        "(555) 123-456",
        "(555) 123-4567",
    ];
    for (n, want) in expected.iter().enumerate() {
        assert_eq!(format::format_for_display(&"5551234567"[..n], us), *want);
    }
}

#[test]
fn test_brazil_typing_sequence() {
    let br = country("+55", "BR");
    assert_eq!(format::format_for_display("1", br), "1");
    assert_eq!(format::format_for_display("11", br), "11");
    assert_eq!(format::format_for_display("119", br), "(11) 9");
    assert_eq!(format::format_for_display("1191234", br), "(11) 91234");
    assert_eq!(format::format_for_display("11912345", br), "(11) 91234-5");
}

#[test]
fn test_display_never_ends_with_separator() {
    for c in list_countries() {
        let full = "98765432109";
        for n in 1..=c.max_significant_digits() {
            let display = format::format_for_display(&full[..n], c);
            let last = display.chars().last().unwrap();
            assert!(last.is_ascii_digit(), "{} {:?}", c, display);
        }
    }
}

#[test]
fn test_extra_digits_truncated() {
    let sg = country("+65", "SG");
    assert_eq!(format::format_for_display("81234567999", sg), "8123 4567");

    let fr = country("+33", "FR");
    assert_eq!(format::format_for_display("6123456789", fr), "6 12 34 56 78");
}

#[test]
fn test_formatting_ignores_punctuation_in_input() {
    let jp = country("+81", "JP");
    assert_eq!(format::format_for_display("(90) 1234.5678", jp), "90-1234-5678");
    assert_eq!(format::format_for_display("abc", jp), "");
}

#[test]
fn test_unknown_calling_code_is_identity() {
    assert_eq!(format::format_for_calling_code("+64 21 123 4567", "+64"), "64211234567");
    assert_eq!(format::format_for_calling_code("5551234567", "+1"), "(555) 123-4567");
}

#[test]
fn test_runtime_country_formats_as_identity() {
    let nz = CountryPhoneSpec::new("+64", "NZ", "New Zealand", "## ### ####", 9);
    assert_eq!(format::format_for_display("211234567", &nz), "211234567");
    assert_eq!(format::format_for_display("2112345678", &nz), "211234567");
}

#[test]
fn test_e164_and_strip() {
    let gb = country("+44", "GB");
    assert_eq!(format::format_e164("7911 123 4567", gb), "+4479111234567");
    assert_eq!(format::strip_calling_code("+44 7911 123 4567", gb), "79111234567");
    assert_eq!(format::strip_calling_code("7911 123 4567", gb), "79111234567");
}

// =============================================================================
// VALIDATION
// =============================================================================

#[test]
fn test_validation_boundaries() {
    for c in list_countries() {
        let max = c.max_significant_digits();
        let long = "9".repeat(max + 1);
        assert!(!is_complete(&long[..max - 1], c));
        assert!(is_complete(&long[..max], c));
        assert!(!is_complete(&long, c));
    }
}

#[test]
fn test_validation_errors() {
    let us = country("+1", "US");

    assert_eq!(validate("", us).unwrap_err(), ValidationError::NoDigits);
    assert_eq!(validate("---", us).unwrap_err(), ValidationError::NoDigits);
    assert_eq!(
        validate("555123", us).unwrap_err(),
        ValidationError::TooShort {
            length: 6,
            required: 10
        }
    );
    assert_eq!(
        validate("+1 555 123 4567", us).unwrap_err(),
        ValidationError::TooLong {
            length: 11,
            maximum: 10
        }
    );
    assert_eq!(
        validate("5551234567", lookup_country("+999", None)).unwrap_err(),
        ValidationError::UnknownCountry
    );
}

#[test]
fn test_error_messages() {
    let us = country("+1", "US");
    assert_eq!(
        validate("555123", us).unwrap_err().to_string(),
        "phone number is incomplete: got 6 digits, expected 10"
    );
    assert_eq!(ValidationError::UnknownCountry.to_string(), "unsupported country code");
}

#[test]
fn test_validate_agrees_with_is_complete() {
    let inputs = ["", "1", "98765", "9876543210", "98765-43210", "919876543210"];
    for c in list_countries() {
        for input in inputs {
            assert_eq!(validate(input, c).is_ok(), is_complete(input, c));
        }
    }
}

#[test]
fn test_validated_phone_accessors() {
    let za = country("+27", "ZA");
    let phone = validate("82 123 4567", za).unwrap();

    assert_eq!(phone.digits(), "821234567");
    assert_eq!(phone.country(), za);
    assert_eq!(phone.formatted(), "82 123 4567");
    assert_eq!(phone.e164(), "+27821234567");
    assert_eq!(phone.last_four(), "4567");
    assert_eq!(phone.masked(), "** *** 4567");
}

#[test]
fn test_validated_phone_never_prints_digits() {
    let us = country("+1", "US");
    let phone = validate("5551234567", us).unwrap();

    let debug = format!("{:?}", phone);
    let display = format!("{}", phone);
    assert!(!debug.contains("555123"));
    assert!(!display.contains("555123"));
    assert!(display.contains("4567"));
}

// =============================================================================
// INPUT CONTROLLER
// =============================================================================

#[test]
fn test_input_typing_emits_changes() {
    let mut input = PhoneInput::new("", country("+1", "US").clone());
    let mut last = None;
    for key in "5551234".chars() {
        last = Some(input.push_digit(key));
    }
    let change = last.unwrap();
    assert_eq!(change.digits, "5551234");
    assert_eq!(change.display, "(555) 123-4");
    assert_eq!(change.calling_code, "+1");
    assert_eq!(change.iso_country, "US");
}

#[test]
fn test_input_paste_and_overflow() {
    let mut input = PhoneInput::new("", country("+91", "IN").clone());
    let change = input.input("+91 98765 43210");
    // Pasted calling code digits count toward the maximum
    assert_eq!(change.digits, "9198765432");
    assert_eq!(change.display, "91987-65432");

    input.push_digit('9');
    assert_eq!(input.digits(), "9198765432");
}

#[test]
fn test_input_country_switch_retruncates() {
    let mut input = PhoneInput::new("79111234567", country("+44", "GB").clone());
    assert_eq!(input.display(), "7911 123 4567");

    let change = input.select_country(country("+65", "SG").clone());
    assert_eq!(change.digits, "79111234");
    assert_eq!(change.display, "7911 1234");
    assert_eq!(change.calling_code, "+65");

    let change = input.select_country(country("+44", "GB").clone());
    assert_eq!(change.digits, "79111234");
    assert_eq!(change.display, "7911 123 4");
}

#[test]
fn test_input_backspace_and_clear() {
    let mut input = PhoneInput::new("5551234", country("+1", "CA").clone());
    assert_eq!(input.backspace().display, "(555) 123");
    assert_eq!(input.backspace().display, "(555) 12");
    assert_eq!(input.clear().display, "");
    assert_eq!(input.backspace().digits, "");
}

#[test]
fn test_input_ignores_non_digit_keys() {
    let mut input = PhoneInput::new("", country("+81", "JP").clone());
    input.push_digit('9');
    let change = input.push_digit('x');
    assert_eq!(change.digits, "9");
    assert_eq!(change.display, "9");
}

// =============================================================================
// BATCH AND STREAMS
// =============================================================================

#[test]
fn test_batch_validator() {
    let au = country("+61", "AU");
    let numbers = ["0412 345 678", "0412", "", "04123456789"];

    let results = BatchValidator::new(au).validate_all(&numbers);
    assert!(results[0].is_ok());
    assert!(matches!(results[1], Err(ValidationError::TooShort { .. })));
    assert!(matches!(results[2], Err(ValidationError::NoDigits)));
    assert!(matches!(results[3], Err(ValidationError::TooLong { .. })));

    assert_eq!(count_complete(&numbers, au), (1, 3));
}

#[test]
fn test_streams() {
    let mx = country("+52", "MX");
    let formatted: Vec<String> = ["5512345678", "55"].iter().format_each(mx).collect();
    assert_eq!(formatted, ["55 1234 5678", "55"]);

    let displays: Vec<String> = "5512".chars().keystrokes(mx).collect();
    assert_eq!(displays, ["5", "55", "55 1", "55 12"]);
}

#[test]
fn test_mask_helpers() {
    assert_eq!(mask::mask_display("138 0013 8000"), "*** **** 8000");
    assert_eq!(mask::mask_digits("4567"), "4567");
}

// =============================================================================
// RUNTIME TABLES
// =============================================================================

#[test]
fn test_builtin_table_matches_registry() {
    let table = CountryTable::builtin();
    assert_eq!(table.len(), 14);
    assert_eq!(table.find_by_calling_code("+1"), registry::find_by_calling_code("+1"));
    assert_eq!(table.lookup_or_default("+999", None).iso_country(), "US");
}

#[test]
fn test_table_builder_appends() {
    let table = CountryTableBuilder::from_builtin()
        .push(CountryPhoneSpec::new("+64", "NZ", "New Zealand", "## ### ####", 9))
        .build()
        .unwrap();
    assert_eq!(table.len(), 15);
    assert_eq!(table.lookup("+64", None).unwrap().iso_country(), "NZ");
}

#[test]
fn test_table_builder_rejects_bad_tables() {
    assert!(matches!(
        CountryTableBuilder::new().build(),
        Err(RegistryError::Empty)
    ));

    let bad = CountryTableBuilder::new()
        .push(CountryPhoneSpec::new("+64", "NZ", "New Zealand", "## ### ####", 10))
        .build();
    assert!(matches!(bad, Err(RegistryError::InconsistentTemplate { .. })));

    let dup = CountryTableBuilder::from_builtin()
        .push(CountryPhoneSpec::new("+1", "CA", "Canada", "(###) ###-####", 10))
        .build();
    assert!(matches!(dup, Err(RegistryError::Duplicate { .. })));
}

#[cfg(feature = "registry-json")]
#[test]
fn test_json_table_roundtrip() {
    use phone_format::registry::JsonCountryLoader;

    let json = JsonCountryLoader::to_json(&CountryTable::builtin()).unwrap();
    let table = JsonCountryLoader::parse(&json).unwrap();
    assert_eq!(table.entries(), registry::all());
}

#[cfg(feature = "registry-json")]
#[test]
fn test_json_table_errors() {
    use phone_format::registry::JsonCountryLoader;

    assert!(matches!(JsonCountryLoader::parse("[]"), Err(RegistryError::Empty)));
    assert!(matches!(JsonCountryLoader::parse("{"), Err(RegistryError::Parse(_))));
}
