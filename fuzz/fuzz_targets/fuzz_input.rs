//! Fuzz target for the input controller.
//!
//! Replays arbitrary edit sequences and checks that display and digits
//! stay in sync.

#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use phone_format::{format, registry, PhoneInput};

#[derive(Debug, Arbitrary)]
enum Edit {
    Input(String),
    Push(char),
    Backspace,
    Clear,
    SelectCountry(u8),
}

fuzz_target!(|edits: Vec<Edit>| {
    let countries = registry::all();
    let mut input = PhoneInput::new("", registry::default_country().clone());

    for edit in edits {
        let change = match edit {
            Edit::Input(raw) => input.input(&raw),
            Edit::Push(key) => input.push_digit(key),
            Edit::Backspace => input.backspace(),
            Edit::Clear => input.clear(),
            Edit::SelectCountry(i) => {
                input.select_country(countries[i as usize % countries.len()].clone())
            }
        };

        assert_eq!(format::normalize_digits(&change.display), change.digits);
        assert!(change.digits.len() <= input.country().max_significant_digits());
        assert_eq!(change.display, format::format_for_display(&change.digits, input.country()));
    }
});
