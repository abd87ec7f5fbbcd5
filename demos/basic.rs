//! Basic phone formatting example.
//!
//! Run with: `cargo run --example basic`

use phone_format::{
    format, is_complete, list_countries, lookup_country, normalize_digits, validate,
    ValidationError,
};

fn main() {
    println!("=== Basic Phone Formatting ===\n");

    // Example 1: Country selector contents
    println!("Supported countries:");
    for country in list_countries() {
        println!(
            "  {} {:<5} {:<22} {}",
            country.symbol(),
            country.calling_code(),
            country.display_name(),
            country.placeholder_example()
        );
    }
    println!();

    // Example 2: Validate a full number
    let Some(us) = lookup_country("+1", None) else {
        eprintln!("+1 missing from registry");
        return;
    };
    let number = "+1 (555) 123-4567";
    println!("Validating {} against {}", number, us);

    match validate(&format::strip_calling_code(number, us), us) {
        Ok(phone) => {
            println!("  Complete: yes");
            println!("  Formatted: {}", phone.formatted());
            println!("  E.164: {}", phone.e164());
            println!("  Masked: {}", phone.masked());
        }
        Err(e) => {
            println!("  Complete: no");
            println!("  Error: {}", e);
        }
    }
    println!();

    // Example 3: Quick boolean checks
    let checks = [
        ("+91", None, "98765 43210"),
        ("+44", None, "7911 123"),
        ("+1", Some("CA"), "416-555-0199"),
        ("+999", None, "1234567890"),
    ];

    println!("Completeness checks:");
    for (code, iso, number) in checks {
        let country = lookup_country(code, iso);
        println!(
            "  {} {:<4} {:<14} {}",
            code,
            iso.unwrap_or(""),
            number,
            if is_complete(number, country) { "COMPLETE" } else { "INCOMPLETE" }
        );
    }
    println!();

    // Example 4: Error handling
    println!("Error handling:");
    let cases = ["", "555", "555123456789"];
    for input in cases {
        match validate(input, us) {
            Ok(_) => println!("  {:?}: complete", input),
            Err(ValidationError::NoDigits) => println!("  {:?}: nothing entered", input),
            Err(ValidationError::TooShort { length, required }) => {
                println!("  {:?}: {} more digits needed", input, required - length)
            }
            Err(e) => println!("  {:?}: {}", input, e),
        }
    }
    println!();

    // Example 5: Normalization
    println!("Normalization:");
    for raw in ["(555) 123-4567", "555.123.4567", "call 555 now"] {
        println!("  {:<16} -> {}", raw, normalize_digits(raw));
    }
}
