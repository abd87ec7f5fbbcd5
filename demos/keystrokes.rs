//! Progressive formatting as a user types.
//!
//! Run with: `cargo run --example keystrokes`

use phone_format::{registry, stream::FormatExt, PhoneInput};

fn main() {
    println!("=== Typing Into a Phone Field ===\n");

    // Example 1: One key at a time
    let us = registry::default_country();
    println!("{} ({}):", us.display_name(), us.format_template());
    for display in "5551234567".chars().keystrokes(us) {
        println!("  {}", display);
    }
    println!();

    // Example 2: Every country, same keys
    println!("Same keys, every country:");
    for country in registry::all() {
        let mut input = PhoneInput::new("", country.clone());
        let change = input.input("98765432109");
        println!(
            "  {} {:<5} {:<16} complete={}",
            country.iso_country(),
            change.calling_code,
            change.display,
            input.is_complete()
        );
    }
    println!();

    // Example 3: Switching country mid-entry
    println!("Country switch:");
    let mut input = PhoneInput::new("79111234567", registry::lookup_or_default("+44", None).clone());
    println!("  {} {}", input.country().iso_country(), input.display());

    let change = input.select_country(registry::lookup_or_default("+65", None).clone());
    println!("  {} {} (digits now {})", change.iso_country, change.display, change.digits);

    // Example 4: Editing
    println!("\nBackspace:");
    while !input.digits().is_empty() {
        let change = input.backspace();
        println!("  {:?}", change.display);
    }
}
