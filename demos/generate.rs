//! Sample number generation for tests and demo data.
//!
//! Run with: `cargo run --example generate --features generate`

use phone_format::{
    generate::{random_number_with, sample_number, SampleGenerator},
    is_complete, registry,
};
use rand::{rngs::StdRng, SeedableRng};

fn main() {
    println!("=== Sample Phone Numbers ===\n");

    // Example 1: Deterministic samples from placeholders
    println!("Deterministic samples:");
    for country in registry::all() {
        let sample = sample_number(country);
        println!(
            "  {} {:<12} complete={}",
            country.iso_country(),
            sample,
            is_complete(&sample, country)
        );
    }
    println!();

    // Example 2: Random, formatted
    println!("Random (formatted):");
    for country in registry::all().iter().take(4) {
        let numbers = SampleGenerator::new(country).generate_formatted(3);
        println!("  {} {}", country.calling_code(), numbers.join(", "));
    }
    println!();

    // Example 3: Reproducible with a seed
    let mut rng = StdRng::seed_from_u64(42);
    let br = registry::lookup_or_default("+55", None);
    println!("Seeded (+55):");
    for _ in 0..3 {
        println!("  {}", random_number_with(&mut rng, br));
    }
}
