//! Batch and streaming validation example.
//!
//! Run with: `cargo run --example batch`

use phone_format::{
    batch::{count_complete, BatchValidator},
    lookup_country,
    stream::FormatExt,
};

fn main() {
    println!("=== Batch Phone Validation ===\n");

    let Some(india) = lookup_country("+91", None) else {
        eprintln!("+91 missing from registry");
        return;
    };

    let numbers = vec![
        "98765 43210",
        "98765-4321",
        "+91 98765 43210",
        "",
        "91234 56789",
        "not a number",
    ];

    // Example 1: Validate all, with results
    println!("Validate all:");
    let batch = BatchValidator::new(india);
    for (number, result) in numbers.iter().zip(batch.validate_all(&numbers)) {
        match result {
            Ok(phone) => println!("  {:<18} OK   {}", number, phone.masked()),
            Err(e) => println!("  {:<18} FAIL {}", number, e),
        }
    }
    println!();

    // Example 2: Partition
    let (complete, rejected) = batch.validate_partitioned(&numbers);
    println!("Partitioned: {} complete, {} rejected", complete.len(), rejected.len());
    for (index, error) in &rejected {
        println!("  [{}] {}", index, error);
    }
    println!();

    // Example 3: Counting only
    let (ok, bad) = count_complete(&numbers, india);
    println!("Counts: {} complete, {} incomplete\n", ok, bad);

    // Example 4: Streaming
    println!("Formatted stream:");
    for display in numbers.iter().format_each(india) {
        println!("  {:?}", display);
    }
    println!();

    println!("Complete-only stream:");
    for phone in numbers.iter().complete_only(india) {
        println!("  {}", phone.e164());
    }

    // Example 5: Parallel (if enabled)
    #[cfg(feature = "parallel")]
    {
        let many: Vec<String> = (0..10_000).map(|i| format!("98765{:05}", i)).collect();
        let results = batch.validate_parallel(&many);
        println!("\nParallel: {} validated", results.iter().filter(|r| r.is_ok()).count());
    }
}
