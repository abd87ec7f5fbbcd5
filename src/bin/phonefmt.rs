//! CLI tool for phone number formatting.
//!
//! # Usage
//!
//! ```bash
//! # List supported countries
//! phonefmt countries
//!
//! # Format a number
//! phonefmt format 9876543210 --code +91
//!
//! # Check completeness (exit code 1 when incomplete)
//! phonefmt validate "(416) 555-0199" --code +1 --iso CA --output json
//!
//! # Generate sample numbers
//! phonefmt sample --code +44 --count 3 --formatted
//! ```

use clap::{Parser, Subcommand, ValueEnum};
use phone_format::{format, generate, mask, registry, validate, CountryPhoneSpec};

#[derive(Parser)]
#[command(name = "phonefmt")]
#[command(author, version, about = "Country-aware phone number formatting tool")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(clap::Args)]
struct CountryArgs {
    /// Calling code, e.g. +1 or +91
    #[arg(short, long, default_value = "+1")]
    code: String,

    /// ISO country to disambiguate shared calling codes, e.g. CA
    #[arg(short, long)]
    iso: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// List supported countries
    Countries,

    /// Look up a country by calling code
    Lookup {
        #[command(flatten)]
        country: CountryArgs,
    },

    /// Strip everything but digits
    Normalize {
        /// Raw input
        input: String,
    },

    /// Format a number for display
    Format {
        /// Number to format (any separators allowed)
        number: String,

        #[command(flatten)]
        country: CountryArgs,
    },

    /// Check that a number is complete for its country
    Validate {
        /// Number to validate
        number: String,

        #[command(flatten)]
        country: CountryArgs,

        /// Output format
        #[arg(short, long, default_value = "text")]
        output: OutputFormat,
    },

    /// Print the number as +<code><digits>
    E164 {
        /// Number to convert
        number: String,

        #[command(flatten)]
        country: CountryArgs,
    },

    /// Generate sample numbers (for testing only)
    Sample {
        #[command(flatten)]
        country: CountryArgs,

        /// Number of samples to generate
        #[arg(short = 'n', long, default_value = "1")]
        count: usize,

        /// Output formatted for display
        #[arg(short, long)]
        formatted: bool,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Commands::Countries => cmd_countries(),
        Commands::Lookup { country } => cmd_lookup(&country),
        Commands::Normalize { input } => {
            println!("{}", format::normalize_digits(&input));
        }
        Commands::Format { number, country } => {
            let spec = resolve(&country);
            println!("{}", format::format_for_display(&number, spec));
        }
        Commands::Validate {
            number,
            country,
            output,
        } => cmd_validate(&number, &country, output),
        Commands::E164 { number, country } => {
            let spec = resolve(&country);
            println!("{}", format::format_e164(&number, spec));
        }
        Commands::Sample {
            country,
            count,
            formatted,
        } => cmd_sample(resolve(&country), count, formatted),
    }
}

/// Resolves the country or exits with status 1.
fn resolve(args: &CountryArgs) -> &'static CountryPhoneSpec {
    match registry::lookup_country(&args.code, args.iso.as_deref()) {
        Some(country) => country,
        None => {
            eprintln!(
                "Error: unsupported country {}{}",
                args.code,
                args.iso.as_deref().map(|i| format!(" {}", i)).unwrap_or_default()
            );
            std::process::exit(1);
        }
    }
}

fn cmd_countries() {
    for country in registry::all() {
        println!(
            "{} {:<5} {:<3} {:<22} {:<16} {}",
            country.symbol(),
            country.calling_code(),
            country.iso_country(),
            country.display_name(),
            country.format_template(),
            country.max_significant_digits()
        );
    }
}

fn cmd_lookup(args: &CountryArgs) {
    let country = resolve(args);
    println!("Country: {}", country.display_name());
    println!("ISO: {}", country.iso_country());
    println!("Calling Code: {}", country.calling_code());
    println!("Template: {}", country.format_template());
    println!("Placeholder: {}", country.placeholder_example());
    println!("Digits: {}", country.max_significant_digits());
}

fn cmd_validate(number: &str, args: &CountryArgs, output: OutputFormat) {
    let country = registry::lookup_country(&args.code, args.iso.as_deref());

    match validate(number, country) {
        Ok(phone) => {
            match output {
                OutputFormat::Text => {
                    println!("Complete: yes");
                    println!("Country: {}", phone.country().display_name());
                    println!("Formatted: {}", phone.formatted());
                    println!("E.164: {}", phone.e164());
                }
                OutputFormat::Json => {
                    println!("{{");
                    println!("  \"complete\": true,");
                    println!("  \"calling_code\": \"{}\",", phone.country().calling_code());
                    println!("  \"iso_country\": \"{}\",", phone.country().iso_country());
                    println!("  \"formatted\": \"{}\",", phone.formatted());
                    println!("  \"masked\": \"{}\"", phone.masked());
                    println!("}}");
                }
            }
            std::process::exit(0);
        }
        Err(e) => {
            match output {
                OutputFormat::Text => {
                    println!("Complete: no");
                    println!("Masked: {}", mask::mask_digits(number));
                    println!("Error: {}", e);
                }
                OutputFormat::Json => {
                    println!("{{");
                    println!("  \"complete\": false,");
                    println!("  \"error\": \"{}\"", e);
                    println!("}}");
                }
            }
            std::process::exit(1);
        }
    }
}

fn cmd_sample(country: &CountryPhoneSpec, count: usize, formatted: bool) {
    for _ in 0..count {
        let number = generate::random_number(country);
        if formatted {
            println!("{}", format::format_for_display(&number, country));
        } else {
            println!("{}", number);
        }
    }
}
