//! Sample phone numbers for tests and demo data.
//!
//! Every generated number is complete for its country. Deterministic
//! samples need no features; random generation requires `generate`.
//!
//! # Example
//!
//! ```
//! use phone_format::{generate::sample_number, is_complete, lookup_country};
//!
//! let jp = lookup_country("+81", None).unwrap();
//! let sample = sample_number(jp);
//! assert_eq!(sample, "9012345678");
//! assert!(is_complete(&sample, jp));
//! ```

use crate::country::CountryPhoneSpec;
use crate::format::normalize_digits;

#[cfg(feature = "generate")]
use rand::Rng;

/// A complete number derived from the country's placeholder example.
///
/// Countries without a usable placeholder get an ascending digit run
/// starting at `1`.
pub fn sample_number(country: &CountryPhoneSpec) -> String {
    let max = country.max_significant_digits();
    let placeholder = normalize_digits(country.placeholder_example());
    if placeholder.len() == max {
        return placeholder;
    }

    (0..max)
        .map(|i| char::from(b'0' + ((i + 1) % 10) as u8))
        .collect()
}

/// A random complete number with a non-zero first digit.
///
/// # Feature
///
/// Requires the `generate` feature.
#[cfg(feature = "generate")]
pub fn random_number(country: &CountryPhoneSpec) -> String {
    random_number_with(&mut rand::thread_rng(), country)
}

/// Random generation with a caller-supplied RNG, for reproducible data.
///
/// # Example
///
/// ```
/// use phone_format::{generate::random_number_with, lookup_country};
/// use rand::{rngs::StdRng, SeedableRng};
///
/// let br = lookup_country("+55", None).unwrap();
/// let a = random_number_with(&mut StdRng::seed_from_u64(7), br);
/// let b = random_number_with(&mut StdRng::seed_from_u64(7), br);
/// assert_eq!(a, b);
/// ```
#[cfg(feature = "generate")]
pub fn random_number_with<R: Rng + ?Sized>(rng: &mut R, country: &CountryPhoneSpec) -> String {
    let max = country.max_significant_digits();
    let mut number = String::with_capacity(max);
    for i in 0..max {
        let digit: u8 = if i == 0 {
            rng.gen_range(1..=9)
        } else {
            rng.gen_range(0..=9)
        };
        number.push(char::from(b'0' + digit));
    }
    number
}

/// Generates batches of numbers for one country.
#[cfg(feature = "generate")]
#[derive(Debug, Clone)]
pub struct SampleGenerator<'c> {
    country: &'c CountryPhoneSpec,
}

#[cfg(feature = "generate")]
impl<'c> SampleGenerator<'c> {
    /// Creates a generator for `country`.
    pub fn new(country: &'c CountryPhoneSpec) -> Self {
        Self { country }
    }

    /// `count` random numbers.
    pub fn generate(&self, count: usize) -> Vec<String> {
        let mut rng = rand::thread_rng();
        (0..count)
            .map(|_| random_number_with(&mut rng, self.country))
            .collect()
    }

    /// `count` random numbers formatted for display.
    pub fn generate_formatted(&self, count: usize) -> Vec<String> {
        self.generate(count)
            .iter()
            .map(|n| crate::format::format_for_display(n, self.country))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry;
    use crate::validate::is_complete;

    #[test]
    fn test_samples_complete_for_every_country() {
        for country in registry::all() {
            let sample = sample_number(country);
            assert!(is_complete(&sample, country), "{}: {}", country, sample);
        }
    }

    #[test]
    fn test_sample_without_placeholder() {
        let nz = CountryPhoneSpec::new("+64", "NZ", "New Zealand", "## ### ####", 9);
        assert_eq!(sample_number(&nz), "123456789");
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_random_numbers_complete() {
        for country in registry::all() {
            for _ in 0..20 {
                let number = random_number(country);
                assert!(is_complete(&number, country));
                assert!(!number.starts_with('0'));
            }
        }
    }

    #[cfg(feature = "generate")]
    #[test]
    fn test_generator_formatted() {
        let us = registry::default_country();
        let numbers = SampleGenerator::new(us).generate_formatted(5);
        assert_eq!(numbers.len(), 5);
        assert!(numbers.iter().all(|n| n.starts_with('(') && n.len() == 14));
    }
}
