//! Batch validation for contact-list imports.
//!
//! This module validates many numbers against a single country, with
//! optional parallel processing using rayon.

use crate::country::{CountryPhoneSpec, ValidatedPhone};
use crate::error::ValidationError;
use crate::validate::{is_complete, validate};

/// Validates many numbers against one country.
///
/// # Example
///
/// ```
/// use phone_format::{lookup_country, BatchValidator};
///
/// let india = lookup_country("+91", None).unwrap();
/// let batch = BatchValidator::new(india);
/// let numbers = ["98765 43210", "98765", "91234-56789"];
/// let results = batch.validate_all(&numbers);
///
/// for (number, result) in numbers.iter().zip(results.iter()) {
///     match result {
///         Ok(phone) => println!("{}: {}", number, phone.masked()),
///         Err(e) => println!("{}: {}", number, e),
///     }
/// }
/// ```
#[derive(Debug, Clone, Copy)]
pub struct BatchValidator<'c> {
    country: &'c CountryPhoneSpec,
}

impl<'c> BatchValidator<'c> {
    /// Creates a batch validator for `country`.
    #[inline]
    pub fn new(country: &'c CountryPhoneSpec) -> Self {
        Self { country }
    }

    /// The country every number is checked against.
    #[inline]
    pub fn country(&self) -> &'c CountryPhoneSpec {
        self.country
    }

    /// Validates every number, returning results in input order.
    pub fn validate_all<S: AsRef<str>>(
        &self,
        numbers: &[S],
    ) -> Vec<Result<ValidatedPhone, ValidationError>> {
        numbers
            .iter()
            .map(|n| validate(n.as_ref(), self.country))
            .collect()
    }

    /// Returns only the complete numbers.
    pub fn complete_only<S: AsRef<str>>(&self, numbers: &[S]) -> Vec<ValidatedPhone> {
        numbers
            .iter()
            .filter_map(|n| validate(n.as_ref(), self.country).ok())
            .collect()
    }

    /// Splits into complete numbers and `(index, error)` pairs.
    pub fn validate_partitioned<S: AsRef<str>>(
        &self,
        numbers: &[S],
    ) -> (Vec<ValidatedPhone>, Vec<(usize, ValidationError)>) {
        let mut complete = Vec::new();
        let mut rejected = Vec::new();

        for (i, number) in numbers.iter().enumerate() {
            match validate(number.as_ref(), self.country) {
                Ok(phone) => complete.push(phone),
                Err(e) => rejected.push((i, e)),
            }
        }

        (complete, rejected)
    }

    /// Validates numbers in parallel using rayon.
    ///
    /// # Feature
    ///
    /// Requires the `parallel` feature to be enabled.
    #[cfg(feature = "parallel")]
    pub fn validate_parallel<S: AsRef<str> + Sync>(
        &self,
        numbers: &[S],
    ) -> Vec<Result<ValidatedPhone, ValidationError>> {
        use rayon::prelude::*;
        let country = self.country;
        numbers
            .par_iter()
            .map(|n| validate(n.as_ref(), country))
            .collect()
    }
}

/// Validates a slice of numbers without creating a `BatchValidator`.
///
/// # Example
///
/// ```
/// use phone_format::{batch::validate_batch, lookup_country};
///
/// let us = lookup_country("+1", None).unwrap();
/// let results = validate_batch(&["555-123-4567", "555"], us);
/// assert!(results[0].is_ok());
/// assert!(results[1].is_err());
/// ```
#[inline]
pub fn validate_batch<S: AsRef<str>>(
    numbers: &[S],
    country: &CountryPhoneSpec,
) -> Vec<Result<ValidatedPhone, ValidationError>> {
    BatchValidator::new(country).validate_all(numbers)
}

/// Counts complete and incomplete numbers without allocating results.
///
/// # Returns
///
/// Tuple of (complete_count, incomplete_count)
///
/// # Example
///
/// ```
/// use phone_format::{batch::count_complete, lookup_country};
///
/// let gb = lookup_country("+44", None).unwrap();
/// let (complete, incomplete) = count_complete(&["7911 123 4567", "7911"], gb);
/// assert_eq!((complete, incomplete), (1, 1));
/// ```
#[inline]
pub fn count_complete<S: AsRef<str>>(numbers: &[S], country: &CountryPhoneSpec) -> (usize, usize) {
    let complete = numbers
        .iter()
        .filter(|n| is_complete(n.as_ref(), country))
        .count();
    (complete, numbers.len() - complete)
}

/// Counts complete and incomplete numbers in parallel.
///
/// # Feature
///
/// Requires the `parallel` feature to be enabled.
#[cfg(feature = "parallel")]
#[inline]
pub fn count_complete_parallel<S: AsRef<str> + Sync>(
    numbers: &[S],
    country: &CountryPhoneSpec,
) -> (usize, usize) {
    use rayon::prelude::*;

    let complete = numbers
        .par_iter()
        .filter(|n| is_complete(n.as_ref(), country))
        .count();

    (complete, numbers.len() - complete)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::lookup_country;

    const COMPLETE_US: &str = "(555) 123-4567";
    const COMPLETE_US_2: &str = "416.555.0199";
    const SHORT: &str = "555-1234";

    fn us() -> &'static CountryPhoneSpec {
        lookup_country("+1", None).unwrap()
    }

    #[test]
    fn test_batch_validate_all() {
        let batch = BatchValidator::new(us());
        let numbers = vec![COMPLETE_US, SHORT, COMPLETE_US_2, ""];
        let results = batch.validate_all(&numbers);

        assert_eq!(results.len(), 4);
        assert!(results[0].is_ok());
        assert!(results[1].is_err());
        assert!(results[2].is_ok());
        assert_eq!(results[3].as_ref().unwrap_err(), &ValidationError::NoDigits);
    }

    #[test]
    fn test_batch_complete_only() {
        let batch = BatchValidator::new(us());
        let complete = batch.complete_only(&[COMPLETE_US, SHORT, COMPLETE_US_2]);
        assert_eq!(complete.len(), 2);
        assert_eq!(complete[1].digits(), "4165550199");
    }

    #[test]
    fn test_batch_partitioned() {
        let batch = BatchValidator::new(us());
        let numbers = vec![COMPLETE_US, SHORT, COMPLETE_US_2, "bad"];
        let (complete, rejected) = batch.validate_partitioned(&numbers);

        assert_eq!(complete.len(), 2);
        assert_eq!(rejected.len(), 2);
        assert_eq!(rejected[0].0, 1);
        assert_eq!(rejected[1].0, 3);
    }

    #[test]
    fn test_count_complete() {
        let (complete, incomplete) = count_complete(&[COMPLETE_US, SHORT, "bad"], us());
        assert_eq!(complete, 1);
        assert_eq!(incomplete, 2);
    }

    #[test]
    fn test_empty_batch() {
        let numbers: Vec<&str> = vec![];
        assert!(validate_batch(&numbers, us()).is_empty());
        assert_eq!(count_complete(&numbers, us()), (0, 0));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_validation() {
        let batch = BatchValidator::new(us());
        let numbers: Vec<String> = (0..1000).map(|_| COMPLETE_US.to_string()).collect();

        let results = batch.validate_parallel(&numbers);
        assert_eq!(results.len(), 1000);
        assert!(results.iter().all(|r| r.is_ok()));
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_count_complete_parallel() {
        let numbers = vec![COMPLETE_US, SHORT, COMPLETE_US_2, "bad"];
        assert_eq!(count_complete_parallel(&numbers, us()), (2, 2));
    }
}
