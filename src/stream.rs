//! Iterator adapters for formatting and validating phone numbers.
//!
//! Useful for contact imports and for replaying keystrokes through the
//! progressive formatter without building intermediate collections.
//!
//! # Example
//!
//! ```
//! use phone_format::{lookup_country, stream::FormatExt};
//!
//! let india = lookup_country("+91", None).unwrap();
//! let shown: Vec<String> = "987654".chars().keystrokes(india).collect();
//! assert_eq!(shown, ["9", "98", "987", "9876", "98765", "98765-4"]);
//! ```

use crate::country::{CountryPhoneSpec, ValidatedPhone};
use crate::error::ValidationError;
use crate::format::format_for_display;
use crate::input::PhoneInput;
use crate::validate::validate;

/// Formats each number yielded by the inner iterator.
///
/// Created by [`FormatExt::format_each`].
#[derive(Debug, Clone)]
pub struct FormatStream<'c, I> {
    inner: I,
    country: &'c CountryPhoneSpec,
}

impl<'c, I, S> Iterator for FormatStream<'c, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|s| format_for_display(s.as_ref(), self.country))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

impl<'c, I, S> ExactSizeIterator for FormatStream<'c, I>
where
    I: ExactSizeIterator<Item = S>,
    S: AsRef<str>,
{
}

impl<'c, I, S> DoubleEndedIterator for FormatStream<'c, I>
where
    I: DoubleEndedIterator<Item = S>,
    S: AsRef<str>,
{
    #[inline]
    fn next_back(&mut self) -> Option<Self::Item> {
        self.inner
            .next_back()
            .map(|s| format_for_display(s.as_ref(), self.country))
    }
}

/// Validates each number yielded by the inner iterator.
///
/// Created by [`FormatExt::validate_each`].
#[derive(Debug, Clone)]
pub struct ValidateStream<'c, I> {
    inner: I,
    country: &'c CountryPhoneSpec,
}

impl<'c, I, S> Iterator for ValidateStream<'c, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = Result<ValidatedPhone, ValidationError>;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next().map(|s| validate(s.as_ref(), self.country))
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Yields only the numbers complete for the country.
///
/// Created by [`FormatExt::complete_only`].
#[derive(Debug, Clone)]
pub struct CompleteOnlyStream<'c, I> {
    inner: I,
    country: &'c CountryPhoneSpec,
}

impl<'c, I, S> Iterator for CompleteOnlyStream<'c, I>
where
    I: Iterator<Item = S>,
    S: AsRef<str>,
{
    type Item = ValidatedPhone;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        let country = self.country;
        self.inner
            .by_ref()
            .find_map(|s| validate(s.as_ref(), country).ok())
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        let (_, upper) = self.inner.size_hint();
        (0, upper)
    }
}

/// Replays single keystrokes through a [`PhoneInput`], yielding the display
/// string after each one.
///
/// Created by [`FormatExt::keystrokes`].
#[derive(Debug, Clone)]
pub struct KeystrokeStream<I> {
    inner: I,
    input: PhoneInput,
}

impl<I> KeystrokeStream<I> {
    /// The input after the keystrokes consumed so far.
    #[inline]
    pub fn input(&self) -> &PhoneInput {
        &self.input
    }
}

impl<I> Iterator for KeystrokeStream<I>
where
    I: Iterator<Item = char>,
{
    type Item = String;

    #[inline]
    fn next(&mut self) -> Option<Self::Item> {
        self.inner
            .next()
            .map(|key| self.input.push_digit(key).display)
    }

    #[inline]
    fn size_hint(&self) -> (usize, Option<usize>) {
        self.inner.size_hint()
    }
}

/// Extension trait adding phone adapters to any iterator.
pub trait FormatExt: Iterator + Sized {
    /// Formats each item for display under `country`.
    ///
    /// # Example
    ///
    /// ```
    /// use phone_format::{lookup_country, stream::FormatExt};
    ///
    /// let jp = lookup_country("+81", None).unwrap();
    /// let out: Vec<_> = ["9012345678", "03"].iter().format_each(jp).collect();
    /// assert_eq!(out, ["90-1234-5678", "03"]);
    /// ```
    fn format_each(self, country: &CountryPhoneSpec) -> FormatStream<'_, Self>;

    /// Validates each item against `country`.
    fn validate_each(self, country: &CountryPhoneSpec) -> ValidateStream<'_, Self>;

    /// Validates and yields only complete numbers.
    ///
    /// # Example
    ///
    /// ```
    /// use phone_format::{lookup_country, stream::FormatExt};
    ///
    /// let sg = lookup_country("+65", None).unwrap();
    /// let numbers = ["8123 4567", "812", "9123-4567"];
    /// let complete: Vec<_> = numbers.iter().complete_only(sg).collect();
    /// assert_eq!(complete.len(), 2);
    /// ```
    fn complete_only(self, country: &CountryPhoneSpec) -> CompleteOnlyStream<'_, Self>;

    /// Types each `char` into a fresh input for `country`.
    fn keystrokes(self, country: &CountryPhoneSpec) -> KeystrokeStream<Self>
    where
        Self: Iterator<Item = char>;
}

impl<I: Iterator + Sized> FormatExt for I {
    #[inline]
    fn format_each(self, country: &CountryPhoneSpec) -> FormatStream<'_, Self> {
        FormatStream {
            inner: self,
            country,
        }
    }

    #[inline]
    fn validate_each(self, country: &CountryPhoneSpec) -> ValidateStream<'_, Self> {
        ValidateStream {
            inner: self,
            country,
        }
    }

    #[inline]
    fn complete_only(self, country: &CountryPhoneSpec) -> CompleteOnlyStream<'_, Self> {
        CompleteOnlyStream {
            inner: self,
            country,
        }
    }

    #[inline]
    fn keystrokes(self, country: &CountryPhoneSpec) -> KeystrokeStream<Self>
    where
        Self: Iterator<Item = char>,
    {
        KeystrokeStream {
            inner: self,
            input: PhoneInput::new("", country.clone()),
        }
    }
}
