//! Stateful phone input controller.
//!
//! `PhoneInput` is the layer that sits between a text field and the
//! formatter. It holds the selected country and the canonical digits,
//! re-formats on every keystroke or country change, and reports each change
//! as a [`PhoneChange`] for the owner to forward.
//!
//! The controller never validates on its own. `is_complete` is available for
//! the owning form to call when it decides to.
//!
//! # Example
//!
//! ```
//! use phone_format::{lookup_country, PhoneInput};
//!
//! let us = lookup_country("+1", None).unwrap();
//! let mut input = PhoneInput::new("", us.clone());
//!
//! let change = input.input("555-1234");
//! assert_eq!(change.display, "(555) 123-4");
//! assert_eq!(change.digits, "5551234");
//! assert_eq!(change.calling_code, "+1");
//! assert_eq!(change.iso_country, "US");
//! ```

use crate::country::CountryPhoneSpec;
use crate::format::{format_for_display, normalize_digits};

/// The canonical state behind one phone input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneEditState {
    /// Digits only, no calling code, truncated to the country's maximum.
    pub raw_digits: String,
    /// Country whose rule formats `raw_digits`.
    pub selected_country: CountryPhoneSpec,
}

/// What an input reports to its owner after every change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PhoneChange {
    /// Canonical digits after the change.
    pub digits: String,
    /// Display string for the text field.
    pub display: String,
    /// Calling code of the selected country.
    pub calling_code: String,
    /// ISO identifier of the selected country.
    pub iso_country: String,
}

/// Holds one input's edit state and keeps its display in sync.
#[derive(Debug, Clone)]
pub struct PhoneInput {
    state: PhoneEditState,
    display: String,
}

impl PhoneInput {
    /// Mounts an input with an initial value and country.
    ///
    /// `initial` may contain formatting; it is normalized and truncated.
    pub fn new(initial: &str, country: CountryPhoneSpec) -> Self {
        let mut input = Self {
            state: PhoneEditState {
                raw_digits: String::new(),
                selected_country: country,
            },
            display: String::new(),
        };
        input.apply(normalize_digits(initial));
        input
    }

    /// Replaces the field's content with `raw`, as typed or pasted.
    pub fn input(&mut self, raw: &str) -> PhoneChange {
        self.apply(normalize_digits(raw));
        self.change()
    }

    /// Switches country and re-formats the stored digits under its rule.
    ///
    /// Digits beyond the new country's maximum are dropped.
    pub fn select_country(&mut self, country: CountryPhoneSpec) -> PhoneChange {
        self.state.selected_country = country;
        let digits = std::mem::take(&mut self.state.raw_digits);
        self.apply(digits);
        self.change()
    }

    /// Appends one keystroke. Non-digits and digits past the maximum are
    /// ignored, but a change is still reported.
    pub fn push_digit(&mut self, key: char) -> PhoneChange {
        if key.is_ascii_digit() {
            let mut digits = self.state.raw_digits.clone();
            digits.push(key);
            self.apply(digits);
        }
        self.change()
    }

    /// Removes the last digit.
    pub fn backspace(&mut self) -> PhoneChange {
        let mut digits = std::mem::take(&mut self.state.raw_digits);
        digits.pop();
        self.apply(digits);
        self.change()
    }

    /// Empties the field.
    pub fn clear(&mut self) -> PhoneChange {
        self.apply(String::new());
        self.change()
    }

    /// Canonical digits.
    #[inline]
    pub fn digits(&self) -> &str {
        &self.state.raw_digits
    }

    /// Current display string.
    #[inline]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Selected country.
    #[inline]
    pub fn country(&self) -> &CountryPhoneSpec {
        &self.state.selected_country
    }

    /// Current edit state.
    #[inline]
    pub fn state(&self) -> &PhoneEditState {
        &self.state
    }

    /// Whether the stored digits are complete for the selected country.
    #[inline]
    pub fn is_complete(&self) -> bool {
        crate::validate::is_complete(&self.state.raw_digits, &self.state.selected_country)
    }

    /// Snapshot of the current state as a change event.
    pub fn change(&self) -> PhoneChange {
        PhoneChange {
            digits: self.state.raw_digits.clone(),
            display: self.display.clone(),
            calling_code: self.state.selected_country.calling_code().to_string(),
            iso_country: self.state.selected_country.iso_country().to_string(),
        }
    }

    fn apply(&mut self, mut digits: String) {
        digits.truncate(self.state.selected_country.max_significant_digits());
        self.display = format_for_display(&digits, &self.state.selected_country);
        self.state.raw_digits = digits;
    }
}
