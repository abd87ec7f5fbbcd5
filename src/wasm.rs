//! WebAssembly bindings for phone formatting.
//!
//! This module provides JavaScript-friendly bindings for the browser
//! frontend's phone inputs.
//!
//! # Usage from JavaScript
//!
//! ```javascript
//! import init, { list_countries, format_for_display, is_complete, PhoneInputHandle } from 'phone_format';
//!
//! await init();
//!
//! // Country selector
//! for (const c of list_countries()) {
//!     console.log(`${c.symbol} ${c.display_name} ${c.calling_code}`);
//! }
//!
//! // One-off formatting
//! format_for_display("5551234", "+1");           // "(555) 123-4"
//! is_complete("98765 43210", "+91");              // true
//!
//! // Controlled input
//! const input = new PhoneInputHandle("", "+1", "CA");
//! const change = input.input("4165550199");
//! console.log(change.display, change.digits, change.calling_code, change.iso_country);
//! ```

#![cfg(feature = "wasm")]

use wasm_bindgen::prelude::*;

use crate::country::CountryPhoneSpec;
use crate::input::{PhoneChange, PhoneInput};
use crate::registry;

/// A registry entry, returned to JavaScript.
#[wasm_bindgen]
pub struct CountryInfo {
    calling_code: String,
    iso_country: String,
    display_name: String,
    symbol: String,
    format_template: String,
    placeholder_example: String,
    max_significant_digits: usize,
}

#[wasm_bindgen]
impl CountryInfo {
    #[wasm_bindgen(getter)]
    pub fn calling_code(&self) -> String {
        self.calling_code.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn iso_country(&self) -> String {
        self.iso_country.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn display_name(&self) -> String {
        self.display_name.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn symbol(&self) -> String {
        self.symbol.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn format_template(&self) -> String {
        self.format_template.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn placeholder_example(&self) -> String {
        self.placeholder_example.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn max_significant_digits(&self) -> usize {
        self.max_significant_digits
    }
}

impl From<&CountryPhoneSpec> for CountryInfo {
    fn from(spec: &CountryPhoneSpec) -> Self {
        Self {
            calling_code: spec.calling_code().to_string(),
            iso_country: spec.iso_country().to_string(),
            display_name: spec.display_name().to_string(),
            symbol: spec.symbol().to_string(),
            format_template: spec.format_template().to_string(),
            placeholder_example: spec.placeholder_example().to_string(),
            max_significant_digits: spec.max_significant_digits(),
        }
    }
}

/// Change event emitted by `PhoneInputHandle`.
#[wasm_bindgen]
pub struct InputChange {
    digits: String,
    display: String,
    calling_code: String,
    iso_country: String,
}

#[wasm_bindgen]
impl InputChange {
    #[wasm_bindgen(getter)]
    pub fn digits(&self) -> String {
        self.digits.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.display.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn calling_code(&self) -> String {
        self.calling_code.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn iso_country(&self) -> String {
        self.iso_country.clone()
    }
}

impl From<PhoneChange> for InputChange {
    fn from(change: PhoneChange) -> Self {
        Self {
            digits: change.digits,
            display: change.display,
            calling_code: change.calling_code,
            iso_country: change.iso_country,
        }
    }
}

/// Returns every supported country in display order.
#[wasm_bindgen]
pub fn list_countries() -> js_sys::Array {
    registry::all()
        .iter()
        .map(|c| JsValue::from(CountryInfo::from(c)))
        .collect()
}

/// Looks up a country. Returns `undefined` when not found.
///
/// # Example
/// ```javascript
/// lookup_country("+1").iso_country        // "US"
/// lookup_country("+1", "CA").iso_country  // "CA"
/// lookup_country("+999")                  // undefined
/// ```
#[wasm_bindgen]
pub fn lookup_country(calling_code: &str, iso_country: Option<String>) -> Option<CountryInfo> {
    registry::lookup_country(calling_code, iso_country.as_deref()).map(CountryInfo::from)
}

/// Strips everything but ASCII digits.
#[wasm_bindgen]
pub fn normalize_digits(raw: &str) -> String {
    crate::format::normalize_digits(raw)
}

/// Formats digits for display. Unknown countries return the digits as-is.
#[wasm_bindgen]
pub fn format_for_display(digits: &str, calling_code: &str, iso_country: Option<String>) -> String {
    match registry::lookup_country(calling_code, iso_country.as_deref()) {
        Some(country) => crate::format::format_for_display(digits, country),
        None => crate::format::normalize_digits(digits),
    }
}

/// Whether the number is complete. Unknown countries are never complete.
#[wasm_bindgen]
pub fn is_complete(digits: &str, calling_code: &str, iso_country: Option<String>) -> bool {
    crate::validate::is_complete(
        digits,
        registry::lookup_country(calling_code, iso_country.as_deref()),
    )
}

/// Returns a user-facing message for an incomplete number, or `undefined`.
#[wasm_bindgen]
pub fn validation_message(digits: &str, calling_code: &str, iso_country: Option<String>) -> Option<String> {
    crate::validate::validate(
        digits,
        registry::lookup_country(calling_code, iso_country.as_deref()),
    )
    .err()
    .map(|e| e.to_string())
}

/// A controlled phone input for a text field.
///
/// Unknown countries fall back to the default country.
#[wasm_bindgen]
pub struct PhoneInputHandle {
    inner: PhoneInput,
}

#[wasm_bindgen]
impl PhoneInputHandle {
    #[wasm_bindgen(constructor)]
    pub fn new(initial: &str, calling_code: &str, iso_country: Option<String>) -> PhoneInputHandle {
        let country = registry::lookup_or_default(calling_code, iso_country.as_deref());
        PhoneInputHandle {
            inner: PhoneInput::new(initial, country.clone()),
        }
    }

    /// Replaces the field value with what the user typed or pasted.
    pub fn input(&mut self, raw: &str) -> InputChange {
        self.inner.input(raw).into()
    }

    /// Switches country, re-formatting the stored digits.
    pub fn select_country(&mut self, calling_code: &str, iso_country: Option<String>) -> InputChange {
        let country = registry::lookup_or_default(calling_code, iso_country.as_deref());
        self.inner.select_country(country.clone()).into()
    }

    /// Removes the last digit.
    pub fn backspace(&mut self) -> InputChange {
        self.inner.backspace().into()
    }

    #[wasm_bindgen(getter)]
    pub fn display(&self) -> String {
        self.inner.display().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn digits(&self) -> String {
        self.inner.digits().to_string()
    }

    #[wasm_bindgen(getter)]
    pub fn placeholder(&self) -> String {
        self.inner.country().placeholder_example().to_string()
    }

    /// Whether the current digits are complete for the selected country.
    pub fn is_complete(&self) -> bool {
        self.inner.is_complete()
    }
}
