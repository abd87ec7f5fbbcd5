//! # phone_format
//!
//! Country-aware phone number formatting and validation for
//! practice-management frontends.
//!
//! ## Features
//!
//! - Fixed country registry (14 countries, 13 calling codes)
//! - Digit normalization for arbitrary keystrokes and pastes
//! - Progressive display formatting, one hand-written rule per calling code
//! - Length-based completeness checks
//! - Input controller that keeps canonical digits and display in sync
//! - Multiple interfaces: library, CLI, REST API, WASM, Node.js
//!
//! ## Quick Start
//!
//! ```rust
//! use phone_format::{format_for_display, is_complete, lookup_country, normalize_digits};
//!
//! let us = lookup_country("+1", None).unwrap();
//!
//! let digits = normalize_digits("(555) 123-4567");
//! assert_eq!(digits, "5551234567");
//! assert_eq!(format_for_display(&digits, us), "(555) 123-4567");
//! assert!(is_complete(&digits, us));
//!
//! // Progressive: the hyphen appears with the 7th digit
//! assert_eq!(format_for_display("555123", us), "(555) 123");
//! assert_eq!(format_for_display("5551234", us), "(555) 123-4");
//! ```
//!
//! ## Country Lookup
//!
//! ```rust
//! use phone_format::{all_countries, lookup_country, registry};
//!
//! // +1 is shared; the first-declared country wins
//! assert_eq!(lookup_country("+1", None).unwrap().iso_country(), "US");
//! assert_eq!(lookup_country("+1", Some("CA")).unwrap().iso_country(), "CA");
//!
//! // Misses are recoverable: fall back to the first entry
//! assert!(lookup_country("+999", None).is_none());
//! assert_eq!(registry::lookup_or_default("+999", None).iso_country(), "US");
//!
//! assert_eq!(all_countries().len(), 14);
//! ```
//!
//! ## Validation
//!
//! ```rust
//! use phone_format::{is_complete, lookup_country, validate};
//!
//! let india = lookup_country("+91", None).unwrap();
//! let phone = validate("98765 43210", india).unwrap();
//! assert_eq!(phone.formatted(), "98765-43210");
//! assert_eq!(phone.masked(), "*****-*3210");
//!
//! // A lookup miss is never complete
//! assert!(!is_complete("9876543210", lookup_country("+999", None)));
//! ```
//!
//! ## Input Controller
//!
//! ```rust
//! use phone_format::{lookup_country, PhoneInput};
//!
//! let gb = lookup_country("+44", None).unwrap();
//! let mut input = PhoneInput::new("", gb.clone());
//! input.input("79111");
//! assert_eq!(input.display(), "7911 1");
//!
//! let change = input.select_country(lookup_country("+65", None).unwrap().clone());
//! assert_eq!(change.display, "7911 1");
//! assert_eq!(change.calling_code, "+65");
//! ```
//!
//! ## Supported Countries
//!
//! | Code | ISO | Template | Digits |
//! |------|-----|----------|--------|
//! | +1 | US, CA | `(###) ###-####` | 10 |
//! | +91 | IN | `#####-#####` | 10 |
//! | +44 | GB | `#### ### ####` | 11 |
//! | +61 | AU | `#### ### ###` | 10 |
//! | +49 | DE | `### ########` | 11 |
//! | +33 | FR | `# ## ## ## ##` | 9 |
//! | +81 | JP | `##-####-####` | 10 |
//! | +86 | CN | `### #### ####` | 11 |
//! | +971 | AE | `## ### ####` | 9 |
//! | +65 | SG | `#### ####` | 8 |
//! | +52 | MX | `## #### ####` | 10 |
//! | +55 | BR | `(##) #####-####` | 11 |
//! | +27 | ZA | `## ### ####` | 9 |
//!
//! ## Feature Flags
//!
//! | Feature | Description |
//! |---------|-------------|
//! | `generate` | Random sample numbers |
//! | `cli` | Command-line tool |
//! | `server` | REST API with Swagger UI |
//! | `wasm` | WebAssembly support |
//! | `parallel` | Rayon-based batch validation |
//! | `registry-json` | JSON country table loader |
//!
//! ## Privacy
//!
//! - `ValidatedPhone` digits are zeroized on drop
//! - `Debug` and `Display` of `ValidatedPhone` show masked numbers only
//! - No unsafe code (`#![deny(unsafe_code)]`)

#![warn(missing_docs)]
#![warn(clippy::all)]
#![deny(unsafe_code)]

pub mod batch;
pub mod country;
pub mod error;
pub mod format;
pub mod generate;
pub mod input;
pub mod mask;
pub mod registry;
pub mod stream;
pub mod validate;

#[cfg(feature = "wasm")]
mod wasm;

// Re-export main types at crate root
pub use batch::BatchValidator;
pub use country::{CountryPhoneSpec, PhoneRule, ValidatedPhone};
pub use error::ValidationError;
pub use format::{format_for_display, normalize_digits};
pub use input::{PhoneChange, PhoneEditState, PhoneInput};
pub use registry::{all as all_countries, lookup_country};
pub use validate::{is_complete, validate};

/// Boundary name for [`all_countries`].
#[inline]
pub fn list_countries() -> &'static [CountryPhoneSpec] {
    registry::all()
}
