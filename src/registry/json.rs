//! JSON country table loader.
//!
//! Loads country entries from a JSON array into a `CountryTable`.
//!
//! # Feature
//!
//! Requires the `registry-json` feature.
//!
//! # Format
//!
//! ```json
//! [
//!   {
//!     "calling_code": "+64",
//!     "iso_country": "NZ",
//!     "display_name": "New Zealand",
//!     "symbol": "🇳🇿",
//!     "format_template": "## ### ####",
//!     "placeholder_example": "21 123 4567",
//!     "max_significant_digits": 9
//!   }
//! ]
//! ```
//!
//! `symbol` and `placeholder_example` are optional. Calling codes without a
//! hand-written rule format as plain digits.

use super::{CountryTable, CountryTableBuilder, RegistryError};
use crate::country::CountryPhoneSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::Read;
use std::path::Path;

/// JSON country table loader.
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonCountryLoader;

impl JsonCountryLoader {
    /// Loads a country table from a JSON file.
    ///
    /// # Example
    ///
    /// ```rust,ignore
    /// use phone_format::registry::JsonCountryLoader;
    ///
    /// let table = JsonCountryLoader::from_file("countries.json")?;
    /// ```
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<CountryTable, RegistryError> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    /// Loads a country table from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<CountryTable, RegistryError> {
        let mut content = String::new();
        reader.read_to_string(&mut content)?;
        Self::parse(&content)
    }

    /// Loads a country table from a JSON string.
    pub fn parse(json: &str) -> Result<CountryTable, RegistryError> {
        let entries: Vec<JsonCountryEntry> = serde_json::from_str(json)
            .map_err(|e| RegistryError::Parse(format!("JSON parse error: {}", e)))?;

        let mut builder = CountryTableBuilder::with_capacity(entries.len());
        for entry in entries {
            builder.insert(entry.into_spec());
        }
        builder.build()
    }

    /// Serializes a table back into the array format accepted by `parse`.
    pub fn to_json(table: &CountryTable) -> Result<String, RegistryError> {
        let entries: Vec<JsonCountryEntry> = table.iter().map(JsonCountryEntry::from_spec).collect();
        serde_json::to_string_pretty(&entries)
            .map_err(|e| RegistryError::Parse(format!("JSON serialize error: {}", e)))
    }
}

/// One country as it appears in JSON.
#[derive(Debug, Serialize, Deserialize)]
struct JsonCountryEntry {
    calling_code: String,
    iso_country: String,
    display_name: String,
    #[serde(default)]
    symbol: String,
    format_template: String,
    #[serde(default)]
    placeholder_example: String,
    max_significant_digits: usize,
}

impl JsonCountryEntry {
    fn into_spec(self) -> CountryPhoneSpec {
        CountryPhoneSpec::new(
            self.calling_code,
            self.iso_country,
            self.display_name,
            self.format_template,
            self.max_significant_digits,
        )
        .with_symbol(self.symbol)
        .with_placeholder(self.placeholder_example)
    }

    fn from_spec(spec: &CountryPhoneSpec) -> Self {
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
