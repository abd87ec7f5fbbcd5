//! Owned country tables built at runtime.
//!
//! A `CountryTable` keeps the same ordering contract as the built-in
//! registry: lookups by calling code alone return the first-declared entry.

use super::{CountryCatalog, RegistryError};
use crate::country::CountryPhoneSpec;

/// An ordered, non-empty table of countries.
///
/// # Example
///
/// ```
/// use phone_format::registry::{CountryCatalog, CountryTableBuilder};
/// use phone_format::CountryPhoneSpec;
///
/// let table = CountryTableBuilder::new()
///     .push(CountryPhoneSpec::new("+64", "NZ", "New Zealand", "## ### ####", 9))
///     .build()
///     .unwrap();
///
/// assert_eq!(table.find_by_calling_code("+64").unwrap().iso_country(), "NZ");
/// ```
#[derive(Debug, Clone)]
pub struct CountryTable {
    entries: Vec<CountryPhoneSpec>,
}

impl CountryTable {
    /// A table holding a copy of the built-in registry.
    pub fn builtin() -> Self {
        Self {
            entries: super::all().to_vec(),
        }
    }

    /// The first entry, used as the fallback after a lookup miss.
    pub fn default_country(&self) -> &CountryPhoneSpec {
        // Non-empty by construction
        &self.entries[0]
    }

    /// `lookup` with the default-country fallback applied.
    pub fn lookup_or_default(&self, code: &str, iso: Option<&str>) -> &CountryPhoneSpec {
        match self.lookup(code, iso) {
            Some(country) => country,
            None => self.default_country(),
        }
    }

    /// Returns an iterator over all entries.
    pub fn iter(&self) -> impl Iterator<Item = &CountryPhoneSpec> {
        self.entries.iter()
    }
}

impl CountryCatalog for CountryTable {
    #[inline]
    fn entries(&self) -> &[CountryPhoneSpec] {
        &self.entries
    }
}

/// Builder that checks entries before producing a `CountryTable`.
#[derive(Debug, Clone, Default)]
pub struct CountryTableBuilder {
    entries: Vec<CountryPhoneSpec>,
}

impl CountryTableBuilder {
    /// Creates an empty builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a builder with pre-allocated capacity.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: Vec::with_capacity(capacity),
        }
    }

    /// Starts from the built-in registry so callers can append to it.
    pub fn from_builtin() -> Self {
        Self {
            entries: super::all().to_vec(),
        }
    }

    /// Appends an entry. Order of calls is the table's declaration order.
    pub fn push(mut self, spec: CountryPhoneSpec) -> Self {
        self.entries.push(spec);
        self
    }

    /// Appends an entry through a mutable reference.
    pub fn insert(&mut self, spec: CountryPhoneSpec) {
        self.entries.push(spec);
    }

    /// Checks every entry and builds the table.
    ///
    /// # Errors
    ///
    /// - `RegistryError::Empty` if no entries were added
    /// - `RegistryError::NoDigitPositions` if an entry allows zero digits
    /// - `RegistryError::InconsistentTemplate` if a template disagrees with
    ///   its digit count
    /// - `RegistryError::RuleMismatch` if the calling code has a built-in
    ///   rule whose groups disagree with the digit count
    /// - `RegistryError::Duplicate` if a `(calling_code, iso)` pair repeats
    pub fn build(self) -> Result<CountryTable, RegistryError> {
        if self.entries.is_empty() {
            return Err(RegistryError::Empty);
        }

        for (i, entry) in self.entries.iter().enumerate() {
            if entry.max_significant_digits() == 0 {
                return Err(RegistryError::NoDigitPositions {
                    iso_country: entry.iso_country().to_string(),
                });
            }

            if !entry.is_consistent() {
                return Err(RegistryError::InconsistentTemplate {
                    iso_country: entry.iso_country().to_string(),
                    template_digits: entry.template_digit_count(),
                    max_significant_digits: entry.max_significant_digits(),
                });
            }

            let rule_digits: usize = entry.rule().groups().iter().sum();
            if rule_digits != 0 && rule_digits != entry.max_significant_digits() {
                return Err(RegistryError::RuleMismatch {
                    iso_country: entry.iso_country().to_string(),
                    calling_code: entry.calling_code().to_string(),
                    rule_digits,
                    max_significant_digits: entry.max_significant_digits(),
                });
            }

            let duplicate = self.entries[..i].iter().any(|prev| {
                prev.calling_code() == entry.calling_code()
                    && prev.iso_country() == entry.iso_country()
            });
            if duplicate {
                return Err(RegistryError::Duplicate {
                    calling_code: entry.calling_code().to_string(),
                    iso_country: entry.iso_country().to_string(),
                });
            }
        }

        Ok(CountryTable {
            entries: self.entries,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn nz() -> CountryPhoneSpec {
        CountryPhoneSpec::new("+64", "NZ", "New Zealand", "## ### ####", 9)
    }

    #[test]
    fn test_build_empty() {
        let err = CountryTableBuilder::new().build().unwrap_err();
        assert!(matches!(err, RegistryError::Empty));
    }

    #[test]
    fn test_build_duplicate() {
        let err = CountryTableBuilder::new()
            .push(nz())
            .push(nz())
            .build()
            .unwrap_err();
        match err {
            RegistryError::Duplicate {
                calling_code,
                iso_country,
            } => {
                assert_eq!(calling_code, "+64");
                assert_eq!(iso_country, "NZ");
            }
            other => panic!("Expected Duplicate, got {:?}", other),
        }
    }

    #[test]
    fn test_build_inconsistent() {
        let err = CountryTableBuilder::new()
            .push(CountryPhoneSpec::new("+64", "NZ", "New Zealand", "## ###", 9))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::InconsistentTemplate {
                template_digits: 5,
                max_significant_digits: 9,
                ..
            }
        ));
    }

    #[test]
    fn test_build_zero_digits() {
        let err = CountryTableBuilder::new()
            .push(CountryPhoneSpec::new("+999", "XX", "Nowhere", "", 0))
            .build()
            .unwrap_err();
        match err {
            RegistryError::NoDigitPositions { iso_country } => assert_eq!(iso_country, "XX"),
            other => panic!("Expected NoDigitPositions, got {:?}", other),
        }
    }

    #[test]
    fn test_build_rule_mismatch() {
        let err = CountryTableBuilder::new()
            .push(CountryPhoneSpec::new("+1", "PR", "Puerto Rico", "### ####", 7))
            .build()
            .unwrap_err();
        assert!(matches!(
            err,
            RegistryError::RuleMismatch {
                rule_digits: 10,
                max_significant_digits: 7,
                ..
            }
        ));
    }

    #[test]
    fn test_built_tables_agree_on_completeness() {
        use crate::validate::{is_complete, validate};

        let table = CountryTableBuilder::from_builtin().push(nz()).build().unwrap();
        for country in table.iter() {
            for input in ["", "1", "211234567", "5551234567", "79111234567"] {
                assert_eq!(validate(input, country).is_ok(), is_complete(input, country));
            }
        }
    }

    #[test]
    fn test_shared_calling_code_allowed() {
        let table = CountryTableBuilder::new()
            .push(CountryPhoneSpec::new("+7", "RU", "Russia", "### ###-##-##", 10))
            .push(CountryPhoneSpec::new("+7", "KZ", "Kazakhstan", "### ###-##-##", 10))
            .build()
            .unwrap();
        assert_eq!(table.find_by_calling_code("+7").unwrap().iso_country(), "RU");
        assert_eq!(table.lookup("+7", Some("KZ")).unwrap().iso_country(), "KZ");
    }

    #[test]
    fn test_from_builtin_extends_registry() {
        let table = CountryTableBuilder::from_builtin().push(nz()).build().unwrap();
        assert_eq!(table.len(), super::super::all().len() + 1);
        assert_eq!(table.default_country().iso_country(), "US");
        assert_eq!(table.lookup_or_default("+64", None).iso_country(), "NZ");
        assert_eq!(table.lookup_or_default("+999", None).iso_country(), "US");
    }

    #[test]
    fn test_builtin_table_matches_registry() {
        let table = CountryTable::builtin();
        assert!(table.iter().eq(super::super::all().iter()));
    }
}
