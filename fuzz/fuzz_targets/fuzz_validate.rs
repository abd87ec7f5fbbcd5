//! Fuzz target for phone validation.
//!
//! validate() must never panic and must agree with is_complete().

#![no_main]

use libfuzzer_sys::fuzz_target;
use phone_format::{is_complete, registry, validate};

fuzz_target!(|data: &str| {
    for country in registry::all() {
        let complete = is_complete(data, country);
        assert_eq!(validate(data, country).is_ok(), complete);
    }

    // A lookup miss is never complete
    let missing = registry::lookup_country(data, None);
    if missing.is_none() {
        assert!(!is_complete(data, missing));
    }
});
