//! Property-based tests for reference-draft validation.
//!
//! - Coordinates: valid exactly when both components are within bounds
//! - Bond ordering: valid exactly when maturity is on or after purchase
//! - Currency: accepted exactly when it is a supported code

mod common;

use common::{valid_account, valid_bond};
use draftsmith_model::{
    AccountFields, BondFields, GeoCoordinateBuilder, GeoCoordinateFields, SUPPORTED_CURRENCIES,
};
use proptest::prelude::*;

/// Formats a day offset as `YYYY-MM-DD` on a 28-day-month calendar, so every
/// generated date is real and string order matches offset order.
fn date_string(offset: u32) -> String {
    let year = 2000 + offset / (12 * 28);
    let month = (offset / 28) % 12 + 1;
    let day = offset % 28 + 1;
    format!("{year:04}-{month:02}-{day:02}")
}

// =============================================================================
// HELPER STRATEGIES
// =============================================================================

fn degrees() -> impl Strategy<Value = f64> {
    -400.0f64..400.0
}

fn day_offset() -> impl Strategy<Value = u32> {
    0u32..(50 * 12 * 28)
}

fn currency_code() -> impl Strategy<Value = String> {
    prop::string::string_regex("[A-Z]{3}").unwrap()
}

proptest! {
    #[test]
    fn coordinate_valid_iff_in_bounds(lat in degrees(), lon in degrees()) {
        let result = GeoCoordinateBuilder::new().latitude(lat).longitude(lon).validate();
        let in_bounds = (-90.0..=90.0).contains(&lat) && (-180.0..=180.0).contains(&lon);
        prop_assert_eq!(result.is_ok(), in_bounds);
    }

    #[test]
    fn bond_valid_iff_maturity_not_before_purchase(a in day_offset(), b in day_offset()) {
        let result = valid_bond()
            .purchase_date(date_string(a))
            .maturity_date(date_string(b))
            .validate();
        prop_assert_eq!(result.is_ok(), b >= a);
    }

    #[test]
    fn currency_accepted_iff_supported(code in currency_code()) {
        let result = valid_account().currency(code.clone()).validate();
        prop_assert_eq!(result.is_ok(), SUPPORTED_CURRENCIES.contains(&code.as_str()));
    }
}
