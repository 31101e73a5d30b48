mod common;

use common::valid_bond;
use draftsmith_model::{BondBuilder, BondFields, MAX_COUPON_RATE};
use pretty_assertions::assert_eq;

#[test]
fn valid_bond_passes() {
    assert!(valid_bond().validate().is_ok());
}

#[test]
fn maturity_before_purchase_is_an_ordering_violation() {
    let err = valid_bond()
        .purchase_date("2021-01-01")
        .maturity_date("2020-01-01")
        .validate()
        .unwrap_err();

    assert!(err.mentions("MaturityDate"));
    assert_eq!(
        err.to_string(),
        "Bond: MaturityDate (2020-01-01) must not be before PurchaseDate (2021-01-01)"
    );
}

#[test]
fn same_day_maturity_is_allowed() {
    let bond = valid_bond()
        .purchase_date("2024-06-30")
        .maturity_date("2024-06-30");
    assert!(bond.validate().is_ok());
}

#[test]
fn malformed_date_is_reported_once() {
    let err = valid_bond()
        .maturity_date("2031-02-30")
        .validate()
        .unwrap_err();

    // Only the date check fires; ordering is skipped for unparsable dates.
    assert_eq!(err.violations().len(), 1);
    assert!(err.to_string().contains("not a valid YYYY-MM-DD date"));
}

#[test]
fn coupon_above_ceiling_is_rejected() {
    let err = valid_bond()
        .coupon_rate(MAX_COUPON_RATE + 0.5)
        .validate()
        .unwrap_err();
    assert!(err.mentions("CouponRate"));
}

#[test]
fn isin_must_match_format() {
    let err = valid_bond().isin("us0378331005").validate().unwrap_err();
    assert!(err.mentions("Isin"));
}

#[test]
fn empty_bond_reports_all_required_fields() {
    let err = BondBuilder::new().validate().unwrap_err();
    for field in ["Isin", "Issuer", "FaceValue", "PurchaseDate", "MaturityDate"] {
        assert!(err.mentions(field), "missing {field} in {err}");
    }
}
