mod common;

use common::valid_address;
use draftsmith_model::{
    Address, AddressBuilder, AddressFields, GeoCoordinateBuilder, GeoCoordinateFields,
};
use pretty_assertions::assert_eq;

// ── Required fields ──────────────────────────────────────────────

#[test]
fn valid_address_passes() {
    let address = valid_address().extract_validated().unwrap();
    assert_eq!(address.city, "Springfield");
}

#[test]
fn blank_address_reports_every_missing_field() {
    let err = AddressBuilder::new()
        .street("")
        .city("")
        .country("")
        .validate()
        .unwrap_err();

    assert!(err.is_structural());
    assert!(err.mentions("Street"));
    assert!(err.mentions("City"));
    assert!(err.mentions("Country"));
    assert_eq!(err.violations().len(), 3);
    assert_eq!(
        err.to_string(),
        "Address: Street is required; City is required; Country is required"
    );
}

#[test]
fn malformed_postal_code_is_rejected() {
    let err = valid_address()
        .postal_code("!!")
        .validate()
        .unwrap_err();
    assert!(err.mentions("PostalCode"));
    assert_eq!(err.violations().len(), 1);
}

#[test]
fn empty_postal_code_is_allowed() {
    assert!(valid_address().postal_code("").validate().is_ok());
}

// ── Coordinates ──────────────────────────────────────────────────

#[test]
fn latitude_out_of_range_names_the_field() {
    let err = GeoCoordinateBuilder::new()
        .latitude(100.0)
        .longitude(0.0)
        .validate()
        .unwrap_err();

    let message = err.to_string();
    assert!(message.contains("Latitude"));
    assert!(message.contains("out of range"));
    assert_eq!(message, "GeoCoordinate: Latitude 100 is out of range [-90, 90]");
}

#[test]
fn coordinate_bounds_are_inclusive() {
    let corner = GeoCoordinateBuilder::new().latitude(-90.0).longitude(180.0);
    assert!(corner.validate().is_ok());
}

#[test]
fn invalid_location_surfaces_through_address() {
    let err = valid_address()
        .location(GeoCoordinateBuilder::new().latitude(12.0).longitude(-200.0))
        .validate()
        .unwrap_err();

    assert!(err.mentions("Location"));
    assert!(err.mentions("Longitude"));
    assert_eq!(
        err.messages(),
        vec!["Location.Longitude -200 is out of range [-180, 180]".to_string()]
    );
}

#[test]
fn location_is_copied_by_value() {
    let source = valid_address().location(GeoCoordinateBuilder::new().latitude(1.0));
    let copy = source.clone().with(|a: &mut Address| {
        if let Some(loc) = a.location.as_mut() {
            loc.latitude = 2.0;
        }
    });

    assert_eq!(source.draft().location.map(|l| l.latitude), Some(1.0));
    assert_eq!(copy.draft().location.map(|l| l.latitude), Some(2.0));
}
