//! Postal addresses and the coordinates that can pin one to a map.

use std::sync::LazyLock;

use draftsmith_core::{
    Builder, Draft, DraftSchema, FieldSpec, Validate, ValidationResult, Violations,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

static POSTAL_CODE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9][A-Za-z0-9 -]{1,8}[A-Za-z0-9]$").expect("valid postal code pattern")
});

/// A postal address.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Address {
    pub street: String,
    pub city: String,
    pub postal_code: String,
    pub country: String,
    pub location: Option<GeoCoordinate>,
}

impl Validate for Address {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new(Self::TYPE_NAME);
        v.require_text("Street", &self.street)
            .require_text("City", &self.city)
            .require_text("Country", &self.country)
            .pattern("PostalCode", &self.postal_code, &POSTAL_CODE)
            .nested("Location", &self.location);
        v.finish()
    }
}

impl Draft for Address {
    const TYPE_NAME: &'static str = "Address";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Street"))
            .field(FieldSpec::scalar("City"))
            .field(FieldSpec::scalar("PostalCode"))
            .field(FieldSpec::scalar("Country"))
            .field(FieldSpec::nested("Location"))
    }
}

pub type AddressBuilder = Builder<Address>;

/// Fluent setters for [`Address`] drafts.
pub trait AddressFields: Sized {
    fn street(self, street: impl Into<String>) -> Self;
    fn city(self, city: impl Into<String>) -> Self;
    fn postal_code(self, code: impl Into<String>) -> Self;
    fn country(self, country: impl Into<String>) -> Self;
    fn location(self, location: Builder<GeoCoordinate>) -> Self;
}

impl AddressFields for AddressBuilder {
    fn street(self, street: impl Into<String>) -> Self {
        self.set(|a| &mut a.street, street)
    }

    fn city(self, city: impl Into<String>) -> Self {
        self.set(|a| &mut a.city, city)
    }

    fn postal_code(self, code: impl Into<String>) -> Self {
        self.set(|a| &mut a.postal_code, code)
    }

    fn country(self, country: impl Into<String>) -> Self {
        self.set(|a| &mut a.country, country)
    }

    fn location(self, location: Builder<GeoCoordinate>) -> Self {
        self.nest_some(|a| &mut a.location, location)
    }
}

/// A point on the globe, in decimal degrees.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GeoCoordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Validate for GeoCoordinate {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new(Self::TYPE_NAME);
        v.range("Latitude", self.latitude, -90.0, 90.0)
            .range("Longitude", self.longitude, -180.0, 180.0);
        v.finish()
    }
}

impl Draft for GeoCoordinate {
    const TYPE_NAME: &'static str = "GeoCoordinate";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Latitude"))
            .field(FieldSpec::scalar("Longitude"))
    }
}

pub type GeoCoordinateBuilder = Builder<GeoCoordinate>;

/// Fluent setters for [`GeoCoordinate`] drafts.
pub trait GeoCoordinateFields: Sized {
    fn latitude(self, latitude: f64) -> Self;
    fn longitude(self, longitude: f64) -> Self;
}

impl GeoCoordinateFields for GeoCoordinateBuilder {
    fn latitude(self, latitude: f64) -> Self {
        self.set(|g| &mut g.latitude, latitude)
    }

    fn longitude(self, longitude: f64) -> Self {
        self.set(|g| &mut g.longitude, longitude)
    }
}
