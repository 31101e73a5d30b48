//! Fixed-income holdings.

use std::sync::LazyLock;

use draftsmith_core::{
    Builder, Draft, DraftSchema, FieldSpec, Validate, ValidationResult, Violations,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

static ISIN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[A-Z]{2}[A-Z0-9]{9}[0-9]$").expect("valid ISIN pattern"));

/// Maximum annual coupon, in percent.
pub const MAX_COUPON_RATE: f64 = 25.0;

/// A fixed-income holding.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Bond {
    pub isin: String,
    pub issuer: String,
    /// Annual coupon in percent.
    pub coupon_rate: f64,
    pub face_value: f64,
    /// `YYYY-MM-DD`.
    pub purchase_date: String,
    /// `YYYY-MM-DD`; must not precede `purchase_date`.
    pub maturity_date: String,
}

impl Validate for Bond {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new(Self::TYPE_NAME);
        v.require_text("Isin", &self.isin)
            .pattern("Isin", &self.isin, &ISIN)
            .require_text("Issuer", &self.issuer)
            .range("CouponRate", self.coupon_rate, 0.0, MAX_COUPON_RATE)
            .require("FaceValue", self.face_value > 0.0)
            .require_text("PurchaseDate", &self.purchase_date)
            .date("PurchaseDate", &self.purchase_date)
            .require_text("MaturityDate", &self.maturity_date)
            .date("MaturityDate", &self.maturity_date)
            .ordered_dates(
                "PurchaseDate",
                "MaturityDate",
                &self.purchase_date,
                &self.maturity_date,
            );
        v.finish()
    }
}

impl Draft for Bond {
    const TYPE_NAME: &'static str = "Bond";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Isin"))
            .field(FieldSpec::scalar("Issuer"))
            .field(FieldSpec::scalar("CouponRate"))
            .field(FieldSpec::scalar("FaceValue"))
            .field(FieldSpec::scalar("PurchaseDate"))
            .field(FieldSpec::scalar("MaturityDate"))
    }
}

pub type BondBuilder = Builder<Bond>;

/// Fluent setters for [`Bond`] drafts.
pub trait BondFields: Sized {
    fn isin(self, isin: impl Into<String>) -> Self;
    fn issuer(self, issuer: impl Into<String>) -> Self;
    fn coupon_rate(self, rate: f64) -> Self;
    fn face_value(self, value: f64) -> Self;
    fn purchase_date(self, date: impl Into<String>) -> Self;
    fn maturity_date(self, date: impl Into<String>) -> Self;
}

impl BondFields for BondBuilder {
    fn isin(self, isin: impl Into<String>) -> Self {
        self.set(|b| &mut b.isin, isin)
    }

    fn issuer(self, issuer: impl Into<String>) -> Self {
        self.set(|b| &mut b.issuer, issuer)
    }

    fn coupon_rate(self, rate: f64) -> Self {
        self.set(|b| &mut b.coupon_rate, rate)
    }

    fn face_value(self, value: f64) -> Self {
        self.set(|b| &mut b.face_value, value)
    }

    fn purchase_date(self, date: impl Into<String>) -> Self {
        self.set(|b| &mut b.purchase_date, date)
    }

    fn maturity_date(self, date: impl Into<String>) -> Self {
        self.set(|b| &mut b.maturity_date, date)
    }
}
