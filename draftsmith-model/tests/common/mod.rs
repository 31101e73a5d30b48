//! Shared fixtures for reference-draft tests.

#![allow(dead_code)]

use draftsmith_model::{
    AccountBuilder, AccountFields, AddressBuilder, AddressFields, BondBuilder, BondFields,
    OrganizationBuilder, OrganizationFields, PartyBuilder, PartyFields, PersonBuilder,
    PersonFields, PortfolioBuilder, PortfolioFields,
};

/// Installs a test-writer subscriber once; later calls are no-ops.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}

pub fn valid_address() -> AddressBuilder {
    AddressBuilder::new()
        .street("742 Evergreen Terrace")
        .city("Springfield")
        .postal_code("49007")
        .country("US")
}

pub fn valid_person() -> PersonBuilder {
    PersonBuilder::new()
        .assign_id()
        .given_name("Ada")
        .family_name("Lovelace")
        .birth_date("1815-12-10")
        .email("ada@example.com")
        .address(valid_address())
}

pub fn valid_organization() -> OrganizationBuilder {
    OrganizationBuilder::new()
        .assign_id()
        .legal_name("Analytical Engines Ltd")
        .registration_number("GB-0001")
        .country("GB")
        .headquarters(valid_address())
}

pub fn person_party() -> PartyBuilder {
    PartyBuilder::new().person(valid_person())
}

pub fn valid_bond() -> BondBuilder {
    BondBuilder::new()
        .isin("US0378331005")
        .issuer("Apple Inc.")
        .coupon_rate(3.25)
        .face_value(1000.0)
        .purchase_date("2021-03-01")
        .maturity_date("2031-03-01")
}

pub fn valid_account() -> AccountBuilder {
    AccountBuilder::new()
        .assign_id()
        .owner_person(valid_person())
        .currency("USD")
        .opened_on("2021-02-15")
        .holding(valid_bond())
}

pub fn valid_portfolio() -> PortfolioBuilder {
    PortfolioBuilder::new()
        .name("Core Income")
        .manager(PartyBuilder::new().organization(valid_organization()))
        .account(valid_account())
        .headquarters(valid_address())
}
