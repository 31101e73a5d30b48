//! Reference drafts for Draftsmith.
//!
//! A small custody domain built entirely from [`draftsmith_core`] parts:
//! addresses, parties, bonds, accounts and portfolios. Each entity comes
//! with a `*Builder` alias and a `*Fields` extension trait carrying its
//! named setters.
//!
//! ```ignore
//! use draftsmith_model::{AddressBuilder, AddressFields};
//!
//! let address = AddressBuilder::new()
//!     .street("1 Main St")
//!     .city("Springfield")
//!     .country("US")
//!     .extract_validated()?;
//! ```

mod account;
mod address;
mod bond;
mod ids;
mod party;
mod portfolio;
mod registration;

pub use account::{Account, AccountBuilder, AccountFields, SUPPORTED_CURRENCIES};
pub use address::{
    Address, AddressBuilder, AddressFields, GeoCoordinate, GeoCoordinateBuilder,
    GeoCoordinateFields,
};
pub use bond::{Bond, BondBuilder, BondFields, MAX_COUPON_RATE};
pub use ids::{AccountId, PartyId};
pub use party::{
    Organization, OrganizationBuilder, OrganizationFields, Party, PartyBuilder, PartyFields,
    Person, PersonBuilder, PersonFields,
};
pub use portfolio::{Portfolio, PortfolioBuilder, PortfolioFields};
pub use registration::{MODEL_TYPES, default_registry, register_all};
