//! Registers every reference draft with a [`Registry`].

use std::sync::Once;

use draftsmith_core::{Draft, Registry};
use tracing::info;

use crate::{Account, Address, Bond, GeoCoordinate, Organization, Party, Person, Portfolio};

/// Type names registered by [`register_all`], in registration order.
pub const MODEL_TYPES: &[&str] = &[
    GeoCoordinate::TYPE_NAME,
    Address::TYPE_NAME,
    Person::TYPE_NAME,
    Organization::TYPE_NAME,
    Party::TYPE_NAME,
    Bond::TYPE_NAME,
    Account::TYPE_NAME,
    Portfolio::TYPE_NAME,
];

/// Registers a factory for each reference draft. Existing entries under
/// the same names are replaced.
pub fn register_all(registry: &Registry) {
    registry.register_draft::<GeoCoordinate>();
    registry.register_draft::<Address>();
    registry.register_draft::<Person>();
    registry.register_draft::<Organization>();
    registry.register_draft::<Party>();
    registry.register_draft::<Bond>();
    registry.register_draft::<Account>();
    registry.register_draft::<Portfolio>();
    info!(count = MODEL_TYPES.len(), "Model drafts registered");
}

/// The global registry with every reference draft registered.
pub fn default_registry() -> &'static Registry {
    static INIT: Once = Once::new();
    let registry = Registry::global();
    INIT.call_once(|| register_all(registry));
    registry
}
