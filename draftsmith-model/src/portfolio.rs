//! Portfolios: the top-level aggregate of accounts under one manager.

use std::collections::BTreeMap;

use draftsmith_core::{
    Builder, Draft, DraftSchema, FieldSpec, Shared, Validate, ValidationResult, Violations,
};
use serde::{Deserialize, Serialize};

use crate::{Account, Address, Party};

/// A managed collection of accounts.
///
/// `headquarters` is held by shared reference: cloning a portfolio builder
/// leaves both copies pointing at the same address until one of them calls
/// [`PortfolioFields::detach_headquarters`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub name: String,
    pub manager: Party,
    pub accounts: Vec<Account>,
    pub headquarters: Option<Shared<Address>>,
    pub benchmarks: Option<Vec<String>>,
    /// Allocation ceilings as fractions of total value, keyed by asset class.
    pub limits: Option<BTreeMap<String, f64>>,
}

impl Validate for Portfolio {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new(Self::TYPE_NAME);
        v.require_text("Name", &self.name)
            .require("Manager", self.manager.is_assigned())
            .nested("Manager", &self.manager)
            .require("Accounts", !self.accounts.is_empty())
            .nested_each("Accounts", &self.accounts)
            .nested("Headquarters", &self.headquarters);

        for (class, limit) in self.limits.iter().flatten() {
            v.range(&format!("Limits[{class}]"), *limit, 0.0, 1.0);
        }
        v.finish()
    }
}

impl Draft for Portfolio {
    const TYPE_NAME: &'static str = "Portfolio";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Name"))
            .field(FieldSpec::variant("Manager"))
            .field(FieldSpec::sequence("Accounts"))
            .field(FieldSpec::shared("Headquarters"))
            .field(FieldSpec::sequence("Benchmarks"))
            .field(FieldSpec::map("Limits"))
    }
}

pub type PortfolioBuilder = Builder<Portfolio>;

/// Fluent setters for [`Portfolio`] drafts.
pub trait PortfolioFields: Sized {
    fn name(self, name: impl Into<String>) -> Self;
    fn manager(self, party: Builder<Party>) -> Self;
    fn account(self, account: Builder<Account>) -> Self;
    fn headquarters(self, address: Builder<Address>) -> Self;
    /// Points `headquarters` at an address other drafts already hold.
    fn share_headquarters(self, address: Shared<Address>) -> Self;
    /// Replaces a shared `headquarters` with a private deep copy.
    fn detach_headquarters(self) -> Self;
    fn benchmark(self, index: impl Into<String>) -> Self;
    fn limit(self, class: impl Into<String>, ceiling: f64) -> Self;
}

impl PortfolioFields for PortfolioBuilder {
    fn name(self, name: impl Into<String>) -> Self {
        self.set(|p| &mut p.name, name)
    }

    fn manager(self, party: Builder<Party>) -> Self {
        self.nest(|p| &mut p.manager, party)
    }

    fn account(self, account: Builder<Account>) -> Self {
        self.nest_append(|p| &mut p.accounts, account)
    }

    fn headquarters(self, address: Builder<Address>) -> Self {
        self.nest_shared(|p| &mut p.headquarters, address)
    }

    fn share_headquarters(self, address: Shared<Address>) -> Self {
        self.set_some(|p| &mut p.headquarters, address)
    }

    fn detach_headquarters(self) -> Self {
        self.with(|p| {
            if let Some(hq) = p.headquarters.as_mut() {
                *hq = hq.deep_clone();
            }
        })
    }

    fn benchmark(self, index: impl Into<String>) -> Self {
        self.append(|p| &mut p.benchmarks, index.into())
    }

    fn limit(self, class: impl Into<String>, ceiling: f64) -> Self {
        self.insert(|p| &mut p.limits, class.into(), ceiling)
    }
}
