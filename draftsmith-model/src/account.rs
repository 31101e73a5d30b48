//! Custody accounts: an owner, a currency, and the bonds held.

use std::collections::BTreeMap;

use draftsmith_core::{
    Builder, Draft, DraftSchema, FieldSpec, Validate, ValidationResult, Violations,
};
use serde::{Deserialize, Serialize};

use crate::{AccountId, Address, Bond, Organization, Party, Person};

/// Currencies an account may be held in.
pub const SUPPORTED_CURRENCIES: &[&str] = &["USD", "EUR", "GBP", "JPY", "CHF"];

/// A custody account owned by one party.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Account {
    pub id: Option<AccountId>,
    pub owner: Party,
    pub currency: String,
    /// `YYYY-MM-DD`.
    pub opened_on: String,
    pub holdings: Vec<Bond>,
    pub tags: BTreeMap<String, String>,
    pub mailing_address: Option<Box<Address>>,
}

impl Validate for Account {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new(Self::TYPE_NAME);
        v.require("Id", self.id.is_some())
            .require("Owner", self.owner.is_assigned())
            .nested("Owner", &self.owner)
            .require_text("Currency", &self.currency)
            .one_of("Currency", &self.currency, SUPPORTED_CURRENCIES)
            .require_text("OpenedOn", &self.opened_on)
            .date("OpenedOn", &self.opened_on)
            .nested_each("Holdings", &self.holdings)
            .nested("MailingAddress", &self.mailing_address);
        v.finish()
    }
}

impl Draft for Account {
    const TYPE_NAME: &'static str = "Account";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Id"))
            .field(FieldSpec::variant("Owner"))
            .field(FieldSpec::scalar("Currency"))
            .field(FieldSpec::scalar("OpenedOn"))
            .field(FieldSpec::sequence("Holdings"))
            .field(FieldSpec::map("Tags"))
            .field(FieldSpec::boxed("MailingAddress"))
    }
}

pub type AccountBuilder = Builder<Account>;

/// Fluent setters for [`Account`] drafts.
pub trait AccountFields: Sized {
    fn id(self, id: AccountId) -> Self;
    fn assign_id(self) -> Self;
    fn owner(self, party: Builder<Party>) -> Self;
    fn owner_person(self, person: Builder<Person>) -> Self;
    fn owner_organization(self, org: Builder<Organization>) -> Self;
    fn currency(self, currency: impl Into<String>) -> Self;
    fn opened_on(self, date: impl Into<String>) -> Self;
    fn holding(self, bond: Builder<Bond>) -> Self;
    fn tag(self, key: impl Into<String>, value: impl Into<String>) -> Self;
    fn mailing_address(self, address: Builder<Address>) -> Self;
}

impl AccountFields for AccountBuilder {
    fn id(self, id: AccountId) -> Self {
        self.set_some(|a| &mut a.id, id)
    }

    fn assign_id(self) -> Self {
        self.id(AccountId::new())
    }

    fn owner(self, party: Builder<Party>) -> Self {
        self.nest(|a| &mut a.owner, party)
    }

    fn owner_person(self, person: Builder<Person>) -> Self {
        self.set(|a| &mut a.owner, person.into_draft())
    }

    fn owner_organization(self, org: Builder<Organization>) -> Self {
        self.set(|a| &mut a.owner, org.into_draft())
    }

    fn currency(self, currency: impl Into<String>) -> Self {
        self.set(|a| &mut a.currency, currency)
    }

    fn opened_on(self, date: impl Into<String>) -> Self {
        self.set(|a| &mut a.opened_on, date)
    }

    fn holding(self, bond: Builder<Bond>) -> Self {
        self.nest_append(|a| &mut a.holdings, bond)
    }

    fn tag(self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.insert(|a| &mut a.tags, key.into(), value.into())
    }

    fn mailing_address(self, address: Builder<Address>) -> Self {
        self.nest_boxed(|a| &mut a.mailing_address, address)
    }
}
