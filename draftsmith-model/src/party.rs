//! People, organizations, and the [`Party`] union that holds either.

use std::sync::LazyLock;

use draftsmith_core::{
    Builder, Draft, DraftSchema, FieldSpec, Validate, ValidationResult, Violations,
};
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::{Address, PartyId};

static EMAIL: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^@\s]+@[^@\s]+\.[^@\s]+$").expect("valid email pattern"));

/// A natural person.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Person {
    pub id: Option<PartyId>,
    pub given_name: String,
    pub family_name: String,
    /// `YYYY-MM-DD`.
    pub birth_date: String,
    pub email: String,
    pub addresses: Vec<Address>,
    pub nicknames: Option<Vec<String>>,
}

impl Validate for Person {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new(Self::TYPE_NAME);
        v.require_text("GivenName", &self.given_name)
            .require_text("FamilyName", &self.family_name)
            .date("BirthDate", &self.birth_date)
            .pattern("Email", &self.email, &EMAIL)
            .nested_each("Addresses", &self.addresses);
        v.finish()
    }
}

impl Draft for Person {
    const TYPE_NAME: &'static str = "Person";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Id"))
            .field(FieldSpec::scalar("GivenName"))
            .field(FieldSpec::scalar("FamilyName"))
            .field(FieldSpec::scalar("BirthDate"))
            .field(FieldSpec::scalar("Email"))
            .field(FieldSpec::sequence("Addresses"))
            .field(FieldSpec::sequence("Nicknames"))
    }
}

pub type PersonBuilder = Builder<Person>;

/// Fluent setters for [`Person`] drafts.
pub trait PersonFields: Sized {
    fn id(self, id: PartyId) -> Self;
    fn assign_id(self) -> Self;
    fn given_name(self, name: impl Into<String>) -> Self;
    fn family_name(self, name: impl Into<String>) -> Self;
    fn birth_date(self, date: impl Into<String>) -> Self;
    fn email(self, email: impl Into<String>) -> Self;
    fn address(self, address: Builder<Address>) -> Self;
    fn nickname(self, nickname: impl Into<String>) -> Self;
}

impl PersonFields for PersonBuilder {
    fn id(self, id: PartyId) -> Self {
        self.set_some(|p| &mut p.id, id)
    }

    fn assign_id(self) -> Self {
        self.id(PartyId::new())
    }

    fn given_name(self, name: impl Into<String>) -> Self {
        self.set(|p| &mut p.given_name, name)
    }

    fn family_name(self, name: impl Into<String>) -> Self {
        self.set(|p| &mut p.family_name, name)
    }

    fn birth_date(self, date: impl Into<String>) -> Self {
        self.set(|p| &mut p.birth_date, date)
    }

    fn email(self, email: impl Into<String>) -> Self {
        self.set(|p| &mut p.email, email)
    }

    fn address(self, address: Builder<Address>) -> Self {
        self.nest_append(|p| &mut p.addresses, address)
    }

    fn nickname(self, nickname: impl Into<String>) -> Self {
        self.append(|p| &mut p.nicknames, nickname.into())
    }
}

/// A legal entity.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    pub id: Option<PartyId>,
    pub legal_name: String,
    pub registration_number: String,
    pub country: String,
    pub headquarters: Option<Box<Address>>,
}

impl Validate for Organization {
    fn validate(&self) -> ValidationResult {
        let mut v = Violations::new(Self::TYPE_NAME);
        v.require_text("LegalName", &self.legal_name)
            .require_text("RegistrationNumber", &self.registration_number)
            .require_text("Country", &self.country)
            .nested("Headquarters", &self.headquarters);
        v.finish()
    }
}

impl Draft for Organization {
    const TYPE_NAME: &'static str = "Organization";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
            .field(FieldSpec::scalar("Id"))
            .field(FieldSpec::scalar("LegalName"))
            .field(FieldSpec::scalar("RegistrationNumber"))
            .field(FieldSpec::scalar("Country"))
            .field(FieldSpec::boxed("Headquarters"))
    }
}

pub type OrganizationBuilder = Builder<Organization>;

/// Fluent setters for [`Organization`] drafts.
pub trait OrganizationFields: Sized {
    fn id(self, id: PartyId) -> Self;
    fn assign_id(self) -> Self;
    fn legal_name(self, name: impl Into<String>) -> Self;
    fn registration_number(self, number: impl Into<String>) -> Self;
    fn country(self, country: impl Into<String>) -> Self;
    fn headquarters(self, address: Builder<Address>) -> Self;
}

impl OrganizationFields for OrganizationBuilder {
    fn id(self, id: PartyId) -> Self {
        self.set_some(|o| &mut o.id, id)
    }

    fn assign_id(self) -> Self {
        self.id(PartyId::new())
    }

    fn legal_name(self, name: impl Into<String>) -> Self {
        self.set(|o| &mut o.legal_name, name)
    }

    fn registration_number(self, number: impl Into<String>) -> Self {
        self.set(|o| &mut o.registration_number, number)
    }

    fn country(self, country: impl Into<String>) -> Self {
        self.set(|o| &mut o.country, country)
    }

    fn headquarters(self, address: Builder<Address>) -> Self {
        self.nest_boxed(|o| &mut o.headquarters, address)
    }
}

/// A field that holds a person, an organization, or nothing yet.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Party {
    #[default]
    Unassigned,
    Person(Person),
    Organization(Organization),
}

impl Party {
    #[must_use]
    pub fn is_assigned(&self) -> bool {
        !matches!(self, Self::Unassigned)
    }

    pub fn display_name(&self) -> String {
        match self {
            Self::Unassigned => String::new(),
            Self::Person(p) => format!("{} {}", p.given_name, p.family_name)
                .trim()
                .to_string(),
            Self::Organization(o) => o.legal_name.clone(),
        }
    }
}

/// An unassigned party is structurally valid; owners decide whether one is required.
impl Validate for Party {
    fn validate(&self) -> ValidationResult {
        match self {
            Self::Unassigned => Ok(()),
            Self::Person(person) => person.validate(),
            Self::Organization(org) => org.validate(),
        }
    }
}

impl Draft for Party {
    const TYPE_NAME: &'static str = "Party";

    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME).field(FieldSpec::variant("Party"))
    }
}

impl From<Person> for Party {
    fn from(person: Person) -> Self {
        Self::Person(person)
    }
}

impl From<Organization> for Party {
    fn from(org: Organization) -> Self {
        Self::Organization(org)
    }
}

pub type PartyBuilder = Builder<Party>;

/// Fluent setters for [`Party`] drafts. Each replaces the current variant.
pub trait PartyFields: Sized {
    fn person(self, person: Builder<Person>) -> Self;
    fn organization(self, org: Builder<Organization>) -> Self;
    fn unassigned(self) -> Self;
}

impl PartyFields for PartyBuilder {
    fn person(self, person: Builder<Person>) -> Self {
        self.with(|party| *party = Party::Person(person.into_draft()))
    }

    fn organization(self, org: Builder<Organization>) -> Self {
        self.with(|party| *party = Party::Organization(org.into_draft()))
    }

    fn unassigned(self) -> Self {
        self.with(|party| *party = Party::Unassigned)
    }
}
