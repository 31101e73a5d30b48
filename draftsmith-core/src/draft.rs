use serde::{Deserialize, Serialize};

use crate::Validate;

/// An entity type that can be assembled by a [`Builder`](crate::Builder).
///
/// `Default` is the empty draft a fresh builder starts from. `TYPE_NAME` is
/// the key the type is registered under; registration is explicit and
/// static, there is no runtime discovery.
pub trait Draft: Clone + Default + Validate + Serialize + 'static {
    /// Registry name of the entity type (e.g. "Address").
    const TYPE_NAME: &'static str;

    /// Declares each field's shape and copy policy.
    fn schema() -> DraftSchema {
        DraftSchema::new(Self::TYPE_NAME)
    }
}

/// Describes an entity type's fields and how a cloned builder copies them.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DraftSchema {
    pub type_name: String,
    pub fields: Vec<FieldSpec>,
}

impl DraftSchema {
    pub fn new(type_name: &str) -> Self {
        Self {
            type_name: type_name.into(),
            fields: Vec::new(),
        }
    }

    /// Appends a field declaration.
    #[must_use]
    pub fn field(mut self, spec: FieldSpec) -> Self {
        self.fields.push(spec);
        self
    }

    /// Looks up a field declaration by name.
    pub fn get(&self, name: &str) -> Option<&FieldSpec> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fields that stay aliased between a builder and its clone.
    pub fn shared_fields(&self) -> impl Iterator<Item = &FieldSpec> {
        self.fields
            .iter()
            .filter(|f| f.copy == CopyPolicy::SharedReference)
    }
}

/// A declared field of a draft.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSpec {
    pub name: String,
    pub kind: FieldKind,
    pub copy: CopyPolicy,
}

impl FieldSpec {
    fn simple(name: &str, kind: FieldKind, copy: CopyPolicy) -> Self {
        Self {
            name: name.into(),
            kind,
            copy,
        }
    }

    /// Shorthand for a scalar (string, number, date text, flag) field.
    pub fn scalar(name: &str) -> Self {
        Self::simple(name, FieldKind::Scalar, CopyPolicy::Value)
    }

    /// Shorthand for an ordered sequence field.
    pub fn sequence(name: &str) -> Self {
        Self::simple(name, FieldKind::Sequence, CopyPolicy::DeepClone)
    }

    /// Shorthand for a keyed map field.
    pub fn map(name: &str) -> Self {
        Self::simple(name, FieldKind::Map, CopyPolicy::DeepClone)
    }

    /// Shorthand for a sub-entity held by value.
    pub fn nested(name: &str) -> Self {
        Self::simple(name, FieldKind::Nested, CopyPolicy::DeepClone)
    }

    /// Shorthand for a sub-entity held through an exclusive `Box`.
    pub fn boxed(name: &str) -> Self {
        Self::simple(name, FieldKind::Boxed, CopyPolicy::DeepClone)
    }

    /// Shorthand for a sub-entity held through a [`Shared`](crate::Shared).
    pub fn shared(name: &str) -> Self {
        Self::simple(name, FieldKind::Shared, CopyPolicy::SharedReference)
    }

    /// Shorthand for a closed union of entity variants.
    pub fn variant(name: &str) -> Self {
        Self::simple(name, FieldKind::Variant, CopyPolicy::DeepClone)
    }
}

/// Shape of a draft field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Scalar,
    Sequence,
    Map,
    Nested,
    Boxed,
    Shared,
    Variant,
}

/// How cloning a builder copies a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CopyPolicy {
    /// Plain value copy.
    Value,
    /// Element-wise or recursive copy; the clone is fully independent.
    DeepClone,
    /// Clone and source point at the same value.
    SharedReference,
}
