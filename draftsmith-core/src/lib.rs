//! Core draft-building engine for Draftsmith.
//!
//! Defines the pieces every entity builder is made of:
//! - [`Builder`]: owns one in-progress draft plus its custom validators,
//!   exposes chainable mutators and the three finalizers
//! - [`Validate`] / [`Violations`]: the structural validator contract and
//!   the aggregating collector entity types use to implement it
//! - [`Shared`], [`Sequence`], [`Mapping`]: field carriers whose types
//!   declare how a cloned builder copies them
//! - [`Registry`]: name-indexed builder factories for callers that only
//!   know a type name
//! - [`EngineConfig`]: message and logging knobs, parsed from TOML text
//!
//! Validation runs in two phases: custom validators in registration order
//! (first failure wins), then the draft's own structural validator (every
//! violation is collected).

mod builder;
mod config;
mod draft;
mod erased;
mod error;
mod fields;
mod registry;
mod validation;

pub use builder::{Builder, CustomValidator};
pub use config::EngineConfig;
pub use draft::{CopyPolicy, Draft, DraftSchema, FieldKind, FieldSpec};
pub use erased::{DynBuilder, downcast, downcast_ref};
pub use error::{
    Abort, ConfigError, RegistryError, RegistryResult, StructuralError, ValidationError,
    ValidationResult, Violation, ViolationKind,
};
pub use fields::{Mapping, Sequence, Shared};
pub use registry::{Factory, Registry};
pub use validation::{DATE_FORMAT, Validate, Violations, run_pipeline};
