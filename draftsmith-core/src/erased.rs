//! Type-erased builders for callers that only know a type name.

use std::any::Any;
use std::fmt;
use std::rc::Rc;

use crate::{Builder, Draft, DraftSchema, EngineConfig, RegistryError, RegistryResult, ValidationResult};

/// Object-safe view of a [`Builder`] of any draft type.
pub trait DynBuilder {
    fn type_name(&self) -> &'static str;

    fn schema(&self) -> DraftSchema;

    /// Non-validating extraction, rendered as JSON.
    fn extract_json(&self) -> RegistryResult<serde_json::Value>;

    /// Runs the validation pipeline.
    fn validate(&self) -> ValidationResult;

    fn validator_count(&self) -> usize;

    fn clone_boxed(&self) -> Box<dyn DynBuilder>;

    fn set_config(&mut self, config: Rc<EngineConfig>);

    fn as_any(&self) -> &dyn Any;

    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Draft> DynBuilder for Builder<T> {
    fn type_name(&self) -> &'static str {
        T::TYPE_NAME
    }

    fn schema(&self) -> DraftSchema {
        T::schema()
    }

    fn extract_json(&self) -> RegistryResult<serde_json::Value> {
        Ok(serde_json::to_value(self.draft())?)
    }

    fn validate(&self) -> ValidationResult {
        Builder::validate(self)
    }

    fn validator_count(&self) -> usize {
        Builder::validator_count(self)
    }

    fn clone_boxed(&self) -> Box<dyn DynBuilder> {
        Box::new(self.clone())
    }

    fn set_config(&mut self, config: Rc<EngineConfig>) {
        Builder::set_config(self, config);
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

impl Clone for Box<dyn DynBuilder> {
    fn clone(&self) -> Self {
        self.clone_boxed()
    }
}

impl fmt::Debug for dyn DynBuilder {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DynBuilder")
            .field("type_name", &self.type_name())
            .field("validators", &self.validator_count())
            .finish()
    }
}

/// Recovers the typed builder.
pub fn downcast<T: Draft>(builder: Box<dyn DynBuilder>) -> RegistryResult<Builder<T>> {
    let name = builder.type_name();
    builder
        .into_any()
        .downcast::<Builder<T>>()
        .map(|typed| *typed)
        .map_err(|_| RegistryError::TypeMismatch {
            name: name.to_string(),
            expected: T::TYPE_NAME,
        })
}

/// Borrows the typed builder if `builder` is a `Builder<T>`.
pub fn downcast_ref<T: Draft>(builder: &dyn DynBuilder) -> Option<&Builder<T>> {
    builder.as_any().downcast_ref::<Builder<T>>()
}
