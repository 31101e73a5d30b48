//! The draft holder: one in-progress entity plus its custom validators.
//!
//! Mutators never fail; every check is deferred to the finalizers, so a
//! draft can be assembled in any order.

use std::fmt;
use std::rc::Rc;

use crate::validation::run_pipeline;
use crate::{Abort, Draft, EngineConfig, Mapping, Sequence, Shared, ValidationError, ValidationResult};

/// Caller-supplied predicate run before structural validation.
/// Returns the rejection message on failure.
pub type CustomValidator<T> = Rc<dyn Fn(&T) -> Result<(), String>>;

/// Builds one draft of `T` through chained mutators.
///
/// A builder holds exactly one draft; mutators write into it in place and
/// hand the builder back. Cloning a builder copies the draft according to
/// each field's type (see [`Shared`]) and copies the validator list.
pub struct Builder<T: Draft> {
    draft: T,
    validators: Vec<CustomValidator<T>>,
    label: Option<String>,
    config: Rc<EngineConfig>,
}

impl<T: Draft> Builder<T> {
    /// Creates a builder around an empty draft.
    #[must_use]
    pub fn new() -> Self {
        Self::from_draft(T::default())
    }

    /// Creates a builder seeded with an existing draft.
    #[must_use]
    pub fn from_draft(draft: T) -> Self {
        Self {
            draft,
            validators: Vec::new(),
            label: None,
            config: Rc::new(EngineConfig::default()),
        }
    }

    /// Creates an empty builder that uses `config`.
    #[must_use]
    pub fn configured(config: Rc<EngineConfig>) -> Self {
        Self {
            config,
            ..Self::new()
        }
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: Rc<EngineConfig>) {
        self.config = config;
    }

    /// Name used in diagnostics: the label if set, else the type name.
    pub fn label(&self) -> &str {
        self.label.as_deref().unwrap_or(T::TYPE_NAME)
    }

    /// Borrows the current draft.
    pub fn draft(&self) -> &T {
        &self.draft
    }

    pub fn validator_count(&self) -> usize {
        self.validators.len()
    }

    // ================================================================
    // Fluent mutators
    // ================================================================

    /// Applies an arbitrary in-place edit.
    #[must_use]
    pub fn with(mut self, edit: impl FnOnce(&mut T)) -> Self {
        edit(&mut self.draft);
        self
    }

    /// Overwrites a field.
    #[must_use]
    pub fn set<F>(mut self, field: impl FnOnce(&mut T) -> &mut F, value: impl Into<F>) -> Self {
        *field(&mut self.draft) = value.into();
        self
    }

    /// Overwrites an optional field with `Some(value)`.
    #[must_use]
    pub fn set_some<F>(
        mut self,
        field: impl FnOnce(&mut T) -> &mut Option<F>,
        value: impl Into<F>,
    ) -> Self {
        *field(&mut self.draft) = Some(value.into());
        self
    }

    /// Appends one element to a sequence field.
    #[must_use]
    pub fn append<V, S>(mut self, field: impl FnOnce(&mut T) -> &mut S, value: V) -> Self
    where
        S: Sequence<V>,
    {
        field(&mut self.draft).push_item(value);
        self
    }

    /// Inserts or overwrites one key of a map field.
    #[must_use]
    pub fn insert<K, V, M>(mut self, field: impl FnOnce(&mut T) -> &mut M, key: K, value: V) -> Self
    where
        M: Mapping<K, V>,
    {
        field(&mut self.draft).upsert(key, value);
        self
    }

    /// Embeds a sub-entity by value.
    #[must_use]
    pub fn nest<U: Draft>(self, field: impl FnOnce(&mut T) -> &mut U, sub: Builder<U>) -> Self {
        self.set(field, sub.into_draft())
    }

    /// Embeds a sub-entity into an optional by-value field.
    #[must_use]
    pub fn nest_some<U: Draft>(
        self,
        field: impl FnOnce(&mut T) -> &mut Option<U>,
        sub: Builder<U>,
    ) -> Self {
        self.set_some(field, sub.into_draft())
    }

    /// Embeds a sub-entity behind an exclusively owned pointer.
    #[must_use]
    pub fn nest_boxed<U: Draft>(
        self,
        field: impl FnOnce(&mut T) -> &mut Option<Box<U>>,
        sub: Builder<U>,
    ) -> Self {
        self.set_some(field, Box::new(sub.into_draft()))
    }

    /// Embeds a sub-entity behind a reference that clones of this builder share.
    #[must_use]
    pub fn nest_shared<U: Draft>(
        self,
        field: impl FnOnce(&mut T) -> &mut Option<Shared<U>>,
        sub: Builder<U>,
    ) -> Self {
        self.set_some(field, Shared::new(sub.into_draft()))
    }

    /// Appends a sub-entity to a repeated field.
    #[must_use]
    pub fn nest_append<U, S>(self, field: impl FnOnce(&mut T) -> &mut S, sub: Builder<U>) -> Self
    where
        U: Draft,
        S: Sequence<U>,
    {
        self.append(field, sub.into_draft())
    }

    /// Registers a custom validator. Validators run in registration order.
    #[must_use]
    pub fn with_validator(mut self, validator: impl Fn(&T) -> Result<(), String> + 'static) -> Self {
        self.validators.push(Rc::new(validator));
        self
    }

    /// Names this builder in diagnostics and abort messages.
    #[must_use]
    pub fn labelled(mut self, label: impl Into<String>) -> Self {
        self.label = Some(label.into());
        self
    }

    // ================================================================
    // Finalizers
    // ================================================================

    /// Returns a copy of the draft without any checks.
    #[must_use]
    pub fn extract(&self) -> T {
        self.draft.clone()
    }

    /// Consumes the builder and returns the draft without any checks.
    #[must_use]
    pub fn into_draft(self) -> T {
        self.draft
    }

    /// Runs the validation pipeline against the current draft.
    pub fn validate(&self) -> ValidationResult {
        run_pipeline(&self.draft, &self.validators, &self.config)
    }

    /// Returns the draft if it passes validation.
    pub fn extract_validated(&self) -> Result<T, ValidationError> {
        self.validate().map(|()| self.extract())
    }

    /// Returns the draft together with the validation outcome, so an invalid
    /// draft can still be inspected.
    pub fn extract_with_report(&self) -> (T, ValidationResult) {
        (self.extract(), self.validate())
    }

    /// Validating extraction whose failure is an [`Abort`] signal.
    pub fn try_extract_or_abort(&self) -> Result<T, Abort> {
        self.extract_validated().map_err(|source| Abort {
            entity: self.label().to_string(),
            message: self.config.abort_message.clone(),
            source,
        })
    }

    /// Returns the draft or aborts the current operation.
    ///
    /// Only for drafts whose invalidity is a programming error (test
    /// fixtures, hard-coded seed data), never for external input.
    ///
    /// # Panics
    /// If the draft fails validation.
    #[must_use]
    pub fn extract_or_abort(&self) -> T {
        match self.try_extract_or_abort() {
            Ok(draft) => draft,
            Err(abort) => abort.raise(),
        }
    }

    /// Clones the builder, then lets `detach` rework fields of the copy
    /// (typically replacing [`Shared`] fields with deep copies).
    #[must_use]
    pub fn clone_with(&self, detach: impl FnOnce(&mut T)) -> Self {
        self.clone().with(detach)
    }
}

impl<T: Draft> Clone for Builder<T> {
    fn clone(&self) -> Self {
        Self {
            draft: self.draft.clone(),
            validators: self.validators.iter().map(Rc::clone).collect(),
            label: self.label.clone(),
            config: Rc::clone(&self.config),
        }
    }
}

impl<T: Draft> Default for Builder<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Draft + fmt::Debug> fmt::Debug for Builder<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Builder")
            .field("draft", &self.draft)
            .field("validators", &self.validators.len())
            .field("label", &self.label)
            .finish()
    }
}
