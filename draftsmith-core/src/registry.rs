//! Name-indexed builder factories.
//!
//! A [`Registry`] is an ordinary value: tests build private instances,
//! applications usually populate [`Registry::global`] once at startup and
//! pass it down.

use std::collections::HashMap;
use std::rc::Rc;
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::{debug, info, warn};

use crate::erased::downcast;
use crate::{Builder, Draft, DynBuilder, EngineConfig, RegistryError, RegistryResult};

/// Produces a fresh, empty builder.
pub type Factory = Arc<dyn Fn() -> Box<dyn DynBuilder> + Send + Sync>;

/// Maps type names to builder factories.
pub struct Registry {
    factories: RwLock<HashMap<String, Factory>>,
    /// Applied to every builder this registry creates.
    config: EngineConfig,
}

impl Registry {
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EngineConfig::default())
    }

    #[must_use]
    pub fn with_config(config: EngineConfig) -> Self {
        Self {
            factories: RwLock::new(HashMap::new()),
            config,
        }
    }

    /// The process-wide default registry, created empty on first access.
    pub fn global() -> &'static Registry {
        static GLOBAL: OnceLock<Registry> = OnceLock::new();
        GLOBAL.get_or_init(Registry::new)
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    fn read(&self) -> RwLockReadGuard<'_, HashMap<String, Factory>> {
        self.factories.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, HashMap<String, Factory>> {
        self.factories.write().unwrap_or_else(PoisonError::into_inner)
    }

    // ================================================================
    // Registration
    // ================================================================

    /// Registers `factory` under `name`. The last registration wins;
    /// returns true if an earlier factory was replaced.
    pub fn register<F>(&self, name: impl Into<String>, factory: F) -> bool
    where
        F: Fn() -> Box<dyn DynBuilder> + Send + Sync + 'static,
    {
        let name = name.into();
        let replaced = self.write().insert(name.clone(), Arc::new(factory)).is_some();
        if replaced {
            warn!(type_name = %name, "Builder factory replaced");
        } else {
            info!(type_name = %name, "Builder factory registered");
        }
        replaced
    }

    /// Registers an empty `Builder<T>` factory under `T::TYPE_NAME`.
    pub fn register_draft<T: Draft>(&self) -> bool {
        self.register(T::TYPE_NAME, || Box::new(Builder::<T>::new()) as Box<dyn DynBuilder>)
    }

    // ================================================================
    // Lookup
    // ================================================================

    /// Returns the factory registered under `name`, if any.
    pub fn lookup(&self, name: &str) -> Option<Factory> {
        self.read().get(name).cloned()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.read().contains_key(name)
    }

    /// Registered type names, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.read().keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    /// Creates a fresh builder for `name` using this registry's config.
    pub fn create(&self, name: &str) -> RegistryResult<Box<dyn DynBuilder>> {
        // Factory runs outside the lock so it may itself use the registry.
        let Some(factory) = self.lookup(name) else {
            warn!(type_name = %name, "No builder factory registered");
            return Err(RegistryError::NotFound {
                name: name.to_string(),
            });
        };

        let mut builder = factory();
        builder.set_config(Rc::new(self.config.clone()));
        debug!(type_name = %name, built = builder.type_name(), "Builder created");
        Ok(builder)
    }

    /// [`create`](Self::create), then recover the typed builder.
    pub fn create_typed<T: Draft>(&self, name: &str) -> RegistryResult<Builder<T>> {
        downcast(self.create(name)?)
    }
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}
