//! The type registry used to fabricate nested objects during decode.

use crate::error::{SyncError, SyncResult};
use crate::syncable::{is_syncable, SyncType, Syncable};
use parking_lot::RwLock;
use std::collections::HashMap;
use std::fmt;
use std::sync::Arc;
use tracing::{debug, trace, warn};

/// Produces a new default-constructed instance of a registered type.
pub type Factory = Arc<dyn Fn() -> Box<dyn Syncable> + Send + Sync>;

/// Maps type names to factories.
///
/// A provider is a cheap handle: clones share the same registry. Types
/// registered with a provider are associated with it, and decode uses that
/// association to create nested objects. Any construction arguments a type
/// needs are captured by its factory closure.
#[derive(Clone, Default)]
pub struct SyncProvider {
    factories: Arc<RwLock<HashMap<String, Factory>>>,
}

impl SyncProvider {
    /// Creates an empty provider.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers `T` under its [`SyncType::TYPE_TAG`].
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotSyncable`] if `T` declares no schema.
    pub fn register<T: SyncType>(&self) -> SyncResult<()> {
        self.register_type(T::TYPE_TAG, || Box::new(T::default()) as Box<dyn Syncable>)
    }

    /// Registers `factory` under `name`, replacing any earlier factory.
    ///
    /// The factory is invoked once to check that it produces syncable
    /// instances; that prototype's type is associated with this provider if
    /// it has no provider yet.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::NotSyncable`] if the produced instance's type
    /// declares no schema.
    pub fn register_type<F>(&self, name: impl Into<String>, factory: F) -> SyncResult<()>
    where
        F: Fn() -> Box<dyn Syncable> + Send + Sync + 'static,
    {
        let name = name.into();
        let prototype = factory();
        if !is_syncable(&*prototype) {
            return Err(SyncError::not_syncable(name));
        }
        if let Some(schema) = prototype.sync_schema() {
            schema.attach_provider(self);
        }

        let replaced = self
            .factories
            .write()
            .insert(name.clone(), Arc::new(factory))
            .is_some();
        if replaced {
            warn!(type_name = %name, "replaced existing sync type registration");
        } else {
            debug!(type_name = %name, "registered sync type");
        }
        Ok(())
    }

    /// Creates a fresh instance of the type registered under `name`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::UnknownType`] if nothing is registered under `name`.
    pub fn create(&self, name: &str) -> SyncResult<Box<dyn Syncable>> {
        let factory = self
            .factories
            .read()
            .get(name)
            .cloned()
            .ok_or_else(|| SyncError::unknown_type(name))?;
        trace!(type_name = name, "creating sync instance");
        Ok(factory())
    }

    /// Returns true if a factory is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.factories.read().contains_key(name)
    }

    /// Returns the registered names, sorted.
    pub fn type_names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.factories.read().keys().cloned().collect();
        names.sort();
        names
    }

    /// Returns the number of registered types.
    pub fn len(&self) -> usize {
        self.factories.read().len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.factories.read().is_empty()
    }

    /// Returns true if both handles share the same registry.
    pub fn ptr_eq(&self, other: &SyncProvider) -> bool {
        Arc::ptr_eq(&self.factories, &other.factories)
    }
}

impl fmt::Debug for SyncProvider {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SyncProvider")
            .field("types", &self.type_names())
            .finish()
    }
}
