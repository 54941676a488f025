//! Type schemas and the builder that declares them.
//!
//! A [`TypeSchema`] is the type-level record every instance of a syncable
//! type shares: its tag, its [`MetadataTable`], its [`SyncConfig`] and the
//! [`SyncProvider`] used to fabricate nested objects during decode.
//!
//! Schemas are normally built once per type and kept in a `static`:
//!
//! ```
//! use std::sync::OnceLock;
//! use syncgraph_core::TypeSchema;
//!
//! fn complex_schema() -> &'static TypeSchema {
//!     static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
//!     SCHEMA.get_or_init(|| {
//!         TypeSchema::builder("Complex")
//!             .primitive("real")
//!             .primitive("imaginary")
//!             .build()
//!     })
//! }
//!
//! assert_eq!(complex_schema().table().len(), 2);
//! ```

use crate::config::SyncConfig;
use crate::descriptor::{SyncDescriptor, SyncKind};
use crate::error::{SyncError, SyncResult};
use crate::provider::SyncProvider;
use crate::syncable::SyncType;
use crate::table::MetadataTable;
use parking_lot::RwLock;
use std::sync::Arc;
use tracing::{debug, warn};

/// Type-level sync metadata shared by all instances of one type.
#[derive(Debug)]
pub struct TypeSchema {
    tag: &'static str,
    /// Swapped copy-on-write by late binding; readers take a snapshot.
    table: RwLock<Arc<MetadataTable>>,
    provider: RwLock<Option<SyncProvider>>,
    config: SyncConfig,
}

impl TypeSchema {
    /// Starts declaring the schema of the type identified by `tag`.
    pub fn builder(tag: &'static str) -> SchemaBuilder {
        SchemaBuilder::new(tag)
    }

    /// Returns the type tag.
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// Returns a snapshot of the metadata table.
    pub fn table(&self) -> Arc<MetadataTable> {
        Arc::clone(&self.table.read())
    }

    /// Returns a copy of the descriptor published as `name`.
    pub fn descriptor(&self, name: &str) -> Option<SyncDescriptor> {
        self.table.read().get(name).cloned()
    }

    /// Returns the schema configuration.
    pub fn config(&self) -> &SyncConfig {
        &self.config
    }

    /// Returns the provider associated with this type, if any.
    pub fn provider(&self) -> Option<SyncProvider> {
        self.provider.read().clone()
    }

    /// Associates `provider` with this type unless one is already set.
    ///
    /// Returns true if the association was made.
    pub(crate) fn attach_provider(&self, provider: &SyncProvider) -> bool {
        let mut slot = self.provider.write();
        match slot.as_ref() {
            Some(existing) => {
                if !existing.ptr_eq(provider) {
                    debug!(
                        type_tag = self.tag,
                        "type already associated with another provider"
                    );
                }
                false
            }
            None => {
                debug!(type_tag = self.tag, "associated provider with type");
                *slot = Some(provider.clone());
                true
            }
        }
    }

    /// Resolves the late-bound member `name` to the type tagged `tag`.
    ///
    /// Returns `Ok(true)` when this call performed the binding and `Ok(false)`
    /// when the member was already bound.
    ///
    /// # Errors
    ///
    /// - [`SyncError::UnknownMember`] if `name` is not in the table
    /// - [`SyncError::InvalidAnnotation`] if the member allows late binding
    ///   but is not declared late-bound
    pub fn late_bind(&self, name: &str, tag: &'static str) -> SyncResult<bool> {
        {
            let table = self.table.read();
            let descriptor = table
                .get(name)
                .ok_or_else(|| SyncError::unknown_member(self.tag, name))?;
            if !descriptor.allow_late_binding() {
                return Ok(false);
            }
        }

        let mut guard = self.table.write();
        let table = Arc::make_mut(&mut guard);
        let descriptor = table
            .get_mut(name)
            .ok_or_else(|| SyncError::unknown_member(self.tag, name))?;
        // Another thread may have bound it between the two locks.
        if !descriptor.allow_late_binding() {
            return Ok(false);
        }
        if !descriptor.kind().is_late_bind() {
            return Err(SyncError::invalid_annotation(self.tag, name));
        }
        descriptor.bind(tag);
        debug!(type_tag = self.tag, member = name, bound_to = tag, "late-bound member");
        Ok(true)
    }

    /// Returns true if no descriptor still awaits late binding.
    pub fn is_fully_bound(&self) -> bool {
        self.table
            .read()
            .iter()
            .all(|(_, d)| !d.kind().is_late_bind())
    }
}

/// Declares the members of a [`TypeSchema`].
///
/// Members are encoded in declaration order. Declaring a published name
/// twice replaces the earlier descriptor in place.
#[derive(Debug)]
pub struct SchemaBuilder {
    tag: &'static str,
    table: MetadataTable,
    provider: Option<SyncProvider>,
    config: SyncConfig,
}

impl SchemaBuilder {
    fn new(tag: &'static str) -> Self {
        Self {
            tag,
            table: MetadataTable::new(),
            provider: None,
            config: SyncConfig::default(),
        }
    }

    /// Declares a member from a prepared descriptor.
    #[must_use]
    pub fn descriptor(mut self, name: impl Into<String>, descriptor: SyncDescriptor) -> Self {
        let name = name.into();
        if self.table.insert(name.clone(), descriptor).is_some() {
            warn!(type_tag = self.tag, member = %name, "member declared twice, replacing");
        }
        self
    }

    /// Declares a member with an explicit property name and kind.
    #[must_use]
    pub fn member(
        self,
        name: impl Into<String>,
        prop_name: impl Into<String>,
        kind: SyncKind,
    ) -> Self {
        self.descriptor(name, SyncDescriptor::new(prop_name, kind))
    }

    /// Declares a primitive member read and written under its own name.
    #[must_use]
    pub fn primitive(self, name: &str) -> Self {
        self.member(name, name, SyncKind::Primitive)
    }

    /// Declares a primitive member published as `name` but stored in `prop_name`.
    #[must_use]
    pub fn primitive_as(self, name: &str, prop_name: &str) -> Self {
        self.member(name, prop_name, SyncKind::Primitive)
    }

    /// Declares a member holding nested objects of type `T`.
    #[must_use]
    pub fn nested<T: SyncType>(self, name: &str) -> Self {
        self.type_ref(name, T::TYPE_TAG)
    }

    /// Declares a member holding nested objects of the type tagged `tag`.
    #[must_use]
    pub fn type_ref(self, name: &str, tag: &'static str) -> Self {
        self.member(name, name, SyncKind::TypeRef(tag))
    }

    /// Declares a member whose type is bound later with
    /// [`late_bind_member`](crate::late_bind_member).
    #[must_use]
    pub fn late_bind(self, name: &str) -> Self {
        self.member(name, name, SyncKind::LateBind)
    }

    /// Associates a provider up front.
    #[must_use]
    pub fn provider(mut self, provider: &SyncProvider) -> Self {
        self.provider = Some(provider.clone());
        self
    }

    /// Sets the schema configuration.
    #[must_use]
    pub fn config(mut self, config: SyncConfig) -> Self {
        self.config = config;
        self
    }

    /// Finishes the schema.
    pub fn build(self) -> TypeSchema {
        debug!(
            type_tag = self.tag,
            members = self.table.len(),
            "declared sync schema"
        );
        TypeSchema {
            tag: self.tag,
            table: RwLock::new(Arc::new(self.table)),
            provider: RwLock::new(self.provider),
            config: self.config,
        }
    }
}
