//! The syncable capability.

use crate::decode::sync_to;
use crate::encode::create_sync_data;
use crate::error::SyncResult;
use crate::field::{AsAny, FieldRef, FieldValue};
use crate::schema::TypeSchema;
use std::sync::atomic::{AtomicUsize, Ordering};
use syncgraph_codec::SyncData;

/// An object that can capture its registered state and apply captured state.
///
/// Implementors supply the schema lookup and the per-property accessors;
/// [`to_sync_data`](Syncable::to_sync_data) and
/// [`sync_from`](Syncable::sync_from) are provided on top of them.
///
/// # Example
///
/// ```
/// use std::sync::OnceLock;
/// use syncgraph_core::{FieldRef, FieldValue, SyncError, SyncResult, Syncable, TypeSchema};
///
/// #[derive(Default)]
/// struct Complex {
///     real: f64,
///     imaginary: f64,
/// }
///
/// impl Syncable for Complex {
///     fn sync_schema(&self) -> Option<&'static TypeSchema> {
///         static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
///         Some(SCHEMA.get_or_init(|| {
///             TypeSchema::builder("Complex")
///                 .primitive("real")
///                 .primitive("imaginary")
///                 .build()
///         }))
///     }
///
///     fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
///         match prop {
///             "real" => FieldRef::primitive(&self.real),
///             "imaginary" => FieldRef::primitive(&self.imaginary),
///             _ => Err(SyncError::unknown_member("Complex", prop)),
///         }
///     }
///
///     fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
///         match prop {
///             "real" => self.real = value.into_primitive(prop)?,
///             "imaginary" => self.imaginary = value.into_primitive(prop)?,
///             _ => return Err(SyncError::unknown_member("Complex", prop)),
///         }
///         Ok(())
///     }
/// }
///
/// let source = Complex { real: 21.0, imaginary: 7.0 };
/// let mut target = Complex::default();
/// target.sync_from(&source.to_sync_data().unwrap()).unwrap();
/// assert_eq!(target.real, 21.0);
/// assert_eq!(target.imaginary, 7.0);
/// ```
pub trait Syncable: AsAny + Send + Sync {
    /// Returns the schema of this object's type, or `None` if the type never
    /// declared one.
    fn sync_schema(&self) -> Option<&'static TypeSchema>;

    /// Reads the property `prop` for encoding.
    fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>>;

    /// Writes a decoded value into the property `prop`.
    fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()>;

    /// Checks that [`write_field`](Syncable::write_field) would accept
    /// `value` for `prop`.
    ///
    /// Atomic decodes call this for every staged value before writing any of
    /// them. The default accepts everything, so conversion failures surface
    /// only from `write_field`.
    fn check_field(&self, _prop: &str, _value: &FieldValue) -> SyncResult<()> {
        Ok(())
    }

    /// Returns the flag marking a decode in flight, if the type carries one.
    fn sync_flag(&self) -> Option<&SyncFlag> {
        None
    }

    /// Captures the registered state of this object.
    fn to_sync_data(&self) -> SyncResult<SyncData> {
        create_sync_data(self)
    }

    /// Applies captured state to this object.
    fn sync_from(&mut self, data: &SyncData) -> SyncResult<()> {
        if let Some(flag) = self.sync_flag() {
            flag.enter();
        }
        let result = sync_to(self, data);
        if let Some(flag) = self.sync_flag() {
            flag.exit();
        }
        result
    }

    /// Returns true while [`sync_from`](Syncable::sync_from) runs on this object.
    fn is_sync_in_progress(&self) -> bool {
        self.sync_flag().is_some_and(SyncFlag::is_set)
    }
}

/// A syncable type with a static tag and schema.
///
/// Types implementing this can be registered with
/// [`SyncProvider::register`](crate::SyncProvider::register) and referenced
/// from other schemas with [`SchemaBuilder::nested`](crate::SchemaBuilder::nested).
pub trait SyncType: Syncable + Default {
    /// Stable tag the type is registered and referenced under.
    const TYPE_TAG: &'static str;

    /// Returns the type's schema.
    fn type_schema() -> &'static TypeSchema;
}

/// Marks an object as being decoded into.
///
/// Embed one in a type and return it from [`Syncable::sync_flag`] so setters
/// can check [`Syncable::is_sync_in_progress`] and defer derived work.
/// Re-entrant: nested decodes of the same object keep it set until the
/// outermost one finishes.
#[derive(Debug, Default)]
pub struct SyncFlag {
    depth: AtomicUsize,
}

impl SyncFlag {
    /// Creates a cleared flag.
    pub const fn new() -> Self {
        Self {
            depth: AtomicUsize::new(0),
        }
    }

    /// Marks the start of a decode.
    pub fn enter(&self) {
        self.depth.fetch_add(1, Ordering::AcqRel);
    }

    /// Marks the end of a decode.
    pub fn exit(&self) {
        let _ = self
            .depth
            .fetch_update(Ordering::AcqRel, Ordering::Acquire, |d| d.checked_sub(1));
    }

    /// Returns true while at least one decode is in flight.
    pub fn is_set(&self) -> bool {
        self.depth.load(Ordering::Acquire) > 0
    }
}

impl Clone for SyncFlag {
    // A copy of an object is not itself being synced.
    fn clone(&self) -> Self {
        Self::new()
    }
}

/// Returns true if `obj`'s type declared a sync schema.
pub fn is_syncable<S: Syncable + ?Sized>(obj: &S) -> bool {
    obj.sync_schema().is_some()
}

/// Returns true if a default instance of `T` is syncable.
pub fn is_syncable_type<T: SyncType>() -> bool {
    is_syncable(&T::default())
}
