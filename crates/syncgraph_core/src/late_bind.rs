//! Resolving late-bound members.
//!
//! A schema cannot name its own type, or a type declared after it, through
//! [`SchemaBuilder::nested`](crate::SchemaBuilder::nested) without forcing
//! that type's schema first. Such members are declared with
//! [`SchemaBuilder::late_bind`](crate::SchemaBuilder::late_bind) and bound
//! once the target type exists, typically from the type's constructor:
//!
//! ```
//! # use std::sync::OnceLock;
//! # use syncgraph_core::{late_bind, FieldRef, FieldValue, SyncError, SyncResult, SyncType, Syncable, TypeSchema};
//! #[derive(Debug)]
//! struct Node {
//!     num: i64,
//!     next: Option<Box<Node>>,
//! }
//!
//! impl Default for Node {
//!     fn default() -> Self {
//!         let node = Self { num: 0, next: None };
//!         late_bind::<Node, _>(&node, "next").expect("next is declared late-bound");
//!         node
//!     }
//! }
//! # impl Syncable for Node {
//! #     fn sync_schema(&self) -> Option<&'static TypeSchema> { Some(Self::type_schema()) }
//! #     fn read_field(&self, prop: &str) -> SyncResult<FieldRef<'_>> {
//! #         match prop {
//! #             "num" => FieldRef::primitive(&self.num),
//! #             "next" => Ok(FieldRef::optional(self.next.as_deref())),
//! #             _ => Err(SyncError::unknown_member("Node", prop)),
//! #         }
//! #     }
//! #     fn write_field(&mut self, prop: &str, value: FieldValue) -> SyncResult<()> {
//! #         match prop {
//! #             "num" => self.num = value.into_primitive(prop)?,
//! #             "next" => self.next = value.into_boxed(prop)?,
//! #             _ => return Err(SyncError::unknown_member("Node", prop)),
//! #         }
//! #         Ok(())
//! #     }
//! # }
//!
//! impl SyncType for Node {
//!     const TYPE_TAG: &'static str = "Node";
//!
//!     fn type_schema() -> &'static TypeSchema {
//!         static SCHEMA: OnceLock<TypeSchema> = OnceLock::new();
//!         SCHEMA.get_or_init(|| {
//!             TypeSchema::builder(Self::TYPE_TAG)
//!                 .primitive("num")
//!                 .late_bind("next")
//!                 .build()
//!         })
//!     }
//! }
//!
//! let _root = Node::default();
//! assert!(Node::type_schema().is_fully_bound());
//! ```

use crate::error::{SyncError, SyncResult};
use crate::syncable::{SyncType, Syncable};

/// Binds the late-bound member `name` of `obj`'s type to the type tagged `tag`.
///
/// The binding is type-level: it happens once and later calls, from any
/// instance, are no-ops.
///
/// # Errors
///
/// - [`SyncError::NotSyncable`] if `obj`'s type declares no schema
/// - [`SyncError::UnknownMember`] if `name` is not registered
/// - [`SyncError::InvalidAnnotation`] if the member's metadata is inconsistent
pub fn late_bind_member<S: Syncable + ?Sized>(
    obj: &S,
    name: &str,
    tag: &'static str,
) -> SyncResult<()> {
    let schema = obj
        .sync_schema()
        .ok_or_else(|| SyncError::not_syncable(std::any::type_name::<S>()))?;
    schema.late_bind(name, tag).map(|_| ())
}

/// Binds the late-bound member `name` of `obj`'s type to `T`.
///
/// # Errors
///
/// Same as [`late_bind_member`].
pub fn late_bind<T: SyncType, S: Syncable + ?Sized>(obj: &S, name: &str) -> SyncResult<()> {
    late_bind_member(obj, name, T::TYPE_TAG)
}
