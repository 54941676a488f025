//! # syncgraph Core
//!
//! Object-graph synchronization engine.
//!
//! Types opt in by declaring a [`TypeSchema`]: an ordered table of the
//! properties that take part in sync and how each one is carried. The engine
//! then provides:
//! - Encode ([`create_sync_data`]): capture an object's registered state as
//!   [`SyncData`], recursing into nested syncable objects
//! - Decode ([`sync_to`]): apply captured state to another object, fabricating
//!   fresh nested objects through a [`SyncProvider`]
//! - Late binding ([`late_bind_member`]) for self-referential types
//! - Broadcast helpers ([`sync_list_items`], [`broadcast`])
//!
//! Encoded data is plain JSON-compatible data and survives a textual round
//! trip; see [`syncgraph_codec`].
//!
//! ## Registration
//!
//! A schema is built once per type and kept in a `static`. Types that are
//! nested inside others implement [`SyncType`] and are registered with a
//! shared [`SyncProvider`], which becomes the provider those types use when
//! decoding their own nested members.

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod broadcast;
mod config;
mod decode;
mod descriptor;
mod encode;
mod error;
mod field;
mod late_bind;
mod provider;
mod schema;
mod syncable;
mod table;

#[cfg(test)]
mod test_types;

pub use broadcast::{broadcast, sync_list_items};
pub use config::{SyncConfig, UnknownFieldPolicy};
pub use decode::sync_to;
pub use descriptor::{SyncDescriptor, SyncKind};
pub use encode::create_sync_data;
pub use error::{SyncError, SyncResult};
pub use field::{AsAny, FieldRef, FieldValue};
pub use late_bind::{late_bind, late_bind_member};
pub use provider::{Factory, SyncProvider};
pub use schema::{SchemaBuilder, TypeSchema};
pub use syncable::{is_syncable, is_syncable_type, SyncFlag, SyncType, Syncable};
pub use table::MetadataTable;

pub use syncgraph_codec::{CodecError, SyncData, SyncEntry, SyncValue, SyncValueRef};

/// Version of this crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
