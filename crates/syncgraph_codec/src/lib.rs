//! # syncgraph Codec
//!
//! Transit data model and codecs for syncgraph.
//!
//! Encoding an object produces [`SyncData`]: an ordered list of
//! [`SyncEntry`] values, one per registered property, each shaped as
//! `{"prop", "value", "isArray"}`. Nested objects encode to nested entry
//! lists. This crate owns that shape and its JSON and CBOR encodings; it knows
//! nothing about types or registries.
//!
//! ## Transit Rules
//!
//! - Entry order is the metadata-table order of the encoded type
//! - `value` is omitted for absent properties
//! - `isArray` is `true` only for sequences of nested structures
//! - Parsed payloads carry primitives only; structure is recovered on decode
//!
//! ## Usage
//!
//! ```
//! use syncgraph_codec::{from_json_str, to_json_string, SyncData, SyncEntry};
//!
//! let data = SyncData::from(vec![
//!     SyncEntry::primitive("real", 21),
//!     SyncEntry::primitive("imaginary", 7),
//! ]);
//! let text = to_json_string(&data).unwrap();
//! assert_eq!(
//!     text,
//!     r#"[{"prop":"real","value":21,"isArray":false},{"prop":"imaginary","value":7,"isArray":false}]"#
//! );
//!
//! let parsed = from_json_str(&text).unwrap();
//! assert_eq!(parsed, data);
//! ```

#![deny(unsafe_code)]
#![warn(missing_docs)]

mod entry;
mod error;
mod format;
mod value;

pub use entry::{SyncData, SyncEntry};
pub use error::{CodecError, CodecResult};
pub use format::{
    from_cbor, from_json_slice, from_json_str, from_json_value, to_cbor, to_json_pretty,
    to_json_string, to_json_value,
};
pub use value::{SyncValue, SyncValueRef};
