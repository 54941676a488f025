//! JSON and CBOR encodings of sync data.
//!
//! Both encodings carry the same document: an array of
//! `{"prop", "value", "isArray"}` maps. Reading either back yields primitive
//! values that the decoder reinterprets by declared property kind.

use crate::entry::SyncData;
use crate::error::{CodecError, CodecResult};

/// Encode sync data as compact JSON text.
///
/// # Errors
///
/// Returns an error if a primitive value cannot be represented as JSON.
pub fn to_json_string(data: &SyncData) -> CodecResult<String> {
    Ok(serde_json::to_string(data)?)
}

/// Encode sync data as indented JSON text.
///
/// # Errors
///
/// Returns an error if a primitive value cannot be represented as JSON.
pub fn to_json_pretty(data: &SyncData) -> CodecResult<String> {
    Ok(serde_json::to_string_pretty(data)?)
}

/// Convert sync data to an in-memory JSON document.
///
/// # Errors
///
/// Returns an error if a primitive value cannot be represented as JSON.
pub fn to_json_value(data: &SyncData) -> CodecResult<serde_json::Value> {
    Ok(serde_json::to_value(data)?)
}

/// Parse sync data from JSON text.
///
/// # Errors
///
/// Returns an error if the text is not JSON or not an entry list.
pub fn from_json_str(text: &str) -> CodecResult<SyncData> {
    Ok(serde_json::from_str(text)?)
}

/// Parse sync data from JSON bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not JSON or not an entry list.
pub fn from_json_slice(bytes: &[u8]) -> CodecResult<SyncData> {
    Ok(serde_json::from_slice(bytes)?)
}

/// Interpret an in-memory JSON document as sync data.
///
/// # Errors
///
/// Returns an error if the document is not an entry list.
pub fn from_json_value(value: serde_json::Value) -> CodecResult<SyncData> {
    Ok(serde_json::from_value(value)?)
}

/// Encode sync data as CBOR bytes.
///
/// # Errors
///
/// Returns an error if the serializer fails.
pub fn to_cbor(data: &SyncData) -> CodecResult<Vec<u8>> {
    let mut buffer = Vec::new();
    ciborium::into_writer(data, &mut buffer).map_err(|e| CodecError::cbor(e.to_string()))?;
    Ok(buffer)
}

/// Parse sync data from CBOR bytes.
///
/// # Errors
///
/// Returns an error if the bytes are not CBOR or not an entry list.
pub fn from_cbor(bytes: &[u8]) -> CodecResult<SyncData> {
    ciborium::from_reader(bytes).map_err(|e| CodecError::cbor(e.to_string()))
}
