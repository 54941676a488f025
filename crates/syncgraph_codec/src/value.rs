//! Encoded property values.

use crate::entry::SyncData;
use crate::error::{CodecError, CodecResult};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::borrow::Cow;

/// The value carried by a [`SyncEntry`](crate::SyncEntry).
///
/// Encoding produces the structured variants directly. Anything read back
/// from JSON or CBOR arrives as [`SyncValue::Primitive`], because the wire form
/// alone cannot tell a primitive array from a nested structure; the decoder
/// resolves that using the property's declared kind.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum SyncValue {
    /// The property held no value.
    #[default]
    Absent,
    /// An opaque JSON-compatible value.
    Primitive(serde_json::Value),
    /// One nested encoded structure.
    Object(SyncData),
    /// A sequence of nested encoded structures.
    Elements(Vec<SyncData>),
}

impl SyncValue {
    /// Returns true if no value is present.
    pub fn is_absent(&self) -> bool {
        matches!(self, SyncValue::Absent)
    }

    /// Returns a borrowed view of this value.
    pub fn as_value_ref(&self) -> SyncValueRef<'_> {
        match self {
            SyncValue::Absent => SyncValueRef::Absent,
            SyncValue::Primitive(v) => SyncValueRef::Primitive(v),
            SyncValue::Object(data) => SyncValueRef::Object(data),
            SyncValue::Elements(items) => SyncValueRef::Elements(items),
        }
    }

    /// Get this value as a primitive JSON value, if it is one.
    pub fn as_primitive(&self) -> Option<&serde_json::Value> {
        match self {
            SyncValue::Primitive(v) => Some(v),
            _ => None,
        }
    }

    /// Converts this value to plain JSON.
    pub fn to_json(&self) -> CodecResult<serde_json::Value> {
        self.as_value_ref().to_json()
    }
}

impl From<serde_json::Value> for SyncValue {
    fn from(value: serde_json::Value) -> Self {
        SyncValue::Primitive(value)
    }
}

impl From<SyncData> for SyncValue {
    fn from(data: SyncData) -> Self {
        SyncValue::Object(data)
    }
}

impl From<Vec<SyncData>> for SyncValue {
    fn from(items: Vec<SyncData>) -> Self {
        SyncValue::Elements(items)
    }
}

impl Serialize for SyncValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            SyncValue::Absent => serializer.serialize_none(),
            SyncValue::Primitive(v) => v.serialize(serializer),
            SyncValue::Object(data) => data.serialize(serializer),
            SyncValue::Elements(items) => items.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for SyncValue {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        serde_json::Value::deserialize(deserializer).map(SyncValue::Primitive)
    }
}

/// A borrowed view of a [`SyncValue`] or of one element inside it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SyncValueRef<'a> {
    /// No value.
    Absent,
    /// An opaque JSON value.
    Primitive(&'a serde_json::Value),
    /// One nested encoded structure.
    Object(&'a SyncData),
    /// A sequence of nested encoded structures.
    Elements(&'a [SyncData]),
}

impl<'a> SyncValueRef<'a> {
    /// Returns true for an absent value or a JSON `null`.
    pub fn is_nullish(&self) -> bool {
        matches!(
            self,
            SyncValueRef::Absent | SyncValueRef::Primitive(serde_json::Value::Null)
        )
    }

    /// Returns true for nullish values and for `false`, `0` and `""`.
    ///
    /// A falsy value in place of a nested structure means the property held
    /// no object.
    pub fn is_falsy(&self) -> bool {
        match self {
            SyncValueRef::Absent => true,
            SyncValueRef::Primitive(json) => match json {
                serde_json::Value::Null => true,
                serde_json::Value::Bool(b) => !b,
                serde_json::Value::Number(n) => n.as_f64() == Some(0.0),
                serde_json::Value::String(s) => s.is_empty(),
                serde_json::Value::Array(_) | serde_json::Value::Object(_) => false,
            },
            SyncValueRef::Object(_) | SyncValueRef::Elements(_) => false,
        }
    }

    /// Returns true if this value is a sequence, structured or JSON.
    pub fn is_sequence(&self) -> bool {
        matches!(
            self,
            SyncValueRef::Elements(_) | SyncValueRef::Primitive(serde_json::Value::Array(_))
        )
    }

    /// Interprets this value as one nested encoded structure.
    ///
    /// Returns `Ok(None)` for nullish values. A JSON-shaped primitive is parsed
    /// into [`SyncData`]; a structured value is borrowed as is.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidStructure`] if the value does not have the
    /// shape of sync data.
    pub fn to_sync_data(&self) -> CodecResult<Option<Cow<'a, SyncData>>> {
        match *self {
            SyncValueRef::Absent | SyncValueRef::Primitive(serde_json::Value::Null) => Ok(None),
            SyncValueRef::Object(data) => Ok(Some(Cow::Borrowed(data))),
            SyncValueRef::Primitive(json) => SyncData::deserialize(json)
                .map(|data| Some(Cow::Owned(data)))
                .map_err(|e| CodecError::invalid_structure(format!("expected sync data: {e}"))),
            SyncValueRef::Elements(_) => Err(CodecError::invalid_structure(
                "expected a single nested structure, found an element sequence",
            )),
        }
    }

    /// Interprets this value as a sequence of elements.
    ///
    /// Returns `Ok(None)` for nullish values.
    ///
    /// # Errors
    ///
    /// Returns [`CodecError::InvalidStructure`] if the value is not a sequence.
    pub fn elements(&self) -> CodecResult<Option<Vec<SyncValueRef<'a>>>> {
        match *self {
            SyncValueRef::Absent | SyncValueRef::Primitive(serde_json::Value::Null) => Ok(None),
            SyncValueRef::Elements(items) => {
                Ok(Some(items.iter().map(SyncValueRef::Object).collect()))
            }
            SyncValueRef::Primitive(serde_json::Value::Array(items)) => {
                Ok(Some(items.iter().map(SyncValueRef::Primitive).collect()))
            }
            SyncValueRef::Primitive(_) | SyncValueRef::Object(_) => Err(
                CodecError::invalid_structure("array entry does not carry a sequence"),
            ),
        }
    }

    /// Converts this value to plain JSON.
    pub fn to_json(&self) -> CodecResult<serde_json::Value> {
        match *self {
            SyncValueRef::Absent => Ok(serde_json::Value::Null),
            SyncValueRef::Primitive(v) => Ok(v.clone()),
            SyncValueRef::Object(data) => Ok(serde_json::to_value(data)?),
            SyncValueRef::Elements(items) => Ok(serde_json::to_value(items)?),
        }
    }
}
