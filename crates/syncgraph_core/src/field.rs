//! Field access values exchanged between the engine and syncable types.
//!
//! Encode asks a type for a [`FieldRef`] per registered property; decode
//! hands it a [`FieldValue`]. The conversion helpers cover the common field
//! shapes so a type's accessors stay one line per property.

use crate::error::{SyncError, SyncResult};
use crate::syncable::{is_syncable, Syncable};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::any::Any;
use std::fmt;
use syncgraph_codec::CodecError;

/// Upcasting to [`Any`] for trait objects.
pub trait AsAny: Any {
    /// Borrows `self` as [`Any`].
    fn as_any(&self) -> &dyn Any;
    /// Converts a boxed `self` into a boxed [`Any`].
    fn into_any(self: Box<Self>) -> Box<dyn Any>;
}

impl<T: Any> AsAny for T {
    fn as_any(&self) -> &dyn Any {
        self
    }

    fn into_any(self: Box<Self>) -> Box<dyn Any> {
        self
    }
}

/// A borrowed view of one property, produced for encoding.
pub enum FieldRef<'a> {
    /// The property holds nothing.
    Absent,
    /// An opaque JSON-compatible value.
    Primitive(serde_json::Value),
    /// A nested syncable object.
    Object(&'a dyn Syncable),
    /// A sequence of nested syncable objects.
    List(Vec<Option<&'a dyn Syncable>>),
}

impl<'a> FieldRef<'a> {
    /// Serializes `value` into a primitive.
    ///
    /// # Errors
    ///
    /// Returns a codec error if `value` cannot be represented as JSON.
    pub fn primitive<T: Serialize + ?Sized>(value: &T) -> SyncResult<Self> {
        serde_json::to_value(value)
            .map(FieldRef::Primitive)
            .map_err(|e| SyncError::Codec(CodecError::from(e)))
    }

    /// Borrows a nested object.
    pub fn object<T: Syncable>(value: &'a T) -> Self {
        FieldRef::Object(value)
    }

    /// Borrows an optional nested object; `None` is absent.
    pub fn optional<T: Syncable>(value: Option<&'a T>) -> Self {
        match value {
            Some(value) => FieldRef::Object(value),
            None => FieldRef::Absent,
        }
    }

    /// Borrows a slice of nested objects.
    pub fn list<T: Syncable>(items: &'a [T]) -> Self {
        FieldRef::List(
            items
                .iter()
                .map(|item| Some(item as &dyn Syncable))
                .collect(),
        )
    }

    /// Returns true if this is a syncable object or a sequence whose every
    /// element is a syncable object.
    pub fn is_syncable(&self) -> bool {
        match self {
            FieldRef::Object(value) => is_syncable(*value),
            FieldRef::List(items) => items
                .iter()
                .all(|item| item.is_some_and(|value| is_syncable(value))),
            FieldRef::Absent | FieldRef::Primitive(_) => false,
        }
    }
}

impl fmt::Debug for FieldRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldRef::Absent => f.write_str("Absent"),
            FieldRef::Primitive(v) => f.debug_tuple("Primitive").field(v).finish(),
            FieldRef::Object(value) => f.debug_tuple("Object").field(&tag_of(*value)).finish(),
            FieldRef::List(items) => f
                .debug_tuple("List")
                .field(&items.iter().map(|i| i.map(tag_of)).collect::<Vec<_>>())
                .finish(),
        }
    }
}

/// An owned property value produced by decoding, handed to a type's setter.
pub enum FieldValue {
    /// No value was transmitted, or a nested object was null.
    Absent,
    /// An opaque JSON-compatible value.
    Primitive(serde_json::Value),
    /// A freshly fabricated nested object.
    Object(Box<dyn Syncable>),
    /// Freshly fabricated nested objects; `None` for null elements.
    List(Vec<Option<Box<dyn Syncable>>>),
}

impl FieldValue {
    /// Returns true if no value is present.
    pub fn is_absent(&self) -> bool {
        matches!(self, FieldValue::Absent)
    }

    /// Deserializes a primitive into `T`. Absent reads as JSON `null`, so
    /// `Option<_>` targets become `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::FieldMismatch`] if the value is an object or does
    /// not deserialize into `T`.
    pub fn into_primitive<T: DeserializeOwned>(self, member: &str) -> SyncResult<T> {
        let json = match self {
            FieldValue::Absent => serde_json::Value::Null,
            FieldValue::Primitive(json) => json,
            FieldValue::Object(_) | FieldValue::List(_) => return Err(not_primitive(member)),
        };
        serde_json::from_value(json).map_err(|e| SyncError::field_mismatch(member, e.to_string()))
    }

    /// Checks that [`into_primitive::<T>`](FieldValue::into_primitive) would
    /// succeed, without consuming the value.
    ///
    /// # Errors
    ///
    /// Same as [`FieldValue::into_primitive`].
    pub fn check_primitive<T: DeserializeOwned>(&self, member: &str) -> SyncResult<()> {
        let parsed = match self {
            FieldValue::Absent => T::deserialize(&serde_json::Value::Null),
            FieldValue::Primitive(json) => T::deserialize(json),
            FieldValue::Object(_) | FieldValue::List(_) => return Err(not_primitive(member)),
        };
        parsed
            .map(drop)
            .map_err(|e| SyncError::field_mismatch(member, e.to_string()))
    }

    /// Takes the nested object as a boxed `T`. Absent or null reads as `None`.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::FieldMismatch`] if the value is not a single
    /// nested object of type `T`.
    pub fn into_boxed<T: Syncable>(self, member: &str) -> SyncResult<Option<Box<T>>> {
        match self {
            FieldValue::Absent | FieldValue::Primitive(serde_json::Value::Null) => Ok(None),
            FieldValue::Object(value) => downcast(value, member).map(Some),
            FieldValue::Primitive(_) | FieldValue::List(_) => Err(SyncError::field_mismatch(
                member,
                "expected a single nested object",
            )),
        }
    }

    /// Takes the nested object as a `T`. Absent or null reads as `None`.
    ///
    /// # Errors
    ///
    /// Same as [`FieldValue::into_boxed`].
    pub fn into_object<T: Syncable>(self, member: &str) -> SyncResult<Option<T>> {
        self.into_boxed::<T>(member).map(|value| value.map(|boxed| *boxed))
    }

    /// Takes the nested objects as a `Vec<T>`. Absent reads as empty.
    ///
    /// # Errors
    ///
    /// Returns [`SyncError::FieldMismatch`] if the value is not a sequence of
    /// `T`, or if an element is null.
    pub fn into_list<T: Syncable>(self, member: &str) -> SyncResult<Vec<T>> {
        match self {
            FieldValue::Absent | FieldValue::Primitive(serde_json::Value::Null) => Ok(Vec::new()),
            FieldValue::List(items) => items
                .into_iter()
                .enumerate()
                .map(|(index, item)| {
                    let value = item.ok_or_else(|| {
                        SyncError::field_mismatch(member, format!("element {index} is null"))
                    })?;
                    downcast::<T>(value, member).map(|boxed| *boxed)
                })
                .collect(),
            FieldValue::Primitive(_) | FieldValue::Object(_) => Err(SyncError::field_mismatch(
                member,
                "expected a sequence of nested objects",
            )),
        }
    }
}

impl fmt::Debug for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::Absent => f.write_str("Absent"),
            FieldValue::Primitive(v) => f.debug_tuple("Primitive").field(v).finish(),
            FieldValue::Object(value) => {
                f.debug_tuple("Object").field(&tag_of(&**value)).finish()
            }
            FieldValue::List(items) => f
                .debug_tuple("List")
                .field(
                    &items
                        .iter()
                        .map(|i| i.as_deref().map(tag_of))
                        .collect::<Vec<_>>(),
                )
                .finish(),
        }
    }
}

fn not_primitive(member: &str) -> SyncError {
    SyncError::field_mismatch(member, "expected a primitive, found nested objects")
}

fn tag_of(value: &dyn Syncable) -> &'static str {
    value.sync_schema().map_or("<undeclared>", |schema| schema.tag())
}

fn downcast<T: Syncable>(value: Box<dyn Syncable>, member: &str) -> SyncResult<Box<T>> {
    let found = tag_of(&*value);
    value.into_any().downcast::<T>().map_err(|_| {
        SyncError::field_mismatch(
            member,
            format!("expected {}, found {found}", std::any::type_name::<T>()),
        )
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn check_primitive_agrees_with_conversion() {
        let number = FieldValue::Primitive(json!(7.5));
        assert!(number.check_primitive::<f64>("real").is_ok());
        assert!(matches!(
            number.check_primitive::<String>("real"),
            Err(SyncError::FieldMismatch { .. })
        ));
        assert_eq!(number.into_primitive::<f64>("real").unwrap(), 7.5);

        assert!(FieldValue::Absent.check_primitive::<Option<i64>>("n").is_ok());
        assert!(FieldValue::Absent.check_primitive::<i64>("n").is_err());
        assert!(FieldValue::List(Vec::new()).check_primitive::<i64>("n").is_err());
    }
}
