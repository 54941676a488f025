//! Sync entries and ordered sync data.

use crate::value::SyncValue;
use serde::{Deserialize, Serialize};

/// One transit unit produced by encoding a single registered property.
///
/// Serialized as `{"prop": ..., "value": ..., "isArray": ...}`. The `value`
/// key is omitted when the property was absent, and a missing `isArray` key
/// reads back as `false`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SyncEntry {
    /// Name of the property the value was read from.
    pub prop: String,
    /// The encoded value.
    #[serde(default, skip_serializing_if = "SyncValue::is_absent")]
    pub value: SyncValue,
    /// Whether `value` is a sequence of nested encoded structures.
    #[serde(rename = "isArray", default)]
    pub is_array: bool,
}

impl SyncEntry {
    /// Creates an entry carrying a primitive JSON value.
    pub fn primitive(prop: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        Self {
            prop: prop.into(),
            value: SyncValue::Primitive(value.into()),
            is_array: false,
        }
    }

    /// Creates an entry carrying one nested encoded structure.
    pub fn object(prop: impl Into<String>, data: SyncData) -> Self {
        Self {
            prop: prop.into(),
            value: SyncValue::Object(data),
            is_array: false,
        }
    }

    /// Creates an array entry, one nested structure per element.
    pub fn elements(prop: impl Into<String>, elements: Vec<SyncData>) -> Self {
        Self {
            prop: prop.into(),
            value: SyncValue::Elements(elements),
            is_array: true,
        }
    }

    /// Creates an entry for a property that held no value.
    pub fn absent(prop: impl Into<String>) -> Self {
        Self {
            prop: prop.into(),
            value: SyncValue::Absent,
            is_array: false,
        }
    }
}

/// An ordered sequence of [`SyncEntry`] values.
///
/// This is the complete encoded form of one object. Order follows the
/// metadata table of the encoded type.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SyncData(Vec<SyncEntry>);

impl SyncData {
    /// Creates empty sync data.
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Creates empty sync data with room for `capacity` entries.
    pub fn with_capacity(capacity: usize) -> Self {
        Self(Vec::with_capacity(capacity))
    }

    /// Appends an entry.
    pub fn push(&mut self, entry: SyncEntry) {
        self.0.push(entry);
    }

    /// Returns the first entry for `prop`, if any.
    pub fn get(&self, prop: &str) -> Option<&SyncEntry> {
        self.0.iter().find(|entry| entry.prop == prop)
    }

    /// Returns the number of entries.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if there are no entries.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over the entries in order.
    pub fn iter(&self) -> std::slice::Iter<'_, SyncEntry> {
        self.0.iter()
    }

    /// Returns the entries as a slice.
    pub fn entries(&self) -> &[SyncEntry] {
        &self.0
    }

    /// Iterates over the property names in order.
    pub fn props(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|entry| entry.prop.as_str())
    }

    /// Consumes the data and returns the entries.
    pub fn into_entries(self) -> Vec<SyncEntry> {
        self.0
    }
}

impl From<Vec<SyncEntry>> for SyncData {
    fn from(entries: Vec<SyncEntry>) -> Self {
        Self(entries)
    }
}

impl FromIterator<SyncEntry> for SyncData {
    fn from_iter<I: IntoIterator<Item = SyncEntry>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for SyncData {
    type Item = SyncEntry;
    type IntoIter = std::vec::IntoIter<SyncEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a SyncData {
    type Item = &'a SyncEntry;
    type IntoIter = std::slice::Iter<'a, SyncEntry>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
