//! Encoding objects into sync data.

use crate::error::{SyncError, SyncResult};
use crate::field::FieldRef;
use crate::syncable::{is_syncable, Syncable};
use syncgraph_codec::{SyncData, SyncEntry};
use tracing::trace;

/// Captures the registered state of `obj`.
///
/// Walks the type's metadata table in order and emits one [`SyncEntry`] per
/// descriptor. Nested syncable values are encoded recursively. Properties not
/// in the table are never read.
///
/// # Errors
///
/// - [`SyncError::NotSyncable`] if `obj`'s type declares no schema, or a
///   nested object's type declares none
/// - [`SyncError::UnresolvedLateBind`] if a descriptor awaits late binding
/// - [`SyncError::ElementEncode`] if an array element is missing or not
///   syncable
pub fn create_sync_data<S: Syncable + ?Sized>(obj: &S) -> SyncResult<SyncData> {
    let schema = obj
        .sync_schema()
        .ok_or_else(|| SyncError::not_syncable(std::any::type_name::<S>()))?;
    let table = schema.table();
    trace!(type_tag = schema.tag(), members = table.len(), "encoding");

    let mut data = SyncData::with_capacity(table.len());
    for (name, descriptor) in table.iter() {
        if descriptor.kind().is_late_bind() {
            return Err(SyncError::unresolved_late_bind(schema.tag(), name));
        }

        let prop = descriptor.prop_name();
        let entry = match obj.read_field(prop)? {
            FieldRef::Absent => SyncEntry::absent(prop),
            FieldRef::Primitive(value) => SyncEntry::primitive(prop, value),
            FieldRef::Object(nested) => SyncEntry::object(prop, nested.to_sync_data()?),
            FieldRef::List(items) => {
                let elements = items
                    .into_iter()
                    .enumerate()
                    .map(|(index, item)| match item {
                        Some(element) if is_syncable(element) => element.to_sync_data(),
                        _ => Err(SyncError::element_encode(prop, index)),
                    })
                    .collect::<SyncResult<Vec<_>>>()?;
                SyncEntry::elements(prop, elements)
            }
        };
        data.push(entry);
    }
    Ok(data)
}
