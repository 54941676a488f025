//! Applying sync data to objects.

use crate::config::UnknownFieldPolicy;
use crate::descriptor::{SyncDescriptor, SyncKind};
use crate::error::{SyncError, SyncResult};
use crate::field::FieldValue;
use crate::schema::TypeSchema;
use crate::syncable::Syncable;
use syncgraph_codec::{SyncData, SyncEntry, SyncValueRef};
use tracing::{debug, trace};

/// Applies `data` to `obj`.
///
/// Each entry is matched to a descriptor by property name, falling back to
/// the published name. Nested syncable values are always fabricated fresh
/// through the type's provider, never merged into objects `obj` already
/// holds. A falsy value (`null`, `false`, `0` or `""`) in place of a nested
/// object leaves the property empty.
///
/// A type without a schema ignores the call. With
/// [`atomic_apply`](crate::SyncConfig::atomic_apply) set, nothing is written
/// unless every entry reconstructs and every staged value passes
/// [`Syncable::check_field`].
///
/// # Errors
///
/// - [`SyncError::UnknownMember`] if an entry names no registered property
///   and the type's policy is [`UnknownFieldPolicy::Fail`]
/// - [`SyncError::UnresolvedLateBind`] if a descriptor awaits late binding
/// - [`SyncError::MissingProvider`] if a nested object must be fabricated
///   but the type has no provider
/// - [`SyncError::InvalidTypeRef`] if a type reference has an empty tag
/// - [`SyncError::UnknownType`] if the provider cannot fabricate the tag
/// - errors from nested decodes and from the type's `check_field` and
///   `write_field`
pub fn sync_to<S: Syncable + ?Sized>(obj: &mut S, data: &SyncData) -> SyncResult<()> {
    let Some(schema) = obj.sync_schema() else {
        trace!(type_name = std::any::type_name::<S>(), "no schema, skipping decode");
        return Ok(());
    };
    let table = schema.table();
    let config = schema.config();
    trace!(type_tag = schema.tag(), entries = data.len(), "decoding");

    let mut staged = Vec::with_capacity(if config.atomic_apply { data.len() } else { 0 });
    for entry in data {
        let Some(descriptor) = table.resolve(&entry.prop) else {
            match config.unknown_fields {
                UnknownFieldPolicy::Fail => {
                    return Err(SyncError::unknown_member(schema.tag(), &entry.prop));
                }
                UnknownFieldPolicy::Ignore => {
                    debug!(type_tag = schema.tag(), prop = %entry.prop, "ignoring unknown entry");
                    continue;
                }
            }
        };

        let value = reconstruct(schema, descriptor, entry)?;
        if config.atomic_apply {
            staged.push((descriptor.prop_name(), value));
        } else {
            obj.write_field(descriptor.prop_name(), value)?;
        }
    }

    for (prop, value) in &staged {
        obj.check_field(prop, value)?;
    }
    for (prop, value) in staged {
        obj.write_field(prop, value)?;
    }
    Ok(())
}

fn reconstruct(
    schema: &TypeSchema,
    descriptor: &SyncDescriptor,
    entry: &SyncEntry,
) -> SyncResult<FieldValue> {
    let value = entry.value.as_value_ref();
    match descriptor.kind() {
        SyncKind::LateBind => Err(SyncError::unresolved_late_bind(schema.tag(), &entry.prop)),
        SyncKind::Primitive => primitive(value),
        SyncKind::TypeRef(_) if value.is_falsy() => Ok(FieldValue::Absent),
        SyncKind::TypeRef(tag) if entry.is_array && value.is_sequence() => value
            .elements()?
            .unwrap_or_default()
            .into_iter()
            .map(|item| fabricate(schema, tag, &entry.prop, item))
            .collect::<SyncResult<Vec<_>>>()
            .map(FieldValue::List),
        SyncKind::TypeRef(tag) => Ok(fabricate(schema, tag, &entry.prop, value)?
            .map_or(FieldValue::Absent, FieldValue::Object)),
    }
}

fn primitive(value: SyncValueRef<'_>) -> SyncResult<FieldValue> {
    Ok(match value {
        SyncValueRef::Absent => FieldValue::Absent,
        SyncValueRef::Primitive(json) => FieldValue::Primitive(json.clone()),
        structured => FieldValue::Primitive(structured.to_json()?),
    })
}

/// Builds a fresh instance of `tag` from `value`; falsy values yield `None`.
fn fabricate(
    schema: &TypeSchema,
    tag: &'static str,
    member: &str,
    value: SyncValueRef<'_>,
) -> SyncResult<Option<Box<dyn Syncable>>> {
    if value.is_falsy() {
        return Ok(None);
    }
    let Some(data) = value.to_sync_data()? else {
        return Ok(None);
    };
    let provider = schema
        .provider()
        .ok_or_else(|| SyncError::missing_provider(schema.tag()))?;
    if tag.is_empty() {
        return Err(SyncError::invalid_type_ref(schema.tag(), member));
    }

    let mut instance = provider.create(tag)?;
    instance.sync_from(&data)?;
    Ok(Some(instance))
}
