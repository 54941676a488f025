//! Pushing one object's state to many.

use crate::error::{SyncError, SyncResult};
use crate::syncable::Syncable;
use tracing::trace;

/// Encodes `items[authority]` once and applies it to every other item.
///
/// Returns the number of items synced.
///
/// # Errors
///
/// Returns [`SyncError::AuthorityOutOfRange`] if `authority` is not a valid
/// index, or the first encode or decode error. Items before the failing one
/// keep the state already applied.
pub fn sync_list_items<T: Syncable>(items: &mut [T], authority: usize) -> SyncResult<usize> {
    let len = items.len();
    let data = items
        .get(authority)
        .ok_or(SyncError::AuthorityOutOfRange {
            index: authority,
            len,
        })?
        .to_sync_data()?;

    let mut synced = 0;
    for (index, item) in items.iter_mut().enumerate() {
        if index == authority {
            continue;
        }
        item.sync_from(&data)?;
        synced += 1;
    }
    trace!(authority, synced, "synced list items");
    Ok(synced)
}

/// Encodes `authority` once and applies it to each of `clients`.
///
/// Returns the number of clients synced.
///
/// # Errors
///
/// Returns the first encode or decode error.
pub fn broadcast<'a, S, T, I>(authority: &S, clients: I) -> SyncResult<usize>
where
    S: Syncable + ?Sized,
    T: Syncable + ?Sized + 'a,
    I: IntoIterator<Item = &'a mut T>,
{
    let data = authority.to_sync_data()?;
    let mut synced = 0;
    for client in clients {
        client.sync_from(&data)?;
        synced += 1;
    }
    Ok(synced)
}
