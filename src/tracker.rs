// src/tracker.rs
// Change tracker: diff current statuses against the cache, notify, persist.

use std::error::Error;

use crate::core::Notifier;
use crate::parcel::ParcelItem;
use crate::store::{CacheStore, StatusCache};

/// Outcome of one diff pass.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct TrackOutcome {
    /// Ids whose status differed from the cache (including ids seen for the first time).
    pub changed: Vec<String>,
    /// Whether the cache was written back.
    pub persisted: bool,
}

/// Compare each item with `cache`, notify on every mismatch and record the current status.
/// Returns the ids that changed. `cache` is updated in place for every item.
pub fn diff_and_notify(
    items: &[ParcelItem],
    cache: &mut StatusCache,
    notifier: &dyn Notifier,
) -> Vec<String> {
    let mut changed = Vec::new();

    for item in items {
        let current = item.status.name();
        let previous = cache.insert(item.id.clone(), s!(current));

        if previous.as_deref() != Some(current) {
            logf!(
                "{}: {} -> {current}",
                item.id,
                previous.as_deref().unwrap_or("(new)")
            );
            if let Err(e) = notifier.notify(&item.title, item.display_status()) {
                loge!("Notification for {} failed: {e}", item.id);
            }
            changed.push(item.id.clone());
        }
    }

    changed
}

/// Load the cache, diff, and write it back only when something changed.
pub fn track(
    items: &[ParcelItem],
    store: &dyn CacheStore,
    notifier: &dyn Notifier,
) -> Result<TrackOutcome, Box<dyn Error>> {
    let mut cache = store.load()?;
    let changed = diff_and_notify(items, &mut cache, notifier);

    let persisted = !changed.is_empty();
    if persisted {
        store.save(&cache)?;
        logf!("Status cache updated: {} changed, {} known", changed.len(), cache.len());
    }

    Ok(TrackOutcome { changed, persisted })
}
