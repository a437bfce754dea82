//! Request builders and response mappers.
//!
//! A builder layers a validated public request over the [`DefaultValues`]
//! table and derived fields to produce the exact ACBS wire shape. Builders are
//! pure and infallible; `today` is always passed in.
//!
//! Update flows start from the resource ACBS currently holds (the snapshot) and
//! overlay the new fields with [`merge_snapshot`].
//!
//! [`DefaultValues`]: crate::defaults::DefaultValues

use serde::Serialize;
use serde_json::{Map, Value};

pub mod bundle;
pub mod covenant;
pub mod deal;
pub mod facility;
pub mod fee;
pub mod guarantee;
pub mod investor;
pub mod loan;
pub mod party;

/// A resource exactly as ACBS returned it, unknown fields included.
pub type Snapshot = Map<String, Value>;

/// Shallow merge: every top-level key in `overlay` replaces the snapshot's
/// value wholesale, nested objects included. `read_only` keys are removed
/// afterwards because ACBS rejects them on update.
pub fn merge_snapshot(mut snapshot: Snapshot, overlay: Snapshot, read_only: &[String]) -> Snapshot {
    for (key, value) in overlay {
        snapshot.insert(key, value);
    }
    for key in read_only {
        snapshot.remove(key);
    }
    snapshot
}

/// Top-level fields of a wire struct.
pub(crate) fn into_fields<T: Serialize>(value: &T) -> Snapshot {
    // Wire structs always serialise to JSON objects.
    match serde_json::to_value(value) {
        Ok(Value::Object(fields)) => fields,
        _ => Snapshot::new(),
    }
}

pub(crate) fn truncate(value: &str, max_chars: usize) -> String {
    value.chars().take(max_chars).collect()
}
