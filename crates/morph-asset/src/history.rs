//! Generation history
//!
//! Completed generations are recorded by value: a record stores the image
//! handles that went into it, not references to library entries, so deleting
//! an asset never invalidates history.

use crate::handle::ImageHandle;
use crate::id::RecordId;
use crate::params::{Angle, Pose};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One successful try-on generation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenerationRecord {
    /// Unique id within the ledger
    pub id: RecordId,
    /// Model photo the generation used
    pub model_image: ImageHandle,
    /// Clothing image the generation used
    pub clothing_image: ImageHandle,
    /// The generated result
    pub result_image: ImageHandle,
    /// Creation time
    pub created_at: DateTime<Utc>,
    /// Pose the generation was requested with
    pub pose: Pose,
    /// Angle the generation was requested with
    pub angle: Angle,
}

impl GenerationRecord {
    /// Record a completed generation
    #[must_use]
    pub fn new(
        model_image: ImageHandle,
        clothing_image: ImageHandle,
        result_image: ImageHandle,
        pose: Pose,
        angle: Angle,
    ) -> Self {
        Self {
            id: RecordId::new(),
            model_image,
            clothing_image,
            result_image,
            created_at: Utc::now(),
            pose,
            angle,
        }
    }
}

/// Append-only (user-deletable) record of completed generations
///
/// Batches are prepended as contiguous units, newest batch first.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct HistoryLedger {
    records: Vec<GenerationRecord>,
}

impl HistoryLedger {
    /// Create an empty ledger
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Prepend a batch of records, preserving the batch's own order
    pub fn prepend_batch(&mut self, batch: impl IntoIterator<Item = GenerationRecord>) {
        self.records.splice(0..0, batch);
    }

    /// Remove a record by id, returning it if present
    pub fn remove(&mut self, id: RecordId) -> Option<GenerationRecord> {
        let index = self.records.iter().position(|r| r.id == id)?;
        Some(self.records.remove(index))
    }

    /// Records in display order, newest batch first
    #[inline]
    #[must_use]
    pub fn list(&self) -> &[GenerationRecord] {
        &self.records
    }

    /// Number of records
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the ledger is empty
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(result: &str, angle: Angle) -> GenerationRecord {
        GenerationRecord::new(
            ImageHandle::from("m://1"),
            ImageHandle::from("c://1"),
            ImageHandle::from(result),
            Pose::Standing,
            angle,
        )
    }

    #[test]
    fn batches_prepend_in_order() {
        let mut ledger = HistoryLedger::new();
        ledger.prepend_batch(vec![record("r://old", Angle::Front)]);
        ledger.prepend_batch(vec![record("r://front", Angle::Front), record("r://back", Angle::Back)]);

        let results: Vec<&str> = ledger.list().iter().map(|r| r.result_image.as_str()).collect();
        assert_eq!(results, vec!["r://front", "r://back", "r://old"]);
    }

    #[test]
    fn remove_by_id() {
        let mut ledger = HistoryLedger::new();
        let kept = record("r://keep", Angle::Front);
        let dropped = record("r://drop", Angle::Back);
        let dropped_id = dropped.id;
        ledger.prepend_batch(vec![kept.clone(), dropped]);

        assert!(ledger.remove(dropped_id).is_some());
        assert_eq!(ledger.list(), &[kept]);
        assert!(ledger.remove(dropped_id).is_none());
    }
}
