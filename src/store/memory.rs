use std::sync::Arc;

use async_trait::async_trait;
use parking_lot::RwLock;
use uuid::Uuid;

use super::{CallRecord, CallStore, StoreError};

/// A record held by [`MemoryCallStore`] together with its assigned id
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredCall {
    pub id: Uuid,
    pub record: CallRecord,
}

/// In-process call store
///
/// Every insert appends a new row with a fresh id, so inserting the same room
/// URL twice yields two rows. Clones share the same rows.
#[derive(Debug, Clone, Default)]
pub struct MemoryCallStore {
    rows: Arc<RwLock<Vec<StoredCall>>>,
}

impl MemoryCallStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of all rows in insertion order
    pub fn rows(&self) -> Vec<StoredCall> {
        self.rows.read().clone()
    }

    pub fn len(&self) -> usize {
        self.rows.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.read().is_empty()
    }

    /// Rows whose room URL matches exactly
    pub fn find_by_room_url(&self, room_url: &str) -> Vec<StoredCall> {
        self.rows
            .read()
            .iter()
            .filter(|row| row.record.room_url == room_url)
            .cloned()
            .collect()
    }
}

#[async_trait]
impl CallStore for MemoryCallStore {
    async fn insert(&self, record: &CallRecord) -> Result<(), StoreError> {
        self.rows.write().push(StoredCall {
            id: Uuid::new_v4(),
            record: record.clone(),
        });
        Ok(())
    }

    fn name(&self) -> &'static str {
        "memory"
    }
}
