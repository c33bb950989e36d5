//! Call record persistence
//!
//! The HTTP layer only sees the [`CallStore`] capability, so the endpoint logic
//! does not depend on any particular backend. Two implementations ship here:
//! - `supabase` - PostgREST insert against a hosted Supabase project
//! - `memory` - in-process store for embedders and tests

use async_trait::async_trait;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use time::{OffsetDateTime, macros::format_description};

pub mod memory;
pub mod supabase;

pub use memory::{MemoryCallStore, StoredCall};
pub use supabase::SupabaseCallStore;

/// One row representing a single stored session reference
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CallRecord {
    /// Room URL exactly as supplied by the caller
    pub room_url: String,
    /// Directory derived from `room_url` where recordings are expected
    pub s3_folder_dir: String,
    /// ISO-8601 UTC timestamp assigned when the record is built
    pub created_at: String,
}

impl CallRecord {
    /// Build a record stamped with the current UTC time
    pub fn new(room_url: impl Into<String>, s3_folder_dir: impl Into<String>) -> Self {
        Self::with_created_at(room_url, s3_folder_dir, OffsetDateTime::now_utc())
    }

    pub fn with_created_at(
        room_url: impl Into<String>,
        s3_folder_dir: impl Into<String>,
        created_at: OffsetDateTime,
    ) -> Self {
        Self {
            room_url: room_url.into(),
            s3_folder_dir: s3_folder_dir.into(),
            created_at: iso_timestamp(created_at),
        }
    }
}

/// Format as `YYYY-MM-DDTHH:MM:SS.mmmZ` in UTC
pub fn iso_timestamp(at: OffsetDateTime) -> String {
    let at = at.to_offset(time::UtcOffset::UTC);
    at.format(format_description!(
        "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
    ))
    .unwrap_or_else(|_| at.unix_timestamp().to_string())
}

/// Errors reported by a store write
#[derive(Debug, Error)]
pub enum StoreError {
    /// The backend rejected the write; `message` is its own description
    #[error("{message}")]
    Api {
        status: u16,
        code: Option<String>,
        message: String,
    },

    /// The request never produced a response
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("Invalid store URL: {0}")]
    InvalidUrl(String),
}

/// Generic "store write" capability
#[async_trait]
pub trait CallStore: Send + Sync {
    /// Insert one record. No deduplication is performed.
    async fn insert(&self, record: &CallRecord) -> Result<(), StoreError>;

    /// Short backend name used in logs
    fn name(&self) -> &'static str;
}
