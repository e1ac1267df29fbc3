//! # Record Service Contract
//!
//! The boundary between the view and whatever stores the records.

use crate::model::{TaxRecord, Tid};
use crate::record_actor::ServiceError;
use async_trait::async_trait;

/// The three operations the record browser relies on.
///
/// "Not found" is `Ok(None)` from [`RecordService::find_by_id`]; every `Err` is a
/// service or transport failure.
#[async_trait]
pub trait RecordService: Send + Sync {
    /// Every record the service holds.
    async fn list_all(&self) -> Result<Vec<TaxRecord>, ServiceError>;

    /// Stores a new record and returns the TID the service assigned to it.
    async fn add(
        &self,
        first_name: &str,
        last_name: &str,
        address: &str,
    ) -> Result<Tid, ServiceError>;

    /// The record with this TID, or `None` when there is none.
    async fn find_by_id(&self, tid: Tid) -> Result<Option<TaxRecord>, ServiceError>;
}
