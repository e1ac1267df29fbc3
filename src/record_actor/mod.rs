//! # Record Actor
//!
//! The in-process record service: a [`ResourceActor`] over [`TaxRecord`].
//!
//! ## Structure
//!
//! - [`entity`] - [`ActorEntity`](crate::framework::ActorEntity) implementation for [`TaxRecord`]
//! - [`error`] - [`ServiceError`] type shared by the service and its clients
//! - [`new()`] - Factory function that creates the actor and client
//!
//! ## Usage
//!
//! ```rust
//! use taxpayer_records::clients::RecordService;
//! use taxpayer_records::record_actor;
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let (actor, client) = record_actor::new(32, 1);
//!     tokio::spawn(actor.run(()));
//!
//!     let tid = client.add("Jane", "Doe", "1 Main St").await?;
//!     assert_eq!(client.find_by_id(tid).await?.map(|r| r.first_name), Some("Jane".into()));
//!     Ok(())
//! }
//! ```

pub mod entity;
pub mod error;

pub use error::*;

use crate::clients::RecordClient;
use crate::framework::ResourceActor;
use crate::model::{TaxRecord, Tid};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

/// Creates a new record actor and its client.
///
/// TIDs are handed out sequentially starting at `first_tid`.
pub fn new(buffer_size: usize, first_tid: u64) -> (ResourceActor<TaxRecord>, RecordClient) {
    let tid_counter = Arc::new(AtomicU64::new(first_tid));
    let next_tid = move || Tid::new(tid_counter.fetch_add(1, Ordering::SeqCst));

    let (actor, generic_client) = ResourceActor::new(buffer_size, next_tid);
    let client = RecordClient::new(generic_client);

    (actor, client)
}
