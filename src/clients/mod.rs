//! Type-safe wrappers around [`ResourceClient`](crate::framework::ResourceClient).

pub mod actor_client;
pub mod record_client;
pub mod record_service;

pub use actor_client::*;
pub use record_client::*;
pub use record_service::*;
