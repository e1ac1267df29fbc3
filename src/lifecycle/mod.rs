//! Runtime orchestration and lifecycle management.
//!
//! - [`RecordSystem`] - Starts the record actor, seeds it, and shuts it down
//! - [`setup_tracing`] - Initializes the tracing/logging infrastructure

pub mod record_system;
pub mod tracing;

pub use self::record_system::*;
pub use self::tracing::*;
