//! The actor machinery the record service runs on.
//!
//! - [`ActorEntity`] - what a stored type supplies: its id, create payload and validation hook
//! - [`ResourceActor`] - owns the store, hands out ids, answers one request at a time
//! - [`ResourceClient`] - cloneable sender half; one async method per request kind
//! - [`FrameworkError`] - transport and entity failures
//!
//! [`mock`] replaces the actor in tests.

pub mod core;
pub mod mock;

pub use self::core::*;
