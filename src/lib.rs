//! # Taxpayer Records
//!
//! > **List, search and add taxpayer entries over an actor-backed record service.**
//!
//! The crate has two halves joined by one trait:
//!
//! - a **record service**: a Tokio actor that owns the records and assigns every
//!   new record its TID ([`record_actor`], built on [`framework`]);
//! - a **record browser**: the client-side view that fetches on mount, narrows to
//!   a single record on search, and adds records through a validated form
//!   ([`browser`]).
//!
//! The browser only knows [`RecordService`](clients::RecordService), so it runs the
//! same against the actor, against [`MockClient`](framework::mock::MockClient) in
//! tests, or against any other implementation.
//!
//! ## 🗺️ Module Tour
//!
//! ### 1. The Engine ([`framework`])
//! Generic `ResourceActor<T>` and `ResourceClient<T>`, plus the mock used in tests.
//!
//! ### 2. The Data ([`model`])
//! [`Tid`](model::Tid), [`TaxRecord`](model::TaxRecord) and its creation payload.
//!
//! ### 3. The Service ([`record_actor`], [`clients`])
//! The `ActorEntity` implementation for records, [`ServiceError`](record_actor::ServiceError),
//! and [`RecordClient`](clients::RecordClient), which implements `RecordService`.
//!
//! ### 4. The View ([`browser`])
//! [`RecordBrowser`](browser::RecordBrowser), its form, its view state and the
//! paginated [`RecordTable`](browser::RecordTable).
//!
//! ### 5. The Shell ([`lifecycle`], [`config`], [`cli`])
//! Starting and stopping the actor, tracing, configuration and the interactive page.
//!
//! ## 🚀 Quick Start
//!
//! ```bash
//! RUST_LOG=info cargo run
//! ```

pub mod browser;
pub mod cli;
pub mod clients;
pub mod config;
pub mod framework;
pub mod lifecycle;
pub mod model;
pub mod record_actor;
