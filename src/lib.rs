//! # eventkit-gateway
//!
//! Programme phase classification, searchable roster pages, and printable
//! certificate batches for a conference registration system.
//!
//! The interesting logic lives in [`domain`] as plain synchronous
//! functions that take every input explicitly, including the current time
//! and the event zone. The HTTP layer only moves upstream snapshots in and
//! rendered views out.
//!
//! ## Architecture
//!
//! ```text
//! Clients (HTTP)
//!     │
//!     ├── REST Handlers (api/)
//!     │
//!     ├── KitService (service/)
//!     │
//!     ├── SnapshotStore (domain/)
//!     └── Phase classifier · Roster paginator · Certificate builder (domain/)
//! ```

pub mod api;
pub mod app_state;
pub mod config;
pub mod domain;
pub mod error;
pub mod service;
