//! Service layer: business logic orchestration.
//!
//! [`KitService`] coordinates the snapshot store and the pure view
//! functions, logging every mutation.

pub mod kit_service;

pub use kit_service::{KitService, PhaseGroups};
