//! Data Transfer Objects for REST request/response serialization.
//!
//! Identifiers cross the wire as bare UUIDs and timestamps as RFC 3339.

pub mod assignment_dto;
pub mod certificate_dto;
pub mod common_dto;
pub mod programme_dto;
pub mod roster_dto;

pub use assignment_dto::*;
pub use certificate_dto::*;
pub use common_dto::*;
pub use programme_dto::*;
pub use roster_dto::*;
