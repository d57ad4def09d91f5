//! Domain layer: records, pure view logic, and the snapshot store.
//!
//! Everything except [`SnapshotStore`] is synchronous and side-effect
//! free. Phase classification, roster paging, and certificate building
//! take all of their inputs (including `now` and the event zone) as
//! parameters and can be used without the HTTP layer.

pub mod assignment;
pub mod attendance;
pub mod certificate;
pub mod format;
pub mod ids;
pub mod participant;
pub mod phase;
pub mod programme;
pub mod roster;
pub mod schedule;
pub mod snapshot_store;
pub mod venue;

pub use assignment::{Assignment, AssignmentKind, AssignmentRow, TablePresence, VehicleStatus};
pub use attendance::{Attendance, KitAccess, kit_access};
pub use certificate::{
    CertificateDocument, CertificateEvent, CertificateStyle, Recipient, Signatory,
    build_certificate_document,
};
pub use ids::{AssignmentId, ParticipantId, ProgrammeId};
pub use participant::Participant;
pub use phase::{Phase, PhaseBuckets, bucket_by_phase, classify_phase};
pub use programme::Programme;
pub use roster::{Page, PageSize, RosterQuery, Searchable, paginate};
pub use schedule::{ScheduleWindow, parse_timestamp};
pub use snapshot_store::SnapshotStore;
pub use venue::{StructuredVenue, Venue};
