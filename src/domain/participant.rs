//! Participant records owned by the registration subsystem.

use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ParticipantId;
use super::roster::Searchable;

/// A registered participant. Read-only here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Participant {
    /// Participant identifier.
    #[schema(value_type = uuid::Uuid)]
    pub id: ParticipantId,
    /// Full name as registered.
    pub name: String,
    /// Contact email.
    pub email: String,
    /// Human-facing registration number printed on badges.
    pub display_id: String,
}

impl Searchable for Participant {
    fn search_fields(&self) -> Vec<&str> {
        vec![
            self.name.as_str(),
            self.email.as_str(),
            self.display_id.as_str(),
        ]
    }
}
