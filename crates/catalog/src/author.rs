use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use shelfmark_core::{AuthorId, Entity};

/// Author record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Author {
    pub id: AuthorId,
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}

impl Author {
    /// Materialize a persisted record from a validated draft.
    ///
    /// The identifier is assigned by the persistence layer, exactly once.
    pub fn from_draft(id: AuthorId, draft: AuthorDraft) -> Self {
        Self {
            id,
            first_name: draft.first_name,
            family_name: draft.family_name,
            date_of_birth: draft.date_of_birth,
            date_of_death: draft.date_of_death,
        }
    }
}

impl Entity for Author {
    type Id = AuthorId;

    fn id(&self) -> AuthorId {
        self.id
    }
}

/// A validated, normalized, not-yet-persisted author.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AuthorDraft {
    pub first_name: String,
    pub family_name: String,
    pub date_of_birth: Option<NaiveDate>,
    pub date_of_death: Option<NaiveDate>,
}
