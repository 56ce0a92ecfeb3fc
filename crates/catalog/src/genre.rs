use serde::{Deserialize, Serialize};

use shelfmark_core::{Entity, GenreId};

/// Genre record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Genre {
    pub id: GenreId,
    pub name: String,
}

impl Genre {
    /// Materialize a persisted record from a validated draft.
    pub fn from_draft(id: GenreId, draft: GenreDraft) -> Self {
        Self {
            id,
            name: draft.name,
        }
    }
}

impl Entity for Genre {
    type Id = GenreId;

    fn id(&self) -> GenreId {
        self.id
    }
}

/// A validated, normalized, not-yet-persisted genre.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GenreDraft {
    pub name: String,
}
