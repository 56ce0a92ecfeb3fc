//! Read-side projections of book records.
//!
//! Books are owned by an external collaborator; the catalog only queries
//! them by foreign key to find the dependents of an author or genre.

use serde::{Deserialize, Serialize};

use shelfmark_core::{AuthorId, BookId, Entity, GenreId};

/// Full book record, used where deletion eligibility must be shown.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookRecord {
    pub id: BookId,
    pub title: String,
    pub summary: String,
    pub author: Option<AuthorId>,
    pub genres: Vec<GenreId>,
}

impl BookRecord {
    /// Project down to the minimal display fields.
    pub fn summary_view(&self) -> BookSummary {
        BookSummary {
            id: self.id,
            title: self.title.clone(),
            summary: self.summary.clone(),
        }
    }
}

impl Entity for BookRecord {
    type Id = BookId;

    fn id(&self) -> BookId {
        self.id
    }
}

/// Minimal `title + summary` projection used on detail pages.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookSummary {
    pub id: BookId,
    pub title: String,
    pub summary: String,
}
