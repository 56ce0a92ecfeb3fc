//! Repository interfaces, one per entity kind.
//!
//! Each component receives the interfaces it needs explicitly; there is no
//! ambient registry. Identity assignment happens inside `insert`, exactly
//! once per record.

use async_trait::async_trait;

use shelfmark_catalog::{Author, AuthorDraft, BookRecord, BookSummary, Genre, GenreDraft};
use shelfmark_core::{AuthorId, GenreId};

use crate::error::StoreError;

#[async_trait]
pub trait AuthorRepository: Send + Sync {
    /// Persist a draft, assigning a fresh identity.
    async fn insert(&self, draft: AuthorDraft) -> Result<Author, StoreError>;

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, StoreError>;

    /// All authors, ascending lexicographic by family name. Ties are broken
    /// by id so repeated listings return the same sequence.
    async fn list(&self) -> Result<Vec<Author>, StoreError>;

    /// Remove by identity. Removing a missing id is not an error.
    async fn delete(&self, id: AuthorId) -> Result<(), StoreError>;
}

#[async_trait]
pub trait GenreRepository: Send + Sync {
    /// Persist a draft, assigning a fresh identity.
    async fn insert(&self, draft: GenreDraft) -> Result<Genre, StoreError>;

    async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>, StoreError>;

    /// Exact-string lookup on the normalized name (no case folding).
    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, StoreError>;

    /// All genres, in store-default order.
    async fn list(&self) -> Result<Vec<Genre>, StoreError>;

    /// Remove by identity. Removing a missing id is not an error.
    async fn delete(&self, id: GenreId) -> Result<(), StoreError>;
}

/// Read-only view over book records, queried by foreign key.
///
/// Books are owned by an external collaborator; this interface never
/// mutates them.
#[async_trait]
pub trait BookReader: Send + Sync {
    /// Minimal `title + summary` projection for an author's books.
    async fn summaries_by_author(&self, author: AuthorId) -> Result<Vec<BookSummary>, StoreError>;

    /// Full records referencing an author.
    async fn find_by_author(&self, author: AuthorId) -> Result<Vec<BookRecord>, StoreError>;

    /// Full records referencing a genre.
    async fn find_by_genre(&self, genre: GenreId) -> Result<Vec<BookRecord>, StoreError>;
}
