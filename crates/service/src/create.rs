//! Create flows: validation pipeline, then persistence.
//!
//! Validation failures are outcomes, not errors; only the persistence
//! layer can fail the operation.

use shelfmark_catalog::{forms, Author, FormFields, FormRejection, Genre};

use crate::error::ServiceError;
use crate::CatalogService;

/// Outcome of an author create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthorCreation {
    /// Persisted; redirect to the new record's detail URL.
    Created(Author),

    /// Field validation failed; re-render the form with the errors and the
    /// echoed input.
    Rejected(FormRejection),
}

/// Outcome of a genre create request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GenreCreation {
    /// Persisted; redirect to the new record's detail URL.
    Created(Genre),

    /// A genre with this exact normalized name already exists; redirect to
    /// it instead of inserting a duplicate.
    Existing(Genre),

    /// Field validation failed; re-render the form.
    Rejected(FormRejection),
}

impl CatalogService {
    /// Validate raw author input and persist the draft.
    pub async fn create_author(&self, fields: &FormFields) -> Result<AuthorCreation, ServiceError> {
        let draft = match forms::author_draft(fields) {
            Ok(draft) => draft,
            Err(rejection) => return Ok(AuthorCreation::Rejected(rejection)),
        };

        let author = self.authors.insert(draft).await?;
        tracing::debug!(author_id = %author.id, "author created");
        Ok(AuthorCreation::Created(author))
    }

    /// Validate raw genre input and persist the draft, unless a genre with
    /// the same normalized name already exists (idempotent create).
    pub async fn create_genre(&self, fields: &FormFields) -> Result<GenreCreation, ServiceError> {
        let draft = match forms::genre_draft(fields) {
            Ok(draft) => draft,
            Err(rejection) => return Ok(GenreCreation::Rejected(rejection)),
        };

        if let Some(existing) = self.genres.find_by_name(&draft.name).await? {
            tracing::debug!(genre_id = %existing.id, "genre name already present");
            return Ok(GenreCreation::Existing(existing));
        }

        let genre = self.genres.insert(draft).await?;
        tracing::debug!(genre_id = %genre.id, "genre created");
        Ok(GenreCreation::Created(genre))
    }
}
