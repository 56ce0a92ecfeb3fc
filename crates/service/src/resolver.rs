//! Relationship resolver: an entity joined with the books that reference it.
//!
//! The two lookups are issued concurrently and awaited together; the first
//! failure aborts the whole resolution and no partial result is exposed.
//! Ordering between the lookups is unspecified.

use shelfmark_catalog::{Author, BookRecord, BookSummary, Genre};
use shelfmark_core::{AuthorId, GenreId};

use crate::error::ServiceError;
use crate::CatalogService;

/// Author detail view: the record plus the minimal projection of its books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorDetail {
    pub author: Author,
    pub books: Vec<BookSummary>,
}

/// Author plus the full records of its books, for deletion-eligibility views.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorWithBooks {
    pub author: Author,
    pub books: Vec<BookRecord>,
}

/// Genre detail view: the record plus the full records of its books.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenreDetail {
    pub genre: Genre,
    pub books: Vec<BookRecord>,
}

impl CatalogService {
    /// Resolve an author together with the display projection of its books.
    pub async fn author_detail(&self, id: AuthorId) -> Result<AuthorDetail, ServiceError> {
        let (author, books) = tokio::try_join!(
            self.authors.find_by_id(id),
            self.books.summaries_by_author(id),
        )
        .map_err(|e| {
            tracing::debug!(author_id = %id, error = %e, "author detail fetch failed");
            ServiceError::from(e)
        })?;

        let author = author.ok_or(ServiceError::NotFound)?;
        Ok(AuthorDetail { author, books })
    }

    /// Resolve an author together with the full records of its books.
    pub async fn author_with_books(&self, id: AuthorId) -> Result<AuthorWithBooks, ServiceError> {
        let (author, books) = tokio::try_join!(
            self.authors.find_by_id(id),
            self.books.find_by_author(id),
        )
        .map_err(|e| {
            tracing::debug!(author_id = %id, error = %e, "author fetch failed");
            ServiceError::from(e)
        })?;

        let author = author.ok_or(ServiceError::NotFound)?;
        Ok(AuthorWithBooks { author, books })
    }

    /// Resolve a genre together with the full records of its books.
    pub async fn genre_detail(&self, id: GenreId) -> Result<GenreDetail, ServiceError> {
        let (genre, books) = tokio::try_join!(
            self.genres.find_by_id(id),
            self.books.find_by_genre(id),
        )
        .map_err(|e| {
            tracing::debug!(genre_id = %id, error = %e, "genre detail fetch failed");
            ServiceError::from(e)
        })?;

        let genre = genre.ok_or(ServiceError::NotFound)?;
        Ok(GenreDetail { genre, books })
    }
}
