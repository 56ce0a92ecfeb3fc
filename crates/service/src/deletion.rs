//! Integrity-guarded deletion.
//!
//! Deletion is permitted only when zero dependents reference the entity.
//! It never cascades: dependents and their foreign keys are untouched.

use shelfmark_catalog::{Author, BookRecord, Genre};
use shelfmark_core::{AuthorId, GenreId};

use crate::error::ServiceError;
use crate::CatalogService;

/// Outcome of a guarded delete.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DeleteOutcome<E, D> {
    /// Dependents reference the entity; nothing was mutated. Carries the
    /// same entity + dependents view a detail page would show.
    Blocked { entity: E, dependents: Vec<D> },

    /// Zero dependents; the entity was removed.
    Deleted,

    /// The entity was already gone. Treated as success; the caller
    /// redirects to the listing.
    AlreadyGone,
}

impl CatalogService {
    /// Delete an author unless books still reference it.
    pub async fn delete_author(
        &self,
        id: AuthorId,
    ) -> Result<DeleteOutcome<Author, BookRecord>, ServiceError> {
        let view = match self.author_with_books(id).await {
            Ok(view) => view,
            Err(ServiceError::NotFound) => return Ok(DeleteOutcome::AlreadyGone),
            Err(err) => return Err(err),
        };

        if !view.books.is_empty() {
            return Ok(DeleteOutcome::Blocked {
                entity: view.author,
                dependents: view.books,
            });
        }

        // The dependents check and the delete are not one transaction: a
        // book recorded between them is not observed.
        self.authors.delete(id).await?;
        tracing::debug!(author_id = %id, "author deleted");
        Ok(DeleteOutcome::Deleted)
    }

    /// Delete a genre unless books still reference it.
    pub async fn delete_genre(
        &self,
        id: GenreId,
    ) -> Result<DeleteOutcome<Genre, BookRecord>, ServiceError> {
        let view = match self.genre_detail(id).await {
            Ok(view) => view,
            Err(ServiceError::NotFound) => return Ok(DeleteOutcome::AlreadyGone),
            Err(err) => return Err(err),
        };

        if !view.books.is_empty() {
            return Ok(DeleteOutcome::Blocked {
                entity: view.genre,
                dependents: view.books,
            });
        }

        self.genres.delete(id).await?;
        tracing::debug!(genre_id = %id, "genre deleted");
        Ok(DeleteOutcome::Deleted)
    }
}

#[cfg(test)]
mod tests {
    // There is deliberately no transactional guard between the dependents
    // check and the delete; a dependent recorded in that window escapes
    // the check. The tests below pin the check-then-delete sequence, not
    // atomicity.

    use super::*;

    use shelfmark_catalog::GenreDraft;
    use shelfmark_store::{AuthorRepository, BookReader, GenreRepository};

    use crate::testutil::{author_draft, book_by, fixture};

    #[tokio::test]
    async fn delete_with_dependents_is_blocked_and_mutates_nothing() {
        let fx = fixture();
        let author = fx.authors.insert(author_draft("Iain", "Banks")).await.unwrap();
        fx.books.record(book_by(Some(author.id), vec![])).unwrap();
        fx.books.record(book_by(Some(author.id), vec![])).unwrap();

        let outcome = fx.service.delete_author(author.id).await.unwrap();
        match outcome {
            DeleteOutcome::Blocked { entity, dependents } => {
                assert_eq!(entity, author);
                assert_eq!(dependents.len(), 2);
            }
            other => panic!("expected Blocked, got {other:?}"),
        }

        // Store unchanged: the author is still resolvable.
        assert!(fx.authors.find_by_id(author.id).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn blocked_outcome_matches_the_resolver_view() {
        let fx = fixture();
        let author = fx.authors.insert(author_draft("Iain", "Banks")).await.unwrap();
        fx.books.record(book_by(Some(author.id), vec![])).unwrap();

        let view = fx.service.author_with_books(author.id).await.unwrap();
        let outcome = fx.service.delete_author(author.id).await.unwrap();

        assert_eq!(
            outcome,
            DeleteOutcome::Blocked {
                entity: view.author,
                dependents: view.books,
            }
        );
    }

    #[tokio::test]
    async fn delete_without_dependents_removes_the_author() {
        let fx = fixture();
        let author = fx.authors.insert(author_draft("Iain", "Banks")).await.unwrap();

        let outcome = fx.service.delete_author(author.id).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);

        let err = fx.service.author_detail(author.id).await.unwrap_err();
        assert_eq!(err, ServiceError::NotFound);
    }

    #[tokio::test]
    async fn deleting_the_already_gone_is_success() {
        let fx = fixture();

        let outcome = fx.service.delete_author(shelfmark_core::AuthorId::new()).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::AlreadyGone);
    }

    #[tokio::test]
    async fn unblocking_by_removing_books_makes_delete_eligible() {
        let fx = fixture();
        let author = fx.authors.insert(author_draft("Iain", "Banks")).await.unwrap();
        let book = book_by(Some(author.id), vec![]);
        let book_id = book.id;
        fx.books.record(book).unwrap();

        let blocked = fx.service.delete_author(author.id).await.unwrap();
        assert!(matches!(blocked, DeleteOutcome::Blocked { .. }));

        // The external collaborator removes the referencing book.
        fx.books.remove(book_id).unwrap();

        let outcome = fx.service.delete_author(author.id).await.unwrap();
        assert_eq!(outcome, DeleteOutcome::Deleted);
    }

    #[tokio::test]
    async fn genre_delete_is_guarded_the_same_way() {
        let fx = fixture();
        let genre = fx
            .genres
            .insert(GenreDraft {
                name: "Fantasy".to_string(),
            })
            .await
            .unwrap();
        fx.books.record(book_by(None, vec![genre.id])).unwrap();

        let outcome = fx.service.delete_genre(genre.id).await.unwrap();
        assert!(matches!(outcome, DeleteOutcome::Blocked { .. }));
        assert!(fx.genres.find_by_id(genre.id).await.unwrap().is_some());

        // Deletion never cascades: the book and its foreign keys survive.
        let still_there = fx.books.find_by_genre(genre.id).await.unwrap();
        assert_eq!(still_there.len(), 1);
    }
}
