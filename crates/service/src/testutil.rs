//! Shared fixtures for service tests.

use std::sync::Arc;

use shelfmark_catalog::{AuthorDraft, BookRecord};
use shelfmark_core::{AuthorId, BookId, GenreId};
use shelfmark_store::{InMemoryAuthorStore, InMemoryBookStore, InMemoryGenreStore};

use crate::CatalogService;

pub(crate) struct Fixture {
    pub service: CatalogService,
    pub authors: Arc<InMemoryAuthorStore>,
    pub genres: Arc<InMemoryGenreStore>,
    pub books: Arc<InMemoryBookStore>,
}

pub(crate) fn fixture() -> Fixture {
    let authors = Arc::new(InMemoryAuthorStore::new());
    let genres = Arc::new(InMemoryGenreStore::new());
    let books = Arc::new(InMemoryBookStore::new());
    let service = CatalogService::new(authors.clone(), genres.clone(), books.clone());
    Fixture {
        service,
        authors,
        genres,
        books,
    }
}

pub(crate) fn author_draft(first: &str, family: &str) -> AuthorDraft {
    AuthorDraft {
        first_name: first.to_string(),
        family_name: family.to_string(),
        date_of_birth: None,
        date_of_death: None,
    }
}

pub(crate) fn book_by(author: Option<AuthorId>, genres: Vec<GenreId>) -> BookRecord {
    BookRecord {
        id: BookId::new(),
        title: "The Dispossessed".to_string(),
        summary: "An ambiguous utopia".to_string(),
        author,
        genres,
    }
}
