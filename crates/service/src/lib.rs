//! `shelfmark-service` — catalog coordination.
//!
//! `CatalogService` works over explicitly injected repository interfaces:
//! it joins entity fetches with their dependents, guards deletion on
//! referential integrity, and runs the validation pipeline on write paths.
//! Rendering and transport stay outside; this layer returns data.

use std::sync::Arc;

use shelfmark_store::{AuthorRepository, BookReader, GenreRepository};

pub mod create;
pub mod deletion;
pub mod error;
pub mod listing;
pub mod resolver;

#[cfg(test)]
pub(crate) mod testutil;

pub use create::{AuthorCreation, GenreCreation};
pub use deletion::DeleteOutcome;
pub use error::ServiceError;
pub use resolver::{AuthorDetail, AuthorWithBooks, GenreDetail};

/// Coordination service over the catalog's repositories.
#[derive(Clone)]
pub struct CatalogService {
    authors: Arc<dyn AuthorRepository>,
    genres: Arc<dyn GenreRepository>,
    books: Arc<dyn BookReader>,
}

impl CatalogService {
    pub fn new(
        authors: Arc<dyn AuthorRepository>,
        genres: Arc<dyn GenreRepository>,
        books: Arc<dyn BookReader>,
    ) -> Self {
        Self {
            authors,
            genres,
            books,
        }
    }
}
