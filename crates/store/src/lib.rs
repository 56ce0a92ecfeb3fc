//! `shelfmark-store` — persistence boundary.
//!
//! Repository interfaces for each entity kind, an in-memory implementation
//! for dev/test, and an optional Postgres implementation behind the
//! `postgres` feature. The catalog core only ever sees the traits.

pub mod error;
pub mod memory;
#[cfg(feature = "postgres")]
pub mod postgres;
pub mod repository;

pub use error::StoreError;
pub use memory::{InMemoryAuthorStore, InMemoryBookStore, InMemoryGenreStore};
pub use repository::{AuthorRepository, BookReader, GenreRepository};
