//! Postgres-backed repositories (`postgres` feature).
//!
//! Expected schema:
//!
//! ```sql
//! CREATE TABLE authors (
//!     id            UUID PRIMARY KEY,
//!     first_name    TEXT NOT NULL,
//!     family_name   TEXT NOT NULL,
//!     date_of_birth DATE,
//!     date_of_death DATE
//! );
//! CREATE TABLE genres (
//!     id   UUID PRIMARY KEY,
//!     name TEXT NOT NULL
//! );
//! CREATE TABLE books (
//!     id      UUID PRIMARY KEY,
//!     title   TEXT NOT NULL,
//!     summary TEXT NOT NULL,
//!     author  UUID REFERENCES authors (id)
//! );
//! CREATE TABLE book_genres (
//!     book_id  UUID NOT NULL REFERENCES books (id),
//!     genre_id UUID NOT NULL REFERENCES genres (id),
//!     PRIMARY KEY (book_id, genre_id)
//! );
//! ```
//!
//! Books are read-only here; their lifecycle belongs to the external
//! collaborator that owns them.

use async_trait::async_trait;
use sqlx::postgres::PgRow;
use sqlx::{PgPool, Row};
use uuid::Uuid;

use shelfmark_catalog::{Author, AuthorDraft, BookRecord, BookSummary, Genre, GenreDraft};
use shelfmark_core::{AuthorId, BookId, GenreId};

use crate::error::StoreError;
use crate::repository::{AuthorRepository, BookReader, GenreRepository};

fn backend(err: sqlx::Error) -> StoreError {
    StoreError::backend(err.to_string())
}

fn author_from_row(row: &PgRow) -> Result<Author, StoreError> {
    Ok(Author {
        id: AuthorId::from_uuid(row.try_get("id").map_err(|e| StoreError::decode(e.to_string()))?),
        first_name: row
            .try_get("first_name")
            .map_err(|e| StoreError::decode(e.to_string()))?,
        family_name: row
            .try_get("family_name")
            .map_err(|e| StoreError::decode(e.to_string()))?,
        date_of_birth: row
            .try_get("date_of_birth")
            .map_err(|e| StoreError::decode(e.to_string()))?,
        date_of_death: row
            .try_get("date_of_death")
            .map_err(|e| StoreError::decode(e.to_string()))?,
    })
}

fn genre_from_row(row: &PgRow) -> Result<Genre, StoreError> {
    Ok(Genre {
        id: GenreId::from_uuid(row.try_get("id").map_err(|e| StoreError::decode(e.to_string()))?),
        name: row
            .try_get("name")
            .map_err(|e| StoreError::decode(e.to_string()))?,
    })
}

fn book_from_row(row: &PgRow) -> Result<BookRecord, StoreError> {
    let genres: Vec<Uuid> = row
        .try_get("genres")
        .map_err(|e| StoreError::decode(e.to_string()))?;
    Ok(BookRecord {
        id: BookId::from_uuid(row.try_get("id").map_err(|e| StoreError::decode(e.to_string()))?),
        title: row
            .try_get("title")
            .map_err(|e| StoreError::decode(e.to_string()))?,
        summary: row
            .try_get("summary")
            .map_err(|e| StoreError::decode(e.to_string()))?,
        author: row
            .try_get::<Option<Uuid>, _>("author")
            .map_err(|e| StoreError::decode(e.to_string()))?
            .map(AuthorId::from_uuid),
        genres: genres.into_iter().map(GenreId::from_uuid).collect(),
    })
}

const BOOK_SELECT: &str = "SELECT b.id, b.title, b.summary, b.author, \
     COALESCE(array_agg(bg.genre_id) FILTER (WHERE bg.genre_id IS NOT NULL), '{}') AS genres \
     FROM books b LEFT JOIN book_genres bg ON bg.book_id = b.id";

/// Postgres author repository.
#[derive(Debug, Clone)]
pub struct PgAuthorStore {
    pool: PgPool,
}

impl PgAuthorStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl AuthorRepository for PgAuthorStore {
    async fn insert(&self, draft: AuthorDraft) -> Result<Author, StoreError> {
        let author = Author::from_draft(AuthorId::new(), draft);
        sqlx::query(
            "INSERT INTO authors (id, first_name, family_name, date_of_birth, date_of_death) \
             VALUES ($1, $2, $3, $4, $5)",
        )
        .bind(*author.id.as_uuid())
        .bind(&author.first_name)
        .bind(&author.family_name)
        .bind(author.date_of_birth)
        .bind(author.date_of_death)
        .execute(&self.pool)
        .await
        .map_err(backend)?;
        Ok(author)
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, StoreError> {
        let row = sqlx::query(
            "SELECT id, first_name, family_name, date_of_birth, date_of_death \
             FROM authors WHERE id = $1",
        )
        .bind(*id.as_uuid())
        .fetch_optional(&self.pool)
        .await
        .map_err(backend)?;
        row.as_ref().map(author_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Author>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, first_name, family_name, date_of_birth, date_of_death \
             FROM authors ORDER BY family_name ASC, id ASC",
        )
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter().map(author_from_row).collect()
    }

    async fn delete(&self, id: AuthorId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM authors WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

/// Postgres genre repository.
#[derive(Debug, Clone)]
pub struct PgGenreStore {
    pool: PgPool,
}

impl PgGenreStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl GenreRepository for PgGenreStore {
    async fn insert(&self, draft: GenreDraft) -> Result<Genre, StoreError> {
        let genre = Genre::from_draft(GenreId::new(), draft);
        sqlx::query("INSERT INTO genres (id, name) VALUES ($1, $2)")
            .bind(*genre.id.as_uuid())
            .bind(&genre.name)
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(genre)
    }

    async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>, StoreError> {
        let row = sqlx::query("SELECT id, name FROM genres WHERE id = $1")
            .bind(*id.as_uuid())
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        row.as_ref().map(genre_from_row).transpose()
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, StoreError> {
        let row = sqlx::query("SELECT id, name FROM genres WHERE name = $1 LIMIT 1")
            .bind(name)
            .fetch_optional(&self.pool)
            .await
            .map_err(backend)?;
        row.as_ref().map(genre_from_row).transpose()
    }

    async fn list(&self) -> Result<Vec<Genre>, StoreError> {
        let rows = sqlx::query("SELECT id, name FROM genres")
            .fetch_all(&self.pool)
            .await
            .map_err(backend)?;
        rows.iter().map(genre_from_row).collect()
    }

    async fn delete(&self, id: GenreId) -> Result<(), StoreError> {
        sqlx::query("DELETE FROM genres WHERE id = $1")
            .bind(*id.as_uuid())
            .execute(&self.pool)
            .await
            .map_err(backend)?;
        Ok(())
    }
}

/// Postgres book reader.
#[derive(Debug, Clone)]
pub struct PgBookStore {
    pool: PgPool,
}

impl PgBookStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl BookReader for PgBookStore {
    async fn summaries_by_author(&self, author: AuthorId) -> Result<Vec<BookSummary>, StoreError> {
        let rows = sqlx::query(
            "SELECT id, title, summary FROM books WHERE author = $1 ORDER BY id ASC",
        )
        .bind(*author.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;

        rows.iter()
            .map(|row| {
                Ok(BookSummary {
                    id: BookId::from_uuid(
                        row.try_get("id").map_err(|e| StoreError::decode(e.to_string()))?,
                    ),
                    title: row
                        .try_get("title")
                        .map_err(|e| StoreError::decode(e.to_string()))?,
                    summary: row
                        .try_get("summary")
                        .map_err(|e| StoreError::decode(e.to_string()))?,
                })
            })
            .collect()
    }

    async fn find_by_author(&self, author: AuthorId) -> Result<Vec<BookRecord>, StoreError> {
        let rows = sqlx::query(&format!(
            "{BOOK_SELECT} WHERE b.author = $1 GROUP BY b.id ORDER BY b.id ASC"
        ))
        .bind(*author.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter().map(book_from_row).collect()
    }

    async fn find_by_genre(&self, genre: GenreId) -> Result<Vec<BookRecord>, StoreError> {
        let rows = sqlx::query(&format!(
            "{BOOK_SELECT} \
             WHERE b.id IN (SELECT book_id FROM book_genres WHERE genre_id = $1) \
             GROUP BY b.id ORDER BY b.id ASC"
        ))
        .bind(*genre.as_uuid())
        .fetch_all(&self.pool)
        .await
        .map_err(backend)?;
        rows.iter().map(book_from_row).collect()
    }
}
