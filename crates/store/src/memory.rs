//! In-memory repositories.
//!
//! Intended for tests/dev. Not optimized for performance.

use std::collections::HashMap;
use std::sync::RwLock;

use async_trait::async_trait;

use shelfmark_catalog::{Author, AuthorDraft, BookRecord, BookSummary, Genre, GenreDraft};
use shelfmark_core::{AuthorId, BookId, Entity, GenreId};

use crate::error::StoreError;
use crate::repository::{AuthorRepository, BookReader, GenreRepository};

/// Generic in-memory table keyed by entity identity.
#[derive(Debug)]
struct InMemoryTable<E: Entity> {
    inner: RwLock<HashMap<E::Id, E>>,
}

impl<E: Entity + Clone> InMemoryTable<E> {
    fn new() -> Self {
        Self {
            inner: RwLock::new(HashMap::new()),
        }
    }

    fn get(&self, id: E::Id) -> Result<Option<E>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(map.get(&id).cloned())
    }

    fn upsert(&self, entity: E) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        map.insert(entity.id(), entity);
        Ok(())
    }

    fn remove(&self, id: E::Id) -> Result<(), StoreError> {
        let mut map = self
            .inner
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        map.remove(&id);
        Ok(())
    }

    fn list(&self) -> Result<Vec<E>, StoreError> {
        let map = self
            .inner
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(map.values().cloned().collect())
    }
}

/// In-memory author repository.
#[derive(Debug)]
pub struct InMemoryAuthorStore {
    table: InMemoryTable<Author>,
}

impl InMemoryAuthorStore {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new(),
        }
    }
}

impl Default for InMemoryAuthorStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl AuthorRepository for InMemoryAuthorStore {
    async fn insert(&self, draft: AuthorDraft) -> Result<Author, StoreError> {
        let author = Author::from_draft(AuthorId::new(), draft);
        self.table.upsert(author.clone())?;
        Ok(author)
    }

    async fn find_by_id(&self, id: AuthorId) -> Result<Option<Author>, StoreError> {
        self.table.get(id)
    }

    async fn list(&self) -> Result<Vec<Author>, StoreError> {
        let mut authors = self.table.list()?;
        authors.sort_by(|a, b| {
            a.family_name
                .cmp(&b.family_name)
                .then_with(|| a.id.cmp(&b.id))
        });
        Ok(authors)
    }

    async fn delete(&self, id: AuthorId) -> Result<(), StoreError> {
        self.table.remove(id)
    }
}

/// In-memory genre repository.
#[derive(Debug)]
pub struct InMemoryGenreStore {
    table: InMemoryTable<Genre>,
}

impl InMemoryGenreStore {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new(),
        }
    }
}

impl Default for InMemoryGenreStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GenreRepository for InMemoryGenreStore {
    async fn insert(&self, draft: GenreDraft) -> Result<Genre, StoreError> {
        let genre = Genre::from_draft(GenreId::new(), draft);
        self.table.upsert(genre.clone())?;
        Ok(genre)
    }

    async fn find_by_id(&self, id: GenreId) -> Result<Option<Genre>, StoreError> {
        self.table.get(id)
    }

    async fn find_by_name(&self, name: &str) -> Result<Option<Genre>, StoreError> {
        Ok(self.table.list()?.into_iter().find(|g| g.name == name))
    }

    async fn list(&self) -> Result<Vec<Genre>, StoreError> {
        // Store-default order: keep it stable by id so repeated listings
        // agree.
        let mut genres = self.table.list()?;
        genres.sort_by_key(|g| g.id);
        Ok(genres)
    }

    async fn delete(&self, id: GenreId) -> Result<(), StoreError> {
        self.table.remove(id)
    }
}

/// In-memory book records.
///
/// Books are externally owned; `record`/`remove` exist so tests and dev
/// seeding can stand in for that collaborator. The read interface is
/// `BookReader`.
#[derive(Debug)]
pub struct InMemoryBookStore {
    table: InMemoryTable<BookRecord>,
}

impl InMemoryBookStore {
    pub fn new() -> Self {
        Self {
            table: InMemoryTable::new(),
        }
    }

    /// Record a book on behalf of the external collaborator.
    pub fn record(&self, book: BookRecord) -> Result<(), StoreError> {
        self.table.upsert(book)
    }

    /// Remove a book on behalf of the external collaborator.
    pub fn remove(&self, id: BookId) -> Result<(), StoreError> {
        self.table.remove(id)
    }

    fn matching(&self, keep: impl Fn(&BookRecord) -> bool) -> Result<Vec<BookRecord>, StoreError> {
        let mut books: Vec<BookRecord> = self.table.list()?.into_iter().filter(keep).collect();
        books.sort_by_key(|b| b.id);
        Ok(books)
    }
}

impl Default for InMemoryBookStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BookReader for InMemoryBookStore {
    async fn summaries_by_author(&self, author: AuthorId) -> Result<Vec<BookSummary>, StoreError> {
        Ok(self
            .matching(|b| b.author == Some(author))?
            .iter()
            .map(BookRecord::summary_view)
            .collect())
    }

    async fn find_by_author(&self, author: AuthorId) -> Result<Vec<BookRecord>, StoreError> {
        self.matching(|b| b.author == Some(author))
    }

    async fn find_by_genre(&self, genre: GenreId) -> Result<Vec<BookRecord>, StoreError> {
        self.matching(|b| b.genres.contains(&genre))
    }
}
