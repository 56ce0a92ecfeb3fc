//! Ordered entity listings.

use shelfmark_catalog::{Author, Genre};

use crate::error::ServiceError;
use crate::CatalogService;

impl CatalogService {
    /// All authors, ascending by family name. An empty catalog is an empty
    /// list, not an error.
    pub async fn list_authors(&self) -> Result<Vec<Author>, ServiceError> {
        Ok(self.authors.list().await?)
    }

    /// All genres, in store-default order.
    pub async fn list_genres(&self) -> Result<Vec<Genre>, ServiceError> {
        Ok(self.genres.list().await?)
    }
}

#[cfg(test)]
mod tests {
    use shelfmark_store::AuthorRepository;

    use crate::testutil::{author_draft, fixture};

    #[tokio::test]
    async fn empty_catalog_lists_cleanly() {
        let fx = fixture();
        assert!(fx.service.list_authors().await.unwrap().is_empty());
        assert!(fx.service.list_genres().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn authors_come_back_sorted_by_family_name() {
        let fx = fixture();
        fx.authors.insert(author_draft("Terry", "Pratchett")).await.unwrap();
        fx.authors.insert(author_draft("Joe", "Abercrombie")).await.unwrap();

        let listed = fx.service.list_authors().await.unwrap();
        let families: Vec<&str> = listed.iter().map(|a| a.family_name.as_str()).collect();
        assert_eq!(families, vec!["Abercrombie", "Pratchett"]);

        // No intervening writes: the sequence is stable.
        assert_eq!(fx.service.list_authors().await.unwrap(), listed);
    }
}
