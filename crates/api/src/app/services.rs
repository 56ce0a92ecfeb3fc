//! Store wiring for the HTTP application.

use std::sync::Arc;

use shelfmark_service::CatalogService;
use shelfmark_store::{InMemoryAuthorStore, InMemoryBookStore, InMemoryGenreStore};

#[cfg(feature = "postgres")]
use shelfmark_store::postgres::{PgAuthorStore, PgBookStore, PgGenreStore};

/// Build the catalog service from the environment.
///
/// Defaults to in-memory stores; `USE_PERSISTENT_STORES=true` selects the
/// Postgres implementations when the `postgres` feature is enabled.
pub async fn build_services() -> CatalogService {
    let use_persistent = std::env::var("USE_PERSISTENT_STORES")
        .unwrap_or_else(|_| "false".to_string())
        .parse::<bool>()
        .unwrap_or(false);

    if use_persistent {
        #[cfg(feature = "postgres")]
        {
            return build_persistent_services().await;
        }
        #[cfg(not(feature = "postgres"))]
        {
            tracing::warn!(
                "USE_PERSISTENT_STORES=true but postgres feature not enabled, falling back to in-memory"
            );
            return build_in_memory_services();
        }
    }

    build_in_memory_services()
}

/// In-memory store wiring (dev/test).
pub fn build_in_memory_services() -> CatalogService {
    CatalogService::new(
        Arc::new(InMemoryAuthorStore::new()),
        Arc::new(InMemoryGenreStore::new()),
        Arc::new(InMemoryBookStore::new()),
    )
}

#[cfg(feature = "postgres")]
async fn build_persistent_services() -> CatalogService {
    let url = std::env::var("DATABASE_URL").expect("DATABASE_URL must be set for persistent stores");
    let pool = sqlx::PgPool::connect(&url)
        .await
        .expect("failed to connect to postgres");

    CatalogService::new(
        Arc::new(PgAuthorStore::new(pool.clone())),
        Arc::new(PgGenreStore::new(pool.clone())),
        Arc::new(PgBookStore::new(pool)),
    )
}
