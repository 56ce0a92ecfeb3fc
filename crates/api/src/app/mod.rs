//! HTTP application wiring (Axum router + service wiring).
//!
//! This folder is structured like:
//! - `services.rs`: store wiring (in-memory by default, Postgres opt-in)
//! - `routes/`: HTTP routes + handlers (one file per entity kind)
//! - `dto.rs`: response JSON builders for the rendering sink
//! - `errors.rs`: consistent error responses

use axum::{routing::get, Extension, Router};
use tower::ServiceBuilder;

use shelfmark_service::CatalogService;

pub mod dto;
pub mod errors;
pub mod routes;
pub mod services;

/// Build the full HTTP router (public entrypoint used by `main.rs`).
pub async fn build_app() -> Router {
    build_app_with(services::build_services().await)
}

/// Build the router over an explicit service; tests inject their own stores
/// through this.
pub fn build_app_with(catalog: CatalogService) -> Router {
    Router::new()
        .route("/health", get(routes::system::health))
        .nest("/catalog", routes::router())
        .layer(Extension(catalog))
        .layer(ServiceBuilder::new())
}
