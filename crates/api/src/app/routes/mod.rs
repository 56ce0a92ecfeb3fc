use axum::Router;

pub mod authors;
pub mod genres;
pub mod system;

/// Router for all catalog endpoints.
pub fn router() -> Router {
    Router::new()
        .nest("/authors", authors::router())
        .nest("/genres", genres::router())
}
