use std::collections::HashMap;

use axum::{
    extract::{Extension, Path},
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::get,
    Form, Json, Router,
};
use serde_json::json;

use shelfmark_catalog::{display, FormFields};
use shelfmark_core::AuthorId;
use shelfmark_service::{AuthorCreation, CatalogService, DeleteOutcome};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(author_list))
        .route("/create", get(author_create_form).post(author_create))
        .route("/:id", get(author_detail))
        .route("/:id/delete", get(author_delete_form).post(author_delete))
        .route("/:id/update", get(author_update).post(author_update))
}

fn parse_id(raw: &str) -> Result<AuthorId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid author id")
    })
}

pub async fn author_list(Extension(catalog): Extension<CatalogService>) -> axum::response::Response {
    let authors = match catalog.list_authors().await {
        Ok(authors) => authors,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<_> = authors.iter().map(dto::author_to_json).collect();
    (
        StatusCode::OK,
        Json(json!({
            "view": "author_list",
            "title": "Author List",
            "author_list": items,
        })),
    )
        .into_response()
}

pub async fn author_detail(
    Extension(catalog): Extension<CatalogService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match catalog.author_detail(id).await {
        Ok(detail) => (
            StatusCode::OK,
            Json(json!({
                "view": "author_detail",
                "title": "Author Detail",
                "author": dto::author_to_json(&detail.author),
                "author_books": detail.books.iter().map(dto::book_summary_to_json).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn author_create_form() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({ "view": "author_form", "title": "Create Author" })),
    )
        .into_response()
}

pub async fn author_create(
    Extension(catalog): Extension<CatalogService>,
    Form(body): Form<HashMap<String, String>>,
) -> axum::response::Response {
    let fields = FormFields::from(body);

    match catalog.create_author(&fields).await {
        Ok(AuthorCreation::Created(author)) => {
            Redirect::to(&display::author_url(author.id)).into_response()
        }
        Ok(AuthorCreation::Rejected(rejection)) => (
            StatusCode::OK,
            Json(json!({
                "view": "author_form",
                "title": "Create Author",
                "author": rejection.fields,
                "errors": dto::field_errors_to_json(&rejection.errors),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn author_delete_form(
    Extension(catalog): Extension<CatalogService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match catalog.author_with_books(id).await {
        Ok(view) => (
            StatusCode::OK,
            Json(json!({
                "view": "author_delete",
                "title": "Delete Author",
                "author": dto::author_to_json(&view.author),
                "author_books": view.books.iter().map(dto::book_to_json).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        // Already gone: back to the listing instead of an error.
        Err(shelfmark_service::ServiceError::NotFound) => {
            Redirect::to(display::AUTHORS_URL).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn author_delete(
    Extension(catalog): Extension<CatalogService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match catalog.delete_author(id).await {
        Ok(DeleteOutcome::Deleted) | Ok(DeleteOutcome::AlreadyGone) => {
            Redirect::to(display::AUTHORS_URL).into_response()
        }
        Ok(DeleteOutcome::Blocked { entity, dependents }) => (
            StatusCode::OK,
            Json(json!({
                "view": "author_delete",
                "title": "Delete Author",
                "author": dto::author_to_json(&entity),
                "author_books": dependents.iter().map(dto::book_to_json).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn author_update(Path(_id): Path<String>) -> axum::response::Response {
    errors::json_error(
        StatusCode::NOT_IMPLEMENTED,
        "not_implemented",
        "author update is not implemented",
    )
}
