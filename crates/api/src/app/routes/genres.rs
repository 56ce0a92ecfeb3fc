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
use shelfmark_core::GenreId;
use shelfmark_service::{CatalogService, DeleteOutcome, GenreCreation};

use crate::app::{dto, errors};

pub fn router() -> Router {
    Router::new()
        .route("/", get(genre_list))
        .route("/create", get(genre_create_form).post(genre_create))
        .route("/:id", get(genre_detail))
        .route("/:id/delete", get(genre_delete_form).post(genre_delete))
        .route("/:id/update", get(genre_update).post(genre_update))
}

fn parse_id(raw: &str) -> Result<GenreId, axum::response::Response> {
    raw.parse().map_err(|_| {
        errors::json_error(StatusCode::BAD_REQUEST, "invalid_id", "invalid genre id")
    })
}

pub async fn genre_list(Extension(catalog): Extension<CatalogService>) -> axum::response::Response {
    let genres = match catalog.list_genres().await {
        Ok(genres) => genres,
        Err(e) => return errors::service_error_to_response(e),
    };

    let items: Vec<_> = genres.iter().map(dto::genre_to_json).collect();
    (
        StatusCode::OK,
        Json(json!({
            "view": "genre_list",
            "title": "Genre List",
            "genre_list": items,
        })),
    )
        .into_response()
}

pub async fn genre_detail(
    Extension(catalog): Extension<CatalogService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match catalog.genre_detail(id).await {
        Ok(detail) => (
            StatusCode::OK,
            Json(json!({
                "view": "genre_detail",
                "title": "Genre Detail",
                "genre": dto::genre_to_json(&detail.genre),
                "genre_books": detail.books.iter().map(dto::book_to_json).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn genre_create_form() -> axum::response::Response {
    (
        StatusCode::OK,
        Json(json!({ "view": "genre_form", "title": "Create Genre" })),
    )
        .into_response()
}

pub async fn genre_create(
    Extension(catalog): Extension<CatalogService>,
    Form(body): Form<HashMap<String, String>>,
) -> axum::response::Response {
    let fields = FormFields::from(body);

    match catalog.create_genre(&fields).await {
        // Created and Existing both land on the canonical detail URL; a
        // duplicate name is resolved, not reported.
        Ok(GenreCreation::Created(genre)) | Ok(GenreCreation::Existing(genre)) => {
            Redirect::to(&display::genre_url(genre.id)).into_response()
        }
        Ok(GenreCreation::Rejected(rejection)) => (
            StatusCode::OK,
            Json(json!({
                "view": "genre_form",
                "title": "Create Genre",
                "genre": rejection.fields,
                "errors": dto::field_errors_to_json(&rejection.errors),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn genre_delete_form(
    Extension(catalog): Extension<CatalogService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match catalog.genre_detail(id).await {
        Ok(view) => (
            StatusCode::OK,
            Json(json!({
                "view": "genre_delete",
                "title": "Delete Genre",
                "genre": dto::genre_to_json(&view.genre),
                "genre_books": view.books.iter().map(dto::book_to_json).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        Err(shelfmark_service::ServiceError::NotFound) => {
            Redirect::to(display::GENRES_URL).into_response()
        }
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn genre_delete(
    Extension(catalog): Extension<CatalogService>,
    Path(id): Path<String>,
) -> axum::response::Response {
    let id = match parse_id(&id) {
        Ok(id) => id,
        Err(resp) => return resp,
    };

    match catalog.delete_genre(id).await {
        Ok(DeleteOutcome::Deleted) | Ok(DeleteOutcome::AlreadyGone) => {
            Redirect::to(display::GENRES_URL).into_response()
        }
        Ok(DeleteOutcome::Blocked { entity, dependents }) => (
            StatusCode::OK,
            Json(json!({
                "view": "genre_delete",
                "title": "Delete Genre",
                "genre": dto::genre_to_json(&entity),
                "genre_books": dependents.iter().map(dto::book_to_json).collect::<Vec<_>>(),
            })),
        )
            .into_response(),
        Err(e) => errors::service_error_to_response(e),
    }
}

pub async fn genre_update(Path(_id): Path<String>) -> axum::response::Response {
    errors::json_error(
        StatusCode::NOT_IMPLEMENTED,
        "not_implemented",
        "genre update is not implemented",
    )
}
