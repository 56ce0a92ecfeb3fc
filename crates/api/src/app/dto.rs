//! Response JSON builders for the rendering sink.
//!
//! Derived display values are recomputed here per response, never stored.

use serde_json::{json, Value};

use shelfmark_catalog::{display, Author, BookRecord, BookSummary, FieldError, Genre};

pub fn author_to_json(author: &Author) -> Value {
    json!({
        "id": author.id,
        "first_name": author.first_name,
        "family_name": author.family_name,
        "name": display::full_name(author),
        "date_of_birth": author.date_of_birth,
        "date_of_death": author.date_of_death,
        "dob_formatted": display::format_date(author.date_of_birth),
        "dod_formatted": display::format_date(author.date_of_death),
        "lifespan": display::lifespan(author),
        "url": display::author_url(author.id),
    })
}

pub fn genre_to_json(genre: &Genre) -> Value {
    json!({
        "id": genre.id,
        "name": genre.name,
        "url": display::genre_url(genre.id),
    })
}

pub fn book_summary_to_json(book: &BookSummary) -> Value {
    json!({
        "id": book.id,
        "title": book.title,
        "summary": book.summary,
    })
}

pub fn book_to_json(book: &BookRecord) -> Value {
    json!({
        "id": book.id,
        "title": book.title,
        "summary": book.summary,
        "author": book.author,
        "genres": book.genres,
    })
}

pub fn field_errors_to_json(errors: &[FieldError]) -> Vec<Value> {
    errors
        .iter()
        .map(|e| json!({ "field": e.field, "msg": e.message }))
        .collect()
}
