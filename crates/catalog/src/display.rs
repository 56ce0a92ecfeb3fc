//! Derived display values.
//!
//! These are pure functions of a record; they are recomputed per call and
//! never stored.

use chrono::NaiveDate;

use shelfmark_core::{AuthorId, GenreId};

use crate::author::Author;

/// Full display name: empty unless both name parts are non-empty.
pub fn full_name(author: &Author) -> String {
    if author.first_name.is_empty() || author.family_name.is_empty() {
        return String::new();
    }
    format!("{} {}", author.first_name, author.family_name)
}

/// Lifespan string: birth year, separator, death year if present.
pub fn lifespan(author: &Author) -> String {
    let mut out = String::new();
    if let Some(born) = author.date_of_birth {
        out.push_str(&born.format("%Y").to_string());
    }
    out.push_str(" - ");
    if let Some(died) = author.date_of_death {
        out.push_str(&died.format("%Y").to_string());
    }
    out
}

/// Medium-format date (`Jun 6, 1973`), or empty when unset.
pub fn format_date(date: Option<NaiveDate>) -> String {
    date.map(|d| d.format("%b %-d, %Y").to_string())
        .unwrap_or_default()
}

/// Canonical detail URL for an author.
pub fn author_url(id: AuthorId) -> String {
    format!("/catalog/authors/{id}")
}

/// Canonical detail URL for a genre.
pub fn genre_url(id: GenreId) -> String {
    format!("/catalog/genres/{id}")
}

/// Canonical author listing URL.
pub const AUTHORS_URL: &str = "/catalog/authors";

/// Canonical genre listing URL.
pub const GENRES_URL: &str = "/catalog/genres";
