//! Form validation and normalization.
//!
//! Raw fields arrive as a flat string-keyed mapping from an untrusted
//! client. Each declared field runs an ordered chain of checks: a failed
//! check stops further *value transformations* for that field, but later
//! checks still run and may append more messages, and every field is always
//! checked (no cross-field short-circuit). Failures are returned as data,
//! never as errors to propagate.

use std::collections::HashMap;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::author::AuthorDraft;
use crate::genre::GenreDraft;

/// Raw form fields: a flat string-keyed mapping.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FormFields(HashMap<String, String>);

impl FormFields {
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value for a field; missing fields read as empty.
    pub fn get(&self, field: &str) -> &str {
        self.0.get(field).map(String::as_str).unwrap_or("")
    }

    pub fn set(&mut self, field: impl Into<String>, value: impl Into<String>) {
        self.0.insert(field.into(), value.into());
    }
}

impl From<HashMap<String, String>> for FormFields {
    fn from(map: HashMap<String, String>) -> Self {
        Self(map)
    }
}

/// One human-readable message tied to a field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

/// Validation failure: the full ordered error list plus the raw input, so
/// the caller can re-render the form pre-filled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FormRejection {
    pub errors: Vec<FieldError>,
    pub fields: FormFields,
}

/// Ordered check chain over a single field value.
struct FieldPipeline {
    field: &'static str,
    value: String,
    failed: bool,
    errors: Vec<FieldError>,
}

impl FieldPipeline {
    fn new(field: &'static str, raw: &str) -> Self {
        Self {
            field,
            value: raw.to_string(),
            failed: false,
            errors: Vec::new(),
        }
    }

    /// Apply a value transformation. Skipped once a check has failed.
    fn transform(mut self, f: impl FnOnce(&str) -> String) -> Self {
        if !self.failed {
            self.value = f(&self.value);
        }
        self
    }

    /// Run a check against the current value; on failure, record a message
    /// and stop further transformations.
    fn check(mut self, message: impl Into<String>, f: impl FnOnce(&str) -> bool) -> Self {
        if !f(&self.value) {
            self.failed = true;
            self.errors.push(FieldError {
                field: self.field,
                message: message.into(),
            });
        }
        self
    }

    fn finish(self, errors: &mut Vec<FieldError>) -> String {
        errors.extend(self.errors);
        self.value
    }
}

/// Escape markup-significant characters for safe later rendering.
pub fn escape_markup(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#x27;"),
            '/' => out.push_str("&#x2F;"),
            '\\' => out.push_str("&#x5C;"),
            '`' => out.push_str("&#96;"),
            _ => out.push(c),
        }
    }
    out
}

fn is_alphanumeric(value: &str) -> bool {
    !value.is_empty() && value.chars().all(|c| c.is_ascii_alphanumeric())
}

/// Required name field: trim, require non-empty, escape, then require the
/// result be alphanumeric and within the stored length limit.
fn required_name(field: &'static str, label: &str, raw: &str, errors: &mut Vec<FieldError>) -> String {
    FieldPipeline::new(field, raw)
        .transform(|v| v.trim().to_string())
        .check(format!("{label} must be specified"), |v| !v.is_empty())
        .transform(escape_markup)
        .check(format!("{label} has non-alphanumeric characters"), is_alphanumeric)
        .check(format!("{label} must be at most 100 characters"), |v| {
            v.chars().count() <= 100
        })
        .finish(errors)
}

/// Optional date field: absent/empty is unset; anything else must parse as
/// an ISO-8601 calendar date.
fn optional_date(
    field: &'static str,
    message: &str,
    raw: &str,
    errors: &mut Vec<FieldError>,
) -> Option<NaiveDate> {
    let raw = raw.trim();
    if raw.is_empty() {
        return None;
    }
    match raw.parse::<NaiveDate>() {
        Ok(date) => Some(date),
        Err(_) => {
            errors.push(FieldError {
                field,
                message: message.to_string(),
            });
            None
        }
    }
}

/// Validate and normalize raw author input into a draft.
pub fn author_draft(fields: &FormFields) -> Result<AuthorDraft, FormRejection> {
    let mut errors = Vec::new();

    let first_name = required_name("first_name", "First name", fields.get("first_name"), &mut errors);
    let family_name = required_name("family_name", "Family name", fields.get("family_name"), &mut errors);
    let date_of_birth = optional_date(
        "date_of_birth",
        "Invalid date of birth",
        fields.get("date_of_birth"),
        &mut errors,
    );
    let date_of_death = optional_date(
        "date_of_death",
        "Invalid date of death",
        fields.get("date_of_death"),
        &mut errors,
    );

    if !errors.is_empty() {
        return Err(FormRejection {
            errors,
            fields: fields.clone(),
        });
    }

    Ok(AuthorDraft {
        first_name,
        family_name,
        date_of_birth,
        date_of_death,
    })
}

/// Validate and normalize raw genre input into a draft.
///
/// Name uniqueness is not checked here; the create flow resolves duplicates
/// against the store after field validation passes.
pub fn genre_draft(fields: &FormFields) -> Result<GenreDraft, FormRejection> {
    let mut errors = Vec::new();

    let name = FieldPipeline::new("name", fields.get("name"))
        .transform(|v| v.trim().to_string())
        .check("Genre name required", |v| !v.is_empty())
        .transform(escape_markup)
        .finish(&mut errors);

    if !errors.is_empty() {
        return Err(FormRejection {
            errors,
            fields: fields.clone(),
        });
    }

    Ok(GenreDraft { name })
}
