//! Book records and create requests

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{present, ValidationError};

/// Status assigned to every newly catalogued book
pub const DEFAULT_BOOK_STATUS: &str = "Available";

/// Book record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Book {
    pub id: i64,
    pub title: String,
    pub author: String,
    pub tticode: String,
    pub isbn: Option<String>,
    pub category: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// POST /api/books body
///
/// Every field is optional at the wire level so that missing fields surface
/// as a validation error rather than a deserialization failure.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateBookRequest {
    pub title: Option<String>,
    pub author: Option<String>,
    #[serde(rename = "ttiCode")]
    pub tti_code: Option<String>,
    pub isbn: Option<String>,
    pub category: Option<String>,
}

/// Validated book ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewBook {
    pub title: String,
    pub author: String,
    pub tti_code: String,
    pub isbn: String,
    pub category: String,
}

impl TryFrom<CreateBookRequest> for NewBook {
    type Error = ValidationError;

    fn try_from(req: CreateBookRequest) -> Result<Self, Self::Error> {
        let (Some(title), Some(author), Some(tti_code), Some(category)) = (
            present(req.title),
            present(req.author),
            present(req.tti_code),
            present(req.category),
        ) else {
            return Err(ValidationError::MissingFields);
        };

        Ok(Self {
            title,
            author,
            tti_code,
            isbn: req.isbn.unwrap_or_default(),
            category,
        })
    }
}
