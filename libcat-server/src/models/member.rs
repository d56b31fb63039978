//! Member records and server-generated member codes

use std::fmt;

use chrono::{DateTime, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

use super::validation::{present, ValidationError};

/// Member record from database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Member {
    pub id: i64,
    pub name: String,
    pub member_id: String,
    pub phone: Option<String>,
    pub created_at: NaiveDateTime,
}

/// POST /api/members body
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateMemberRequest {
    pub name: Option<String>,
    pub phone: Option<String>,
}

/// Public member identifier: `M` followed by epoch milliseconds.
///
/// Two codes generated within the same millisecond collide; the store's
/// UNIQUE constraint rejects the second insert.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct MemberCode(String);

impl MemberCode {
    /// Code for the current instant
    pub fn generate() -> Self {
        Self::at(Utc::now())
    }

    /// Code for a given instant
    pub fn at(instant: DateTime<Utc>) -> Self {
        Self(format!("M{}", instant.timestamp_millis()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MemberCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Validated member ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewMember {
    pub name: String,
    pub member_id: MemberCode,
    pub phone: Option<String>,
}

impl NewMember {
    /// Validate the request and assign a fresh member code.
    pub fn new(req: CreateMemberRequest) -> Result<Self, ValidationError> {
        let name = present(req.name).ok_or(ValidationError::Required { field: "Name" })?;

        Ok(Self {
            name,
            member_id: MemberCode::generate(),
            phone: req.phone,
        })
    }
}
