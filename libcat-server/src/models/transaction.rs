//! Checkout transactions and the overdue report

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// Status assigned when the request does not name one
pub const DEFAULT_TRANSACTION_STATUS: &str = "Checked Out";

/// Days past the due date before a checkout counts as overdue
pub const OVERDUE_GRACE_DAYS: i64 = 14;

/// Transaction record from database.
///
/// `book_title` and `member_name` are copies of the text the client sent,
/// not references to book or member rows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct Transaction {
    pub id: i64,
    pub book_title: String,
    pub member_name: String,
    pub checkout_date: String,
    pub due_date: String,
    pub status: String,
    pub created_at: NaiveDateTime,
}

/// POST /api/transactions body.
///
/// Nothing is validated here; absent fields reach the store as NULL.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateTransactionRequest {
    pub book_title: Option<String>,
    pub member_name: Option<String>,
    pub checkout_date: Option<String>,
    pub due_date: Option<String>,
    pub status: Option<String>,
}

/// Transaction ready for insertion
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewTransaction {
    pub book_title: Option<String>,
    pub member_name: Option<String>,
    pub checkout_date: Option<String>,
    pub due_date: Option<String>,
    pub status: String,
}

impl From<CreateTransactionRequest> for NewTransaction {
    fn from(req: CreateTransactionRequest) -> Self {
        Self {
            book_title: req.book_title,
            member_name: req.member_name,
            checkout_date: req.checkout_date,
            due_date: req.due_date,
            status: req
                .status
                .unwrap_or_else(|| DEFAULT_TRANSACTION_STATUS.to_owned()),
        }
    }
}

/// Row of the overdue report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct OverdueLoan {
    pub member_name: String,
    pub book_title: String,
    pub due_date: String,
    pub phone: Option<String>,
    pub days_overdue: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_defaults_to_checked_out() {
        let tx = NewTransaction::from(CreateTransactionRequest {
            book_title: Some("Principles of Management".into()),
            member_name: Some("Ada".into()),
            checkout_date: Some("2024-03-01".into()),
            due_date: Some("2024-03-15".into()),
            status: None,
        });
        assert_eq!(tx.status, "Checked Out");
    }

    #[test]
    fn explicit_status_is_kept() {
        let req: CreateTransactionRequest =
            serde_json::from_str(r#"{"book_title":"B","status":"Returned"}"#).unwrap();
        let tx = NewTransaction::from(req);
        assert_eq!(tx.status, "Returned");
        assert!(tx.member_name.is_none());
    }

    #[test]
    fn null_status_falls_back_to_checked_out() {
        let req: CreateTransactionRequest =
            serde_json::from_str(r#"{"book_title":"B","status":null}"#).unwrap();
        assert_eq!(NewTransaction::from(req).status, DEFAULT_TRANSACTION_STATUS);
    }
}
