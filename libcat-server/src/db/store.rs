//! Store capability shared by both dialects
//!
//! Handlers depend only on [`CatalogStore`]. Each dialect supplies its own
//! DDL, placeholder syntax, and insert-and-return mechanics.

use std::fmt;
use std::sync::Arc;

use async_trait::async_trait;

use crate::models::{
    Book, Member, NewBook, NewMember, NewTransaction, OverdueLoan, Transaction,
};

/// Shared data-access context, resolved once at startup
pub type Catalog = Arc<dyn CatalogStore>;

/// Database error type.
///
/// Displays as the driver's own message so it can be handed to clients
/// unchanged.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error(transparent)]
    Sqlx(#[from] sqlx::Error),
}

/// SQL dialect backing a catalog
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Dialect {
    /// Primary store, selected by `DATABASE_URL`
    Postgres,
    /// Embedded file store
    Sqlite,
}

impl fmt::Display for Dialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Postgres => f.write_str("postgres"),
            Self::Sqlite => f.write_str("sqlite"),
        }
    }
}

/// Catalog operations.
///
/// Writes run in their own unit of work: committed once on success, rolled
/// back when the unit is dropped on any error path.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    fn dialect(&self) -> Dialect;

    /// Create the books, members, and transactions tables if missing.
    async fn init_schema(&self) -> Result<(), DbError>;

    /// All books, most recently created first.
    async fn list_books(&self) -> Result<Vec<Book>, DbError>;

    /// Insert a book and return the persisted row.
    async fn insert_book(&self, book: &NewBook) -> Result<Book, DbError>;

    /// All members, most recently created first.
    async fn list_members(&self) -> Result<Vec<Member>, DbError>;

    /// Insert a member and return the persisted row.
    async fn insert_member(&self, member: &NewMember) -> Result<Member, DbError>;

    /// All transactions, most recently created first.
    async fn list_transactions(&self) -> Result<Vec<Transaction>, DbError>;

    /// Insert a transaction and return the persisted row.
    async fn insert_transaction(&self, tx: &NewTransaction) -> Result<Transaction, DbError>;

    /// Delete every transaction, returning the number of rows removed.
    async fn clear_transactions(&self) -> Result<u64, DbError>;

    /// Checked-out transactions past the overdue grace period.
    async fn overdue_loans(&self) -> Result<Vec<OverdueLoan>, DbError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_display() {
        assert_eq!(Dialect::Postgres.to_string(), "postgres");
        assert_eq!(Dialect::Sqlite.to_string(), "sqlite");
    }

    #[test]
    fn db_error_keeps_driver_message() {
        let err = DbError::from(sqlx::Error::RowNotFound);
        assert_eq!(err.to_string(), sqlx::Error::RowNotFound.to_string());
    }
}
