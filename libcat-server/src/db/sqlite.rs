//! Embedded SQLite store
//!
//! SQLite has no `RETURNING` in the statements we issue here, so inserts read
//! the row back inside the same unit of work: by last-inserted row id for
//! books and transactions, by the freshly written member code for members.

use async_trait::async_trait;
use sqlx::sqlite::SqlitePoolOptions;
use sqlx::SqlitePool;

use super::store::{CatalogStore, DbError, Dialect};
use crate::models::{
    Book, Member, NewBook, NewMember, NewTransaction, OverdueLoan, Transaction,
    DEFAULT_BOOK_STATUS, DEFAULT_TRANSACTION_STATUS, OVERDUE_GRACE_DAYS,
};

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        author TEXT NOT NULL,
        tticode TEXT UNIQUE NOT NULL,
        isbn TEXT,
        category TEXT NOT NULL,
        status TEXT DEFAULT 'Available',
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS members (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        member_id TEXT UNIQUE NOT NULL,
        phone TEXT,
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        book_title TEXT NOT NULL,
        member_name TEXT NOT NULL,
        checkout_date DATE NOT NULL,
        due_date DATE NOT NULL,
        status TEXT DEFAULT 'Checked Out',
        created_at DATETIME DEFAULT CURRENT_TIMESTAMP
    )
    "#,
];

const BOOK_COLUMNS: &str =
    "id, title, author, tticode, isbn, category, status, created_at";

const MEMBER_COLUMNS: &str = "id, name, member_id, phone, created_at";

// DATE has numeric affinity in SQLite; dates are stored as sent, so read them back as text.
const TRANSACTION_COLUMNS: &str = "id, book_title, member_name, \
    CAST(checkout_date AS TEXT) AS checkout_date, \
    CAST(due_date AS TEXT) AS due_date, status, created_at";

/// SQLite-backed catalog
#[derive(Debug, Clone)]
pub struct SqliteStore {
    pool: SqlitePool,
}

impl SqliteStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    /// Open a private in-memory catalog with the schema applied (for testing).
    ///
    /// Every SQLite `:memory:` connection is a separate database, so the pool
    /// is pinned to a single connection that is never recycled.
    pub async fn open_in_memory() -> Result<Self, DbError> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect("sqlite::memory:")
            .await?;

        let store = Self::new(pool);
        store.init_schema().await?;
        Ok(store)
    }
}

#[async_trait]
impl CatalogStore for SqliteStore {
    fn dialect(&self) -> Dialect {
        Dialect::Sqlite
    }

    async fn init_schema(&self) -> Result<(), DbError> {
        let mut tx = self.pool.begin().await?;
        for ddl in SCHEMA {
            sqlx::query(ddl).execute(&mut *tx).await?;
        }
        tx.commit().await?;
        Ok(())
    }

    async fn list_books(&self) -> Result<Vec<Book>, DbError> {
        let books = sqlx::query_as(&format!(
            "SELECT {BOOK_COLUMNS} FROM books ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(books)
    }

    async fn insert_book(&self, book: &NewBook) -> Result<Book, DbError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            "INSERT INTO books (title, author, tticode, isbn, category, status) VALUES (?, ?, ?, ?, ?, ?)",
        )
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.tti_code)
        .bind(&book.isbn)
        .bind(&book.category)
        .bind(DEFAULT_BOOK_STATUS)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let row: Book = sqlx::query_as(&format!("SELECT {BOOK_COLUMNS} FROM books WHERE id = ?"))
            .bind(id)
            .fetch_one(&mut *tx)
            .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn list_members(&self) -> Result<Vec<Member>, DbError> {
        let members = sqlx::query_as(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(members)
    }

    async fn insert_member(&self, member: &NewMember) -> Result<Member, DbError> {
        let mut tx = self.pool.begin().await?;

        sqlx::query("INSERT INTO members (name, member_id, phone) VALUES (?, ?, ?)")
            .bind(&member.name)
            .bind(member.member_id.as_str())
            .bind(&member.phone)
            .execute(&mut *tx)
            .await?;

        let row: Member = sqlx::query_as(&format!(
            "SELECT {MEMBER_COLUMNS} FROM members WHERE member_id = ?"
        ))
        .bind(member.member_id.as_str())
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, DbError> {
        let transactions = sqlx::query_as(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions ORDER BY created_at DESC, id DESC"
        ))
        .fetch_all(&self.pool)
        .await?;

        Ok(transactions)
    }

    async fn insert_transaction(&self, new: &NewTransaction) -> Result<Transaction, DbError> {
        let mut tx = self.pool.begin().await?;

        let id = sqlx::query(
            r#"
            INSERT INTO transactions (book_title, member_name, checkout_date, due_date, status)
            VALUES (?, ?, ?, ?, ?)
            "#,
        )
        .bind(&new.book_title)
        .bind(&new.member_name)
        .bind(&new.checkout_date)
        .bind(&new.due_date)
        .bind(&new.status)
        .execute(&mut *tx)
        .await?
        .last_insert_rowid();

        let row: Transaction = sqlx::query_as(&format!(
            "SELECT {TRANSACTION_COLUMNS} FROM transactions WHERE id = ?"
        ))
        .bind(id)
        .fetch_one(&mut *tx)
        .await?;

        tx.commit().await?;
        Ok(row)
    }

    async fn clear_transactions(&self) -> Result<u64, DbError> {
        let mut tx = self.pool.begin().await?;
        let deleted = sqlx::query("DELETE FROM transactions")
            .execute(&mut *tx)
            .await?
            .rows_affected();
        tx.commit().await?;
        Ok(deleted)
    }

    async fn overdue_loans(&self) -> Result<Vec<OverdueLoan>, DbError> {
        let loans = sqlx::query_as(
            r#"
            SELECT
                t.member_name,
                t.book_title,
                CAST(t.due_date AS TEXT) AS due_date,
                m.phone,
                CAST(julianday(date('now')) - julianday(t.due_date) AS INTEGER) AS days_overdue
            FROM transactions t
            LEFT JOIN members m ON t.member_name = m.name
            WHERE t.status = ?
              AND CAST(julianday(date('now')) - julianday(t.due_date) AS INTEGER) > ?
            ORDER BY days_overdue DESC
            "#,
        )
        .bind(DEFAULT_TRANSACTION_STATUS)
        .bind(OVERDUE_GRACE_DAYS)
        .fetch_all(&self.pool)
        .await?;

        Ok(loans)
    }
}
