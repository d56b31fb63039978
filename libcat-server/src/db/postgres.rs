//! PostgreSQL primary store
//!
//! Inserts use `RETURNING` so the persisted row comes back in one statement.
//! `SERIAL` ids are widened to BIGINT and DATE columns are read as text so
//! rows decode into the same models as the embedded store.

use async_trait::async_trait;
use sqlx::PgPool;

use super::store::{CatalogStore, DbError, Dialect};
use crate::models::{
    Book, Member, NewBook, NewMember, NewTransaction, OverdueLoan, Transaction,
    DEFAULT_BOOK_STATUS, DEFAULT_TRANSACTION_STATUS, OVERDUE_GRACE_DAYS,
};

const SCHEMA: [&str; 3] = [
    r#"
    CREATE TABLE IF NOT EXISTS books (
        id SERIAL PRIMARY KEY,
        title VARCHAR(255) NOT NULL,
        author VARCHAR(255) NOT NULL,
        tticode VARCHAR(100) UNIQUE NOT NULL,
        isbn VARCHAR(20),
        category VARCHAR(100) NOT NULL,
        status VARCHAR(20) DEFAULT 'Available',
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS members (
        id SERIAL PRIMARY KEY,
        name VARCHAR(255) NOT NULL,
        member_id VARCHAR(50) UNIQUE NOT NULL,
        phone VARCHAR(50),
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS transactions (
        id SERIAL PRIMARY KEY,
        book_title VARCHAR(255) NOT NULL,
        member_name VARCHAR(255) NOT NULL,
        checkout_date DATE NOT NULL,
        due_date DATE NOT NULL,
        status VARCHAR(20) DEFAULT 'Checked Out',
        created_at TIMESTAMP DEFAULT CURRENT_TIMESTAMP
    )
    "#,
];

const BOOK_COLUMNS: &str =
    "id::BIGINT AS id, title, author, tticode, isbn, category, status, created_at";

const MEMBER_COLUMNS: &str = "id::BIGINT AS id, name, member_id, phone, created_at";

const TRANSACTION_COLUMNS: &str = "id::BIGINT AS id, book_title, member_name, \
    checkout_date::TEXT AS checkout_date, due_date::TEXT AS due_date, status, created_at";

/// PostgreSQL-backed catalog
#[derive(Debug, Clone)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogStore for PgStore {
    fn dialect(&self) -> Dialect {
        Dialect::Postgres
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

        let row: Book = sqlx::query_as(&format!(
            r#"
            INSERT INTO books (title, author, tticode, isbn, category, status)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {BOOK_COLUMNS}
            "#
        ))
        .bind(&book.title)
        .bind(&book.author)
        .bind(&book.tti_code)
        .bind(&book.isbn)
        .bind(&book.category)
        .bind(DEFAULT_BOOK_STATUS)
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

        let row: Member = sqlx::query_as(&format!(
            r#"
            INSERT INTO members (name, member_id, phone)
            VALUES ($1, $2, $3)
            RETURNING {MEMBER_COLUMNS}
            "#
        ))
        .bind(&member.name)
        .bind(member.member_id.as_str())
        .bind(&member.phone)
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

        let row: Transaction = sqlx::query_as(&format!(
            r#"
            INSERT INTO transactions (book_title, member_name, checkout_date, due_date, status)
            VALUES ($1, $2, $3::DATE, $4::DATE, $5)
            RETURNING {TRANSACTION_COLUMNS}
            "#
        ))
        .bind(&new.book_title)
        .bind(&new.member_name)
        .bind(&new.checkout_date)
        .bind(&new.due_date)
        .bind(&new.status)
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
                t.due_date::TEXT AS due_date,
                m.phone,
                (CURRENT_DATE - t.due_date)::BIGINT AS days_overdue
            FROM transactions t
            LEFT JOIN members m ON t.member_name = m.name
            WHERE t.status = $1
              AND (CURRENT_DATE - t.due_date)::BIGINT > $2
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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::create_pg_pool;
    use crate::models::CreateTransactionRequest;

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p libcat-server -- --ignored

    async fn store() -> PgStore {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = create_pg_pool(&url).await.expect("pool creation failed");
        let store = PgStore::new(pool);
        store.init_schema().await.expect("schema init failed");
        store
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn insert_book_returns_row() {
        let store = store().await;
        let code = format!("PGTEST-{}", chrono::Utc::now().timestamp_millis());
        let row = store
            .insert_book(&NewBook {
                title: "Clinical Laboratory Science".into(),
                author: "Doig Kaplan".into(),
                tti_code: code.clone(),
                isbn: "9780323711234".into(),
                category: "Medical Laboratory Technician".into(),
            })
            .await
            .expect("insert failed");

        assert_eq!(row.tticode, code);
        assert_eq!(row.status, "Available");
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn transaction_dates_round_trip_as_text() {
        let store = store().await;
        let row = store
            .insert_transaction(&NewTransaction::from(CreateTransactionRequest {
                book_title: Some("Yearbook Design Fundamentals".into()),
                member_name: Some("Ada".into()),
                checkout_date: Some("2024-03-01".into()),
                due_date: Some("2024-03-15".into()),
                status: None,
            }))
            .await
            .expect("insert failed");

        assert_eq!(row.checkout_date, "2024-03-01");
        assert_eq!(row.status, "Checked Out");
    }
}
