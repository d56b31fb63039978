//! Checkout transaction endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CreateTransactionRequest, NewTransaction, Transaction};

/// Clear transactions response
#[derive(Debug, Serialize, Deserialize)]
pub struct ClearResponse {
    pub success: bool,
}

/// GET /api/transactions - every transaction, newest first
async fn list_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Transaction>>, ApiError> {
    let transactions = state.catalog.list_transactions().await?;
    Ok(Json(transactions))
}

/// POST /api/transactions - record a checkout
///
/// Fields are passed through as sent; the store's NOT NULL constraints are
/// the only check.
async fn create_transaction(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateTransactionRequest>,
) -> Result<Json<Transaction>, ApiError> {
    let new = NewTransaction::from(req);
    let row = state.catalog.insert_transaction(&new).await?;

    tracing::info!(id = row.id, book_title = %row.book_title, "Transaction recorded");
    Ok(Json(row))
}

/// DELETE /api/transactions - remove every transaction
async fn clear_transactions(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ClearResponse>, ApiError> {
    let deleted = state.catalog.clear_transactions().await?;

    tracing::info!(deleted, "Transactions cleared");
    Ok(Json(ClearResponse { success: true }))
}

/// Transaction routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route(
        "/api/transactions",
        get(list_transactions)
            .post(create_transaction)
            .delete(clear_transactions),
    )
}
