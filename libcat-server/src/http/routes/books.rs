//! Book endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{Book, CreateBookRequest, NewBook};

/// GET /api/books - every book, newest first
async fn list_books(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Book>>, ApiError> {
    let books = state.catalog.list_books().await?;
    Ok(Json(books))
}

/// POST /api/books - catalogue a book
async fn create_book(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateBookRequest>,
) -> Result<Json<Book>, ApiError> {
    let book = NewBook::try_from(req)?;
    let row = state.catalog.insert_book(&book).await?;

    tracing::info!(id = row.id, tticode = %row.tticode, "Book added");
    Ok(Json(row))
}

/// Book routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/books", get(list_books).post(create_book))
}
