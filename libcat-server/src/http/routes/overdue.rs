//! Overdue report

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};

use crate::http::error::ApiError;
use crate::http::server::AppState;
use crate::models::OverdueLoan;

/// GET /api/overdue-members - checked-out books more than 14 days past due
async fn list_overdue(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<OverdueLoan>>, ApiError> {
    let loans = state.catalog.overdue_loans().await?;
    Ok(Json(loans))
}

pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/overdue-members", get(list_overdue))
}
