//! Member endpoints

use std::sync::Arc;

use axum::{extract::State, routing::get, Json, Router};
use serde::{Deserialize, Serialize};

use crate::http::error::ApiError;
use crate::http::extractors::JsonBody;
use crate::http::server::AppState;
use crate::models::{CreateMemberRequest, Member, NewMember};

/// Create member response.
///
/// Only the generated member code is returned, not the full row.
#[derive(Debug, Serialize, Deserialize)]
pub struct MemberCreated {
    pub id: String,
}

/// GET /api/members - every member, newest first
async fn list_members(
    State(state): State<Arc<AppState>>,
) -> Result<Json<Vec<Member>>, ApiError> {
    let members = state.catalog.list_members().await?;
    Ok(Json(members))
}

/// POST /api/members - register a member under a generated code
async fn create_member(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<CreateMemberRequest>,
) -> Result<Json<MemberCreated>, ApiError> {
    let member = NewMember::new(req)?;
    let row = state.catalog.insert_member(&member).await?;

    tracing::info!(member_id = %row.member_id, "Member registered");
    Ok(Json(MemberCreated { id: row.member_id }))
}

/// Member routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/api/members", get(list_members).post(create_member))
}
