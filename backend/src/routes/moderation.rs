//! Moderation API routes

use crate::services::ModerationService;
use crate::state::AppState;
use axum::{body::Bytes, extract::State, routing::post, Json, Router};
use marketplace_shared::types::{ModerationCheckRequest, ModerationCheckResponse};

/// Create moderation routes
pub fn moderation_routes() -> Router<AppState> {
    Router::new().route("/check", post(check_text))
}

/// POST /api/v1/moderation/check - Never fails.
///
/// The body is parsed leniently: malformed JSON, a missing `text` or a
/// non-string `text` are all reported as not prohibited.
async fn check_text(State(state): State<AppState>, body: Bytes) -> Json<ModerationCheckResponse> {
    let req: ModerationCheckRequest = serde_json::from_slice(&body).unwrap_or_default();
    let prohibited = ModerationService::is_prohibited(state.moderator(), req.text());
    Json(ModerationCheckResponse { prohibited })
}
