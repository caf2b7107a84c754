// ============================================================================
// Meridian API - Session Handlers
// File: crates/meridian-api/src/handlers/session.rs
// ============================================================================
//! Cookie session login and logout. Both routes sit outside the access guard.

use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use axum_extra::extract::cookie::{Cookie, CookieJar, SameSite};
use tracing::info;
use validator::Validate;

use crate::dto::LoginRequest;
use crate::error::ApiError;
use crate::response::OkResponse;
use crate::state::AppState;

/// Login handler - POST /api/login
pub async fn login(
    State(state): State<AppState>,
    jar: CookieJar,
    payload: Result<Json<LoginRequest>, JsonRejection>,
) -> Result<(CookieJar, Json<OkResponse>), ApiError> {
    let Json(payload) = payload?;
    payload.validate()?;

    let user_id = payload.user_id.trim();
    let family_circle_id = payload.family_circle_id.trim();
    if user_id.is_empty() || family_circle_id.is_empty() {
        return Err(ApiError::BadRequest(
            "user_id and family_circle_id are required".to_string(),
        ));
    }

    let token = state
        .sessions
        .issue(user_id, family_circle_id)
        .map_err(|e| ApiError::InternalError(e.to_string()))?;

    let cookie = Cookie::build((state.session_cookie.name.clone(), token))
        .path("/")
        .http_only(true)
        .same_site(SameSite::Lax)
        .secure(state.session_cookie.secure)
        .build();

    info!("Session started for user {} of family circle {}", user_id, family_circle_id);
    Ok((jar.add(cookie), Json(OkResponse::ok())))
}

/// Logout handler - POST /api/logout
pub async fn logout(
    State(state): State<AppState>,
    jar: CookieJar,
) -> (CookieJar, Json<OkResponse>) {
    let removal = Cookie::build((state.session_cookie.name.clone(), "")).path("/");
    (jar.remove(removal), Json(OkResponse::ok()))
}
