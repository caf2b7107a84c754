// ============================================================================
// Meridian API - Access Guard
// File: crates/meridian-api/src/middleware/access_guard.rs
// ============================================================================
//! Caller identity resolution and tenant isolation.
//!
//! [`access_guard`] runs on every protected route and stores one
//! [`AuthContext`] in the request extensions. Handlers never read identity
//! themselves: they take [`TenantScope`], which also rejects a
//! `{family_circle_id}` path segment that differs from the caller's, or
//! [`Authenticated`] on routes without a family circle in the path.

use std::collections::HashMap;

use axum::{
    extract::{FromRequestParts, Path, Request, State},
    http::{request::Parts, HeaderMap},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use meridian_core::{AuthContext, IdentitySource};
use meridian_security::SessionService;
use meridian_shared::constants::{HEADER_FAMILY_CIRCLE_ID, HEADER_USER_ID};
use tracing::debug;

use crate::error::ApiError;
use crate::state::AppState;

/// Path parameter naming the targeted family circle.
pub const FAMILY_CIRCLE_PARAM: &str = "family_circle_id";

fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Identity from the header pair when both are present, otherwise from the
/// session cookie.
pub fn resolve_identity(
    headers: &HeaderMap,
    jar: &CookieJar,
    sessions: &SessionService,
    cookie_name: &str,
) -> Result<AuthContext, ApiError> {
    let user_id = header_value(headers, HEADER_USER_ID);
    let family_circle_id = header_value(headers, HEADER_FAMILY_CIRCLE_ID);

    if let (Some(user_id), Some(family_circle_id)) = (&user_id, &family_circle_id) {
        return Ok(AuthContext::new(
            user_id.as_str(),
            family_circle_id.as_str(),
            IdentitySource::Headers,
        )?);
    }

    if let Some(cookie) = jar.get(cookie_name) {
        match sessions.validate(cookie.value()) {
            Ok(claims) => {
                return Ok(AuthContext::new(
                    claims.sub,
                    claims.family_circle_id,
                    IdentitySource::Session,
                )?);
            }
            Err(e) => debug!("Ignoring session cookie: {}", e),
        }
    }

    if user_id.is_none() {
        Err(ApiError::Unauthorized(format!("{} header required", HEADER_USER_ID)))
    } else {
        Err(ApiError::Unauthorized(format!(
            "{} header required",
            HEADER_FAMILY_CIRCLE_ID
        )))
    }
}

/// Resolve the caller once and attach the [`AuthContext`] to the request.
pub async fn access_guard(
    State(state): State<AppState>,
    jar: CookieJar,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let auth = resolve_identity(
        request.headers(),
        &jar,
        &state.sessions,
        &state.session_cookie.name,
    )?;

    debug!(
        "Request {} {} by user {} of family circle {} ({:?})",
        request.method(),
        request.uri().path(),
        auth.user_id,
        auth.family_circle_id,
        auth.source
    );

    request.extensions_mut().insert(auth);
    Ok(next.run(request).await)
}

fn auth_from_parts(parts: &Parts) -> Result<AuthContext, ApiError> {
    parts
        .extensions
        .get::<AuthContext>()
        .cloned()
        .ok_or_else(|| ApiError::Unauthorized("unauthenticated".to_string()))
}

/// Caller identity for routes without a family circle in the path.
#[derive(Debug, Clone)]
pub struct Authenticated(pub AuthContext);

impl<S> FromRequestParts<S> for Authenticated
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        auth_from_parts(parts).map(Authenticated)
    }
}

/// Caller identity, checked against the `{family_circle_id}` path segment.
#[derive(Debug, Clone)]
pub struct TenantScope(pub AuthContext);

impl<S> FromRequestParts<S> for TenantScope
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let auth = auth_from_parts(parts)?;

        let Path(params) = Path::<HashMap<String, String>>::from_request_parts(parts, state)
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;
        let requested = params.get(FAMILY_CIRCLE_PARAM).ok_or_else(|| {
            ApiError::InternalError(format!("route has no {} segment", FAMILY_CIRCLE_PARAM))
        })?;

        auth.ensure_family_circle(requested)?;
        Ok(TenantScope(auth))
    }
}
