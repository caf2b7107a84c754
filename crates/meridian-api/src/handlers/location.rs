// ============================================================================
// Meridian API - Location Handlers
// File: crates/meridian-api/src/handlers/location.rs
// ============================================================================
//! Check-in, geofence and family member routes under
//! `/api/family_circles/{family_circle_id}/location`

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    Json,
};
use meridian_core::{Checkin, CheckinView, FamilyMember, NamedPlace};

use crate::dto::CreateCheckinBody;
use crate::error::ApiError;
use crate::middleware::TenantScope;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET .../location/checkins
pub async fn list_checkins(
    State(state): State<AppState>,
    TenantScope(auth): TenantScope,
) -> Result<Json<DataResponse<Vec<CheckinView>>>, ApiError> {
    let checkins = state.location.get_checkins(&auth).await?;
    Ok(Json(DataResponse::new(checkins)))
}

/// POST .../location/checkin
pub async fn create_checkin(
    State(state): State<AppState>,
    TenantScope(auth): TenantScope,
    payload: Result<Json<CreateCheckinBody>, JsonRejection>,
) -> Result<(StatusCode, Json<DataResponse<Checkin>>), ApiError> {
    let Json(body) = payload?;
    let checkin = state.location.create_checkin(&auth, body.into()).await?;
    Ok((StatusCode::CREATED, Json(DataResponse::new(checkin))))
}

/// GET .../location/named-places
pub async fn list_named_places(
    State(state): State<AppState>,
    TenantScope(auth): TenantScope,
) -> Result<Json<DataResponse<Vec<NamedPlace>>>, ApiError> {
    let places = state.location.named_places(&auth).await?;
    Ok(Json(DataResponse::new(places)))
}

/// GET .../location/family-members
pub async fn list_family_members(
    State(state): State<AppState>,
    TenantScope(auth): TenantScope,
) -> Result<Json<DataResponse<Vec<FamilyMember>>>, ApiError> {
    let members = state.location.family_members(&auth).await?;
    Ok(Json(DataResponse::new(members)))
}
