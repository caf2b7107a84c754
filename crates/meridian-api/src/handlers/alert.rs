use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use meridian_core::AlertState;

use crate::dto::SetAlertRequest;
use crate::error::ApiError;
use crate::middleware::TenantScope;
use crate::response::DataResponse;
use crate::state::AppState;

/// GET /api/family_circles/{family_circle_id}/alert
pub async fn alert_status(
    State(state): State<AppState>,
    TenantScope(auth): TenantScope,
) -> Result<Json<DataResponse<AlertState>>, ApiError> {
    Ok(Json(DataResponse::new(state.alerts.status(&auth).await?)))
}

/// POST /api/family_circles/{family_circle_id}/alert
pub async fn set_alert(
    State(state): State<AppState>,
    TenantScope(auth): TenantScope,
    payload: Result<Json<SetAlertRequest>, JsonRejection>,
) -> Result<Json<DataResponse<AlertState>>, ApiError> {
    let Json(body) = payload?;
    let stored = state.alerts.set(&auth, body.activated).await?;
    Ok(Json(DataResponse::new(stored)))
}
