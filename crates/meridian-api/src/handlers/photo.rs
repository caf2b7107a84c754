// ============================================================================
// Meridian API - Member Photo Handler
// File: crates/meridian-api/src/handlers/photo.rs
// ============================================================================

use std::path::{Component, Path as FsPath, PathBuf};

use axum::{
    body::Body,
    extract::{Path, State},
    http::{header, HeaderValue},
    response::Response,
};
use tracing::warn;

use crate::error::ApiError;
use crate::middleware::Authenticated;
use crate::state::AppState;

/// Join a stored file name onto the photo directory. Only plain file names
/// and nested relative paths are accepted.
fn photo_path(dir: &FsPath, filename: &str) -> Option<PathBuf> {
    let relative = FsPath::new(filename);
    if filename.is_empty()
        || !relative
            .components()
            .all(|c| matches!(c, Component::Normal(_)))
    {
        return None;
    }
    Some(dir.join(relative))
}

/// GET /api/users/{user_id}/photo
///
/// Serves the photo of a member of the caller's family circle. Anything else
/// is a 404.
pub async fn member_photo(
    State(state): State<AppState>,
    Authenticated(auth): Authenticated,
    Path(user_id): Path<String>,
) -> Result<Response, ApiError> {
    let filename = state.location.member_photo(&auth, &user_id).await?;

    let path = photo_path(&state.photos_dir, &filename).ok_or_else(|| {
        warn!("Rejected photo file name {:?} for user {}", filename, user_id);
        ApiError::NotFound("photo not found".to_string())
    })?;

    let bytes = tokio::fs::read(&path).await.map_err(|e| {
        warn!("Photo {} for user {} unreadable: {}", path.display(), user_id, e);
        ApiError::NotFound("photo not found".to_string())
    })?;

    let mime = mime_guess::from_path(&path).first_or_octet_stream();
    let content_type = HeaderValue::from_str(mime.as_ref())
        .unwrap_or_else(|_| HeaderValue::from_static("application/octet-stream"));

    let mut response = Response::new(Body::from(bytes));
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);
    Ok(response)
}
