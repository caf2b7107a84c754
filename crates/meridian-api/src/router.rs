// ============================================================================
// Meridian API - Router
// File: crates/meridian-api/src/router.rs
// ============================================================================

use axum::{
    http::{header, HeaderName, HeaderValue, Method},
    middleware,
    routing::{get, post},
    Router,
};
use meridian_shared::config::CorsSettings;
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use crate::handlers;
use crate::middleware::access_guard;
use crate::state::AppState;

pub fn build_router(state: AppState, cors: CorsLayer) -> Router {
    // Public routes (no identity)
    let public_routes = Router::new()
        .route("/api/health", get(handlers::health::health))
        .route("/api/login", post(handlers::session::login))
        .route("/api/logout", post(handlers::session::logout));

    let family_circle_routes = Router::new()
        .route("/location/checkins", get(handlers::location::list_checkins))
        .route("/location/checkin", post(handlers::location::create_checkin))
        .route(
            "/location/named-places",
            get(handlers::location::list_named_places),
        )
        .route(
            "/location/family-members",
            get(handlers::location::list_family_members),
        )
        .route(
            "/alert",
            get(handlers::alert::alert_status).post(handlers::alert::set_alert),
        );

    // Protected routes (access guard)
    let protected_routes = Router::new()
        .nest("/api/family_circles/{family_circle_id}", family_circle_routes)
        .route("/api/users/{user_id}/photo", get(handlers::photo::member_photo))
        .route_layer(middleware::from_fn_with_state(state.clone(), access_guard));

    Router::new()
        .merge(public_routes)
        .merge(protected_routes)
        .with_state(state)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
}

/// CORS policy. A configured origin may send the session cookie; without one
/// any origin is allowed and credentials are not.
pub fn cors_layer(settings: &CorsSettings) -> Result<CorsLayer, header::InvalidHeaderValue> {
    let layer = CorsLayer::new()
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers([
            header::CONTENT_TYPE,
            HeaderName::from_static("x-user-id"),
            HeaderName::from_static("x-family-circle-id"),
        ]);

    match settings.allowed_origin.as_deref() {
        Some(origin) => Ok(layer
            .allow_origin(HeaderValue::from_str(origin)?)
            .allow_credentials(true)),
        None => Ok(layer.allow_origin(Any)),
    }
}
