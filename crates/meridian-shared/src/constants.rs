//! Application-wide constants

/// Radius applied to a named place stored without one.
pub const DEFAULT_PLACE_RADIUS_METRES: f64 = 150.0;

/// Mean Earth radius used by the haversine distance.
pub const EARTH_RADIUS_METRES: f64 = 6_371_000.0;

pub const HEADER_USER_ID: &str = "X-User-Id";
pub const HEADER_FAMILY_CIRCLE_ID: &str = "X-Family-Circle-Id";

pub const DEFAULT_SESSION_COOKIE: &str = "meridian_session";
pub const DEFAULT_SESSION_TTL_SECONDS: i64 = 60 * 60 * 24 * 30;
