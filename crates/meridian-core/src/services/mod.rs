//! Domain services (business logic)

pub mod alert_service;
pub mod geofence;
pub mod location_service;

pub use alert_service::AlertService;
pub use geofence::{haversine_metres, nearest_containing, GeofenceMatch, GeofenceResolver};
pub use location_service::LocationService;
