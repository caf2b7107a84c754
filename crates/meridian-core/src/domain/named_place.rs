//! Named place (geofence) entity

use meridian_shared::{FamilyCircleId, PlaceId};
use serde::{Deserialize, Serialize};

/// A caregiver-defined circular geofence. Read-only to this service.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedPlace {
    pub place_id: PlaceId,
    pub family_circle_id: FamilyCircleId,
    pub name: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius_metres: f64,
}

impl NamedPlace {
    /// Center of the geofence, when both coordinates are on file.
    pub fn center(&self) -> Option<(f64, f64)> {
        match (self.latitude, self.longitude) {
            (Some(lat), Some(lon)) => Some((lat, lon)),
            _ => None,
        }
    }
}
