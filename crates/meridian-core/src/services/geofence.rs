// ============================================================================
// Meridian Core - Geofence Resolution
// File: crates/meridian-core/src/services/geofence.rs
// ============================================================================
//! Translate raw coordinates into the name of a family's named place

use std::sync::Arc;
use tracing::{debug, warn};

use meridian_shared::constants::EARTH_RADIUS_METRES;

use crate::domain::NamedPlace;
use crate::repositories::NamedPlaceRepository;

/// Great-circle distance in metres between two WGS84 points.
pub fn haversine_metres(lat1: f64, lon1: f64, lat2: f64, lon2: f64) -> f64 {
    let phi1 = lat1.to_radians();
    let phi2 = lat2.to_radians();
    let d_phi = (lat2 - lat1).to_radians();
    let d_lambda = (lon2 - lon1).to_radians();

    let a = (d_phi / 2.0).sin().powi(2)
        + phi1.cos() * phi2.cos() * (d_lambda / 2.0).sin().powi(2);
    let central_angle = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_METRES * central_angle
}

/// A place whose radius contains the query point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeofenceMatch<'a> {
    pub place: &'a NamedPlace,
    pub distance_metres: f64,
}

/// Nearest place whose geofence contains the point, boundary inclusive.
///
/// Places without both coordinates are skipped. When two places are equally
/// near the first one in `places` wins. Non-finite input never matches.
pub fn nearest_containing<'a>(
    places: &'a [NamedPlace],
    latitude: f64,
    longitude: f64,
) -> Option<GeofenceMatch<'a>> {
    places
        .iter()
        .filter_map(|place| {
            let (lat, lon) = place.center()?;
            let distance_metres = haversine_metres(latitude, longitude, lat, lon);
            (distance_metres <= place.radius_metres).then_some(GeofenceMatch {
                place,
                distance_metres,
            })
        })
        .fold(None, |nearest: Option<GeofenceMatch<'a>>, candidate| match nearest {
            Some(best) if best.distance_metres <= candidate.distance_metres => Some(best),
            _ => Some(candidate),
        })
}

/// Resolves a point against the named places of a family circle.
pub struct GeofenceResolver {
    places: Arc<dyn NamedPlaceRepository>,
}

impl GeofenceResolver {
    pub fn new(places: Arc<dyn NamedPlaceRepository>) -> Self {
        Self { places }
    }

    /// Name of the best-matching place, or `None`.
    ///
    /// Never fails: a lookup error is logged and treated as no match so a
    /// check-in is not rejected because of geofencing.
    pub async fn resolve(
        &self,
        latitude: f64,
        longitude: f64,
        family_circle_id: &str,
    ) -> Option<String> {
        let places = match self.places.list_for_family_circle(family_circle_id).await {
            Ok(places) => places,
            Err(e) => {
                warn!(
                    "Named place lookup failed for family circle {}: {}",
                    family_circle_id, e
                );
                return None;
            }
        };

        let matched = nearest_containing(&places, latitude, longitude)?;
        debug!(
            "Resolved ({}, {}) to {} at {:.1}m",
            latitude, longitude, matched.place.name, matched.distance_metres
        );
        Some(matched.place.name.clone())
    }
}
