// ============================================================================
// Meridian Core - Check-in Entity
// File: crates/meridian-core/src/domain/checkin.rs
// Description: Append-only location check-in records and their views
// ============================================================================

use meridian_shared::{CheckinId, FamilyCircleId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

use super::family_member::photo_url_for;

/// Stored check-in. Never updated or deleted once written.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Checkin {
    pub id: CheckinId,
    pub family_circle_id: FamilyCircleId,
    pub user_id: UserId,
    pub timestamp: Timestamp,
    pub latitude: f64,
    pub longitude: f64,
    /// Computed from the coordinates when the row is written, never recomputed.
    pub resolved_place_name: Option<String>,
    pub notes: Option<String>,
}

/// Row about to be inserted. Only built by the location service, after
/// geofence resolution, so the place name cannot come from a client.
#[derive(Debug, Clone, PartialEq)]
pub struct NewCheckin {
    pub family_circle_id: FamilyCircleId,
    pub user_id: UserId,
    pub timestamp: Timestamp,
    pub latitude: f64,
    pub longitude: f64,
    pub resolved_place_name: Option<String>,
    pub notes: Option<String>,
}

impl NewCheckin {
    pub fn into_checkin(self, id: CheckinId) -> Checkin {
        Checkin {
            id,
            family_circle_id: self.family_circle_id,
            user_id: self.user_id,
            timestamp: self.timestamp,
            latitude: self.latitude,
            longitude: self.longitude,
            resolved_place_name: self.resolved_place_name,
            notes: self.notes,
        }
    }
}

/// Caller input for a new check-in. Every field is optional here so missing
/// values surface as validation errors rather than decoding failures.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CheckinRequest {
    pub user_id: Option<UserId>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub notes: Option<String>,
}

/// Latest check-in of a user joined with the user's display fields.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckinWithMember {
    pub checkin: Checkin,
    pub display_name: Option<String>,
    pub photo_filename: Option<String>,
}

/// Check-in as returned to the dashboard.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CheckinView {
    #[serde(flatten)]
    pub checkin: Checkin,
    pub display_name: Option<String>,
    pub photo_url: Option<String>,
}

impl From<CheckinWithMember> for CheckinView {
    fn from(row: CheckinWithMember) -> Self {
        let has_photo = row
            .photo_filename
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty());
        let photo_url = has_photo.then(|| photo_url_for(&row.checkin.user_id));

        Self {
            checkin: row.checkin,
            display_name: row.display_name,
            photo_url,
        }
    }
}
