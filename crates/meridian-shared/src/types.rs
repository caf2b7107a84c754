//! Common types

use chrono::{DateTime, Utc};

/// Identifier of a family circle (the tenant boundary).
pub type FamilyCircleId = String;

/// Identifier of a family member who can check in.
pub type UserId = String;

/// Identifier of a caregiver-defined named place.
pub type PlaceId = String;

/// Identifier of a stored check-in row.
pub type CheckinId = i64;

pub type Timestamp = DateTime<Utc>;

/// Server clock; check-in timestamps are never taken from the client.
pub fn now() -> Timestamp {
    Utc::now()
}
