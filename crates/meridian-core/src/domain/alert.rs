//! Emergency alert flag, kept per family circle

use meridian_shared::{FamilyCircleId, Timestamp, UserId};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertState {
    pub family_circle_id: FamilyCircleId,
    pub activated: bool,
    pub updated_at: Option<Timestamp>,
    pub updated_by: Option<UserId>,
}

impl AlertState {
    /// State of a family circle that never raised an alert.
    pub fn inactive(family_circle_id: impl Into<FamilyCircleId>) -> Self {
        Self {
            family_circle_id: family_circle_id.into(),
            activated: false,
            updated_at: None,
            updated_by: None,
        }
    }
}
