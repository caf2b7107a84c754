//! Family member entity

use meridian_shared::{FamilyCircleId, UserId};
use serde::{Deserialize, Serialize};

/// A user of a family circle who can be checked in.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FamilyMember {
    pub user_id: UserId,
    pub family_circle_id: FamilyCircleId,
    pub display_name: String,
    pub photo_filename: Option<String>,
}

impl FamilyMember {
    pub fn has_photo(&self) -> bool {
        self.photo_filename
            .as_deref()
            .is_some_and(|name| !name.trim().is_empty())
    }
}

/// Public URL of a member photo served by the photo endpoint. The id is a
/// single percent-encoded path segment.
pub fn photo_url_for(user_id: &str) -> String {
    format!("/api/users/{}/photo", urlencoding::encode(user_id))
}
