//! Per-request caller identity

use meridian_shared::{FamilyCircleId, UserId};
use tracing::warn;

use crate::error::DomainError;

/// Where the caller's identity was read from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentitySource {
    Headers,
    Session,
}

/// Authenticated caller, resolved once per request and handed to every
/// service call. All tenant-scoped reads and writes take their family circle
/// from here, never from the request payload.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthContext {
    pub user_id: UserId,
    pub family_circle_id: FamilyCircleId,
    pub source: IdentitySource,
}

impl AuthContext {
    pub fn new(
        user_id: impl Into<UserId>,
        family_circle_id: impl Into<FamilyCircleId>,
        source: IdentitySource,
    ) -> Result<Self, DomainError> {
        let user_id = user_id.into().trim().to_string();
        let family_circle_id = family_circle_id.into().trim().to_string();

        if user_id.is_empty() {
            return Err(DomainError::Unauthenticated("user id required".to_string()));
        }
        if family_circle_id.is_empty() {
            return Err(DomainError::Unauthenticated(
                "family circle id required".to_string(),
            ));
        }

        Ok(Self {
            user_id,
            family_circle_id,
            source,
        })
    }

    /// Reject a request that targets another family circle.
    pub fn ensure_family_circle(&self, requested: &str) -> Result<(), DomainError> {
        if requested != self.family_circle_id {
            warn!(
                "User {} of family circle {} attempted to access family circle {}",
                self.user_id, self.family_circle_id, requested
            );
            return Err(DomainError::forbidden("family circle mismatch"));
        }
        Ok(())
    }

    /// Callers may only check themselves in.
    pub fn ensure_self(&self, user_id: &str) -> Result<(), DomainError> {
        if user_id != self.user_id {
            warn!(
                "User {} attempted to check in as {}",
                self.user_id, user_id
            );
            return Err(DomainError::forbidden("cannot check in for another user"));
        }
        Ok(())
    }
}
