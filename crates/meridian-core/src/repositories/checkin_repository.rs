//! Check-in repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::{Checkin, CheckinWithMember, NewCheckin};
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait CheckinRepository: Send + Sync {
    /// Append one row; each call creates a new check-in.
    async fn insert(&self, checkin: &NewCheckin) -> Result<Checkin, DomainError>;

    /// Exactly one row per user who ever checked in for the family circle,
    /// the one with the greatest timestamp, newest first.
    async fn latest_per_user(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<CheckinWithMember>, DomainError>;
}
