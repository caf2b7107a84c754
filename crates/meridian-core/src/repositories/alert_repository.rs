//! Alert state repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::AlertState;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait AlertRepository: Send + Sync {
    async fn find(&self, family_circle_id: &str) -> Result<Option<AlertState>, DomainError>;

    /// Insert or replace the single row of the family circle.
    async fn upsert(&self, state: &AlertState) -> Result<AlertState, DomainError>;
}
