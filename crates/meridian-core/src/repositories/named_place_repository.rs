//! Named place repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::NamedPlace;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait NamedPlaceRepository: Send + Sync {
    /// Places of one family circle ordered by name, radius defaulted when unset.
    async fn list_for_family_circle(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<NamedPlace>, DomainError>;
}
