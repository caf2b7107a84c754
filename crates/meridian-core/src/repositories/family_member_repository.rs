//! Family member repository trait (port)

use async_trait::async_trait;
#[cfg(test)]
use mockall::automock;

use crate::domain::FamilyMember;
use crate::error::DomainError;

#[cfg_attr(test, automock)]
#[async_trait]
pub trait FamilyMemberRepository: Send + Sync {
    async fn list_for_family_circle(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<FamilyMember>, DomainError>;

    async fn find_in_family_circle(
        &self,
        family_circle_id: &str,
        user_id: &str,
    ) -> Result<Option<FamilyMember>, DomainError>;
}
