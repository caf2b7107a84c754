// ============================================================================
// Meridian Infrastructure - PostgreSQL Family Member Repository
// File: crates/meridian-infrastructure/src/database/postgres/family_member_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use meridian_core::domain::FamilyMember;
use meridian_core::error::DomainError;
use meridian_core::repositories::FamilyMemberRepository;

pub struct PgFamilyMemberRepository {
    pool: PgPool,
}

impl PgFamilyMemberRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct FamilyMemberRow {
    pub id: String,
    pub family_circle_id: String,
    pub display_name: String,
    pub photo_filename: Option<String>,
}

impl From<FamilyMemberRow> for FamilyMember {
    fn from(row: FamilyMemberRow) -> Self {
        FamilyMember {
            user_id: row.id,
            family_circle_id: row.family_circle_id,
            display_name: row.display_name,
            photo_filename: row.photo_filename,
        }
    }
}

#[async_trait]
impl FamilyMemberRepository for PgFamilyMemberRepository {
    async fn list_for_family_circle(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<FamilyMember>, DomainError> {
        let rows: Vec<FamilyMemberRow> = sqlx::query_as(
            r#"
            SELECT u.id, ufc.family_circle_id, u.display_name, u.photo_filename
            FROM users u
            INNER JOIN user_family_circle ufc ON ufc.user_id = u.id
            WHERE ufc.family_circle_id = $1
            ORDER BY u.display_name
            "#
        )
        .bind(family_circle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing family members: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }

    async fn find_in_family_circle(
        &self,
        family_circle_id: &str,
        user_id: &str,
    ) -> Result<Option<FamilyMember>, DomainError> {
        let row: Option<FamilyMemberRow> = sqlx::query_as(
            r#"
            SELECT u.id, ufc.family_circle_id, u.display_name, u.photo_filename
            FROM users u
            INNER JOIN user_family_circle ufc ON ufc.user_id = u.id
            WHERE ufc.family_circle_id = $1 AND u.id = $2
            "#
        )
        .bind(family_circle_id)
        .bind(user_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error finding family member: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }
}
