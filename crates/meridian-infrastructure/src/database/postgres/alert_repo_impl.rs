// ============================================================================
// Meridian Infrastructure - PostgreSQL Alert State Repository
// File: crates/meridian-infrastructure/src/database/postgres/alert_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::error;

use meridian_core::domain::AlertState;
use meridian_core::error::DomainError;
use meridian_core::repositories::AlertRepository;

pub struct PgAlertRepository {
    pool: PgPool,
}

impl PgAlertRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct AlertStateRow {
    pub family_circle_id: String,
    pub activated: bool,
    pub updated_at: Option<DateTime<Utc>>,
    pub updated_by: Option<String>,
}

impl From<AlertStateRow> for AlertState {
    fn from(row: AlertStateRow) -> Self {
        AlertState {
            family_circle_id: row.family_circle_id,
            activated: row.activated,
            updated_at: row.updated_at,
            updated_by: row.updated_by,
        }
    }
}

#[async_trait]
impl AlertRepository for PgAlertRepository {
    async fn find(&self, family_circle_id: &str) -> Result<Option<AlertState>, DomainError> {
        let row: Option<AlertStateRow> = sqlx::query_as(
            r#"
            SELECT family_circle_id, activated, updated_at, updated_by
            FROM family_alert_states
            WHERE family_circle_id = $1
            "#
        )
        .bind(family_circle_id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error loading alert state: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.map(|r| r.into()))
    }

    async fn upsert(&self, state: &AlertState) -> Result<AlertState, DomainError> {
        let row: AlertStateRow = sqlx::query_as(
            r#"
            INSERT INTO family_alert_states (family_circle_id, activated, updated_at, updated_by)
            VALUES ($1, $2, $3, $4)
            ON CONFLICT (family_circle_id) DO UPDATE
            SET
                activated = EXCLUDED.activated,
                updated_at = EXCLUDED.updated_at,
                updated_by = EXCLUDED.updated_by
            RETURNING family_circle_id, activated, updated_at, updated_by
            "#
        )
        .bind(&state.family_circle_id)
        .bind(state.activated)
        .bind(state.updated_at)
        .bind(&state.updated_by)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error saving alert state: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }
}
