// ============================================================================
// Meridian Infrastructure - PostgreSQL Check-in Repository
// File: crates/meridian-infrastructure/src/database/postgres/checkin_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgPool};
use tracing::{debug, error};

use meridian_core::domain::{Checkin, CheckinWithMember, NewCheckin};
use meridian_core::error::DomainError;
use meridian_core::repositories::CheckinRepository;

pub struct PgCheckinRepository {
    pool: PgPool,
}

impl PgCheckinRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

// Internal row types for SQLx mapping
#[derive(Debug, FromRow)]
struct CheckinRow {
    pub id: i64,
    pub family_circle_id: String,
    pub user_id: String,
    pub checked_in_at: DateTime<Utc>,
    pub latitude: f64,
    pub longitude: f64,
    pub location_name: Option<String>,
    pub notes: Option<String>,
}

impl From<CheckinRow> for Checkin {
    fn from(row: CheckinRow) -> Self {
        Checkin {
            id: row.id,
            family_circle_id: row.family_circle_id,
            user_id: row.user_id,
            timestamp: row.checked_in_at,
            latitude: row.latitude,
            longitude: row.longitude,
            resolved_place_name: row.location_name,
            notes: row.notes,
        }
    }
}

#[derive(Debug, FromRow)]
struct LatestCheckinRow {
    #[sqlx(flatten)]
    pub checkin: CheckinRow,
    pub display_name: Option<String>,
    pub photo_filename: Option<String>,
}

impl From<LatestCheckinRow> for CheckinWithMember {
    fn from(row: LatestCheckinRow) -> Self {
        CheckinWithMember {
            checkin: row.checkin.into(),
            display_name: row.display_name,
            photo_filename: row.photo_filename,
        }
    }
}

#[async_trait]
impl CheckinRepository for PgCheckinRepository {
    async fn insert(&self, checkin: &NewCheckin) -> Result<Checkin, DomainError> {
        let row: CheckinRow = sqlx::query_as(
            r#"
            INSERT INTO location_checkins (
                family_circle_id, user_id, checked_in_at,
                latitude, longitude, location_name, notes
            )
            VALUES ($1, $2, $3, $4, $5, $6, $7)
            RETURNING
                id, family_circle_id, user_id, checked_in_at,
                latitude, longitude, location_name, notes
            "#
        )
        .bind(&checkin.family_circle_id)
        .bind(&checkin.user_id)
        .bind(checkin.timestamp)
        .bind(checkin.latitude)
        .bind(checkin.longitude)
        .bind(&checkin.resolved_place_name)
        .bind(&checkin.notes)
        .fetch_one(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error inserting check-in: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(row.into())
    }

    async fn latest_per_user(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<CheckinWithMember>, DomainError> {
        // DISTINCT ON keeps exactly one row per user even when two check-ins
        // share a timestamp; the higher id wins the tie.
        let rows: Vec<LatestCheckinRow> = sqlx::query_as(
            r#"
            SELECT
                l.id, l.family_circle_id, l.user_id, l.checked_in_at,
                l.latitude, l.longitude, l.location_name, l.notes,
                u.display_name, u.photo_filename
            FROM (
                SELECT DISTINCT ON (c.user_id)
                    c.id, c.family_circle_id, c.user_id, c.checked_in_at,
                    c.latitude, c.longitude, c.location_name, c.notes
                FROM location_checkins c
                WHERE c.family_circle_id = $1
                ORDER BY c.user_id, c.checked_in_at DESC, c.id DESC
            ) l
            LEFT JOIN users u ON u.id = l.user_id
            ORDER BY l.checked_in_at DESC, l.id DESC
            "#
        )
        .bind(family_circle_id)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error loading latest check-ins: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        debug!(
            "Found {} latest check-ins for family circle {}",
            rows.len(),
            family_circle_id
        );
        Ok(rows.into_iter().map(Into::into).collect())
    }
}
