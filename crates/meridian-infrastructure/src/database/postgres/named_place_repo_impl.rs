// ============================================================================
// Meridian Infrastructure - PostgreSQL Named Place Repository
// File: crates/meridian-infrastructure/src/database/postgres/named_place_repo_impl.rs
// ============================================================================

use async_trait::async_trait;
use sqlx::{FromRow, PgPool};
use tracing::error;

use meridian_core::domain::NamedPlace;
use meridian_core::error::DomainError;
use meridian_core::repositories::NamedPlaceRepository;
use meridian_shared::constants::DEFAULT_PLACE_RADIUS_METRES;

pub struct PgNamedPlaceRepository {
    pool: PgPool,
}

impl PgNamedPlaceRepository {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(Debug, FromRow)]
struct NamedPlaceRow {
    pub location_id: String,
    pub family_circle_id: String,
    pub location_name: String,
    pub gps_latitude: Option<f64>,
    pub gps_longitude: Option<f64>,
    pub radius_metres: f64,
}

impl From<NamedPlaceRow> for NamedPlace {
    fn from(row: NamedPlaceRow) -> Self {
        NamedPlace {
            place_id: row.location_id,
            family_circle_id: row.family_circle_id,
            name: row.location_name,
            latitude: row.gps_latitude,
            longitude: row.gps_longitude,
            radius_metres: row.radius_metres,
        }
    }
}

#[async_trait]
impl NamedPlaceRepository for PgNamedPlaceRepository {
    async fn list_for_family_circle(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<NamedPlace>, DomainError> {
        let rows: Vec<NamedPlaceRow> = sqlx::query_as(
            r#"
            SELECT
                location_id, family_circle_id, location_name,
                gps_latitude, gps_longitude,
                COALESCE(radius_metres, $2) AS radius_metres
            FROM named_places
            WHERE family_circle_id = $1
            ORDER BY location_name
            "#
        )
        .bind(family_circle_id)
        .bind(DEFAULT_PLACE_RADIUS_METRES)
        .fetch_all(&self.pool)
        .await
        .map_err(|e: sqlx::Error| {
            error!("Database error listing named places: {}", e);
            DomainError::DatabaseError(e.to_string())
        })?;

        Ok(rows.into_iter().map(Into::into).collect())
    }
}
