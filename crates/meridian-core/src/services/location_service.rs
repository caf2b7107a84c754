// ============================================================================
// Meridian Core - Location Service
// File: crates/meridian-core/src/services/location_service.rs
// ============================================================================
//! Check-in creation and latest-location queries, scoped to the caller's
//! family circle

use std::sync::Arc;
use tracing::{debug, info};

use crate::auth::AuthContext;
use crate::domain::{Checkin, CheckinRequest, CheckinView, FamilyMember, NamedPlace, NewCheckin};
use crate::error::DomainError;
use crate::repositories::{CheckinRepository, FamilyMemberRepository, NamedPlaceRepository};
use crate::services::geofence::GeofenceResolver;

pub struct LocationService {
    checkins: Arc<dyn CheckinRepository>,
    places: Arc<dyn NamedPlaceRepository>,
    members: Arc<dyn FamilyMemberRepository>,
    resolver: GeofenceResolver,
}

impl LocationService {
    pub fn new(
        checkins: Arc<dyn CheckinRepository>,
        places: Arc<dyn NamedPlaceRepository>,
        members: Arc<dyn FamilyMemberRepository>,
        resolver: GeofenceResolver,
    ) -> Self {
        Self {
            checkins,
            places,
            members,
            resolver,
        }
    }

    /// Record where the caller is right now.
    ///
    /// The place name is resolved from the coordinates before the row is
    /// written; the timestamp is the server clock.
    pub async fn create_checkin(
        &self,
        auth: &AuthContext,
        request: CheckinRequest,
    ) -> Result<Checkin, DomainError> {
        let user_id = request
            .user_id
            .map(|id| id.trim().to_string())
            .filter(|id| !id.is_empty());

        // 1. Callers only check themselves in, whatever else the body lacks
        if let Some(user_id) = &user_id {
            auth.ensure_self(user_id)?;
        }

        // 2. Required fields
        let (Some(user_id), Some(latitude), Some(longitude)) =
            (user_id, request.latitude, request.longitude)
        else {
            return Err(DomainError::validation(
                "user_id, latitude, and longitude are required",
            ));
        };

        // 3. Server-side place name
        let resolved_place_name = self
            .resolver
            .resolve(latitude, longitude, &auth.family_circle_id)
            .await;
        if let Some(name) = &resolved_place_name {
            info!("Resolved place name: {}", name);
        }

        // 4. Persist
        let new_checkin = NewCheckin {
            family_circle_id: auth.family_circle_id.clone(),
            user_id,
            timestamp: meridian_shared::now(),
            latitude,
            longitude,
            resolved_place_name,
            notes: request
                .notes
                .map(|n| n.trim().to_string())
                .filter(|n| !n.is_empty()),
        };
        let checkin = self.checkins.insert(&new_checkin).await?;

        info!(
            "Check-in {} created for user {} at ({}, {})",
            checkin.id, checkin.user_id, checkin.latitude, checkin.longitude
        );
        Ok(checkin)
    }

    /// Latest check-in of every family member who has checked in.
    pub async fn get_checkins(&self, auth: &AuthContext) -> Result<Vec<CheckinView>, DomainError> {
        let rows = self
            .checkins
            .latest_per_user(&auth.family_circle_id)
            .await?;
        debug!(
            "Loaded {} latest check-ins for family circle {}",
            rows.len(),
            auth.family_circle_id
        );

        Ok(rows.into_iter().map(CheckinView::from).collect())
    }

    pub async fn named_places(&self, auth: &AuthContext) -> Result<Vec<NamedPlace>, DomainError> {
        self.places
            .list_for_family_circle(&auth.family_circle_id)
            .await
    }

    pub async fn family_members(
        &self,
        auth: &AuthContext,
    ) -> Result<Vec<FamilyMember>, DomainError> {
        self.members
            .list_for_family_circle(&auth.family_circle_id)
            .await
    }

    /// Photo file name of a member of the caller's family circle.
    ///
    /// Users of other family circles are indistinguishable from users without
    /// a photo.
    pub async fn member_photo(
        &self,
        auth: &AuthContext,
        user_id: &str,
    ) -> Result<String, DomainError> {
        self.members
            .find_in_family_circle(&auth.family_circle_id, user_id)
            .await?
            .filter(FamilyMember::has_photo)
            .and_then(|member| member.photo_filename)
            .ok_or_else(|| DomainError::not_found("photo not found"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::IdentitySource;
    use crate::domain::CheckinWithMember;
    use crate::repositories::{
        MockCheckinRepository, MockFamilyMemberRepository, MockNamedPlaceRepository,
    };
    use chrono::{Duration, TimeZone, Utc};

    fn auth(user: &str) -> AuthContext {
        AuthContext::new(user, "F1", IdentitySource::Headers).unwrap()
    }

    fn eleanor_home() -> NamedPlace {
        NamedPlace {
            place_id: "p1".to_string(),
            family_circle_id: "F1".to_string(),
            name: "Eleanor Home".to_string(),
            latitude: Some(37.0056),
            longitude: Some(-113.503),
            radius_metres: 150.0,
        }
    }

    fn places_repo() -> MockNamedPlaceRepository {
        let mut places = MockNamedPlaceRepository::new();
        places
            .expect_list_for_family_circle()
            .withf(|id| id == "F1")
            .returning(|_| Ok(vec![eleanor_home()]));
        places
    }

    fn echo_insert(checkins: &mut MockCheckinRepository) {
        checkins
            .expect_insert()
            .times(1)
            .returning(|new| Ok(new.clone().into_checkin(42)));
    }

    fn service(
        checkins: MockCheckinRepository,
        members: MockFamilyMemberRepository,
    ) -> LocationService {
        let places: Arc<dyn NamedPlaceRepository> = Arc::new(places_repo());
        LocationService::new(
            Arc::new(checkins),
            places.clone(),
            Arc::new(members),
            GeofenceResolver::new(places),
        )
    }

    fn request(user: &str, lat: f64, lon: f64) -> CheckinRequest {
        CheckinRequest {
            user_id: Some(user.to_string()),
            latitude: Some(lat),
            longitude: Some(lon),
            notes: None,
        }
    }

    #[tokio::test]
    async fn test_checkin_inside_geofence_gets_place_name() {
        let mut checkins = MockCheckinRepository::new();
        echo_insert(&mut checkins);
        let svc = service(checkins, MockFamilyMemberRepository::new());

        let before = Utc::now();
        let checkin = svc
            .create_checkin(&auth("alice"), request("alice", 37.0057, -113.5031))
            .await
            .unwrap();

        assert_eq!(checkin.id, 42);
        assert_eq!(checkin.family_circle_id, "F1");
        assert_eq!(checkin.resolved_place_name.as_deref(), Some("Eleanor Home"));
        assert!(checkin.timestamp >= before);
    }

    #[tokio::test]
    async fn test_checkin_outside_every_geofence_still_succeeds() {
        let mut checkins = MockCheckinRepository::new();
        checkins
            .expect_insert()
            .withf(|new| new.resolved_place_name.is_none())
            .times(1)
            .returning(|new| Ok(new.clone().into_checkin(1)));
        let svc = service(checkins, MockFamilyMemberRepository::new());

        let checkin = svc
            .create_checkin(&auth("alice"), request("alice", 37.02, -113.55))
            .await
            .unwrap();
        assert!(checkin.resolved_place_name.is_none());
    }

    #[tokio::test]
    async fn test_missing_fields_are_rejected_before_any_write() {
        let svc = service(MockCheckinRepository::new(), MockFamilyMemberRepository::new());
        let caller = auth("alice");

        let mut no_lat = request("alice", 37.0, -113.0);
        no_lat.latitude = None;
        let mut blank_user = request("alice", 37.0, -113.0);
        blank_user.user_id = Some("   ".to_string());

        for req in [no_lat, blank_user, CheckinRequest::default()] {
            let err = svc.create_checkin(&caller, req).await.unwrap_err();
            assert!(matches!(err, DomainError::ValidationError(_)), "{:?}", err);
        }
    }

    #[tokio::test]
    async fn test_checkin_for_another_user_is_forbidden() {
        let svc = service(MockCheckinRepository::new(), MockFamilyMemberRepository::new());

        let err = svc
            .create_checkin(&auth("alice"), request("bob", 37.0, -113.0))
            .await
            .unwrap_err();
        assert_eq!(
            err,
            DomainError::Forbidden("cannot check in for another user".to_string())
        );
    }

    #[tokio::test]
    async fn test_impersonation_is_forbidden_even_without_coordinates() {
        let svc = service(MockCheckinRepository::new(), MockFamilyMemberRepository::new());
        let req = CheckinRequest {
            user_id: Some("bob".to_string()),
            ..CheckinRequest::default()
        };

        let err = svc.create_checkin(&auth("alice"), req).await.unwrap_err();
        assert!(matches!(err, DomainError::Forbidden(_)), "{:?}", err);
    }

    #[tokio::test]
    async fn test_blank_notes_are_not_stored() {
        let mut checkins = MockCheckinRepository::new();
        checkins
            .expect_insert()
            .withf(|new| new.notes.is_none())
            .returning(|new| Ok(new.clone().into_checkin(3)));
        let svc = service(checkins, MockFamilyMemberRepository::new());

        let mut req = request("alice", 37.0, -113.0);
        req.notes = Some("  ".to_string());
        svc.create_checkin(&auth("alice"), req).await.unwrap();
    }

    #[tokio::test]
    async fn test_store_failure_is_surfaced() {
        let mut checkins = MockCheckinRepository::new();
        checkins
            .expect_insert()
            .times(1)
            .returning(|_| Err(DomainError::DatabaseError("disk full".to_string())));
        let svc = service(checkins, MockFamilyMemberRepository::new());

        let err = svc
            .create_checkin(&auth("alice"), request("alice", 37.0, -113.0))
            .await
            .unwrap_err();
        assert!(matches!(err, DomainError::DatabaseError(_)));
    }

    #[tokio::test]
    async fn test_get_checkins_queries_callers_family_circle() {
        let t0 = Utc.with_ymd_and_hms(2026, 3, 1, 8, 0, 0).unwrap();
        let mut checkins = MockCheckinRepository::new();
        checkins
            .expect_latest_per_user()
            .withf(|id| id == "F1")
            .times(1)
            .returning(move |_| {
                Ok(vec![CheckinWithMember {
                    checkin: Checkin {
                        id: 9,
                        family_circle_id: "F1".to_string(),
                        user_id: "bob".to_string(),
                        timestamp: t0 + Duration::minutes(5),
                        latitude: 37.0,
                        longitude: -113.0,
                        resolved_place_name: None,
                        notes: Some("at the store".to_string()),
                    },
                    display_name: Some("Bob".to_string()),
                    photo_filename: Some("bob.png".to_string()),
                }])
            });
        let svc = service(checkins, MockFamilyMemberRepository::new());

        let views = svc.get_checkins(&auth("alice")).await.unwrap();
        assert_eq!(views.len(), 1);
        assert_eq!(views[0].photo_url.as_deref(), Some("/api/users/bob/photo"));
    }

    #[tokio::test]
    async fn test_get_checkins_empty_family_circle() {
        let mut checkins = MockCheckinRepository::new();
        checkins.expect_latest_per_user().returning(|_| Ok(vec![]));
        let svc = service(checkins, MockFamilyMemberRepository::new());

        assert!(svc.get_checkins(&auth("alice")).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_member_photo_requires_same_family_circle() {
        let mut members = MockFamilyMemberRepository::new();
        members
            .expect_find_in_family_circle()
            .withf(|fc, _| fc == "F1")
            .times(2)
            .returning(|_, user| {
                // Only bob belongs to F1; mallory lives in another family circle.
                Ok((user == "bob").then(|| FamilyMember {
                    user_id: "bob".to_string(),
                    family_circle_id: "F1".to_string(),
                    display_name: "Bob".to_string(),
                    photo_filename: Some("bob.png".to_string()),
                }))
            });
        let svc = service(MockCheckinRepository::new(), members);

        let caller = auth("alice");
        assert_eq!(svc.member_photo(&caller, "bob").await.unwrap(), "bob.png");
        assert!(matches!(
            svc.member_photo(&caller, "mallory").await,
            Err(DomainError::NotFound(_))
        ));
    }
}
