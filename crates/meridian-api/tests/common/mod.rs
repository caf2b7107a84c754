//! In-memory store and router fixture shared by the API tests

#![allow(dead_code)]

use std::path::PathBuf;
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::{body::Body, http::Request, response::Response, Router};
use http_body_util::BodyExt;
use meridian_api::{build_router, cors_layer, state::SessionCookie, AppState};
use meridian_core::{
    repositories::{
        AlertRepository, CheckinRepository, FamilyMemberRepository, NamedPlaceRepository,
    },
    services::{AlertService, GeofenceResolver, LocationService},
    AlertState, Checkin, CheckinWithMember, DomainError, FamilyMember, NamedPlace, NewCheckin,
};
use meridian_security::SessionService;
use meridian_shared::config::CorsSettings;
use tempfile::TempDir;
use tower::ServiceExt;

pub const SESSION_COOKIE: &str = "meridian_session";
pub const ELEANOR_HOME: (f64, f64) = (37.0056, -113.503);

#[derive(Default)]
struct Tables {
    checkins: Vec<Checkin>,
    places: Vec<NamedPlace>,
    members: Vec<FamilyMember>,
    alerts: Vec<AlertState>,
}

/// Implements every repository port over plain vectors.
#[derive(Default, Clone)]
pub struct MemoryStore {
    tables: Arc<Mutex<Tables>>,
}

impl MemoryStore {
    /// Two family circles: `F1` (alice with a photo, bob without) and `F2`
    /// (carol), each with a named place at the same coordinates.
    pub fn seeded() -> Self {
        let store = Self::default();
        {
            let mut tables = store.tables.lock().unwrap();
            tables.places = vec![
                place("p1", "F1", "Eleanor Home", ELEANOR_HOME, 150.0),
                place("p2", "F2", "Carol Home", ELEANOR_HOME, 150.0),
            ];
            tables.members = vec![
                member("alice", "F1", "Alice", Some("alice.jpg")),
                member("bob", "F1", "Bob", None),
                member("carol", "F2", "Carol", Some("carol.jpg")),
            ];
        }
        store
    }

    pub fn checkin_count(&self) -> usize {
        self.tables.lock().unwrap().checkins.len()
    }
}

fn place(id: &str, fc: &str, name: &str, (lat, lon): (f64, f64), radius: f64) -> NamedPlace {
    NamedPlace {
        place_id: id.to_string(),
        family_circle_id: fc.to_string(),
        name: name.to_string(),
        latitude: Some(lat),
        longitude: Some(lon),
        radius_metres: radius,
    }
}

fn member(id: &str, fc: &str, name: &str, photo: Option<&str>) -> FamilyMember {
    FamilyMember {
        user_id: id.to_string(),
        family_circle_id: fc.to_string(),
        display_name: name.to_string(),
        photo_filename: photo.map(str::to_string),
    }
}

#[async_trait]
impl CheckinRepository for MemoryStore {
    async fn insert(&self, checkin: &NewCheckin) -> Result<Checkin, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        let stored = checkin.clone().into_checkin(tables.checkins.len() as i64 + 1);
        tables.checkins.push(stored.clone());
        Ok(stored)
    }

    async fn latest_per_user(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<CheckinWithMember>, DomainError> {
        let tables = self.tables.lock().unwrap();
        let mut latest: Vec<Checkin> = Vec::new();
        for checkin in tables
            .checkins
            .iter()
            .filter(|c| c.family_circle_id == family_circle_id)
        {
            match latest.iter_mut().find(|l| l.user_id == checkin.user_id) {
                Some(existing) => {
                    if (checkin.timestamp, checkin.id) > (existing.timestamp, existing.id) {
                        *existing = checkin.clone();
                    }
                }
                None => latest.push(checkin.clone()),
            }
        }
        latest.sort_by(|a, b| (b.timestamp, b.id).cmp(&(a.timestamp, a.id)));

        Ok(latest
            .into_iter()
            .map(|checkin| {
                let member = tables.members.iter().find(|m| m.user_id == checkin.user_id);
                CheckinWithMember {
                    display_name: member.map(|m| m.display_name.clone()),
                    photo_filename: member.and_then(|m| m.photo_filename.clone()),
                    checkin,
                }
            })
            .collect())
    }
}

#[async_trait]
impl NamedPlaceRepository for MemoryStore {
    async fn list_for_family_circle(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<NamedPlace>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .places
            .iter()
            .filter(|p| p.family_circle_id == family_circle_id)
            .cloned()
            .collect())
    }
}

#[async_trait]
impl FamilyMemberRepository for MemoryStore {
    async fn list_for_family_circle(
        &self,
        family_circle_id: &str,
    ) -> Result<Vec<FamilyMember>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .members
            .iter()
            .filter(|m| m.family_circle_id == family_circle_id)
            .cloned()
            .collect())
    }

    async fn find_in_family_circle(
        &self,
        family_circle_id: &str,
        user_id: &str,
    ) -> Result<Option<FamilyMember>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .members
            .iter()
            .find(|m| m.family_circle_id == family_circle_id && m.user_id == user_id)
            .cloned())
    }
}

#[async_trait]
impl AlertRepository for MemoryStore {
    async fn find(&self, family_circle_id: &str) -> Result<Option<AlertState>, DomainError> {
        let tables = self.tables.lock().unwrap();
        Ok(tables
            .alerts
            .iter()
            .find(|a| a.family_circle_id == family_circle_id)
            .cloned())
    }

    async fn upsert(&self, state: &AlertState) -> Result<AlertState, DomainError> {
        let mut tables = self.tables.lock().unwrap();
        tables
            .alerts
            .retain(|a| a.family_circle_id != state.family_circle_id);
        tables.alerts.push(state.clone());
        Ok(state.clone())
    }
}

/// Check-in store whose every call fails.
pub struct FailingCheckins;

#[async_trait]
impl CheckinRepository for FailingCheckins {
    async fn insert(&self, _checkin: &NewCheckin) -> Result<Checkin, DomainError> {
        Err(DomainError::DatabaseError("connection refused".to_string()))
    }

    async fn latest_per_user(
        &self,
        _family_circle_id: &str,
    ) -> Result<Vec<CheckinWithMember>, DomainError> {
        Err(DomainError::DatabaseError("connection refused".to_string()))
    }
}

pub struct TestApp {
    pub router: Router,
    pub store: MemoryStore,
    pub sessions: SessionService,
    _photos: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        let store = MemoryStore::seeded();
        Self::with_checkins(store.clone(), Arc::new(store))
    }

    pub fn with_checkins(store: MemoryStore, checkins: Arc<dyn CheckinRepository>) -> Self {
        let photos = tempfile::tempdir().unwrap();
        std::fs::write(photos.path().join("alice.jpg"), b"alice-jpeg-bytes").unwrap();
        std::fs::write(photos.path().join("carol.jpg"), b"carol-jpeg-bytes").unwrap();

        let places: Arc<dyn NamedPlaceRepository> = Arc::new(store.clone());
        let location = LocationService::new(
            checkins,
            places.clone(),
            Arc::new(store.clone()),
            GeofenceResolver::new(places),
        );
        let sessions = SessionService::new("test-secret".to_string(), 3600);

        let state = AppState {
            location: Arc::new(location),
            alerts: Arc::new(AlertService::new(Arc::new(store.clone()))),
            sessions: Arc::new(sessions.clone()),
            session_cookie: SessionCookie {
                name: SESSION_COOKIE.to_string(),
                secure: false,
            },
            photos_dir: Arc::new(PathBuf::from(photos.path())),
        };
        let cors = cors_layer(&CorsSettings::default()).unwrap();

        Self {
            router: build_router(state, cors),
            store,
            sessions,
            _photos: photos,
        }
    }

    pub async fn send(&self, request: Request<Body>) -> Response {
        self.router.clone().oneshot(request).await.unwrap()
    }
}

pub fn get_as(uri: &str, user: &str, fc: &str) -> Request<Body> {
    Request::builder()
        .uri(uri)
        .header("X-User-Id", user)
        .header("X-Family-Circle-Id", fc)
        .body(Body::empty())
        .unwrap()
}

pub fn post_json_as(uri: &str, user: &str, fc: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri(uri)
        .header("X-User-Id", user)
        .header("X-Family-Circle-Id", fc)
        .header("Content-Type", "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

pub async fn body_bytes(response: Response) -> Vec<u8> {
    response
        .into_body()
        .collect()
        .await
        .unwrap()
        .to_bytes()
        .to_vec()
}

pub async fn body_json(response: Response) -> serde_json::Value {
    serde_json::from_slice(&body_bytes(response).await).unwrap()
}
