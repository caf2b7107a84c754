use std::path::PathBuf;
use std::sync::Arc;

use meridian_core::services::{AlertService, LocationService};
use meridian_security::SessionService;

/// Session cookie attributes.
#[derive(Clone, Debug)]
pub struct SessionCookie {
    pub name: String,
    pub secure: bool,
}

#[derive(Clone)]
pub struct AppState {
    pub location: Arc<LocationService>,
    pub alerts: Arc<AlertService>,
    pub sessions: Arc<SessionService>,
    pub session_cookie: SessionCookie,
    pub photos_dir: Arc<PathBuf>,
}
