//! Emergency alert flag, one per family circle

use std::sync::Arc;
use tracing::info;

use crate::auth::AuthContext;
use crate::domain::AlertState;
use crate::error::DomainError;
use crate::repositories::AlertRepository;

pub struct AlertService {
    alerts: Arc<dyn AlertRepository>,
}

impl AlertService {
    pub fn new(alerts: Arc<dyn AlertRepository>) -> Self {
        Self { alerts }
    }

    pub async fn status(&self, auth: &AuthContext) -> Result<AlertState, DomainError> {
        Ok(self
            .alerts
            .find(&auth.family_circle_id)
            .await?
            .unwrap_or_else(|| AlertState::inactive(auth.family_circle_id.clone())))
    }

    pub async fn set(&self, auth: &AuthContext, activated: bool) -> Result<AlertState, DomainError> {
        let state = AlertState {
            family_circle_id: auth.family_circle_id.clone(),
            activated,
            updated_at: Some(meridian_shared::now()),
            updated_by: Some(auth.user_id.clone()),
        };
        let stored = self.alerts.upsert(&state).await?;

        info!(
            "Alert for family circle {} set to {} by {}",
            stored.family_circle_id, stored.activated, auth.user_id
        );
        Ok(stored)
    }
}
