use meridian_core::CheckinRequest;
use serde::Deserialize;

/// Body of `POST .../location/checkin`.
///
/// Fields are optional so that a missing value is reported by the service as
/// a validation error. Unknown fields, including a client supplied
/// `location_name`, are dropped.
#[derive(Debug, Default, Deserialize)]
pub struct CreateCheckinBody {
    #[serde(default)]
    pub user_id: Option<String>,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(default)]
    pub notes: Option<String>,
}

impl From<CreateCheckinBody> for CheckinRequest {
    fn from(body: CreateCheckinBody) -> Self {
        CheckinRequest {
            user_id: body.user_id,
            latitude: body.latitude,
            longitude: body.longitude,
            notes: body.notes,
        }
    }
}
