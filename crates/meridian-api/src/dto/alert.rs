use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct SetAlertRequest {
    #[serde(default)]
    pub activated: bool,
}
