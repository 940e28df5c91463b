//! App Store Connect API response types — the `/v1/apps` subset we read.

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct AppsResponse {
    pub data: Vec<App>,
}

#[derive(Debug, Deserialize)]
pub struct App {
    pub id: String,
    pub attributes: Option<AppAttributes>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppAttributes {
    pub bundle_id: Option<String>,
    pub name: Option<String>,
}
