//! HTTP client for the App Store Connect API.

use anyhow::{bail, Context, Result};
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE};
use tracing::debug;

use crate::auth::{self, ClaimProfile};
use crate::types::AppsResponse;

const BASE: &str = "https://api.appstoreconnect.apple.com";

pub struct AscClient {
    http: reqwest::Client,
    key_id: String,
    profile: ClaimProfile,
    private_key: String,
}

impl AscClient {
    pub fn new(key_id: String, profile: ClaimProfile, private_key: String) -> Result<Self> {
        let http = reqwest::Client::builder()
            .user_agent("asc-connect/0.1.0")
            .build()?;
        Ok(Self {
            http,
            key_id,
            profile,
            private_key,
        })
    }

    /// Tokens are short-lived; mint a fresh one per request instead of
    /// caching.
    fn token(&self) -> Result<String> {
        auth::generate_token(&self.key_id, &self.profile, &self.private_key)
    }

    async fn get_json<T: serde::de::DeserializeOwned>(&self, url: &str) -> Result<T> {
        let token = self.token()?;
        debug!(url, "GET");
        let resp = self
            .http
            .get(url)
            .header(AUTHORIZATION, format!("Bearer {token}"))
            .header(CONTENT_TYPE, "application/json")
            .send()
            .await
            .context("request failed")?;

        let status = resp.status();
        if !status.is_success() {
            let body = resp.text().await.unwrap_or_default();
            bail!("API {status}: {body}");
        }
        resp.json().await.context("parse response")
    }

    /// List the apps visible to this key. A 2xx here proves the
    /// credentials produce a signature Apple accepts.
    pub async fn list_apps(&self) -> Result<AppsResponse> {
        self.get_json(&format!("{BASE}/v1/apps")).await
    }
}
