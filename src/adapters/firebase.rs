use crate::adapters::snapshot::decode_snapshot;
use crate::domain::model::Professional;
use crate::domain::ports::ProfessionalSource;
use crate::utils::error::{CatalogError, Result};
use async_trait::async_trait;
use reqwest::Client;

/// Reads a whole collection through the Realtime Database REST API.
#[derive(Debug, Clone)]
pub struct FirebaseSource {
    client: Client,
    database_url: String,
    collection: String,
    auth_token: Option<String>,
}

impl FirebaseSource {
    pub fn new(database_url: impl Into<String>, collection: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            database_url: database_url.into(),
            collection: collection.into(),
            auth_token: None,
        }
    }

    pub fn with_auth_token(mut self, token: Option<String>) -> Self {
        self.auth_token = token;
        self
    }

    pub fn collection_url(&self) -> String {
        format!(
            "{}/{}.json",
            self.database_url.trim_end_matches('/'),
            self.collection
        )
    }
}

#[async_trait]
impl ProfessionalSource for FirebaseSource {
    async fn fetch_all(&self) -> Result<Vec<Professional>> {
        let url = self.collection_url();
        tracing::debug!("Fetching snapshot from: {}", url);

        let mut request = self.client.get(&url);
        if let Some(token) = &self.auth_token {
            request = request.query(&[("auth", token)]);
        }
        let response = request.send().await?;

        let status = response.status();
        tracing::debug!("Snapshot response status: {}", status);

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            // Error bodies look like {"error": "Permission denied"}.
            let message = serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
                .unwrap_or(body);
            return Err(CatalogError::SourceError {
                status: status.as_u16(),
                message,
            });
        }

        let snapshot: serde_json::Value = response.json().await?;
        decode_snapshot(snapshot)
    }
}
