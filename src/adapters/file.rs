use crate::adapters::snapshot::decode_snapshot;
use crate::domain::model::Professional;
use crate::domain::ports::ProfessionalSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use std::path::PathBuf;

/// A collection snapshot exported to disk, in the same shape the REST API returns.
#[derive(Debug, Clone)]
pub struct JsonFileSource {
    path: PathBuf,
}

impl JsonFileSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

#[async_trait]
impl ProfessionalSource for JsonFileSource {
    async fn fetch_all(&self) -> Result<Vec<Professional>> {
        tracing::debug!("Reading snapshot from: {}", self.path.display());
        let content = tokio::fs::read(&self.path).await?;
        let snapshot: serde_json::Value = serde_json::from_slice(&content)?;
        decode_snapshot(snapshot)
    }
}
