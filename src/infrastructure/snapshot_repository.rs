// Snapshot repository - Serves views from a JSON file on disk
use crate::application::view_repository::ViewRepository;
use crate::domain::view::{View, ViewData};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::PathBuf;

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Snapshot {
    views: Vec<View>,
    #[serde(default)]
    view_data: HashMap<String, ViewData>,
}

/// The file is re-read on every call so edits show up on the next render.
#[derive(Debug, Clone)]
pub struct SnapshotRepository {
    path: PathBuf,
}

impl SnapshotRepository {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    async fn read(&self) -> Result<Snapshot> {
        let raw = tokio::fs::read_to_string(&self.path)
            .await
            .with_context(|| format!("Failed to read snapshot {}", self.path.display()))?;
        serde_json::from_str(&raw)
            .with_context(|| format!("Failed to parse snapshot {}", self.path.display()))
    }
}

#[async_trait]
impl ViewRepository for SnapshotRepository {
    async fn list_views(&self) -> Result<Vec<View>> {
        Ok(self.read().await?.views)
    }

    async fn get_view_data(&self, view_id: &str) -> Result<ViewData> {
        self.read()
            .await?
            .view_data
            .remove(view_id)
            .with_context(|| format!("No data for view {view_id} in snapshot"))
    }
}
