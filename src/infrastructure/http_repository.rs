// HTTP repository implementation against the dashboard JSON API
use crate::application::view_repository::ViewRepository;
use crate::domain::view::{View, ViewData};
use anyhow::{Context, Result};
use async_trait::async_trait;
use serde::de::DeserializeOwned;

#[derive(Debug, Clone)]
pub struct HttpViewRepository {
    base_url: String,
    client: reqwest::Client,
}

impl HttpViewRepository {
    pub fn new(base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client: reqwest::Client::new(),
        }
    }

    fn views_url(&self) -> String {
        format!("{}/api/views", self.base_url)
    }

    fn view_data_url(&self, view_id: &str) -> String {
        format!("{}/api/viewdata/{}", self.base_url, urlencoding::encode(view_id))
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .with_context(|| format!("Failed to send request to {url}"))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            anyhow::bail!("Request to {} failed with status {}: {}", url, status, body);
        }

        response
            .json::<T>()
            .await
            .with_context(|| format!("Failed to parse response from {url}"))
    }
}

#[async_trait]
impl ViewRepository for HttpViewRepository {
    async fn list_views(&self) -> Result<Vec<View>> {
        self.get_json(&self.views_url()).await
    }

    async fn get_view_data(&self, view_id: &str) -> Result<ViewData> {
        self.get_json(&self.view_data_url(view_id)).await
    }
}
