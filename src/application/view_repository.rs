// Repository trait for view and build data access
use crate::domain::view::{View, ViewData};
use async_trait::async_trait;

#[async_trait]
pub trait ViewRepository: Send + Sync {
    /// List view metadata (tile references only, no build data)
    async fn list_views(&self) -> anyhow::Result<Vec<View>>;

    /// Fetch tiles and their builds for a single view
    async fn get_view_data(&self, view_id: &str) -> anyhow::Result<ViewData>;
}
