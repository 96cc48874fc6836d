// Dashboard service - Assembles a dashboard snapshot from the repository
use crate::application::dashboard::DashboardState;
use crate::application::view_repository::ViewRepository;
use std::sync::Arc;

#[derive(Clone)]
pub struct DashboardService {
    repository: Arc<dyn ViewRepository>,
}

impl DashboardService {
    pub fn new(repository: Arc<dyn ViewRepository>) -> Self {
        Self { repository }
    }

    /// Fetch views and, when a view is selected, its tiles. A view is selected
    /// by id or by its lowercased name (the form used in view list links).
    /// A failed fetch leaves the corresponding field empty so the dashboard
    /// shows it as still loading; the next request simply tries again.
    pub async fn load_state(&self, selected_view: Option<&str>) -> DashboardState {
        let views = match self.repository.list_views().await {
            Ok(views) => views,
            Err(e) => {
                tracing::warn!(error = %e, "Error fetching views");
                return DashboardState::default();
            }
        };

        let selected_view = selected_view.and_then(|key| {
            let view = views
                .iter()
                .find(|v| v.id == key || v.name.to_lowercase() == key)
                .cloned();
            if view.is_none() {
                tracing::warn!(view = key, "Selected view does not exist");
            }
            view
        });

        let selected_view_data = match &selected_view {
            Some(view) => match self.repository.get_view_data(&view.id).await {
                Ok(data) => {
                    tracing::debug!(
                        view_id = %view.id,
                        tiles = data.tiles.len(),
                        "Fetched view data"
                    );
                    Some(data)
                }
                Err(e) => {
                    tracing::warn!(view_id = %view.id, error = %e, "Error fetching view data");
                    None
                }
            },
            None => None,
        };

        DashboardState {
            views: Some(views),
            selected_view,
            selected_view_data,
        }
    }
}
