// HTTP request handlers
use crate::application::dashboard::{render_dashboard, DashboardState};
use crate::infrastructure::html::render_page;
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, State},
    response::Html,
};
use chrono::Utc;
use std::sync::Arc;

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Pick a view to show
pub async fn view_list(State(state): State<Arc<AppState>>) -> Html<String> {
    let snapshot = state.dashboard_service.load_state(None).await;
    render_html(&snapshot)
}

/// Tiles and builds of a single view, selected by id or lowercased name
pub async fn view_detail(
    Path(view): Path<String>,
    State(state): State<Arc<AppState>>,
) -> Html<String> {
    let snapshot = state.dashboard_service.load_state(Some(&view)).await;
    render_html(&snapshot)
}

fn render_html(snapshot: &DashboardState) -> Html<String> {
    let title = snapshot
        .selected_view
        .as_ref()
        .map(|view| view.name.as_str())
        .unwrap_or("Dashboard");
    let node = render_dashboard(snapshot, Utc::now());
    Html(render_page(title, &node))
}
