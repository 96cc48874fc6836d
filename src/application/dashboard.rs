// Dashboard dispatcher - Picks what to render from the current snapshot
use crate::application::view_node::{view_list_node, view_node, view_visual};
use crate::domain::node::Node;
use crate::domain::view::{View, ViewData};
use chrono::{DateTime, Utc};

/// Everything the dashboard needs for one render. Owned by whoever fetches
/// the data; the renderer only reads it.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DashboardState {
    pub views: Option<Vec<View>>,
    pub selected_view: Option<View>,
    pub selected_view_data: Option<ViewData>,
}

/// What the dashboard shows, borrowing whatever that mode needs from the state
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DashboardMode<'a> {
    LoadingViews,
    ViewList(&'a [View]),
    LoadingViewData,
    ViewDetail(&'a View, &'a ViewData),
}

impl<'a> DashboardMode<'a> {
    pub fn select(state: &'a DashboardState) -> Self {
        match (&state.views, &state.selected_view, &state.selected_view_data) {
            (None, _, _) => DashboardMode::LoadingViews,
            (Some(views), None, _) => DashboardMode::ViewList(views),
            (Some(_), Some(_), None) => DashboardMode::LoadingViewData,
            (Some(_), Some(view), Some(data)) => DashboardMode::ViewDetail(view, data),
        }
    }

    pub fn name(&self) -> &'static str {
        match self {
            DashboardMode::LoadingViews => "loading-views",
            DashboardMode::ViewList(_) => "view-list",
            DashboardMode::LoadingViewData => "loading-view-data",
            DashboardMode::ViewDetail(..) => "view-detail",
        }
    }
}

/// Render entry point. `now` is read once by the caller so a whole tree
/// shares the same reference instant.
pub fn render_dashboard(state: &DashboardState, now: DateTime<Utc>) -> Node {
    let mode = DashboardMode::select(state);
    tracing::debug!(mode = mode.name(), "Rendering dashboard");

    match mode {
        DashboardMode::LoadingViews => loading("Loading views"),
        DashboardMode::ViewList(views) => view_list_node(views),
        DashboardMode::LoadingViewData => loading("Loading view data"),
        DashboardMode::ViewDetail(view, data) => view_node(&view_visual(view, data, now)),
    }
}

fn loading(message: &str) -> Node {
    Node::new("div")
        .child(Node::new("i").class("icon-spin icon-cog"))
        .text(format!(" {message}"))
}
