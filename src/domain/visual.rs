// Visual descriptors derived from the build/view snapshot on every render
use chrono::{DateTime, Utc};

/// Canonical status label and icon selector
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusClass {
    pub label: &'static str,
    pub icon_class: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Success,
    Danger,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Success => "success",
            Theme::Danger => "danger",
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum Annotation {
    Finished {
        elapsed: String,
        age: String,
    },
    Remaining {
        estimated_finish: DateTime<Utc>,
        relative: String,
    },
    None,
}

#[derive(Debug, Clone, PartialEq)]
pub struct BuildVisual {
    pub id: String,
    pub number: String,
    pub web_url: String,
    pub status: StatusClass,
    pub progress_percent: u8,
    pub theme: Theme,
    pub branch_label: String,
    pub is_default_branch: bool,
    pub is_running: bool,
    pub annotation: Annotation,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TileVisual {
    pub id: String,
    pub label: String,
    pub status: StatusClass,
    pub combined_status_caption: &'static str,
    pub size_classes: [String; 2],
    pub show_combined_status: bool,
    pub show_build_list: bool,
    pub builds: Vec<BuildVisual>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewVisual {
    pub id: String,
    pub name: String,
    pub tiles: Vec<TileVisual>,
}
