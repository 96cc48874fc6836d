// Status classifier - Maps a build status to its label and icon
use crate::domain::build::BuildStatus;
use crate::domain::visual::StatusClass;

pub fn classify(status: BuildStatus) -> StatusClass {
    let (label, icon_class) = match status {
        BuildStatus::Success => ("success", "icon-check-circle"),
        BuildStatus::Failure => ("failure", "icon-exclamation-circle"),
        BuildStatus::Error => ("error", "icon-bomb"),
        BuildStatus::Unknown => ("unknown", ""),
    };
    StatusClass { label, icon_class }
}

/// Display name shown next to the combined status icon
pub fn caption(status: BuildStatus) -> &'static str {
    match status {
        BuildStatus::Success => "Success",
        BuildStatus::Failure => "Failure",
        BuildStatus::Error => "Error",
        BuildStatus::Unknown => "Unknown",
    }
}
