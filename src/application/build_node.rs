// Build node builder - Derives the visual state of a single build
use crate::application::status::classify;
use crate::application::time_format::{
    elapsed_between, estimated_finish, parse_timestamp, relative_to_now, RelativeOptions,
    TimeError,
};
use crate::domain::build::{Build, BuildStatus};
use crate::domain::node::Node;
use crate::domain::visual::{Annotation, BuildVisual, Theme};
use chrono::{DateTime, Utc};

pub fn build_visual(build: &Build, now: DateTime<Utc>) -> BuildVisual {
    let progress_percent = if build.is_finished() {
        100
    } else {
        build.percentage_complete.unwrap_or(0)
    };

    let theme = match build.status {
        BuildStatus::Success => Theme::Success,
        _ => Theme::Danger,
    };

    BuildVisual {
        id: build.id.clone(),
        number: build.number.clone(),
        web_url: build.web_url.clone(),
        status: classify(build.status),
        progress_percent,
        theme,
        branch_label: build.branch_label().to_string(),
        is_default_branch: build.is_default_branch,
        is_running: build.is_running(),
        annotation: annotate(build, now),
    }
}

/// Timing annotation for the build. Bad timestamps only cost this build its
/// annotation, never the surrounding tile.
fn annotate(build: &Build, now: DateTime<Utc>) -> Annotation {
    let annotation = if build.is_finished() {
        finish_annotation(build, now)
    } else if build.is_running() {
        remaining_annotation(build, now)
    } else {
        return Annotation::None;
    };

    match annotation {
        Ok(Some(annotation)) => annotation,
        Ok(None) => {
            tracing::warn!(
                build_id = %build.id,
                state = ?build.state,
                "Build is missing timing data, rendering without annotation"
            );
            Annotation::None
        }
        Err(e) => {
            tracing::warn!(build_id = %build.id, error = %e, "Skipping build annotation");
            Annotation::None
        }
    }
}

fn finish_annotation(
    build: &Build,
    now: DateTime<Utc>,
) -> Result<Option<Annotation>, TimeError> {
    let Some(finish_date) = build.finish_date.as_deref() else {
        return Ok(None);
    };
    let start = parse_timestamp(&build.start_date)?;
    let finish = parse_timestamp(finish_date)?;

    Ok(Some(Annotation::Finished {
        elapsed: elapsed_between(start, finish),
        age: relative_to_now(finish, now, RelativeOptions::default()),
    }))
}

fn remaining_annotation(
    build: &Build,
    now: DateTime<Utc>,
) -> Result<Option<Annotation>, TimeError> {
    let Some(estimated_total_seconds) = build.estimated_total_seconds else {
        return Ok(None);
    };
    let start = parse_timestamp(&build.start_date)?;
    let estimated_finish = estimated_finish(start, estimated_total_seconds)?;

    Ok(Some(Annotation::Remaining {
        estimated_finish,
        relative: relative_to_now(estimated_finish, now, RelativeOptions::default()),
    }))
}

pub fn build_node(visual: &BuildVisual) -> Node {
    let theme = visual.theme.as_str();

    let mut bar = Node::new("div")
        .class("progress-bar")
        .class(&format!("progress-bar-{theme}"))
        .attr("style", format!("width: {}%", visual.progress_percent))
        .child(branch_node(visual));
    if visual.is_running {
        bar = bar.class("progress-bar-striped active");
    }

    match &visual.annotation {
        Annotation::Finished { elapsed, age } => {
            bar = bar.child(
                Node::new("span")
                    .class("execution-timestamp")
                    .child(
                        Node::new("span")
                            .class(&format!("build-number label label-{theme}"))
                            .child(Node::new("i").class("icon-tag"))
                            .text(format!(" {}", visual.number)),
                    )
                    .child(
                        Node::new("span")
                            .class("build-execution-time")
                            .text(" ")
                            .child(Node::new("i").class("icon-clock"))
                            .text(format!(" {elapsed}")),
                    )
                    .child(
                        Node::new("span")
                            .class("build-age")
                            .text(format!(" ({age})")),
                    ),
            );
        }
        Annotation::Remaining {
            estimated_finish,
            relative,
        } => {
            bar = bar.child(
                Node::new("span")
                    .class("remaining")
                    .attr("title", estimated_finish.to_rfc3339())
                    .child(
                        Node::new("span")
                            .class(&format!("build-number label label-{theme}"))
                            .text(visual.number.clone()),
                    )
                    .text(format!(" will finish {relative}")),
            );
        }
        Annotation::None => {}
    }

    Node::new("div")
        .id(visual.id.clone())
        .class("tile-build")
        .class(visual.status.label)
        .child(
            Node::new("div").class("progress").child(
                Node::new("a")
                    .attr("href", visual.web_url.clone())
                    .attr("target", "_blank")
                    .child(bar),
            ),
        )
}

fn branch_node(visual: &BuildVisual) -> Node {
    let branch = Node::new("span").class("branch");
    if visual.is_default_branch {
        branch
            .child(Node::new("i").class("icon-star"))
            .text(format!(" {}", visual.branch_label))
    } else {
        branch.text(visual.branch_label.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::build::BuildState;
    use chrono::{Duration, TimeZone};

    fn t0() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2017, 3, 1, 10, 0, 0).unwrap()
    }

    fn sample_build(state: BuildState, status: BuildStatus) -> Build {
        Build {
            id: "bt1_42".to_string(),
            number: "42".to_string(),
            state,
            status,
            branch_name: Some("feature/login".to_string()),
            is_default_branch: false,
            web_url: "http://ci/viewLog.html?buildId=42".to_string(),
            start_date: "2017-03-01T10:00:00Z".to_string(),
            finish_date: None,
            estimated_total_seconds: None,
            percentage_complete: None,
        }
    }

    #[test]
    fn test_finished_success_build() {
        let mut build = sample_build(BuildState::Finished, BuildStatus::Success);
        build.finish_date = Some("2017-03-01T10:05:00Z".to_string());
        build.percentage_complete = Some(13);
        let now = t0() + Duration::hours(3);

        let visual = build_visual(&build, now);

        assert_eq!(visual.progress_percent, 100);
        assert_eq!(visual.theme, Theme::Success);
        assert_eq!(visual.status.label, "success");
        assert!(!visual.is_running);
        assert_eq!(
            visual.annotation,
            Annotation::Finished {
                elapsed: "5 minutes".to_string(),
                age: "about 3 hours ago".to_string(),
            }
        );
    }

    #[test]
    fn test_running_failure_build() {
        let mut build = sample_build(BuildState::Running, BuildStatus::Failure);
        build.percentage_complete = Some(42);
        build.estimated_total_seconds = Some(600);
        let now = t0() + Duration::minutes(4);

        let visual = build_visual(&build, now);

        assert_eq!(visual.progress_percent, 42);
        assert_eq!(visual.theme, Theme::Danger);
        assert!(visual.is_running);
        match visual.annotation {
            Annotation::Remaining {
                estimated_finish,
                relative,
            } => {
                assert_eq!(estimated_finish, t0() + Duration::seconds(600));
                assert_eq!(relative, "in 6 minutes");
            }
            other => panic!("expected remaining annotation, got {other:?}"),
        }
    }

    #[test]
    fn test_queued_build_has_no_annotation() {
        let build = sample_build(BuildState::Queued, BuildStatus::Error);
        let visual = build_visual(&build, t0());
        assert_eq!(visual.progress_percent, 0);
        assert_eq!(visual.theme, Theme::Danger);
        assert_eq!(visual.annotation, Annotation::None);
    }

    #[test]
    fn test_malformed_timestamp_drops_only_annotation() {
        let mut build = sample_build(BuildState::Finished, BuildStatus::Success);
        build.start_date = "not a date".to_string();
        build.finish_date = Some("2017-03-01T10:05:00Z".to_string());

        let visual = build_visual(&build, t0());
        assert_eq!(visual.annotation, Annotation::None);
        assert_eq!(visual.progress_percent, 100);
        assert_eq!(visual.branch_label, "feature/login");
    }

    #[test]
    fn test_out_of_range_estimate_drops_only_annotation() {
        let mut build = sample_build(BuildState::Running, BuildStatus::Failure);
        build.percentage_complete = Some(42);
        build.estimated_total_seconds = Some(20_000_000_000_000);

        let visual = build_visual(&build, t0());
        assert_eq!(visual.annotation, Annotation::None);
        assert_eq!(visual.progress_percent, 42);
        assert!(build_node(&visual).find_by_class("remaining").is_none());

        build.estimated_total_seconds = Some(i64::MAX);
        assert_eq!(build_visual(&build, t0()).annotation, Annotation::None);
    }

    #[test]
    fn test_missing_timing_data_drops_annotation() {
        let finished = sample_build(BuildState::Finished, BuildStatus::Success);
        assert_eq!(build_visual(&finished, t0()).annotation, Annotation::None);

        let running = sample_build(BuildState::Running, BuildStatus::Success);
        assert_eq!(build_visual(&running, t0()).annotation, Annotation::None);
    }

    #[test]
    fn test_branch_label_uses_number_when_absent() {
        let mut build = sample_build(BuildState::Queued, BuildStatus::Success);
        build.branch_name = None;
        assert_eq!(build_visual(&build, t0()).branch_label, "42");

        build.branch_name = Some(String::new());
        assert_eq!(build_visual(&build, t0()).branch_label, "42");
    }

    #[test]
    fn test_build_node_finished_markup() {
        let mut build = sample_build(BuildState::Finished, BuildStatus::Failure);
        build.finish_date = Some("2017-03-01T10:05:00Z".to_string());
        build.is_default_branch = true;
        let node = build_node(&build_visual(&build, t0() + Duration::minutes(10)));

        assert_eq!(node.id.as_deref(), Some("bt1_42"));
        assert!(node.has_class("tile-build"));
        assert!(node.has_class("failure"));

        let link = node.find_by_class("progress").and_then(|p| p.elements().next()).unwrap();
        assert_eq!(link.attribute("href"), Some("http://ci/viewLog.html?buildId=42"));
        assert_eq!(link.attribute("target"), Some("_blank"));

        let bar = node.find_by_class("progress-bar").unwrap();
        assert!(bar.has_class("progress-bar-danger"));
        assert!(!bar.has_class("active"));
        assert_eq!(bar.attribute("style"), Some("width: 100%"));

        let branch = node.find_by_class("branch").unwrap();
        assert!(branch.find_by_class("icon-star").is_some());
        assert_eq!(branch.text_content(), " feature/login");

        assert!(node.find_by_class("label-danger").is_some());
        assert_eq!(
            node.find_by_class("build-execution-time").unwrap().text_content(),
            "  5 minutes"
        );
        assert_eq!(
            node.find_by_class("build-age").unwrap().text_content(),
            " (5 minutes ago)"
        );
    }

    #[test]
    fn test_build_node_running_markup() {
        let mut build = sample_build(BuildState::Running, BuildStatus::Success);
        build.percentage_complete = Some(42);
        build.estimated_total_seconds = Some(600);
        let node = build_node(&build_visual(&build, t0()));

        let bar = node.find_by_class("progress-bar").unwrap();
        assert!(bar.has_class("progress-bar-success"));
        assert!(bar.has_class("progress-bar-striped"));
        assert!(bar.has_class("active"));
        assert_eq!(bar.attribute("style"), Some("width: 42%"));
        assert!(node.find_by_class("icon-star").is_none());
        let remaining = node.find_by_class("remaining").unwrap();
        assert_eq!(remaining.text_content(), "42 will finish in 10 minutes");
        assert_eq!(remaining.attribute("title"), Some("2017-03-01T10:10:00+00:00"));
    }
}
