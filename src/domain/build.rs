// Build domain model
use serde::Deserialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub enum BuildStatus {
    Success,
    Failure,
    Error,
    /// Anything the CI server reports that we do not recognise
    #[serde(other)]
    Unknown,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildState {
    Queued,
    Running,
    Finished,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Build {
    pub id: String,
    pub number: String,
    pub state: BuildState,
    pub status: BuildStatus,
    #[serde(default)]
    pub branch_name: Option<String>,
    #[serde(default)]
    pub is_default_branch: bool,
    pub web_url: String,
    pub start_date: String,
    /// Only present once the build has finished
    #[serde(default)]
    pub finish_date: Option<String>,
    /// Only present while the build is running
    #[serde(default)]
    pub estimated_total_seconds: Option<i64>,
    #[serde(default)]
    pub percentage_complete: Option<u8>,
}

impl Build {
    pub fn is_finished(&self) -> bool {
        self.state == BuildState::Finished
    }

    pub fn is_running(&self) -> bool {
        self.state == BuildState::Running
    }

    /// Branch name to display, falling back to the build number when the
    /// server did not report a branch.
    pub fn branch_label(&self) -> &str {
        match self.branch_name.as_deref() {
            Some(name) if !name.is_empty() => name,
            _ => &self.number,
        }
    }
}
