//! Route-derived context for the board and the task panel query strings.

use crate::error::ConfigError;

pub const PROJECT_ID_PARAM: &str = "projectId";

/// Which task panel a query string asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskPanel {
    View,
    Edit,
}

impl TaskPanel {
    pub fn query_param(&self) -> &'static str {
        match self {
            TaskPanel::View => "viewTask",
            TaskPanel::Edit => "editTask",
        }
    }
}

/// Project the board shows and the path task links are built on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ViewContext {
    pub project_id: String,
    pub current_path: String,
}

impl ViewContext {
    /// Builds the context from route parameters. A missing or empty
    /// `projectId` means the page was mounted on a route without it.
    pub fn from_route<F>(param: F, current_path: impl Into<String>) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let project_id = param(PROJECT_ID_PARAM)
            .filter(|id| !id.is_empty())
            .ok_or(ConfigError::MissingRouteParam(PROJECT_ID_PARAM))?;
        Ok(Self { project_id, current_path: current_path.into() })
    }

    /// `<current_path>?viewTask=<id>` or `<current_path>?editTask=<id>`.
    pub fn task_target(&self, panel: TaskPanel, task_id: &str) -> String {
        format!("{}?{}={}", self.current_path, panel.query_param(), task_id)
    }

    /// Target that closes any open task panel.
    pub fn board_target(&self) -> &str {
        &self.current_path
    }
}

/// Task panel requested by the query string, `viewTask` winning over `editTask`.
pub fn requested_panel<F>(query: F) -> Option<(TaskPanel, String)>
where
    F: Fn(&str) -> Option<String>,
{
    [TaskPanel::View, TaskPanel::Edit].into_iter().find_map(|panel| {
        query(panel.query_param())
            .filter(|id| !id.is_empty())
            .map(|id| (panel, id))
    })
}
