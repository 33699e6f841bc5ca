use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash, Default)]
#[serde(rename_all = "camelCase")]
pub enum TaskStatus {
    #[default]
    Pending,
    OnHold,
    InProgress,
    UnderReview,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::OnHold => "On Hold",
            TaskStatus::InProgress => "In Progress",
            TaskStatus::UnderReview => "Under Review",
            TaskStatus::Completed => "Completed",
        }
    }

    /// Wire name, also used as the column's droppable id.
    pub fn key(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::OnHold => "onHold",
            TaskStatus::InProgress => "inProgress",
            TaskStatus::UnderReview => "underReview",
            TaskStatus::Completed => "completed",
        }
    }

    pub fn from_key(key: &str) -> Option<TaskStatus> {
        Self::all().into_iter().find(|status| status.key() == key)
    }

    pub fn all() -> Vec<TaskStatus> {
        vec![
            TaskStatus::Pending,
            TaskStatus::OnHold,
            TaskStatus::InProgress,
            TaskStatus::UnderReview,
            TaskStatus::Completed,
        ]
    }
}

/// Snapshot of a task as the project endpoint returns it.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub status: TaskStatus,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    pub fn new(id: impl Into<String>, name: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: description.into(),
            status: TaskStatus::Pending,
            created_at: None,
            updated_at: None,
        }
    }
}
