use serde_json::json;

use crate::core::card_actions::TaskApi;
use crate::error::ApiError;
use crate::models::{ProjectDetail, TaskStatus, User};
use crate::tauri_bridge::invoke_cmd;

/// Task store reached through the Tauri command bridge.
#[derive(Debug, Clone, Copy, Default)]
pub struct TauriTaskApi;

impl TaskApi for TauriTaskApi {
    async fn get_project(&self, project_id: &str) -> Result<ProjectDetail, ApiError> {
        invoke_cmd("get_project", &json!({ "projectId": project_id })).await
    }

    async fn get_user(&self) -> Result<User, ApiError> {
        invoke_cmd("get_user", &json!({})).await
    }

    async fn delete_task(&self, project_id: &str, task_id: &str) -> Result<String, ApiError> {
        invoke_cmd(
            "delete_task",
            &json!({ "projectId": project_id, "taskId": task_id }),
        )
        .await
    }

    async fn update_task_status(
        &self,
        project_id: &str,
        task_id: &str,
        status: TaskStatus,
    ) -> Result<String, ApiError> {
        invoke_cmd(
            "update_task_status",
            &json!({ "projectId": project_id, "taskId": task_id, "status": status }),
        )
        .await
    }

    async fn update_task(
        &self,
        project_id: &str,
        task_id: &str,
        name: &str,
        description: &str,
    ) -> Result<String, ApiError> {
        invoke_cmd(
            "update_task",
            &json!({
                "projectId": project_id,
                "taskId": task_id,
                "name": name,
                "description": description
            }),
        )
        .await
    }
}
