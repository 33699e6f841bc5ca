use serde::{Deserialize, Serialize};

use super::Task;

/// Project detail as served by `get_project`, tasks included.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct ProjectDetail {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub project_name: String,
    #[serde(default)]
    pub client_name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub manager: Option<String>,
    #[serde(default)]
    pub tasks: Vec<Task>,
}

impl ProjectDetail {
    pub fn find_task(&self, task_id: &str) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == task_id)
    }

    /// Only the project's manager may edit or delete its tasks.
    pub fn can_edit(&self, user: &User) -> bool {
        self.manager.as_deref() == Some(user.id.as_str())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct User {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub email: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn project(manager: Option<&str>) -> ProjectDetail {
        ProjectDetail {
            id: "p1".into(),
            project_name: "Website".into(),
            client_name: "Acme".into(),
            description: String::new(),
            manager: manager.map(str::to_string),
            tasks: vec![Task::new("t1", "Landing page", "Hero section")],
        }
    }

    fn user(id: &str) -> User {
        User { id: id.into(), name: "Ana".into(), email: "ana@example.com".into() }
    }

    #[test]
    fn test_manager_can_edit() {
        assert!(project(Some("u1")).can_edit(&user("u1")));
        assert!(!project(Some("u1")).can_edit(&user("u2")));
        assert!(!project(None).can_edit(&user("u1")));
    }

    #[test]
    fn test_find_task() {
        let p = project(None);
        assert_eq!(p.find_task("t1").map(|t| t.name.as_str()), Some("Landing page"));
        assert!(p.find_task("missing").is_none());
    }

    #[test]
    fn test_decodes_camel_case_payload() {
        let json = r#"{"_id":"p9","projectName":"CRM","clientName":"Initech","manager":"u7","tasks":[{"_id":"t3","name":"Login"}]}"#;
        let p: ProjectDetail = serde_json::from_str(json).unwrap();
        assert_eq!(p.project_name, "CRM");
        assert_eq!(p.manager.as_deref(), Some("u7"));
        assert_eq!(p.tasks.len(), 1);
    }
}
