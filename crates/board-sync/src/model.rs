//! Board Models
//!
//! Data structures matching the task API entities.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Opaque task identifier assigned by the API
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(String);

impl TaskId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// Board column a task belongs to
///
/// Values the API sends that are not one of the known statuses are kept
/// as `Other` so a single malformed row cannot break the whole list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum TaskStatus {
    NotStarted,
    InProgress,
    Done,
    Other(String),
}

impl TaskStatus {
    pub fn as_str(&self) -> &str {
        match self {
            TaskStatus::NotStarted => "not_started",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Done => "done",
            TaskStatus::Other(raw) => raw,
        }
    }

    /// Parse a status, accepting both `not_started` and `not-started`
    pub fn parse(raw: &str) -> Self {
        match raw {
            "not_started" | "not-started" => TaskStatus::NotStarted,
            "in_progress" | "in-progress" => TaskStatus::InProgress,
            "done" => TaskStatus::Done,
            other => TaskStatus::Other(other.to_string()),
        }
    }

    pub fn is_known(&self) -> bool {
        !matches!(self, TaskStatus::Other(_))
    }
}

impl From<String> for TaskStatus {
    fn from(raw: String) -> Self {
        TaskStatus::parse(&raw)
    }
}

impl From<TaskStatus> for String {
    fn from(status: TaskStatus) -> Self {
        status.as_str().to_string()
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    Medium,
    High,
}

impl Priority {
    pub fn label(&self) -> &'static str {
        match self {
            Priority::Low => "Low",
            Priority::Medium => "Medium",
            Priority::High => "High",
        }
    }
}

/// Task data structure (matches the API)
///
/// Only `status` and `order` are touched by the board; everything else is
/// carried through untouched.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Task {
    pub id: TaskId,
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub status: TaskStatus,
    #[serde(default)]
    pub order: f64,
    #[serde(default)]
    pub user_id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub workspace_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub assignee_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<Priority>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub comments: Vec<serde_json::Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl Task {
    /// Create a task with an empty payload
    pub fn new(id: impl Into<String>, title: impl Into<String>, status: TaskStatus, order: f64) -> Self {
        Self {
            id: TaskId::new(id),
            title: title.into(),
            description: String::new(),
            status,
            order,
            user_id: String::new(),
            workspace_id: None,
            assignee_id: None,
            priority: None,
            comments: Vec::new(),
            created_at: None,
            updated_at: None,
        }
    }

    pub fn comment_count(&self) -> usize {
        self.comments.len()
    }
}

/// Partial update sent to the task API
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct TaskPatch {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<TaskStatus>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order: Option<f64>,
}

/// Column definition: which status it shows and its header label
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    pub status: TaskStatus,
    pub label: String,
}

impl ColumnDef {
    pub fn new(status: TaskStatus, label: impl Into<String>) -> Self {
        Self { status, label: label.into() }
    }

    /// Drop-target id used by the drag source
    pub fn id(&self) -> &str {
        self.status.as_str()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_accepts_both_spellings() {
        assert_eq!(TaskStatus::parse("not_started"), TaskStatus::NotStarted);
        assert_eq!(TaskStatus::parse("not-started"), TaskStatus::NotStarted);
        assert_eq!(TaskStatus::parse("in-progress"), TaskStatus::InProgress);
        assert_eq!(TaskStatus::parse("archived"), TaskStatus::Other("archived".to_string()));
        assert!(!TaskStatus::parse("").is_known());
    }

    #[test]
    fn test_task_deserializes_api_shape() {
        let json = r#"{
            "id": "7c1e",
            "title": "Write docs",
            "description": "",
            "status": "in-progress",
            "order": 1500.5,
            "userId": "u1",
            "workspaceId": null,
            "priority": "high",
            "comments": [{"id": "c1"}],
            "createdAt": "2024-05-01T10:00:00Z",
            "updatedAt": "2024-05-01T10:00:00Z"
        }"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.id.as_str(), "7c1e");
        assert_eq!(task.status, TaskStatus::InProgress);
        assert_eq!(task.order, 1500.5);
        assert_eq!(task.priority, Some(Priority::High));
        assert_eq!(task.comment_count(), 1);
        assert!(task.workspace_id.is_none());
    }

    #[test]
    fn test_unknown_status_survives_deserialization() {
        let task: Task = serde_json::from_str(r#"{"id": "a", "status": "blocked"}"#).unwrap();
        assert_eq!(task.status, TaskStatus::Other("blocked".to_string()));
        assert_eq!(task.order, 0.0);
    }

    #[test]
    fn test_patch_serializes_only_set_fields() {
        let patch = TaskPatch { status: Some(TaskStatus::Done), order: None };
        assert_eq!(serde_json::to_string(&patch).unwrap(), r#"{"status":"done"}"#);

        let patch = TaskPatch { status: Some(TaskStatus::NotStarted), order: Some(-1000.0) };
        assert_eq!(
            serde_json::to_string(&patch).unwrap(),
            r#"{"status":"not_started","order":-1000.0}"#
        );
    }
}
