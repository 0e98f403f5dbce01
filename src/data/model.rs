use crate::error::PayloadError;
use crate::form::{FormSchema, TaskField};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::fs;

/// The body of a task-tracker webhook call.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookPayload {
    #[serde(default)]
    pub event: Option<String>,
    pub task: Task,
}

/// A snapshot of a task at the moment its webhook fired.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Task {
    pub id: i64,
    #[serde(default)]
    pub form_id: Option<i64>,
    #[serde(default)]
    pub current_step: Option<u32>,
    #[serde(default)]
    pub steps: Vec<TaskStep>,
    /// Approval lists, one per step, in step order.
    #[serde(default)]
    pub approvals: Vec<Vec<Approval>>,
    #[serde(default)]
    pub comments: Vec<TaskComment>,
    #[serde(default)]
    pub create_date: Option<String>,
    #[serde(default)]
    pub last_modified_date: Option<String>,
    #[serde(default)]
    pub fields: Vec<TaskField>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaskStep {
    pub step: u32,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Person {
    pub id: i64,
    #[serde(default)]
    pub first_name: String,
    #[serde(default)]
    pub last_name: String,
}

impl Person {
    pub fn new(id: i64, first_name: impl Into<String>, last_name: impl Into<String>) -> Self {
        Self {
            id,
            first_name: first_name.into(),
            last_name: last_name.into(),
        }
    }

    /// `first last`, or just the non-empty part when one is missing.
    pub fn display_name(&self) -> String {
        match (self.first_name.is_empty(), self.last_name.is_empty()) {
            (false, false) => format!("{} {}", self.first_name, self.last_name),
            (false, true) => self.first_name.clone(),
            _ => self.last_name.clone(),
        }
    }
}

/// A person's decision on one workflow step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApprovalChoice {
    Waiting,
    Approved,
    Rejected,
    Revoked,
    Acknowledged,
    #[serde(other)]
    Unknown,
}

impl fmt::Display for ApprovalChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            ApprovalChoice::Waiting => "waiting",
            ApprovalChoice::Approved => "approved",
            ApprovalChoice::Rejected => "rejected",
            ApprovalChoice::Revoked => "revoked",
            ApprovalChoice::Acknowledged => "acknowledged",
            ApprovalChoice::Unknown => "unknown",
        };
        write!(f, "{}", label)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Approval {
    pub person: Person,
    pub approval_choice: ApprovalChoice,
    #[serde(default)]
    pub step: Option<u32>,
}

impl Approval {
    pub fn new(person: Person, approval_choice: ApprovalChoice) -> Self {
        Self {
            person,
            approval_choice,
            step: None,
        }
    }
}

/// A task comment. Only the keys that describe approval activity are kept;
/// their presence, not their content, is what matters for most of them.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TaskComment {
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default)]
    pub approval_choice: Option<ApprovalChoice>,
    #[serde(default)]
    pub approvals_added: Option<serde_json::Value>,
    #[serde(default)]
    pub approvals_rerequested: Option<serde_json::Value>,
    #[serde(default)]
    pub approvals_removed: Option<serde_json::Value>,
    #[serde(default)]
    pub changed_step: Option<serde_json::Value>,
}

impl Task {
    /// Whether this snapshot was taken right as the task was created.
    pub fn was_just_created(&self) -> bool {
        self.create_date.is_some()
            && self.create_date == self.last_modified_date
            && self.steps.len() == 1
    }

    pub fn last_comment(&self) -> Option<&TaskComment> {
        self.comments.last()
    }

    /// Approval list of a 1-based step number; empty when out of range.
    pub fn approvals_for_step(&self, step: u32) -> &[Approval] {
        step.checked_sub(1)
            .and_then(|index| self.approvals.get(index as usize))
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}

impl WebhookPayload {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::JsonParseError(e.to_string()))
    }

    /// Load a webhook body from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, PayloadError> {
        let content = read(path)?;
        Self::from_json(&content)
    }
}

impl FormSchema {
    pub fn from_json(json: &str) -> Result<Self, PayloadError> {
        serde_json::from_str(json).map_err(|e| PayloadError::JsonParseError(e.to_string()))
    }

    /// Load a form schema from a JSON file.
    pub fn from_file(path: &str) -> Result<Self, PayloadError> {
        let content = read(path)?;
        Self::from_json(&content)
    }
}

fn read(path: &str) -> Result<String, PayloadError> {
    fs::read_to_string(path).map_err(|e| PayloadError::Io {
        path: path.to_string(),
        message: e.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn unknown_approval_choice_decodes() {
        let approval: Approval = serde_json::from_value(json!({
            "person": {"id": 1, "first_name": "Ann", "last_name": "Lee"},
            "approval_choice": "something_new"
        }))
        .unwrap();
        assert_eq!(approval.approval_choice, ApprovalChoice::Unknown);
    }

    #[test]
    fn approvals_for_out_of_range_step_are_empty() {
        let task = Task::default();
        assert!(task.approvals_for_step(0).is_empty());
        assert!(task.approvals_for_step(3).is_empty());
    }

    #[test]
    fn creation_requires_matching_dates_and_single_step() {
        let mut task = Task {
            create_date: Some("2024-01-01T10:00:00Z".into()),
            last_modified_date: Some("2024-01-01T10:00:00Z".into()),
            steps: vec![TaskStep {
                step: 1,
                name: "Draft".into(),
            }],
            ..Task::default()
        };
        assert!(task.was_just_created());

        task.last_modified_date = Some("2024-01-01T10:05:00Z".into());
        assert!(!task.was_just_created());
    }

    #[test]
    fn display_name_skips_missing_parts() {
        assert_eq!(Person::new(1, "Ann", "Lee").display_name(), "Ann Lee");
        assert_eq!(Person::new(1, "Ann", "").display_name(), "Ann");
    }
}
