use crate::data::{ApprovalChoice, Task};

/// The approval activity carried by the comment that triggered a webhook.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StepApprovalEvent {
    /// The decision recorded by the comment, if it records one.
    pub approval_choice: Option<ApprovalChoice>,
    pub approvals_added: bool,
    pub approvals_rerequested: bool,
    pub approvals_removed: bool,
    pub changed_step: bool,
    /// The task was created by this very change.
    pub task_was_created: bool,
}

impl StepApprovalEvent {
    /// Reads the event flags from the task's last comment.
    pub fn from_task(task: &Task) -> Self {
        let task_was_created = task.was_just_created();
        let Some(comment) = task.last_comment() else {
            return Self {
                task_was_created,
                ..Self::default()
            };
        };
        Self {
            approval_choice: comment.approval_choice,
            approvals_added: comment.approvals_added.is_some(),
            approvals_rerequested: comment.approvals_rerequested.is_some(),
            approvals_removed: comment.approvals_removed.is_some(),
            changed_step: comment.changed_step.is_some(),
            task_was_created,
        }
    }

    /// Whether the event touches approvals at all. Events without any
    /// approval activity are never classified further.
    pub fn has_approval_activity(&self) -> bool {
        self.approval_choice.is_some()
            || self.approvals_added
            || self.approvals_rerequested
            || self.approvals_removed
            || self.changed_step
            || self.task_was_created
    }
}
