use super::event::StepApprovalEvent;
use crate::data::ApprovalChoice;
use std::fmt;

/// The kind of workflow transition an event represents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TransitionKind {
    /// The task moved to another step.
    StepChanged,
    /// The task was just created and sits on its first step.
    TaskCreated,
    /// Someone approved, but the step still waits for others.
    StepPartiallyApproved,
    /// Someone took back their approval.
    ApprovalRevoked,
    /// Nothing worth announcing.
    NoOp,
}

impl fmt::Display for TransitionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TransitionKind::StepChanged => "step_changed",
            TransitionKind::TaskCreated => "task_created",
            TransitionKind::StepPartiallyApproved => "step_partially_approved",
            TransitionKind::ApprovalRevoked => "approval_revoked",
            TransitionKind::NoOp => "no_op",
        };
        write!(f, "{}", label)
    }
}

pub struct TransitionClassifier;

impl TransitionClassifier {
    /// Assigns the event to exactly one kind; the first matching rule wins.
    ///
    /// Added, re-requested and removed approvals only let an event past the
    /// activity check; on their own they never produce a message.
    pub fn classify(event: &StepApprovalEvent) -> TransitionKind {
        if !event.has_approval_activity() {
            return TransitionKind::NoOp;
        }
        if event.changed_step {
            return TransitionKind::StepChanged;
        }
        if event.task_was_created {
            return TransitionKind::TaskCreated;
        }
        match event.approval_choice {
            Some(ApprovalChoice::Approved) => TransitionKind::StepPartiallyApproved,
            Some(ApprovalChoice::Revoked) => TransitionKind::ApprovalRevoked,
            _ => TransitionKind::NoOp,
        }
    }
}
