use crate::data::{Approval, Task, TaskStep};

/// The steps and approval lists an event is evaluated against.
#[derive(Debug, Clone, Copy)]
pub struct StepContext<'a> {
    pub current: &'a TaskStep,
    /// The step before the current one; absent on the first step.
    pub previous: Option<&'a TaskStep>,
    pub current_approvals: &'a [Approval],
    pub previous_approvals: &'a [Approval],
}

impl<'a> StepContext<'a> {
    /// Locates the current step of the task.
    ///
    /// Returns `None` when the task has no current step number or no step
    /// record carries it. When several records do, the last one is used.
    pub fn from_task(task: &'a Task) -> Option<Self> {
        let number = task.current_step?;
        let (index, current) = task
            .steps
            .iter()
            .enumerate()
            .rfind(|(_, step)| step.step == number)?;

        let previous = if number > 1 {
            index.checked_sub(1).and_then(|i| task.steps.get(i))
        } else {
            None
        };
        let previous_approvals: &[Approval] = if number > 1 {
            task.approvals_for_step(number - 1)
        } else {
            &[]
        };

        Some(Self {
            current,
            previous,
            current_approvals: task.approvals_for_step(number),
            previous_approvals,
        })
    }

    pub fn step_number(&self) -> u32 {
        self.current.step
    }
}
