//! Classification of task events into workflow transitions.
//!
//! A [`TransitionEvaluator`] takes the approval activity of one event, the
//! step it happened on, the form schema and the task's field tree, and
//! returns what should be announced: an acknowledgement of the finished
//! previous step and/or an instruction for the current one, including the
//! rendered list of fields the current step requires.

mod approvals;
mod classifier;
mod context;
mod event;

pub use approvals::ApprovalGroups;
pub use classifier::{TransitionClassifier, TransitionKind};
pub use context::StepContext;
pub use event::StepApprovalEvent;

use crate::data::{Person, Task};
use crate::evaluator::{CompletionRenderer, ListItemTags, StepFieldSelector};
use crate::form::{FormField, FormSchema, TaskField};
use tracing::{debug, info, warn};

/// Supplies the form schema on demand.
///
/// The schema is only requested once an event has been classified as worth
/// announcing, so implementations may fetch it lazily.
pub trait FormSource {
    fn form_fields(&self) -> Option<&[FormField]>;
}

impl FormSource for FormSchema {
    fn form_fields(&self) -> Option<&[FormField]> {
        Some(self.fields.as_slice())
    }
}

impl FormSource for [FormField] {
    fn form_fields(&self) -> Option<&[FormField]> {
        Some(self)
    }
}

impl FormSource for Vec<FormField> {
    fn form_fields(&self) -> Option<&[FormField]> {
        Some(self.as_slice())
    }
}

impl<T: FormSource> FormSource for Option<T> {
    fn form_fields(&self) -> Option<&[FormField]> {
        self.as_ref().and_then(|form| form.form_fields())
    }
}

/// Closing words for the step that was just completed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepAcknowledgement {
    pub step_name: String,
    /// Who approved the completed step.
    pub approved: Vec<Person>,
}

/// What the current step still needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepInstruction {
    pub step_name: String,
    pub waiting: Vec<Person>,
    pub approved: Vec<Person>,
    /// Rendered list items of the fields required at this step.
    pub fields: Vec<String>,
}

/// The result of evaluating one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TransitionOutcome {
    pub kind: TransitionKind,
    pub previous_step: Option<StepAcknowledgement>,
    pub current_step: Option<StepInstruction>,
}

impl TransitionOutcome {
    pub fn no_op() -> Self {
        Self {
            kind: TransitionKind::NoOp,
            previous_step: None,
            current_step: None,
        }
    }

    pub fn is_no_op(&self) -> bool {
        self.kind == TransitionKind::NoOp
    }

    pub fn waiting_names(&self) -> Vec<String> {
        self.current_step
            .as_ref()
            .map(|step| step.waiting.iter().map(Person::display_name).collect())
            .unwrap_or_default()
    }

    pub fn approved_names(&self) -> Vec<String> {
        self.current_step
            .as_ref()
            .map(|step| step.approved.iter().map(Person::display_name).collect())
            .unwrap_or_default()
    }
}

pub struct TransitionEvaluator {
    renderer: CompletionRenderer,
}

pub struct TransitionEvaluatorBuilder {
    tags: ListItemTags,
}

impl TransitionEvaluatorBuilder {
    pub fn new() -> Self {
        Self {
            tags: ListItemTags::default(),
        }
    }

    /// Sets the markup wrapped around each rendered field.
    pub fn with_list_tags(mut self, tags: ListItemTags) -> Self {
        self.tags = tags;
        self
    }

    pub fn build(self) -> TransitionEvaluator {
        TransitionEvaluator {
            renderer: CompletionRenderer::new(self.tags),
        }
    }
}

impl Default for TransitionEvaluatorBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl Default for TransitionEvaluator {
    fn default() -> Self {
        Self::builder().build()
    }
}

impl TransitionEvaluator {
    pub fn builder() -> TransitionEvaluatorBuilder {
        TransitionEvaluatorBuilder::new()
    }

    /// Evaluates one event against its step context.
    ///
    /// The form schema is requested only for events that produce a message.
    /// A missing schema turns the outcome into a no-op.
    pub fn evaluate<S>(
        &self,
        event: &StepApprovalEvent,
        context: &StepContext<'_>,
        form: &S,
        tree: &[TaskField],
    ) -> TransitionOutcome
    where
        S: FormSource + ?Sized,
    {
        let kind = TransitionClassifier::classify(event);
        if kind == TransitionKind::NoOp {
            debug!(?event, "event carries nothing to announce");
            return TransitionOutcome::no_op();
        }

        let Some(schema) = form.form_fields() else {
            warn!(%kind, "form schema unavailable, nothing will be announced");
            return TransitionOutcome::no_op();
        };

        let step = context.step_number();
        let selected = StepFieldSelector::new(tree).select_for_step(schema, step);
        let fields = self.renderer.render_all(&selected);

        let previous_step = match (kind, context.previous) {
            (TransitionKind::StepChanged, Some(previous)) => Some(StepAcknowledgement {
                step_name: previous.name.clone(),
                approved: ApprovalGroups::from_approvals(context.previous_approvals)
                    .approved()
                    .to_vec(),
            }),
            _ => None,
        };

        let current = ApprovalGroups::from_approvals(context.current_approvals);
        let current_step = StepInstruction {
            step_name: context.current.name.clone(),
            waiting: current.waiting().to_vec(),
            approved: current.approved().to_vec(),
            fields,
        };

        info!(
            %kind,
            step,
            fields = current_step.fields.len(),
            waiting = current_step.waiting.len(),
            "transition classified"
        );

        TransitionOutcome {
            kind,
            previous_step,
            current_step: Some(current_step),
        }
    }

    /// Derives event and step context from a task snapshot and evaluates them.
    pub fn evaluate_task<S>(&self, task: &Task, form: &S) -> TransitionOutcome
    where
        S: FormSource + ?Sized,
    {
        let event = StepApprovalEvent::from_task(task);
        let Some(context) = StepContext::from_task(task) else {
            if event.has_approval_activity() {
                warn!(
                    task_id = task.id,
                    current_step = ?task.current_step,
                    "current step not found in task"
                );
            }
            return TransitionOutcome::no_op();
        };
        self.evaluate(&event, &context, form, &task.fields)
    }
}
