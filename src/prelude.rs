//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and traits from the tsuchi crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use tsuchi::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let payload = WebhookPayload::from_file("path/to/payload.json")?;
//! let form = FormSchema::from_file("path/to/form.json")?;
//!
//! let outcome = TransitionEvaluator::default().evaluate_task(&payload.task, &form);
//! println!("Transition: {}", outcome.kind);
//! # Ok(())
//! # }
//! ```

// Evaluation
pub use crate::evaluator::{
    Completion, CompletionRenderer, ListItemTags, SelectedField, StepFieldSelector,
    VisibilityEvaluator,
};
pub use crate::transition::{
    FormSource, StepApprovalEvent, StepContext, TransitionClassifier, TransitionEvaluator,
    TransitionKind, TransitionOutcome,
};

// Data structures
pub use crate::data::{Approval, ApprovalChoice, Person, Task, TaskStep, WebhookPayload};
pub use crate::form::{
    FieldType, FieldValue, FormField, FormSchema, TaskField, VisibilityCondition,
};

// Configuration and messages
pub use crate::config::NotifierConfig;
pub use crate::message::{ComposedMessages, DefaultComposer, MessageComposer, WebhookReply};

// Error types
pub use crate::error::{ConfigError, PayloadError};

// Trace formatting
pub use crate::trace::{TraceFormatter, VisibilityTrace};

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
