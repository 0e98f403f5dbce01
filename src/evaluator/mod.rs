//! The field visibility and completion evaluator.
//!
//! Given the form schema and a task's live field tree, this module decides
//! which fields the current workflow step requires, which of them are
//! visible under their conditions, and how complete each one is.

pub mod lookup;
mod render;
mod selector;
mod visibility;

pub use render::{Completion, CompletionRenderer, ListItemTags};
pub use selector::{SelectedField, StepFieldSelector};
pub use visibility::VisibilityEvaluator;
