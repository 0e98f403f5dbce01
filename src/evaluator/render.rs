use super::selector::SelectedField;
use crate::form::{FormField, TaskField, UNCHECKED};
use serde::{Deserialize, Serialize};

/// How far a field has been completed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Completion {
    /// A value is present (and is not a cleared checkbox).
    Done,
    /// A checkbox that was explicitly cleared.
    ExplicitlyUnchecked,
    /// No value at all.
    Missing,
}

impl Completion {
    pub fn of(field: &TaskField) -> Self {
        match &field.value {
            Some(value) if value.is_checkbox_state(UNCHECKED) => Completion::ExplicitlyUnchecked,
            Some(_) => Completion::Done,
            None => Completion::Missing,
        }
    }

    pub fn glyph(&self) -> &'static str {
        match self {
            Completion::Done => "✅",
            Completion::ExplicitlyUnchecked => "✔️",
            Completion::Missing => "❌",
        }
    }
}

/// The begin/end markup wrapped around every rendered field.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ListItemTags {
    pub begin: String,
    pub end: String,
}

impl Default for ListItemTags {
    fn default() -> Self {
        Self {
            begin: "<li>".to_string(),
            end: "</li>".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct CompletionRenderer {
    tags: ListItemTags,
}

impl CompletionRenderer {
    pub fn new(tags: ListItemTags) -> Self {
        Self { tags }
    }

    /// Renders one field as `{begin}{glyph}{schema name}{end}`.
    pub fn render(&self, schema: &FormField, instance: &TaskField) -> String {
        format!(
            "{}{}{}{}",
            self.tags.begin,
            Completion::of(instance).glyph(),
            schema.name,
            self.tags.end
        )
    }

    pub fn render_all(&self, selected: &[SelectedField<'_>]) -> Vec<String> {
        selected
            .iter()
            .map(|field| self.render(field.schema, field.instance))
            .collect()
    }
}
