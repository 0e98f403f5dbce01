use super::lookup;
use super::visibility::VisibilityEvaluator;
use crate::form::{FieldNode, FormField, TaskField};
use tracing::debug;

/// A schema field required at the requested step, paired with the live
/// instance field whose value is rendered for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SelectedField<'a> {
    pub schema: &'a FormField,
    pub instance: &'a TaskField,
}

/// Picks the fields that are tagged for a workflow step and currently visible.
pub struct StepFieldSelector<'a> {
    tree: &'a [TaskField],
    visibility: VisibilityEvaluator<'a>,
}

impl<'a> StepFieldSelector<'a> {
    pub fn new(tree: &'a [TaskField]) -> Self {
        Self {
            tree,
            visibility: VisibilityEvaluator::new(tree),
        }
    }

    /// Returns the selected fields in schema declaration order.
    ///
    /// Top-level schema fields and the members of schema groups are both
    /// considered. Duplicate schema entries produce duplicate rows.
    pub fn select_for_step(&self, schema: &'a [FormField], step: u32) -> Vec<SelectedField<'a>> {
        let mut selected = Vec::new();
        for field in schema {
            self.consider(field, step, &mut selected);
            if let Some(members) = field.members() {
                for member in members {
                    self.consider(member, step, &mut selected);
                }
            }
        }
        selected
    }

    fn consider(&self, field: &'a FormField, step: u32, out: &mut Vec<SelectedField<'a>>) {
        if !field.is_required_at(step) {
            return;
        }

        // Members of a hidden group are out of play along with the group.
        let found = lookup::find_where(field.id, self.tree, |group| {
            self.visibility.is_visible(group)
        });
        let Some(instance) = found else {
            debug!(field_id = field.id, step, "step field has no instance, skipped");
            return;
        };
        if !self.visibility.is_visible(instance) {
            debug!(field_id = field.id, step, "step field hidden by its condition");
            return;
        }

        out.extend(
            lookup::resolve_live(field.id, self.tree)
                .into_iter()
                .map(|instance| SelectedField {
                    schema: field,
                    instance,
                }),
        );
    }
}
