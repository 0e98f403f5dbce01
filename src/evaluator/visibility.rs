use super::lookup;
use crate::form::{
    CHECKED, FieldType, FieldValue, LeafKind, TaskField, UNCHECKED, VisibilityCondition,
};
use crate::trace::{ClauseTrace, LeafTrace, LeafVerdict, VisibilityTrace};

/// Decides whether task fields are currently visible given the values of
/// the fields their conditions reference.
///
/// Never fails: unreadable conditions hide the field, unresolvable
/// predicates are unsatisfied.
#[derive(Debug, Clone, Copy)]
pub struct VisibilityEvaluator<'a> {
    tree: &'a [TaskField],
}

impl<'a> VisibilityEvaluator<'a> {
    /// Creates an evaluator resolving referenced fields against `tree`.
    pub fn new(tree: &'a [TaskField]) -> Self {
        Self { tree }
    }

    pub fn is_visible(&self, field: &TaskField) -> bool {
        self.explain(field).is_visible()
    }

    /// Evaluates the field's condition and records how each clause resolved.
    pub fn explain(&self, field: &TaskField) -> VisibilityTrace {
        let Some(condition) = &field.visibility_condition else {
            return VisibilityTrace::Unconditional;
        };
        if condition.is_placeholder() {
            return VisibilityTrace::Unconditional;
        }
        if !condition.is_well_formed() {
            return VisibilityTrace::Malformed;
        }
        let Some(clauses) = &condition.children else {
            return VisibilityTrace::Malformed;
        };

        let mut outcome = true;
        let clause_traces = clauses
            .iter()
            .map(|clause| {
                if !outcome {
                    return ClauseTrace::NotEvaluated;
                }
                let trace = self.evaluate_clause(clause);
                outcome = trace.is_satisfied();
                trace
            })
            .collect();

        VisibilityTrace::Evaluated {
            clauses: clause_traces,
            outcome,
        }
    }

    fn evaluate_clause(&self, clause: &VisibilityCondition) -> ClauseTrace {
        let Some(options) = &clause.children else {
            return ClauseTrace::Single(self.evaluate_leaf(clause));
        };

        let mut leaves = Vec::new();
        let mut outcome = false;
        for option in options {
            let leaf = self.evaluate_leaf(option);
            outcome = leaf.verdict.is_satisfied();
            leaves.push(leaf);
            if outcome {
                break;
            }
        }
        ClauseTrace::AnyOf { leaves, outcome }
    }

    fn evaluate_leaf(&self, leaf: &VisibilityCondition) -> LeafTrace {
        let mut trace = LeafTrace {
            field_id: leaf.field_id,
            kind: leaf.leaf_kind(),
            operand: leaf.operand(),
            verdict: LeafVerdict::Incomplete,
        };
        let (Some(kind), Some(field_id)) = (trace.kind, trace.field_id) else {
            return trace;
        };

        trace.verdict = match lookup::find(field_id, self.tree) {
            Some(chosen) => judge(kind, trace.operand, chosen),
            None => LeafVerdict::FieldNotFound,
        };
        trace
    }
}

/// Applies a leaf predicate to the field it references.
///
/// The emptiness checks for choice and checkbox fields run first; whatever
/// they do not settle falls through to the generic "operand is one of the
/// selected choice ids" test, for every condition code.
fn judge(kind: LeafKind, operand: Option<i64>, chosen: &TaskField) -> LeafVerdict {
    match (kind, &chosen.field_type) {
        (LeafKind::IsEmpty, FieldType::MultipleChoice) if !chosen.has_value() => {
            return LeafVerdict::Empty;
        }
        (LeafKind::IsEmpty, FieldType::Checkmark) if chosen.value_is(UNCHECKED) => {
            return LeafVerdict::Empty;
        }
        (LeafKind::IsFilled, FieldType::MultipleChoice) if chosen.has_value() => {
            return LeafVerdict::Filled;
        }
        (LeafKind::IsFilled, FieldType::Checkmark) if chosen.value_is(CHECKED) => {
            return LeafVerdict::Filled;
        }
        _ => {}
    }

    let selected = chosen.value.as_ref().and_then(FieldValue::choice_ids);
    match (selected, operand) {
        (Some(ids), Some(operand)) if ids.contains(&operand) => LeafVerdict::ChoiceSelected,
        _ => LeafVerdict::NoMatch,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::ChoiceValue;

    fn choice(ids: &[i64]) -> FieldValue {
        FieldValue::Choice(ChoiceValue {
            choice_ids: ids.to_vec(),
            choice_names: Vec::new(),
        })
    }

    #[test]
    fn filled_choice_field_also_matches_selected_operand() {
        let field = TaskField::new(1, FieldType::MultipleChoice).with_value(choice(&[4]));
        assert_eq!(judge(LeafKind::IsFilled, Some(4), &field), LeafVerdict::Filled);
        assert_eq!(
            judge(LeafKind::IsEmpty, Some(4), &field),
            LeafVerdict::ChoiceSelected
        );
        assert_eq!(judge(LeafKind::IsEmpty, Some(5), &field), LeafVerdict::NoMatch);
    }

    #[test]
    fn other_codes_on_checkbox_fields_are_unsatisfied() {
        let field = TaskField::new(1, FieldType::Checkmark).with_value(FieldValue::Text(CHECKED.into()));
        assert_eq!(
            judge(LeafKind::ChoiceEquals(1), Some(1), &field),
            LeafVerdict::NoMatch
        );
    }

    #[test]
    fn choice_data_decides_for_unknown_field_types() {
        let field = TaskField::new(1, FieldType::Other("catalog".into())).with_value(choice(&[9]));
        assert_eq!(
            judge(LeafKind::ChoiceEquals(7), Some(9), &field),
            LeafVerdict::ChoiceSelected
        );
        assert_eq!(judge(LeafKind::IsFilled, None, &field), LeafVerdict::NoMatch);
    }
}
