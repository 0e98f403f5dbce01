use super::{ClauseTrace, LeafTrace, LeafVerdict, VisibilityTrace};
use crate::form::LeafKind;
use itertools::Itertools;

/// Formats visibility traces into human-readable strings
pub struct TraceFormatter;

impl TraceFormatter {
    /// Format a visibility trace as a one-line explanation.
    pub fn format_visibility(trace: &VisibilityTrace) -> String {
        match trace {
            VisibilityTrace::Unconditional => "visible: no condition".to_string(),
            VisibilityTrace::Malformed => "hidden: condition is malformed".to_string(),
            VisibilityTrace::Evaluated { clauses, outcome } => {
                let verdict = if *outcome { "visible" } else { "hidden" };
                // Skipped clauses did not influence the result, leave them out.
                let body = clauses
                    .iter()
                    .filter(|clause| !matches!(clause, ClauseTrace::NotEvaluated))
                    .map(Self::format_clause)
                    .join(" AND ");
                format!("{}: {}", verdict, body)
            }
        }
    }

    fn format_clause(clause: &ClauseTrace) -> String {
        match clause {
            ClauseTrace::Single(leaf) => Self::format_leaf(leaf),
            ClauseTrace::AnyOf { leaves, .. } if leaves.len() == 1 => Self::format_leaf(&leaves[0]),
            ClauseTrace::AnyOf { leaves, .. } if leaves.is_empty() => "(no options)".to_string(),
            ClauseTrace::AnyOf { leaves, .. } => {
                format!("({})", leaves.iter().map(Self::format_leaf).join(" OR "))
            }
            ClauseTrace::NotEvaluated => String::new(),
        }
    }

    fn format_leaf(leaf: &LeafTrace) -> String {
        let subject = leaf
            .field_id
            .map_or_else(|| "#?".to_string(), |id| format!("#{}", id));
        let predicate = match (leaf.kind, leaf.operand) {
            (Some(LeafKind::ChoiceEquals(_)), Some(operand)) => format!("has choice {}", operand),
            (Some(kind), _) => kind.to_string(),
            (None, _) => "?".to_string(),
        };
        format!("{} {} ({})", subject, predicate, Self::format_verdict(leaf.verdict))
    }

    fn format_verdict(verdict: LeafVerdict) -> &'static str {
        match verdict {
            LeafVerdict::Incomplete => "no: incomplete predicate",
            LeafVerdict::FieldNotFound => "no: field not found",
            LeafVerdict::Empty | LeafVerdict::Filled => "yes",
            LeafVerdict::ChoiceSelected => "yes: choice selected",
            LeafVerdict::NoMatch => "no",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn leaf(field_id: i64, kind: LeafKind, operand: Option<i64>, verdict: LeafVerdict) -> LeafTrace {
        LeafTrace {
            field_id: Some(field_id),
            kind: Some(kind),
            operand,
            verdict,
        }
    }

    #[test]
    fn formats_and_of_or_clauses() {
        let trace = VisibilityTrace::Evaluated {
            clauses: vec![
                ClauseTrace::Single(leaf(5, LeafKind::IsFilled, None, LeafVerdict::Filled)),
                ClauseTrace::AnyOf {
                    leaves: vec![
                        leaf(7, LeafKind::ChoiceEquals(1), Some(3), LeafVerdict::NoMatch),
                        leaf(8, LeafKind::IsEmpty, None, LeafVerdict::Empty),
                    ],
                    outcome: true,
                },
            ],
            outcome: true,
        };
        assert_eq!(
            TraceFormatter::format_visibility(&trace),
            "visible: #5 is filled (yes) AND (#7 has choice 3 (no) OR #8 is empty (yes))"
        );
    }

    #[test]
    fn skipped_clauses_are_omitted() {
        let trace = VisibilityTrace::Evaluated {
            clauses: vec![
                ClauseTrace::Single(leaf(5, LeafKind::IsFilled, None, LeafVerdict::FieldNotFound)),
                ClauseTrace::NotEvaluated,
            ],
            outcome: false,
        };
        assert_eq!(
            TraceFormatter::format_visibility(&trace),
            "hidden: #5 is filled (no: field not found)"
        );
    }
}
