//! Records of how visibility conditions were evaluated.

mod formatter;

pub use formatter::TraceFormatter;

use crate::form::LeafKind;

/// How a field's visibility was decided.
#[derive(Debug, Clone, PartialEq)]
pub enum VisibilityTrace {
    /// No condition (or the tracker's empty placeholder): always visible.
    Unconditional,
    /// A condition without readable clauses: hidden.
    Malformed,
    Evaluated {
        clauses: Vec<ClauseTrace>,
        outcome: bool,
    },
}

impl VisibilityTrace {
    pub fn is_visible(&self) -> bool {
        match self {
            VisibilityTrace::Unconditional => true,
            VisibilityTrace::Malformed => false,
            VisibilityTrace::Evaluated { outcome, .. } => *outcome,
        }
    }
}

/// One AND-ed clause of a condition.
#[derive(Debug, Clone, PartialEq)]
pub enum ClauseTrace {
    Single(LeafTrace),
    /// OR-ed leaves; evaluation stops at the first satisfied one.
    AnyOf {
        leaves: Vec<LeafTrace>,
        outcome: bool,
    },
    /// Skipped because an earlier clause already failed.
    NotEvaluated,
}

impl ClauseTrace {
    pub fn is_satisfied(&self) -> bool {
        match self {
            ClauseTrace::Single(leaf) => leaf.verdict.is_satisfied(),
            ClauseTrace::AnyOf { outcome, .. } => *outcome,
            ClauseTrace::NotEvaluated => false,
        }
    }
}

/// A single predicate and what it resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct LeafTrace {
    pub field_id: Option<i64>,
    pub kind: Option<LeafKind>,
    pub operand: Option<i64>,
    pub verdict: LeafVerdict,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafVerdict {
    /// The predicate lacks its condition code or field id.
    Incomplete,
    /// The referenced field does not exist in the task.
    FieldNotFound,
    Empty,
    Filled,
    ChoiceSelected,
    NoMatch,
}

impl LeafVerdict {
    pub fn is_satisfied(&self) -> bool {
        matches!(
            self,
            LeafVerdict::Empty | LeafVerdict::Filled | LeafVerdict::ChoiceSelected
        )
    }
}
