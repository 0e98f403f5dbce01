use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Condition code of the "field is empty" predicate.
pub const CONDITION_IS_EMPTY: i64 = 2;
/// Condition code of the "field is filled" predicate.
pub const CONDITION_IS_FILLED: i64 = 3;

/// One node of a visibility condition tree.
///
/// The tracker uses the same shape for every level: the root holds the
/// AND-ed clauses in `children`, a clause is either a leaf predicate or holds
/// OR-ed leaves in its own `children`, and a leaf carries `condition_type`,
/// `field_id` and the comparison `value`.
///
/// Decoding never fails on a JSON object. A `children` entry that is not a
/// list of objects is dropped and the node is flagged as malformed instead.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
#[serde(from = "RawCondition")]
pub struct VisibilityCondition {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub condition_type: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub field_id: Option<i64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<serde_json::Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub children: Option<Vec<VisibilityCondition>>,
    /// `children` was sent but could not be read as a clause list.
    #[serde(skip)]
    pub malformed: bool,
}

#[derive(Deserialize)]
struct RawCondition {
    #[serde(default, deserialize_with = "lenient_integer")]
    condition_type: Option<i64>,
    #[serde(default, deserialize_with = "lenient_integer")]
    field_id: Option<i64>,
    #[serde(default)]
    value: Option<serde_json::Value>,
    #[serde(default)]
    children: Option<serde_json::Value>,
}

impl From<RawCondition> for VisibilityCondition {
    fn from(raw: RawCondition) -> Self {
        let (children, malformed) = match raw.children {
            None => (None, false),
            Some(children) => match serde_json::from_value(children) {
                Ok(children) => (Some(children), false),
                Err(_) => (None, true),
            },
        };
        Self {
            condition_type: raw.condition_type,
            field_id: raw.field_id,
            value: raw.value,
            children,
            malformed,
        }
    }
}

/// The predicate a leaf applies to the field it references.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LeafKind {
    IsEmpty,
    IsFilled,
    /// Any other code: "the referenced field has this choice selected".
    ChoiceEquals(i64),
}

impl From<i64> for LeafKind {
    fn from(code: i64) -> Self {
        match code {
            CONDITION_IS_EMPTY => LeafKind::IsEmpty,
            CONDITION_IS_FILLED => LeafKind::IsFilled,
            other => LeafKind::ChoiceEquals(other),
        }
    }
}

impl fmt::Display for LeafKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LeafKind::IsEmpty => write!(f, "is empty"),
            LeafKind::IsFilled => write!(f, "is filled"),
            LeafKind::ChoiceEquals(code) => write!(f, "matches (code {})", code),
        }
    }
}

impl VisibilityCondition {
    /// Builds an AND root over the given clauses.
    pub fn all(clauses: Vec<VisibilityCondition>) -> Self {
        Self {
            condition_type: Some(1),
            children: Some(clauses),
            ..Self::default()
        }
    }

    /// Builds a clause satisfied when any of the given leaves is.
    pub fn any(leaves: Vec<VisibilityCondition>) -> Self {
        Self {
            condition_type: Some(1),
            children: Some(leaves),
            ..Self::default()
        }
    }

    pub fn leaf(condition_type: i64, field_id: i64, value: Option<serde_json::Value>) -> Self {
        Self {
            condition_type: Some(condition_type),
            field_id: Some(field_id),
            value,
            ..Self::default()
        }
    }

    /// A condition that could not be decoded at all.
    pub fn malformed() -> Self {
        Self {
            malformed: true,
            ..Self::default()
        }
    }

    /// The tracker's "no condition" marker: a zero field id and no clauses.
    pub fn is_placeholder(&self) -> bool {
        self.field_id == Some(0) && self.children.is_none() && !self.malformed
    }

    /// Returns `true` if neither this node nor any node below it is malformed.
    pub fn is_well_formed(&self) -> bool {
        !self.malformed
            && self
                .children
                .iter()
                .flatten()
                .all(VisibilityCondition::is_well_formed)
    }

    pub fn leaf_kind(&self) -> Option<LeafKind> {
        self.condition_type.map(LeafKind::from)
    }

    /// The comparison operand as an integer choice id.
    pub fn operand(&self) -> Option<i64> {
        self.value.as_ref().and_then(integer_of)
    }
}

/// Reads an integer from a JSON number or a numeric string.
pub(crate) fn integer_of(value: &serde_json::Value) -> Option<i64> {
    match value {
        serde_json::Value::Number(n) => n.as_i64().or_else(|| {
            n.as_f64()
                .filter(|f| f.fract() == 0.0)
                .map(|f| f as i64)
        }),
        serde_json::Value::String(s) => s.trim().parse().ok(),
        _ => None,
    }
}

/// Reads an optional condition, keeping any non-object as a malformed one.
pub(crate) fn lenient_condition<'de, D>(
    deserializer: D,
) -> Result<Option<VisibilityCondition>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.map(|value| {
        serde_json::from_value(value).unwrap_or_else(|_| VisibilityCondition::malformed())
    }))
}

fn lenient_integer<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<serde_json::Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(integer_of))
}
