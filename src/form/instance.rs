use super::VisibilityCondition;
use super::condition::lenient_condition;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Checkbox value of a ticked `checkmark` field.
pub const CHECKED: &str = "checked";
/// Checkbox value of an explicitly cleared `checkmark` field.
pub const UNCHECKED: &str = "unchecked";

/// Live snapshot of one field of a task.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TaskField {
    pub id: i64,
    #[serde(rename = "type", default)]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub value: Option<FieldValue>,
    #[serde(
        default,
        deserialize_with = "lenient_condition",
        skip_serializing_if = "Option::is_none"
    )]
    pub visibility_condition: Option<VisibilityCondition>,
}

/// The field type discriminator sent by the tracker.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum FieldType {
    Text,
    MultipleChoice,
    Checkmark,
    /// Section header grouping member fields.
    Title,
    Other(String),
}

impl Default for FieldType {
    fn default() -> Self {
        FieldType::Other(String::new())
    }
}

impl From<String> for FieldType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "text" => FieldType::Text,
            "multiple_choice" => FieldType::MultipleChoice,
            "checkmark" => FieldType::Checkmark,
            "title" => FieldType::Title,
            _ => FieldType::Other(raw),
        }
    }
}

impl From<FieldType> for String {
    fn from(field_type: FieldType) -> Self {
        field_type.to_string()
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldType::Text => write!(f, "text"),
            FieldType::MultipleChoice => write!(f, "multiple_choice"),
            FieldType::Checkmark => write!(f, "checkmark"),
            FieldType::Title => write!(f, "title"),
            FieldType::Other(raw) => write!(f, "{}", raw),
        }
    }
}

/// The polymorphic value of a task field.
///
/// Variants are tried in declaration order, so a value object carrying
/// `fields` is always a group and one carrying `choice_ids` a choice set.
/// A group keeps any choice selection sent alongside its members.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    Group(GroupValue),
    Choice(ChoiceValue),
    Text(String),
    Other(serde_json::Value),
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct GroupValue {
    pub fields: Vec<TaskField>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub choice_ids: Option<Vec<i64>>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub choice_names: Vec<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ChoiceValue {
    pub choice_ids: Vec<i64>,
    #[serde(default)]
    pub choice_names: Vec<String>,
}

impl FieldValue {
    /// Returns `true` if this is the given checkbox state string.
    pub fn is_checkbox_state(&self, state: &str) -> bool {
        matches!(self, FieldValue::Text(text) if text == state)
    }

    pub fn choice_ids(&self) -> Option<&[i64]> {
        match self {
            FieldValue::Choice(choice) => Some(choice.choice_ids.as_slice()),
            FieldValue::Group(group) => group.choice_ids.as_deref(),
            _ => None,
        }
    }
}

impl TaskField {
    pub fn new(id: i64, field_type: FieldType) -> Self {
        Self {
            id,
            field_type,
            name: None,
            value: None,
            visibility_condition: None,
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_value(mut self, value: FieldValue) -> Self {
        self.value = Some(value);
        self
    }

    pub fn with_condition(mut self, condition: VisibilityCondition) -> Self {
        self.visibility_condition = Some(condition);
        self
    }

    /// Builds a group node holding `members` as its embedded value.
    pub fn group(id: i64, members: Vec<TaskField>) -> Self {
        Self::new(id, FieldType::Title).with_value(FieldValue::Group(GroupValue {
            fields: members,
            ..GroupValue::default()
        }))
    }

    pub fn has_value(&self) -> bool {
        self.value.is_some()
    }

    /// Returns `true` if the value is exactly the given checkbox state.
    pub fn value_is(&self, state: &str) -> bool {
        self.value
            .as_ref()
            .is_some_and(|value| value.is_checkbox_state(state))
    }
}
