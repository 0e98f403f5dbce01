use serde::{Deserialize, Serialize};

/// A form template as returned by the tracker's form catalog.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormSchema {
    #[serde(default)]
    pub id: Option<i64>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub fields: Vec<FormField>,
}

/// Static definition of a single form field.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FormField {
    pub id: i64,
    #[serde(default)]
    pub name: String,
    #[serde(rename = "type", default)]
    pub field_type: Option<String>,
    #[serde(default)]
    pub info: FormFieldInfo,
}

/// Step and grouping metadata attached to a form field.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct FormFieldInfo {
    /// The workflow step at which the field must be filled in.
    #[serde(default)]
    pub required_step: Option<u32>,
    /// Member fields, present only on group fields.
    #[serde(default)]
    pub fields: Option<Vec<FormField>>,
}

impl FormField {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            field_type: None,
            info: FormFieldInfo::default(),
        }
    }

    pub fn with_required_step(mut self, step: u32) -> Self {
        self.info.required_step = Some(step);
        self
    }

    pub fn with_members(mut self, members: Vec<FormField>) -> Self {
        self.info.fields = Some(members);
        self
    }

    pub fn required_step(&self) -> Option<u32> {
        self.info.required_step
    }

    pub fn is_required_at(&self, step: u32) -> bool {
        self.info.required_step == Some(step)
    }
}
