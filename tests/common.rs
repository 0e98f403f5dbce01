//! Common test utilities for building form schemas, task trees and events.
use serde_json::json;
use tsuchi::form::{CHECKED, ChoiceValue, UNCHECKED};
use tsuchi::prelude::*;

/// A `multiple_choice` field with the given choices selected.
#[allow(dead_code)]
pub fn choice_field(id: i64, choice_ids: &[i64]) -> TaskField {
    TaskField::new(id, FieldType::MultipleChoice).with_value(FieldValue::Choice(ChoiceValue {
        choice_ids: choice_ids.to_vec(),
        choice_names: choice_ids.iter().map(|c| format!("choice {}", c)).collect(),
    }))
}

/// A `multiple_choice` field without a value.
#[allow(dead_code)]
pub fn empty_choice_field(id: i64) -> TaskField {
    TaskField::new(id, FieldType::MultipleChoice)
}

/// A `checkmark` field that is ticked or explicitly cleared.
#[allow(dead_code)]
pub fn checkmark(id: i64, checked: bool) -> TaskField {
    let state = if checked { CHECKED } else { UNCHECKED };
    TaskField::new(id, FieldType::Checkmark).with_value(FieldValue::Text(state.to_string()))
}

#[allow(dead_code)]
pub fn text_field(id: i64, text: Option<&str>) -> TaskField {
    let field = TaskField::new(id, FieldType::Text);
    match text {
        Some(text) => field.with_value(FieldValue::Text(text.to_string())),
        None => field,
    }
}

/// A leaf predicate without a comparison operand.
#[allow(dead_code)]
pub fn leaf(condition_type: i64, field_id: i64) -> VisibilityCondition {
    VisibilityCondition::leaf(condition_type, field_id, None)
}

/// A "has choice selected" leaf.
#[allow(dead_code)]
pub fn choice_leaf(condition_type: i64, field_id: i64, choice_id: i64) -> VisibilityCondition {
    VisibilityCondition::leaf(condition_type, field_id, Some(json!(choice_id)))
}

/// `AND[ OR[leaves...] ]` for each group of leaves.
#[allow(dead_code)]
pub fn all_of_any(clauses: Vec<Vec<VisibilityCondition>>) -> VisibilityCondition {
    VisibilityCondition::all(clauses.into_iter().map(VisibilityCondition::any).collect())
}

#[allow(dead_code)]
pub fn approval(id: i64, first_name: &str, last_name: &str, choice: ApprovalChoice) -> Approval {
    Approval::new(Person::new(id, first_name, last_name), choice)
}

#[allow(dead_code)]
pub fn step(number: u32, name: &str) -> TaskStep {
    TaskStep {
        step: number,
        name: name.to_string(),
    }
}

/// A form where step 1 needs "Invoice Number" and step 2 needs "Amount" and
/// the grouped "Signed" checkbox.
#[allow(dead_code)]
pub fn create_invoice_form() -> FormSchema {
    FormSchema {
        id: Some(1058514),
        name: Some("Invoices".to_string()),
        fields: vec![
            FormField::new(1, "Invoice Number").with_required_step(1),
            FormField::new(2, "Amount").with_required_step(2),
            FormField::new(3, "Signatures").with_members(vec![
                FormField::new(4, "Signed").with_required_step(2),
                FormField::new(5, "Comment"),
            ]),
        ],
    }
}

/// Task fields matching [`create_invoice_form`].
#[allow(dead_code)]
pub fn create_invoice_fields() -> Vec<TaskField> {
    vec![
        text_field(1, Some("INV-42")),
        text_field(2, None),
        TaskField::group(3, vec![checkmark(4, false), text_field(5, None)]),
    ]
}
