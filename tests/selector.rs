//! Tests for step field selection and completion rendering.
mod common;
use common::*;
use tsuchi::form::CONDITION_IS_FILLED;
use tsuchi::prelude::*;

fn selected_names(schema: &[FormField], tree: &[TaskField], step: u32) -> Vec<String> {
    StepFieldSelector::new(tree)
        .select_for_step(schema, step)
        .iter()
        .map(|selected| selected.schema.name.clone())
        .collect()
}

#[test]
fn test_selection_follows_schema_order() {
    let schema = vec![
        FormField::new(3, "Third").with_required_step(1),
        FormField::new(1, "First").with_required_step(1),
        FormField::new(2, "Second").with_required_step(1),
    ];
    let tree = vec![text_field(1, None), text_field(2, None), text_field(3, None)];
    assert_eq!(selected_names(&schema, &tree, 1), vec!["Third", "First", "Second"]);
}

#[test]
fn test_no_fields_tagged_for_step() {
    let form = create_invoice_form();
    let tree = create_invoice_fields();
    assert!(StepFieldSelector::new(&tree).select_for_step(&form.fields, 7).is_empty());
}

#[test]
fn test_group_members_are_considered() {
    let form = create_invoice_form();
    let tree = create_invoice_fields();
    assert_eq!(selected_names(&form.fields, &tree, 2), vec!["Amount", "Signed"]);
    assert_eq!(selected_names(&form.fields, &tree, 1), vec!["Invoice Number"]);
}

#[test]
fn test_selected_instance_comes_from_live_tree() {
    let form = create_invoice_form();
    let tree = create_invoice_fields();
    let selected = StepFieldSelector::new(&tree).select_for_step(&form.fields, 2);
    assert_eq!(selected[1].instance, &checkmark(4, false));
}

#[test]
fn test_hidden_field_is_excluded() {
    let schema = vec![
        FormField::new(5, "Approved by legal"),
        FormField::new(6, "Due date").with_required_step(1),
    ];
    let tree = vec![
        empty_choice_field(5),
        text_field(6, Some("tomorrow")).with_condition(all_of_any(vec![vec![leaf(CONDITION_IS_FILLED, 5)]])),
    ];
    assert!(selected_names(&schema, &tree, 1).is_empty());
}

#[test]
fn test_members_of_hidden_group_are_excluded() {
    let schema = vec![
        FormField::new(1, "Toggle"),
        FormField::new(3, "Delivery").with_members(vec![FormField::new(4, "Address").with_required_step(1)]),
    ];
    let hidden_group = TaskField::group(3, vec![text_field(4, Some("Main St"))])
        .with_condition(all_of_any(vec![vec![leaf(CONDITION_IS_FILLED, 1)]]));

    let tree = vec![checkmark(1, false), hidden_group.clone()];
    assert!(selected_names(&schema, &tree, 1).is_empty());

    let tree = vec![checkmark(1, true), hidden_group];
    assert_eq!(selected_names(&schema, &tree, 1), vec!["Address"]);
}

#[test]
fn test_duplicate_schema_entries_are_kept() {
    let schema = vec![
        FormField::new(1, "Invoice Number").with_required_step(1),
        FormField::new(1, "Invoice Number").with_required_step(1),
    ];
    let tree = vec![text_field(1, Some("INV-1"))];
    assert_eq!(selected_names(&schema, &tree, 1).len(), 2);
}

#[test]
fn test_schema_field_missing_from_task_is_omitted() {
    let schema = vec![
        FormField::new(1, "Present").with_required_step(1),
        FormField::new(2, "Absent").with_required_step(1),
    ];
    let tree = vec![text_field(1, None)];
    assert_eq!(selected_names(&schema, &tree, 1), vec!["Present"]);
}

#[test]
fn test_tagged_group_itself_is_not_listed() {
    let schema = vec![FormField::new(3, "Signatures")
        .with_required_step(1)
        .with_members(vec![FormField::new(4, "Signed").with_required_step(1)])];
    let tree = vec![TaskField::group(3, vec![checkmark(4, true)])];
    // A tagged group still has its tagged members scanned.
    assert_eq!(selected_names(&schema, &tree, 1), vec!["Signed"]);
}

#[test]
fn test_completion_glyphs() {
    assert_eq!(Completion::of(&text_field(1, Some("x"))), Completion::Done);
    assert_eq!(Completion::of(&checkmark(1, true)), Completion::Done);
    assert_eq!(Completion::of(&checkmark(1, false)), Completion::ExplicitlyUnchecked);
    assert_eq!(Completion::of(&text_field(1, None)), Completion::Missing);
    assert_eq!(Completion::of(&choice_field(1, &[2])), Completion::Done);

    assert_eq!(Completion::Done.glyph(), "✅");
    assert_eq!(Completion::ExplicitlyUnchecked.glyph(), "✔️");
    assert_eq!(Completion::Missing.glyph(), "❌");
}

#[test]
fn test_render_selected_fields() {
    let form = create_invoice_form();
    let tree = create_invoice_fields();
    let selected = StepFieldSelector::new(&tree).select_for_step(&form.fields, 2);

    let rendered = CompletionRenderer::default().render_all(&selected);
    assert_eq!(rendered, vec!["<li>❌Amount</li>", "<li>✔️Signed</li>"]);

    let bullets = CompletionRenderer::new(ListItemTags {
        begin: "- ".to_string(),
        end: "\n".to_string(),
    });
    assert_eq!(bullets.render_all(&selected), vec!["- ❌Amount\n", "- ✔️Signed\n"]);
}
