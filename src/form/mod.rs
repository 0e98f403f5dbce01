//! Decoded shapes of the task tracker's form templates and task instances.
//!
//! Two parallel trees are involved in every evaluation: the static
//! [`FormSchema`] describing which fields belong to which workflow step, and
//! the live [`TaskField`] tree holding the values of one specific task. Both
//! nest at most one level deep (a group may hold member fields, a member may
//! not hold another group).

pub mod condition;
pub mod instance;
pub mod schema;

pub use condition::*;
pub use instance::*;
pub use schema::*;

/// A node of either field tree, addressable by id and optionally holding members.
pub trait FieldNode: Sized {
    /// The field id, unique within a well-formed tree.
    fn field_id(&self) -> i64;

    /// The nested member fields, if this node is a group.
    fn members(&self) -> Option<&[Self]>;
}

impl FieldNode for FormField {
    fn field_id(&self) -> i64 {
        self.id
    }

    fn members(&self) -> Option<&[Self]> {
        self.info.fields.as_deref()
    }
}

impl FieldNode for TaskField {
    fn field_id(&self) -> i64 {
        self.id
    }

    fn members(&self) -> Option<&[Self]> {
        match &self.value {
            Some(FieldValue::Group(group)) => Some(group.fields.as_slice()),
            _ => None,
        }
    }
}
