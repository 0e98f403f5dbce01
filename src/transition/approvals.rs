use crate::data::{Approval, ApprovalChoice, Person};
use ahash::AHashMap;

/// People of one step grouped by their approval choice, in list order.
#[derive(Debug, Clone, Default)]
pub struct ApprovalGroups {
    by_choice: AHashMap<ApprovalChoice, Vec<Person>>,
}

impl ApprovalGroups {
    pub fn from_approvals(approvals: &[Approval]) -> Self {
        let mut by_choice: AHashMap<ApprovalChoice, Vec<Person>> = AHashMap::new();
        for approval in approvals {
            by_choice
                .entry(approval.approval_choice)
                .or_default()
                .push(approval.person.clone());
        }
        Self { by_choice }
    }

    pub fn people(&self, choice: ApprovalChoice) -> &[Person] {
        self.by_choice.get(&choice).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn waiting(&self) -> &[Person] {
        self.people(ApprovalChoice::Waiting)
    }

    pub fn approved(&self) -> &[Person] {
        self.people(ApprovalChoice::Approved)
    }
}
