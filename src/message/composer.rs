use crate::config::NotifierConfig;
use crate::data::Person;
use crate::transition::{StepAcknowledgement, StepInstruction, TransitionKind, TransitionOutcome};
use itertools::Itertools;
use rand::Rng;
use rand::seq::IndexedRandom;
use serde::Serialize;

/// The comments to post for one event.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ComposedMessages {
    /// A separate comment closing the previous step.
    pub acknowledgement: Option<String>,
    /// The comment returned as the webhook response.
    pub reply: Option<String>,
}

/// Renders transition outcomes into comment markup.
pub trait MessageComposer {
    fn compose(&self, outcome: &TransitionOutcome) -> ComposedMessages;
}

/// The tracker bot's stock HTML messages.
#[derive(Debug, Clone)]
pub struct DefaultComposer {
    person_link_base: String,
    encouragements: Vec<String>,
}

impl DefaultComposer {
    pub fn new(config: &NotifierConfig) -> Self {
        Self {
            person_link_base: config.person_link_base.clone(),
            encouragements: config.encouragements.clone(),
        }
    }

    /// Like [`MessageComposer::compose`], drawing the encouragement from `rng`.
    pub fn compose_with_rng<R: Rng + ?Sized>(
        &self,
        outcome: &TransitionOutcome,
        rng: &mut R,
    ) -> ComposedMessages {
        let acknowledgement = outcome
            .previous_step
            .as_ref()
            .map(|previous| self.acknowledgement(previous, rng));
        let reply = outcome
            .current_step
            .as_ref()
            .and_then(|current| self.instruction(outcome.kind, current));
        ComposedMessages {
            acknowledgement,
            reply,
        }
    }

    pub fn person_link(&self, person: &Person) -> String {
        format!(
            "<a href='{}{}'>{} {}</a>",
            self.person_link_base, person.id, person.first_name, person.last_name
        )
    }

    fn links(&self, people: &[Person], separator: &str) -> String {
        people.iter().map(|person| self.person_link(person)).join(separator)
    }

    fn acknowledgement<R: Rng + ?Sized>(
        &self,
        previous: &StepAcknowledgement,
        rng: &mut R,
    ) -> String {
        let encouragement = self.encouragements.choose(rng).map_or("", String::as_str);
        format!(
            "{}<br>{}<br>Этап <b>{}</b> завершен ✅<br><br>",
            self.links(&previous.approved, "<br>"),
            encouragement,
            previous.step_name
        )
    }

    fn instruction(&self, kind: TransitionKind, current: &StepInstruction) -> Option<String> {
        let waiting = self.links(&current.waiting, "<br>");
        let fields = current.fields.concat();
        let step = &current.step_name;
        let text = match kind {
            TransitionKind::StepChanged => format!(
                "{}<br>Приступить к исполнению следующего этапа <b>{}</b><ul>{}</ul>",
                waiting, step, fields
            ),
            TransitionKind::TaskCreated => format!(
                "{}<br>Приступить к исполнению первого этапа <b>{}</b> 🏁<br><ul>{}</ul>",
                waiting, step, fields
            ),
            TransitionKind::StepPartiallyApproved => format!(
                "{} выполнил свою часть работы на этапе <b>{}</b><br><br>{}<br>Ваша часть работы на этапе <b>{}</b> не завершена, приступите к её исполнению ⏳<br><ul>{}</ul>",
                self.links(&current.approved, ", "),
                step,
                waiting,
                step,
                fields
            ),
            TransitionKind::ApprovalRevoked => format!(
                "{}<br>Ваша часть работы на этапе <b>{}</b> не завершена, приступите к её исполнению ⏳<br><ul>{}</ul>",
                waiting, step, fields
            ),
            TransitionKind::NoOp => return None,
        };
        Some(text)
    }
}

impl Default for DefaultComposer {
    fn default() -> Self {
        Self::new(&NotifierConfig::default())
    }
}

impl MessageComposer for DefaultComposer {
    fn compose(&self, outcome: &TransitionOutcome) -> ComposedMessages {
        self.compose_with_rng(outcome, &mut rand::rng())
    }
}

/// The webhook response body: `{"formatted_text": ...}`, or `{}` when
/// there is nothing to post.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct WebhookReply {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formatted_text: Option<String>,
}

impl WebhookReply {
    pub fn from_messages(messages: &ComposedMessages) -> Self {
        Self {
            formatted_text: messages.reply.clone(),
        }
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn instruction(fields: Vec<&str>) -> StepInstruction {
        StepInstruction {
            step_name: "Review".to_string(),
            waiting: vec![Person::new(2, "Carol", "Diaz")],
            approved: vec![Person::new(1, "Bob", "Ng")],
            fields: fields.into_iter().map(String::from).collect(),
        }
    }

    #[test]
    fn partial_approval_names_both_groups() {
        let outcome = TransitionOutcome {
            kind: TransitionKind::StepPartiallyApproved,
            previous_step: None,
            current_step: Some(instruction(vec!["<li>❌Amount</li>"])),
        };
        let messages = DefaultComposer::default().compose(&outcome);
        let reply = messages.reply.unwrap();
        assert!(reply.starts_with("<a href='https://pyrus.com/t#pp1'>Bob Ng</a> выполнил"));
        assert!(reply.contains("<a href='https://pyrus.com/t#pp2'>Carol Diaz</a><br>Ваша часть"));
        assert!(reply.ends_with("<ul><li>❌Amount</li></ul>"));
        assert!(messages.acknowledgement.is_none());
    }

    #[test]
    fn acknowledgement_uses_one_configured_encouragement() {
        let config = NotifierConfig {
            encouragements: vec!["Nice".to_string()],
            ..NotifierConfig::default()
        };
        let outcome = TransitionOutcome {
            kind: TransitionKind::StepChanged,
            previous_step: Some(StepAcknowledgement {
                step_name: "Draft".to_string(),
                approved: vec![Person::new(1, "Bob", "Ng")],
            }),
            current_step: Some(instruction(vec![])),
        };
        let mut rng = StdRng::seed_from_u64(7);
        let messages = DefaultComposer::new(&config).compose_with_rng(&outcome, &mut rng);
        assert_eq!(
            messages.acknowledgement.as_deref(),
            Some("<a href='https://pyrus.com/t#pp1'>Bob Ng</a><br>Nice<br>Этап <b>Draft</b> завершен ✅<br><br>")
        );
        assert!(messages.reply.unwrap().contains("следующего этапа <b>Review</b><ul></ul>"));
    }

    #[test]
    fn empty_reply_serialises_to_empty_object() {
        let reply = WebhookReply::from_messages(&ComposedMessages::default());
        assert_eq!(reply.to_json().unwrap(), "{}");
    }

    #[test]
    fn reply_text_is_escaped() {
        let reply = WebhookReply {
            formatted_text: Some("say \"hi\"".to_string()),
        };
        assert_eq!(reply.to_json().unwrap(), r#"{"formatted_text":"say \"hi\""}"#);
    }
}
