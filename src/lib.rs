//! # Tsuchi - Step-Transition Notifier
//!
//! **Tsuchi** decides what to announce when a task in a multi-step approval
//! workflow changes. Every webhook event from the task tracker is classified
//! into one transition kind (a step change, the task's creation, a partial
//! approval, a revoked approval, or nothing at all) and, when relevant, the
//! fields the current step requires are listed together with how complete
//! each one is.
//!
//! ## Core Workflow
//!
//! The crate is a pure function over already-decoded snapshots; it performs
//! no I/O of its own.
//!
//! 1.  **Decode**: Parse the webhook body into a [`data::WebhookPayload`] and
//!     the task's form template into a [`form::FormSchema`].
//! 2.  **Evaluate**: Hand both to a [`transition::TransitionEvaluator`]. It
//!     reads the approval activity of the last comment, classifies it, and,
//!     only if there is something to say, walks the form schema and the
//!     task's field tree to pick the visible fields tagged for the current
//!     step.
//! 3.  **Compose**: Turn the [`transition::TransitionOutcome`] into comment
//!     markup with a [`message::MessageComposer`] and post it.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use tsuchi::prelude::*;
//!
//! fn main() -> Result<()> {
//!     let payload = WebhookPayload::from_file("payload.json")?;
//!     let form = FormSchema::from_file("form.json")?;
//!
//!     let evaluator = TransitionEvaluator::builder().build();
//!     let outcome = evaluator.evaluate_task(&payload.task, &form);
//!
//!     let messages = DefaultComposer::default().compose(&outcome);
//!     if let Some(text) = &messages.acknowledgement {
//!         println!("post separately: {}", text);
//!     }
//!     println!("{}", WebhookReply::from_messages(&messages).to_json()?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod evaluator;
pub mod form;
pub mod message;
pub mod prelude;
pub mod trace;
pub mod transition;
