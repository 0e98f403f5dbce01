//! Turning a transition outcome into the comments posted on the task.

mod composer;

pub use composer::*;
