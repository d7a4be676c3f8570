//! Feedback widget core: state machine, form variants and dismissal timer.
//!
//! Nothing in this module draws to the terminal. The [`WidgetController`]
//! receives semantic events (toggle, select a category, submit) and the
//! [`crate::ui`] layer turns key presses and clicks into those events.
//!
//! # Module Components
//!
//! - [`category`] - The fixed category set and issue sections
//! - [`controller`] - State transitions and timer ownership
//! - [`forms`] - The four form variants and their dispatcher
//! - [`state`] - The visible state as a sum type
//! - [`submission`] - Submitted values and the delivery hook
//! - [`timer`] - Cancellable single-slot dismissal timer

pub mod ack;
pub mod category;
pub mod controller;
pub mod forms;
pub mod state;
pub mod submission;
pub mod timer;

pub use ack::AckMessage;
pub use category::{Category, IssueSection};
pub use controller::WidgetController;
pub use forms::{FieldEdit, FieldValue, FieldView, FormDispatcher, FormError, FormVariant};
pub use state::WidgetState;
pub use submission::{LogSink, MemorySink, Submission, SubmissionPayload, SubmissionSink};
pub use timer::{DismissalTimer, TimerToken};
