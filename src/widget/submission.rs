//! Hand-off point for accepted submissions.
//!
//! Nothing is delivered anywhere yet: a [`SubmissionSink`] is where a real
//! feedback service would be plugged in.

use std::sync::{Arc, Mutex};

use serde::Serialize;

use super::ack::AckMessage;
use super::category::{Category, IssueSection};

/// Field values of a submitted form
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "form", rename_all = "snake_case")]
pub enum SubmissionPayload {
    Issue { section: IssueSection, detail: String },
    Feedback { text: String, anonymous: bool },
    Suggestion { text: String },
    Contact { name: String, email: String, message: String },
}

/// A form that passed validation, ready to be handed to a sink
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Submission {
    pub category: Category,
    pub payload: SubmissionPayload,
}

impl Submission {
    #[must_use]
    pub fn new(category: Category, payload: SubmissionPayload) -> Self {
        Self { category, payload }
    }

    /// The acknowledgement depends on the category only, never on field values
    #[must_use]
    pub fn ack_message(&self) -> AckMessage {
        self.category.ack_message()
    }
}

/// Receives every submission the widget accepts
pub trait SubmissionSink: Send {
    fn deliver(&self, submission: &Submission);
}

/// Default sink: records the submission in the application log
#[derive(Debug, Clone, Copy, Default)]
pub struct LogSink;

impl SubmissionSink for LogSink {
    fn deliver(&self, submission: &Submission) {
        log::info!("Accepted {:?} submission", submission.category);
        match serde_json::to_string(&submission.payload) {
            Ok(json) => log::debug!("Submission payload: {}", json),
            Err(e) => log::warn!("Failed to serialize submission payload: {}", e),
        }
    }
}

/// Sink keeping submissions in memory, shared between clones
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    submissions: Arc<Mutex<Vec<Submission>>>,
}

impl MemorySink {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All submissions received so far, oldest first
    #[must_use]
    pub fn submissions(&self) -> Vec<Submission> {
        if let Ok(submissions) = self.submissions.lock() {
            submissions.clone()
        } else {
            Vec::new()
        }
    }
}

impl SubmissionSink for MemorySink {
    fn deliver(&self, submission: &Submission) {
        if let Ok(mut submissions) = self.submissions.lock() {
            submissions.push(submission.clone());
        }
    }
}
