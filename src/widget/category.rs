use serde::{Deserialize, Serialize};

use super::ack::AckMessage;
use crate::constants::{
    ACK_CONTACT, ACK_FEEDBACK, ACK_ISSUE, ACK_SUGGESTION, LABEL_CONTACT, LABEL_FEEDBACK, LABEL_ISSUE,
    LABEL_SUGGESTION, TITLE_CONTACT_FORM, TITLE_FEEDBACK_FORM, TITLE_ISSUE_FORM, TITLE_SUGGESTION_FORM,
};

/// One of the four kinds of feedback the widget collects.
///
/// The set is static: the picker always shows [`Category::ALL`] in this order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Issue,
    Feedback,
    Suggestion,
    Contact,
}

impl Category {
    pub const ALL: [Category; 4] = [Category::Issue, Category::Feedback, Category::Suggestion, Category::Contact];

    /// Label shown next to the category button
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Category::Issue => LABEL_ISSUE,
            Category::Feedback => LABEL_FEEDBACK,
            Category::Suggestion => LABEL_SUGGESTION,
            Category::Contact => LABEL_CONTACT,
        }
    }

    /// Heading of the category's form panel
    #[must_use]
    pub fn form_title(self) -> &'static str {
        match self {
            Category::Issue => TITLE_ISSUE_FORM,
            Category::Feedback => TITLE_FEEDBACK_FORM,
            Category::Suggestion => TITLE_SUGGESTION_FORM,
            Category::Contact => TITLE_CONTACT_FORM,
        }
    }

    /// Fixed acknowledgement shown after a successful submission
    #[must_use]
    pub fn ack_message(self) -> AckMessage {
        match self {
            Category::Issue => AckMessage::new(ACK_ISSUE),
            Category::Feedback => AckMessage::new(ACK_FEEDBACK),
            Category::Suggestion => AckMessage::new(ACK_SUGGESTION),
            Category::Contact => AckMessage::new(ACK_CONTACT),
        }
    }

    /// Position in the picker
    #[must_use]
    pub fn index(self) -> usize {
        match self {
            Category::Issue => 0,
            Category::Feedback => 1,
            Category::Suggestion => 2,
            Category::Contact => 3,
        }
    }

    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }
}

/// Area of the product an issue report is about
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum IssueSection {
    InterviewQuestions,
    CodeImplementation,
    UiUx,
    Performance,
    Security,
    Other,
}

impl IssueSection {
    pub const ALL: [IssueSection; 6] = [
        IssueSection::InterviewQuestions,
        IssueSection::CodeImplementation,
        IssueSection::UiUx,
        IssueSection::Performance,
        IssueSection::Security,
        IssueSection::Other,
    ];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            IssueSection::InterviewQuestions => "Interview Questions",
            IssueSection::CodeImplementation => "Code Implementation",
            IssueSection::UiUx => "UI/UX Issue",
            IssueSection::Performance => "Performance",
            IssueSection::Security => "Security",
            IssueSection::Other => "Other",
        }
    }

    fn position(self) -> usize {
        Self::ALL.iter().position(|s| *s == self).unwrap_or(0)
    }

    /// Next section in menu order, wrapping around
    #[must_use]
    pub fn next(self) -> Self {
        Self::ALL[(self.position() + 1) % Self::ALL.len()]
    }

    /// Previous section in menu order, wrapping around
    #[must_use]
    pub fn previous(self) -> Self {
        Self::ALL[(self.position() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}
