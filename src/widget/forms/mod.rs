//! Form variants and the dispatcher that mounts them.
//!
//! Each [`Category`] maps to exactly one [`FormVariant`] implementation. A
//! variant owns its field state; the controller only ever sees the
//! [`Submission`] a variant yields once every required field is filled.

mod contact_form;
mod feedback_form;
mod issue_form;
mod suggestion_form;

pub use contact_form::ContactForm;
pub use feedback_form::FeedbackForm;
pub use issue_form::IssueForm;
pub use suggestion_form::SuggestionForm;

use std::fmt::Debug;

use thiserror::Error;

use super::category::Category;
use super::submission::Submission;

/// Why a form cannot be submitted yet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FormError {
    #[error("required field '{0}' is empty")]
    MissingField(&'static str),
}

/// Current value of a field, as displayed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldValue<'a> {
    Text(&'a str),
    /// Selected option label, `None` while nothing is chosen
    Choice(Option<&'static str>),
    Flag(bool),
}

/// Read-only view of one field
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldView<'a> {
    pub label: &'static str,
    pub value: FieldValue<'a>,
    pub required: bool,
    pub multiline: bool,
}

impl<'a> FieldView<'a> {
    pub(crate) fn text(label: &'static str, value: &'a str, multiline: bool) -> Self {
        Self {
            label,
            value: FieldValue::Text(value),
            required: true,
            multiline,
        }
    }
}

/// A single user edit addressed to one field.
///
/// Edits that make no sense for the field's kind (typing into a checkbox,
/// toggling a text box) are ignored.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FieldEdit {
    Insert(char),
    Backspace,
    Clear,
    SetText(String),
    Toggle,
    NextChoice,
    PreviousChoice,
}

/// Capabilities shared by the four category forms
pub trait FormVariant: Debug + Send {
    fn category(&self) -> Category;

    /// Fields in display order
    fn fields(&self) -> Vec<FieldView<'_>>;

    /// Apply an edit to the field at `index`; out-of-range indices are ignored
    fn apply(&mut self, index: usize, edit: FieldEdit);

    /// Check that every required field is non-empty
    fn validate(&self) -> Result<(), FormError>;

    fn can_submit(&self) -> bool {
        self.validate().is_ok()
    }

    /// Package the field values, or report the first missing field
    fn submit(&self) -> Result<Submission, FormError>;
}

/// Mounts a fresh form for the active category
pub struct FormDispatcher;

impl FormDispatcher {
    /// Create an empty form for `category`; `None` displays nothing
    #[must_use]
    pub fn render(category: Option<Category>) -> Option<Box<dyn FormVariant>> {
        let form: Box<dyn FormVariant> = match category? {
            Category::Issue => Box::new(IssueForm::new()),
            Category::Feedback => Box::new(FeedbackForm::new()),
            Category::Suggestion => Box::new(SuggestionForm::new()),
            Category::Contact => Box::new(ContactForm::new()),
        };
        Some(form)
    }
}

/// Apply a text edit to a single-value buffer
pub(crate) fn edit_text(buffer: &mut String, edit: FieldEdit) {
    match edit {
        FieldEdit::Insert(c) => buffer.push(c),
        FieldEdit::Backspace => {
            buffer.pop();
        }
        FieldEdit::Clear => buffer.clear(),
        FieldEdit::SetText(text) => *buffer = text,
        FieldEdit::Toggle | FieldEdit::NextChoice | FieldEdit::PreviousChoice => {}
    }
}

/// Presence check only; whitespace counts as content and no format is enforced
pub(crate) fn require(label: &'static str, value: &str) -> Result<(), FormError> {
    if value.is_empty() {
        Err(FormError::MissingField(label))
    } else {
        Ok(())
    }
}
