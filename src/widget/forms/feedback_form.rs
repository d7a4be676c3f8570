use super::{edit_text, require, FieldEdit, FieldValue, FieldView, FormError, FormVariant};
use crate::constants::{FIELD_ANONYMOUS, FIELD_FREE_TEXT};
use crate::widget::category::Category;
use crate::widget::submission::{Submission, SubmissionPayload};

const TEXT: usize = 0;
const ANONYMOUS: usize = 1;

/// General feedback with an optional anonymity flag
#[derive(Debug, Clone, Default)]
pub struct FeedbackForm {
    text: String,
    anonymous: bool,
}

impl FeedbackForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn is_anonymous(&self) -> bool {
        self.anonymous
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_anonymous(&mut self, anonymous: bool) {
        self.anonymous = anonymous;
    }
}

impl FormVariant for FeedbackForm {
    fn category(&self) -> Category {
        Category::Feedback
    }

    fn fields(&self) -> Vec<FieldView<'_>> {
        vec![
            FieldView::text(FIELD_FREE_TEXT, &self.text, true),
            FieldView {
                label: FIELD_ANONYMOUS,
                value: FieldValue::Flag(self.anonymous),
                required: false,
                multiline: false,
            },
        ]
    }

    fn apply(&mut self, index: usize, edit: FieldEdit) {
        match (index, edit) {
            (TEXT, edit) => edit_text(&mut self.text, edit),
            (ANONYMOUS, FieldEdit::Toggle) => self.anonymous = !self.anonymous,
            (ANONYMOUS, FieldEdit::Clear) => self.anonymous = false,
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        require(FIELD_FREE_TEXT, &self.text)
    }

    fn submit(&self) -> Result<Submission, FormError> {
        self.validate()?;
        Ok(Submission::new(
            Category::Feedback,
            SubmissionPayload::Feedback {
                text: self.text.clone(),
                anonymous: self.anonymous,
            },
        ))
    }
}
