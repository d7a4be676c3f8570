use super::{edit_text, require, FieldEdit, FieldView, FormError, FormVariant};
use crate::constants::FIELD_FREE_TEXT;
use crate::widget::category::Category;
use crate::widget::submission::{Submission, SubmissionPayload};

/// Single free-text suggestion
#[derive(Debug, Clone, Default)]
pub struct SuggestionForm {
    text: String,
}

impl SuggestionForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }
}

impl FormVariant for SuggestionForm {
    fn category(&self) -> Category {
        Category::Suggestion
    }

    fn fields(&self) -> Vec<FieldView<'_>> {
        vec![FieldView::text(FIELD_FREE_TEXT, &self.text, true)]
    }

    fn apply(&mut self, index: usize, edit: FieldEdit) {
        if index == 0 {
            edit_text(&mut self.text, edit);
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        require(FIELD_FREE_TEXT, &self.text)
    }

    fn submit(&self) -> Result<Submission, FormError> {
        self.validate()?;
        Ok(Submission::new(
            Category::Suggestion,
            SubmissionPayload::Suggestion { text: self.text.clone() },
        ))
    }
}
