use super::{edit_text, require, FieldEdit, FieldValue, FieldView, FormError, FormVariant};
use crate::constants::{FIELD_ISSUE_DETAIL, FIELD_ISSUE_SECTION};
use crate::widget::category::{Category, IssueSection};
use crate::widget::submission::{Submission, SubmissionPayload};

const SECTION: usize = 0;
const DETAIL: usize = 1;

/// Issue report: a section picked from a fixed menu plus a free-text description
#[derive(Debug, Clone, Default)]
pub struct IssueForm {
    section: Option<IssueSection>,
    detail: String,
}

impl IssueForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn section(&self) -> Option<IssueSection> {
        self.section
    }

    #[must_use]
    pub fn detail(&self) -> &str {
        &self.detail
    }

    pub fn set_section(&mut self, section: IssueSection) {
        self.section = Some(section);
    }

    pub fn set_detail(&mut self, detail: impl Into<String>) {
        self.detail = detail.into();
    }

    fn cycle_section(&mut self, forward: bool) {
        self.section = Some(match (self.section, forward) {
            (None, true) => IssueSection::ALL[0],
            (None, false) => IssueSection::ALL[IssueSection::ALL.len() - 1],
            (Some(current), true) => current.next(),
            (Some(current), false) => current.previous(),
        });
    }
}

impl FormVariant for IssueForm {
    fn category(&self) -> Category {
        Category::Issue
    }

    fn fields(&self) -> Vec<FieldView<'_>> {
        vec![
            FieldView {
                label: FIELD_ISSUE_SECTION,
                value: FieldValue::Choice(self.section.map(IssueSection::label)),
                required: true,
                multiline: false,
            },
            FieldView::text(FIELD_ISSUE_DETAIL, &self.detail, true),
        ]
    }

    fn apply(&mut self, index: usize, edit: FieldEdit) {
        match (index, edit) {
            (SECTION, FieldEdit::NextChoice) => self.cycle_section(true),
            (SECTION, FieldEdit::PreviousChoice) => self.cycle_section(false),
            (SECTION, FieldEdit::Clear) => self.section = None,
            (DETAIL, edit) => edit_text(&mut self.detail, edit),
            _ => {}
        }
    }

    fn validate(&self) -> Result<(), FormError> {
        if self.section.is_none() {
            return Err(FormError::MissingField(FIELD_ISSUE_SECTION));
        }
        require(FIELD_ISSUE_DETAIL, &self.detail)
    }

    fn submit(&self) -> Result<Submission, FormError> {
        self.validate()?;
        let section = self.section.ok_or(FormError::MissingField(FIELD_ISSUE_SECTION))?;
        Ok(Submission::new(
            Category::Issue,
            SubmissionPayload::Issue {
                section,
                detail: self.detail.clone(),
            },
        ))
    }
}
