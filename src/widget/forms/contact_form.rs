use super::{edit_text, require, FieldEdit, FieldView, FormError, FormVariant};
use crate::constants::{FIELD_CONTACT_EMAIL, FIELD_CONTACT_MESSAGE, FIELD_CONTACT_NAME};
use crate::widget::category::Category;
use crate::widget::submission::{Submission, SubmissionPayload};

const NAME: usize = 0;
const EMAIL: usize = 1;
const MESSAGE: usize = 2;

/// Contact request: name, email and message, all required.
///
/// The email is only checked for presence, not for shape.
#[derive(Debug, Clone, Default)]
pub struct ContactForm {
    name: String,
    email: String,
    message: String,
}

impl ContactForm {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    #[must_use]
    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_email(&mut self, email: impl Into<String>) {
        self.email = email.into();
    }

    pub fn set_message(&mut self, message: impl Into<String>) {
        self.message = message.into();
    }
}

impl FormVariant for ContactForm {
    fn category(&self) -> Category {
        Category::Contact
    }

    fn fields(&self) -> Vec<FieldView<'_>> {
        vec![
            FieldView::text(FIELD_CONTACT_NAME, &self.name, false),
            FieldView::text(FIELD_CONTACT_EMAIL, &self.email, false),
            FieldView::text(FIELD_CONTACT_MESSAGE, &self.message, true),
        ]
    }

    fn apply(&mut self, index: usize, edit: FieldEdit) {
        let buffer = match index {
            NAME => &mut self.name,
            EMAIL => &mut self.email,
            MESSAGE => &mut self.message,
            _ => return,
        };
        edit_text(buffer, edit);
    }

    fn validate(&self) -> Result<(), FormError> {
        require(FIELD_CONTACT_NAME, &self.name)?;
        require(FIELD_CONTACT_EMAIL, &self.email)?;
        require(FIELD_CONTACT_MESSAGE, &self.message)
    }

    fn submit(&self) -> Result<Submission, FormError> {
        self.validate()?;
        Ok(Submission::new(
            Category::Contact,
            SubmissionPayload::Contact {
                name: self.name.clone(),
                email: self.email.clone(),
                message: self.message.clone(),
            },
        ))
    }
}
