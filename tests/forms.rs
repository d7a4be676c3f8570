use feedback_fab::widget::category::IssueSection;
use feedback_fab::widget::forms::{ContactForm, FeedbackForm, IssueForm, SuggestionForm};
use feedback_fab::widget::{
    Category, FieldEdit, FieldValue, FormDispatcher, FormError, FormVariant, SubmissionPayload,
};

#[test]
fn test_dispatcher_mounts_matching_variant() {
    for category in Category::ALL {
        let form = FormDispatcher::render(Some(category)).expect("every category has a form");
        assert_eq!(form.category(), category);
        assert!(!form.can_submit(), "{:?} form should start empty", category);
    }
}

#[test]
fn test_dispatcher_without_category_renders_nothing() {
    assert!(FormDispatcher::render(None).is_none());
}

#[test]
fn test_contact_requires_every_field() {
    let mut form = ContactForm::new();
    form.set_name("A");
    form.set_message("hi");
    assert!(!form.can_submit());
    assert_eq!(form.validate(), Err(FormError::MissingField("Your Email")));

    form.set_email("a@b.com");
    assert!(form.can_submit());
}

#[test]
fn test_contact_email_is_not_format_checked() {
    let mut form = ContactForm::new();
    form.set_name("A");
    form.set_email("not an address");
    form.set_message("hi");
    assert!(form.can_submit());
}

#[test]
fn test_issue_requires_section_and_detail() {
    let mut form = IssueForm::new();
    form.set_detail("Buttons overlap");
    assert_eq!(form.validate(), Err(FormError::MissingField("Choose a section")));

    form.set_section(IssueSection::UiUx);
    assert!(form.can_submit());

    form.set_detail("");
    assert_eq!(form.validate(), Err(FormError::MissingField("Describe the issue in detail")));
}

#[test]
fn test_issue_section_cycles_through_menu() {
    let mut form = IssueForm::new();
    form.apply(0, FieldEdit::NextChoice);
    assert_eq!(form.section(), Some(IssueSection::InterviewQuestions));

    form.apply(0, FieldEdit::PreviousChoice);
    assert_eq!(form.section(), Some(IssueSection::Other));

    form.apply(0, FieldEdit::NextChoice);
    assert_eq!(form.section(), Some(IssueSection::InterviewQuestions));

    form.apply(0, FieldEdit::Clear);
    assert_eq!(form.section(), None);
}

#[test]
fn test_issue_fields_expose_section_label() {
    let mut form = IssueForm::new();
    form.set_section(IssueSection::Security);
    let fields = form.fields();
    assert_eq!(fields.len(), 2);
    assert_eq!(fields[0].value, FieldValue::Choice(Some("Security")));
    assert!(fields[1].multiline);
}

#[test]
fn test_feedback_only_requires_text() {
    let mut form = FeedbackForm::new();
    form.apply(1, FieldEdit::Toggle);
    assert!(form.is_anonymous());
    assert!(!form.can_submit());

    form.apply(0, FieldEdit::Insert('o'));
    form.apply(0, FieldEdit::Insert('k'));
    assert_eq!(form.text(), "ok");
    assert!(form.can_submit());
}

#[test]
fn test_edits_of_wrong_kind_are_ignored() {
    let mut form = FeedbackForm::new();
    form.apply(1, FieldEdit::Insert('x'));
    assert!(!form.is_anonymous());
    form.apply(0, FieldEdit::Toggle);
    assert_eq!(form.text(), "");
    form.apply(7, FieldEdit::SetText("out of range".to_string()));
    assert_eq!(form.text(), "");
}

#[test]
fn test_text_editing() {
    let mut form = SuggestionForm::new();
    form.apply(0, FieldEdit::SetText("abc".to_string()));
    form.apply(0, FieldEdit::Backspace);
    assert_eq!(form.text(), "ab");

    form.apply(0, FieldEdit::Clear);
    assert_eq!(form.text(), "");
    form.apply(0, FieldEdit::Backspace);
    assert_eq!(form.text(), "");
}

#[test]
fn test_whitespace_counts_as_content() {
    let mut form = SuggestionForm::new();
    form.set_text(" ");
    assert!(form.can_submit());
}

#[test]
fn test_submit_packages_values() {
    let mut form = FeedbackForm::new();
    form.set_text("Love it");
    form.set_anonymous(true);

    let submission = form.submit().unwrap();
    assert_eq!(submission.category, Category::Feedback);
    assert_eq!(
        submission.payload,
        SubmissionPayload::Feedback {
            text: "Love it".to_string(),
            anonymous: true,
        }
    );
    assert_eq!(submission.ack_message().to_string(), "Thank you for your valuable feedback");
}

#[test]
fn test_submit_incomplete_form_fails() {
    let form = SuggestionForm::new();
    let err = form.submit().unwrap_err();
    assert_eq!(err.to_string(), "required field 'Write here...' is empty");
}

#[test]
fn test_payload_serializes_with_form_tag() {
    let mut form = IssueForm::new();
    form.set_section(IssueSection::Performance);
    form.set_detail("Slow");

    let json = serde_json::to_value(form.submit().unwrap().payload).unwrap();
    assert_eq!(json["form"], "issue");
    assert_eq!(json["section"], "Performance");
    assert_eq!(json["detail"], "Slow");
}
