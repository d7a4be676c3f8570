use std::time::Duration;

use feedback_fab::widget::{
    Category, DismissalTimer, FieldEdit, FormVariant, MemorySink, SubmissionPayload, WidgetController, WidgetState,
};

/// Let spawned timer tasks run after the paused clock moved
async fn settle() {
    for _ in 0..10 {
        tokio::task::yield_now().await;
    }
}

async fn advance_ms(controller: &mut WidgetController, ms: u64) {
    tokio::time::advance(Duration::from_millis(ms)).await;
    settle().await;
    controller.process_background_actions();
}

fn fill(controller: &mut WidgetController, values: &[&str]) {
    let form = controller.form_mut().expect("a form should be open");
    for (index, value) in values.iter().enumerate() {
        form.apply(index, FieldEdit::SetText(value.to_string()));
    }
}

fn fill_issue(controller: &mut WidgetController) {
    let form = controller.form_mut().expect("issue form should be open");
    form.apply(0, FieldEdit::NextChoice);
    form.apply(1, FieldEdit::SetText("Crash on save".to_string()));
}

#[test]
fn test_starts_closed() {
    let controller = WidgetController::new();
    assert!(matches!(controller.state(), WidgetState::Closed));
    assert!(!controller.is_open());
    assert!(controller.active_category().is_none());
    assert!(!controller.is_acknowledged());
    assert!(controller.ack_message().is_none());
}

#[test]
fn test_toggle_parity() {
    let mut controller = WidgetController::new();
    for n in 1..=7 {
        controller.toggle();
        assert_eq!(controller.is_open(), n % 2 == 1, "after {} toggles", n);
    }
}

#[test]
fn test_toggle_closes_open_form() {
    let mut controller = WidgetController::new();
    controller.select_category(Category::Suggestion);
    controller.toggle();
    assert!(matches!(controller.state(), WidgetState::Closed));
    assert!(controller.form().is_none());
}

#[test]
fn test_select_category_while_closed_opens_widget() {
    for category in Category::ALL {
        let mut controller = WidgetController::new();
        controller.select_category(category);
        assert!(controller.is_open());
        assert_eq!(controller.active_category(), Some(category));
        assert_eq!(controller.form().map(|form| form.category()), Some(category));
    }
}

#[test]
fn test_select_category_from_picker() {
    let mut controller = WidgetController::new();
    controller.toggle();
    assert!(matches!(controller.state(), WidgetState::PickerOpen));

    controller.select_category(Category::Contact);
    assert_eq!(controller.active_category(), Some(Category::Contact));
}

#[test]
fn test_switching_category_discards_fields() {
    let mut controller = WidgetController::new();
    controller.select_category(Category::Issue);
    fill_issue(&mut controller);
    assert!(controller.can_submit());

    controller.select_category(Category::Feedback);
    assert_eq!(controller.active_category(), Some(Category::Feedback));

    controller.select_category(Category::Issue);
    let form = controller.form().expect("issue form should be open");
    assert!(!form.can_submit());
    assert!(form.fields().iter().all(|field| match field.value {
        feedback_fab::widget::FieldValue::Text(text) => text.is_empty(),
        feedback_fab::widget::FieldValue::Choice(choice) => choice.is_none(),
        feedback_fab::widget::FieldValue::Flag(flag) => !flag,
    }));
}

#[test]
fn test_reselecting_active_category_keeps_fields() {
    let mut controller = WidgetController::new();
    controller.select_category(Category::Suggestion);
    fill(&mut controller, &["Dark mode"]);

    controller.select_category(Category::Suggestion);
    assert!(controller.can_submit());
}

#[test]
fn test_submit_without_form_is_ignored() {
    let mut controller = WidgetController::new();
    assert!(!controller.submit());
    assert!(matches!(controller.state(), WidgetState::Closed));

    controller.toggle();
    assert!(!controller.submit());
    assert!(matches!(controller.state(), WidgetState::PickerOpen));
}

#[test]
fn test_submit_incomplete_form_is_ignored() {
    let sink = MemorySink::new();
    let mut controller = WidgetController::with_sink(Box::new(sink.clone()));
    controller.select_category(Category::Contact);
    fill(&mut controller, &["A", "", "hi"]);

    assert!(!controller.can_submit());
    assert!(!controller.submit());
    assert_eq!(controller.active_category(), Some(Category::Contact));
    assert!(sink.submissions().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_contact_scenario() {
    let sink = MemorySink::new();
    let mut controller = WidgetController::with_sink(Box::new(sink.clone()));

    controller.toggle();
    controller.select_category(Category::Contact);
    fill(&mut controller, &["A", "a@b.com", "hi"]);
    assert!(controller.submit());

    assert!(!controller.is_open());
    assert!(controller.active_category().is_none());
    assert!(controller.is_acknowledged());
    assert_eq!(
        controller.ack_message().map(|m| m.to_string()).as_deref(),
        Some("Thank you for reaching out to us! We will get back to you as soon as possible.")
    );

    let submissions = sink.submissions();
    assert_eq!(submissions.len(), 1);
    assert_eq!(
        submissions[0].payload,
        SubmissionPayload::Contact {
            name: "A".to_string(),
            email: "a@b.com".to_string(),
            message: "hi".to_string(),
        }
    );
}

#[tokio::test(start_paused = true)]
async fn test_ack_message_ignores_field_contents() {
    let mut controller = WidgetController::new();
    controller.select_category(Category::Feedback);
    fill(&mut controller, &["SECRET-VALUE"]);
    assert!(controller.submit());

    let message = controller.ack_message().expect("acknowledgement expected").to_string();
    assert_eq!(message, "Thank you for your valuable feedback");
    assert!(!message.contains("SECRET-VALUE"));
}

#[tokio::test(start_paused = true)]
async fn test_acknowledgement_dismissed_after_five_seconds() {
    let mut controller = WidgetController::new();
    controller.select_category(Category::Suggestion);
    fill(&mut controller, &["More shortcuts"]);
    assert!(controller.submit());
    assert!(controller.has_pending_dismissal());

    advance_ms(&mut controller, 4000).await;
    assert!(controller.is_acknowledged());

    advance_ms(&mut controller, 1000).await;
    assert!(matches!(controller.state(), WidgetState::Closed));
    assert!(!controller.is_open());
    assert!(controller.ack_message().is_none());
    assert!(!controller.has_pending_dismissal());
}

#[tokio::test(start_paused = true)]
async fn test_stale_timer_does_not_clear_newer_acknowledgement() {
    let mut controller = WidgetController::new();

    controller.select_category(Category::Issue);
    fill_issue(&mut controller);
    assert!(controller.submit());

    advance_ms(&mut controller, 2000).await;
    controller.toggle();
    controller.select_category(Category::Feedback);
    fill(&mut controller, &["Nice widget"]);
    assert!(controller.submit());

    // Five seconds after the first submission
    advance_ms(&mut controller, 3000).await;
    assert!(controller.is_acknowledged());
    assert_eq!(
        controller.ack_message().map(|m| m.to_string()).as_deref(),
        Some("Thank you for your valuable feedback")
    );

    // Five seconds after the second one
    advance_ms(&mut controller, 2000).await;
    assert!(matches!(controller.state(), WidgetState::Closed));
}

#[tokio::test(start_paused = true)]
async fn test_toggle_while_acknowledged_reopens_picker() {
    let mut controller = WidgetController::new();
    controller.select_category(Category::Suggestion);
    fill(&mut controller, &["Idea"]);
    assert!(controller.submit());

    controller.toggle();
    assert!(matches!(controller.state(), WidgetState::PickerOpen));
    assert!(!controller.is_acknowledged());
    assert!(!controller.has_pending_dismissal());

    // The cancelled timer never closes the reopened picker
    advance_ms(&mut controller, 6000).await;
    assert!(matches!(controller.state(), WidgetState::PickerOpen));
}

#[tokio::test(start_paused = true)]
async fn test_select_while_acknowledged_cancels_dismissal() {
    let mut controller = WidgetController::new();
    controller.select_category(Category::Suggestion);
    fill(&mut controller, &["Idea"]);
    assert!(controller.submit());

    controller.select_category(Category::Contact);
    assert_eq!(controller.active_category(), Some(Category::Contact));
    assert!(!controller.has_pending_dismissal());

    advance_ms(&mut controller, 6000).await;
    assert_eq!(controller.active_category(), Some(Category::Contact));
}

#[tokio::test(start_paused = true)]
async fn test_rescheduling_invalidates_previous_token() {
    let (mut timer, mut fired) = DismissalTimer::new();
    let first = timer.schedule(Duration::from_millis(5000)).expect("runtime available");
    let second = timer.schedule(Duration::from_millis(5000)).expect("runtime available");

    assert_ne!(first, second);
    assert!(!timer.is_current(first));
    assert!(timer.is_current(second));

    tokio::time::advance(Duration::from_millis(5000)).await;
    settle().await;

    assert_eq!(fired.try_recv().ok(), Some(second));
    assert!(fired.try_recv().is_err());
}

#[tokio::test(start_paused = true)]
async fn test_dropping_timer_cancels_pending_callback() {
    let (mut timer, mut fired) = DismissalTimer::new();
    assert!(timer.schedule(Duration::from_millis(5000)).is_some());
    drop(timer);

    tokio::time::advance(Duration::from_millis(6000)).await;
    settle().await;

    assert!(fired.try_recv().is_err());
}

#[test]
fn test_submit_outside_runtime_acknowledges_without_timer() {
    let sink = MemorySink::new();
    let mut controller = WidgetController::with_sink(Box::new(sink.clone()));
    controller.select_category(Category::Suggestion);
    fill(&mut controller, &["x"]);

    assert!(controller.submit());
    assert!(controller.is_acknowledged());
    assert!(!controller.has_pending_dismissal());
    assert_eq!(sink.submissions().len(), 1);

    // The acknowledgement can still be left by hand
    controller.toggle();
    assert!(matches!(controller.state(), WidgetState::PickerOpen));
}

#[test]
fn test_schedule_outside_runtime_leaves_nothing_pending() {
    let (mut timer, _fired) = DismissalTimer::new();
    assert!(timer.schedule(Duration::from_millis(5000)).is_none());
    assert!(!timer.is_pending());
}

/// Fill every field of the mounted form with something valid
fn fill_any(form: &mut dyn FormVariant) {
    if form.category() == Category::Issue {
        form.apply(0, FieldEdit::NextChoice);
        form.apply(1, FieldEdit::SetText("detail".to_string()));
    } else {
        for index in 0..form.fields().len() {
            form.apply(index, FieldEdit::SetText("value".to_string()));
        }
    }
}

#[tokio::test(start_paused = true)]
async fn test_each_category_shows_its_fixed_acknowledgement() {
    let expected = [
        (
            Category::Issue,
            "Thank you for reporting the issue! We will review it and get back to you soon.",
        ),
        (Category::Feedback, "Thank you for your valuable feedback"),
        (Category::Suggestion, "Thank you for your valuable suggestion"),
        (
            Category::Contact,
            "Thank you for reaching out to us! We will get back to you as soon as possible.",
        ),
    ];
    assert_eq!(expected.len(), Category::ALL.len());

    for (category, text) in expected {
        let mut controller = WidgetController::new();
        controller.select_category(category);
        fill_any(controller.form_mut().expect("form should be open"));
        assert!(controller.submit(), "{:?} form should submit", category);

        let message = controller.ack_message().expect("acknowledgement expected");
        assert!(!message.is_empty());
        assert_eq!(message.to_string(), text, "{:?}", category);
    }
}

#[test]
fn test_ack_lines_are_never_empty() {
    for category in Category::ALL {
        let message = category.ack_message();
        assert!(!message.is_empty());
        assert!(message.lines().iter().all(|line| !line.is_empty()), "{:?}", category);
    }
    assert_eq!(Category::Issue.ack_message().lines().len(), 2);
}
