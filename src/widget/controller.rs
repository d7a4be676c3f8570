use tokio::sync::mpsc;

use super::ack::AckMessage;
use super::category::Category;
use super::forms::{FormDispatcher, FormVariant};
use super::state::WidgetState;
use super::submission::{LogSink, SubmissionSink};
use super::timer::{DismissalTimer, TimerToken};
use crate::constants::ACK_DISMISS_AFTER;

/// Owns the widget state machine and its dismissal timer.
///
/// Events that do not apply to the current state are ignored (and logged at
/// debug level); no event can leave the widget without a way back to
/// [`WidgetState::Closed`].
pub struct WidgetController {
    state: WidgetState,
    timer: DismissalTimer,
    fired_rx: mpsc::UnboundedReceiver<TimerToken>,
    sink: Box<dyn SubmissionSink>,
}

impl Default for WidgetController {
    fn default() -> Self {
        Self::new()
    }
}

impl WidgetController {
    pub fn new() -> Self {
        Self::with_sink(Box::new(LogSink))
    }

    /// Create a controller handing accepted submissions to `sink`
    pub fn with_sink(sink: Box<dyn SubmissionSink>) -> Self {
        let (timer, fired_rx) = DismissalTimer::new();
        Self {
            state: WidgetState::Closed,
            timer,
            fired_rx,
            sink,
        }
    }

    pub fn state(&self) -> &WidgetState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open()
    }

    pub fn active_category(&self) -> Option<Category> {
        self.state.active_category()
    }

    pub fn is_acknowledged(&self) -> bool {
        self.state.is_acknowledged()
    }

    pub fn ack_message(&self) -> Option<AckMessage> {
        self.state.ack_message()
    }

    /// The mounted form, if a category is active
    pub fn form(&self) -> Option<&dyn FormVariant> {
        match &self.state {
            WidgetState::FormOpen { form } => Some(form.as_ref()),
            _ => None,
        }
    }

    pub fn form_mut(&mut self) -> Option<&mut dyn FormVariant> {
        match &mut self.state {
            WidgetState::FormOpen { form } => Some(form.as_mut()),
            _ => None,
        }
    }

    /// Whether the submit control is enabled right now
    pub fn can_submit(&self) -> bool {
        self.form().is_some_and(|form| form.can_submit())
    }

    /// Whether a dismissal is still scheduled
    pub fn has_pending_dismissal(&self) -> bool {
        self.timer.is_pending()
    }

    /// Flip the widget open or closed.
    ///
    /// Closing discards any mounted form. Toggling while an acknowledgement is
    /// shown reopens the picker and cancels the pending dismissal.
    pub fn toggle(&mut self) {
        let next = match &self.state {
            WidgetState::Closed => WidgetState::PickerOpen,
            WidgetState::PickerOpen | WidgetState::FormOpen { .. } => WidgetState::Closed,
            WidgetState::Acknowledged { .. } => {
                self.timer.cancel();
                WidgetState::PickerOpen
            }
        };
        self.transition(next);
    }

    /// Mount the form for `category`, opening the widget if needed.
    ///
    /// Switching to another category drops the current form and its fields.
    /// Selecting the category that is already active keeps the form as is.
    pub fn select_category(&mut self, category: Category) {
        match &self.state {
            WidgetState::FormOpen { form } if form.category() == category => {
                log::debug!("Widget: {:?} form already open", category);
                return;
            }
            WidgetState::Acknowledged { .. } => self.timer.cancel(),
            _ => {}
        }

        if let Some(form) = FormDispatcher::render(Some(category)) {
            self.transition(WidgetState::FormOpen { form });
        }
    }

    /// Submit the mounted form.
    ///
    /// Returns `false` without changing anything when no form is open or a
    /// required field is empty. On success the submission goes to the sink,
    /// the dismissal timer restarts and the acknowledgement replaces the form.
    ///
    /// Outside a tokio runtime no timer can be scheduled: the acknowledgement
    /// then stays until the next [`toggle`](Self::toggle) or category selection.
    pub fn submit(&mut self) -> bool {
        let submission = match &self.state {
            WidgetState::FormOpen { form } => match form.submit() {
                Ok(submission) => submission,
                Err(e) => {
                    log::debug!("Widget: ignoring submit, {}", e);
                    return false;
                }
            },
            other => {
                log::debug!("Widget: ignoring submit while {}", other.name());
                return false;
            }
        };

        self.sink.deliver(&submission);
        let message = submission.ack_message();
        self.timer.schedule(ACK_DISMISS_AFTER);
        self.transition(WidgetState::Acknowledged { message });
        true
    }

    /// Timer callback: clear the acknowledgement if `token` is still current
    pub fn dismiss(&mut self, token: TimerToken) -> bool {
        if !self.timer.is_current(token) {
            log::debug!("Widget: ignoring stale dismissal {:?}", token);
            return false;
        }
        self.timer.complete(token);

        if self.state.is_acknowledged() {
            self.transition(WidgetState::Closed);
            true
        } else {
            false
        }
    }

    /// Apply every dismissal that fired since the last call.
    ///
    /// Returns how many of them actually changed the state.
    pub fn process_background_actions(&mut self) -> usize {
        let mut applied = 0;
        while let Ok(token) = self.fired_rx.try_recv() {
            if self.dismiss(token) {
                applied += 1;
            }
        }
        applied
    }

    fn transition(&mut self, next: WidgetState) {
        log::debug!("Widget: {} -> {}", self.state.name(), next.name());
        self.state = next;
    }
}
