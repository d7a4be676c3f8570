use super::ack::AckMessage;
use super::category::Category;
use super::forms::FormVariant;

/// Visible state of the widget.
///
/// One variant per surface, so the form and the acknowledgement can never be
/// shown together and a category can never be active while the widget is closed.
#[derive(Debug, Default)]
pub enum WidgetState {
    #[default]
    Closed,
    PickerOpen,
    FormOpen { form: Box<dyn FormVariant> },
    Acknowledged { message: AckMessage },
}

impl WidgetState {
    /// Whether the category picker is visible
    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self, WidgetState::PickerOpen | WidgetState::FormOpen { .. })
    }

    #[must_use]
    pub fn active_category(&self) -> Option<Category> {
        match self {
            WidgetState::FormOpen { form } => Some(form.category()),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_acknowledged(&self) -> bool {
        matches!(self, WidgetState::Acknowledged { .. })
    }

    #[must_use]
    pub fn ack_message(&self) -> Option<AckMessage> {
        match self {
            WidgetState::Acknowledged { message } => Some(*message),
            _ => None,
        }
    }

    /// Short name used in logs
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            WidgetState::Closed => "Closed",
            WidgetState::PickerOpen => "PickerOpen",
            WidgetState::FormOpen { .. } => "FormOpen",
            WidgetState::Acknowledged { .. } => "Acknowledged",
        }
    }
}
