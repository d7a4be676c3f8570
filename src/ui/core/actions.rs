use crate::widget::{Category, FieldEdit};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    // Widget
    ToggleWidget,
    SelectCategory(Category),

    // Picker navigation
    PickerNext,
    PickerPrevious,
    PickerConfirm,

    // Form editing
    EditField(FieldEdit),
    FocusNext,
    FocusPrevious,
    SubmitForm,

    // UI operations
    CycleIconTheme,

    // App control
    Quit,
    None,
}
