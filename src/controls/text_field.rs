use crate::column::ColumnSpec;
use crate::panel::SlotUpdater;
use crate::value::FilterValue;

/// Free-text field adapter
///
/// Every keystroke forwards the raw string immediately; there is no
/// debouncing here, the host commits nothing until Apply anyway.
pub struct TextControl<'a> {
    slot: SlotUpdater,
    column: &'a ColumnSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TextView {
    pub label: String,
    pub value: String,
}

impl<'a> TextControl<'a> {
    pub(crate) fn new(slot: SlotUpdater, column: &'a ColumnSpec) -> Self {
        Self { slot, column }
    }

    pub fn view(&self) -> TextView {
        TextView {
            label: self.column.label.clone(),
            value: self.slot.get().to_display_string(),
        }
    }

    /// The field's content changed
    pub fn input(&self, text: impl Into<String>) {
        self.slot.set(FilterValue::Text(text.into()));
    }
}
