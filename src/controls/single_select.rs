use crate::column::ColumnSpec;
use crate::labels::FilterTextLabels;
use crate::panel::SlotUpdater;
use crate::value::FilterValue;

/// Single-choice dropdown adapter
///
/// Shows the "all" sentinel plus one entry per catalog value. Choosing the
/// sentinel clears the column's pending filter; choosing anything else
/// narrows it to that single value. Stateless between interactions.
pub struct SingleSelectControl<'a> {
    slot: SlotUpdater,
    catalog: &'a [String],
    column: &'a ColumnSpec,
    labels: &'a FilterTextLabels,
}

/// View model for a single-select control
#[derive(Debug, Clone, PartialEq)]
pub struct SelectView {
    pub label: String,
    /// The "all" sentinel followed by every catalog value
    pub choices: Vec<String>,
    /// The currently-displayed choice
    pub selected: String,
}

impl<'a> SingleSelectControl<'a> {
    pub(crate) fn new(
        slot: SlotUpdater,
        catalog: &'a [String],
        column: &'a ColumnSpec,
        labels: &'a FilterTextLabels,
    ) -> Self {
        Self {
            slot,
            catalog,
            column,
            labels,
        }
    }

    pub fn view(&self) -> SelectView {
        let current = self.slot.get();
        let selected = if current.values().is_empty() {
            self.labels.all.clone()
        } else {
            current.to_display_string()
        };

        let mut choices = Vec::with_capacity(self.catalog.len() + 1);
        choices.push(self.labels.all.clone());
        choices.extend(self.catalog.iter().cloned());

        SelectView {
            label: self.column.label.clone(),
            choices,
            selected,
        }
    }

    /// The widget reported a selection
    pub fn choose(&self, choice: &str) {
        let value = if choice == self.labels.all {
            FilterValue::empty()
        } else {
            FilterValue::single(choice)
        };
        self.slot.set(value);
    }
}
