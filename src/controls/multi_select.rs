use crate::column::ColumnSpec;
use crate::controls::ChoiceState;
use crate::panel::SlotUpdater;
use crate::value::FilterValue;

/// Multi-choice list adapter
///
/// Each catalog entry carries a checked indicator. The underlying widget
/// hands back the full newly-selected set on every change, so the adapter
/// forwards it verbatim; it never diffs or toggles.
pub struct MultiSelectControl<'a> {
    slot: SlotUpdater,
    catalog: &'a [String],
    column: &'a ColumnSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct MultiSelectView {
    pub label: String,
    pub choices: Vec<ChoiceState>,
}

impl<'a> MultiSelectControl<'a> {
    pub(crate) fn new(slot: SlotUpdater, catalog: &'a [String], column: &'a ColumnSpec) -> Self {
        Self {
            slot,
            catalog,
            column,
        }
    }

    pub fn view(&self) -> MultiSelectView {
        let current = self.slot.get();
        MultiSelectView {
            label: self.column.label.clone(),
            choices: self
                .catalog
                .iter()
                .map(|value| ChoiceState {
                    checked: current.contains(value),
                    value: value.clone(),
                })
                .collect(),
        }
    }

    /// The widget reported a new full selection
    pub fn select(&self, selected: Vec<String>) {
        self.slot.set(FilterValue::Values(selected));
    }
}
