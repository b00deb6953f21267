use crate::column::ColumnSpec;
use crate::controls::ChoiceState;
use crate::panel::SlotUpdater;
use crate::value::FilterValue;

/// One-checkbox-per-value adapter
///
/// Toggling a checkbox adds the value if absent or removes it if present,
/// leaving the rest of the set intact. Each toggle produces a fresh
/// collection so the previous pending value is never mutated in place.
pub struct CheckboxGroupControl<'a> {
    slot: SlotUpdater,
    catalog: &'a [String],
    column: &'a ColumnSpec,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CheckboxGroupView {
    pub label: String,
    pub boxes: Vec<ChoiceState>,
}

impl<'a> CheckboxGroupControl<'a> {
    pub(crate) fn new(slot: SlotUpdater, catalog: &'a [String], column: &'a ColumnSpec) -> Self {
        Self {
            slot,
            catalog,
            column,
        }
    }

    pub fn view(&self) -> CheckboxGroupView {
        let current = self.slot.get();
        CheckboxGroupView {
            label: self.column.label.clone(),
            boxes: self
                .catalog
                .iter()
                .map(|value| ChoiceState {
                    checked: current.contains(value),
                    value: value.clone(),
                })
                .collect(),
        }
    }

    /// One checkbox changed state
    pub fn toggle(&self, value: &str) {
        let mut updated = self.slot.get().values().to_vec();
        if let Some(pos) = updated.iter().position(|v| v == value) {
            updated.remove(pos);
        } else {
            updated.push(value.to_string());
        }
        self.slot.set(FilterValue::Values(updated));
    }
}
