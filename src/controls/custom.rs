use tracing::error;

use crate::column::{ColumnSpec, CustomDisplay, Renderable};
use crate::panel::SlotUpdater;
use crate::value::FilterValue;

/// Adapter for host-supplied custom controls
///
/// Delegates rendering entirely to the display function configured on the
/// column (or panel-wide). The updater handed to that function forwards
/// whatever value the custom widget produces as this column's pending
/// value; the panel never inspects its shape.
pub struct CustomControl<'a> {
    slot: SlotUpdater,
    index: usize,
    column: &'a ColumnSpec,
    display: Option<CustomDisplay>,
    committed: &'a [FilterValue],
}

impl<'a> CustomControl<'a> {
    pub(crate) fn new(
        slot: SlotUpdater,
        index: usize,
        column: &'a ColumnSpec,
        display: Option<CustomDisplay>,
        committed: &'a [FilterValue],
    ) -> Self {
        Self {
            slot,
            index,
            column,
            display,
            committed,
        }
    }

    /// Invoke the host's display renderer
    ///
    /// A custom column without a renderer is a configuration error: it is
    /// logged and the column renders nothing, the rest of the panel stays
    /// usable.
    pub fn render(&self) -> Option<Renderable> {
        let Some(display) = &self.display else {
            error!(
                target: "filter_panel",
                "column '{}' uses the custom filter type but no display renderer was supplied",
                self.column.name
            );
            return None;
        };
        Some(display(
            self.committed,
            self.slot.clone(),
            self.index,
            self.column,
        ))
    }

    /// Forward a value produced by the custom widget
    pub fn update(&self, value: FilterValue) {
        self.slot.set(value);
    }
}
