use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use tracing::{debug, info};

use crate::catalog::FilterDataCatalog;
use crate::column::{ColumnSpec, CustomDisplay, FilterOptions, FilterType, FooterRenderer, Renderable};
use crate::controls::{
    CheckboxGroupControl, Control, CustomControl, MultiSelectControl, SingleSelectControl,
    TextControl,
};
use crate::host::HostBinding;
use crate::labels::FilterTextLabels;
use crate::value::FilterValue;

/// Panel-wide configuration supplied by the host
#[derive(Clone, Default)]
pub struct PanelOptions {
    /// Default filter type for columns that don't specify one
    pub filter_type: FilterType,
    pub text_labels: FilterTextLabels,
    /// Panel-wide fallback for custom display renderers
    pub filter_options: Option<FilterOptions>,
    pub custom_footer: Option<FooterRenderer>,
}

impl fmt::Debug for PanelOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PanelOptions")
            .field("filter_type", &self.filter_type)
            .field("text_labels", &self.text_labels)
            .field("filter_options", &self.filter_options)
            .field("custom_footer", &self.custom_footer.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// One column's slot in the pending state
#[derive(Debug, Clone)]
struct PendingEntry {
    value: FilterValue,
    column: ColumnSpec,
    resolved_type: FilterType,
}

type PendingState = Rc<RefCell<Vec<PendingEntry>>>;

/// Narrow write/read capability for a single pending slot
///
/// Each control adapter (and each custom renderer) gets one of these for
/// its own column and nothing else; no adapter can see or touch another
/// column's pending value. Single-threaded by construction, hence the
/// plain `Rc<RefCell<..>>`.
#[derive(Clone)]
pub struct SlotUpdater {
    pending: PendingState,
    index: usize,
}

impl SlotUpdater {
    pub fn index(&self) -> usize {
        self.index
    }

    /// Current pending value for this slot
    pub fn get(&self) -> FilterValue {
        self.pending.borrow()[self.index].value.clone()
    }

    /// Replace this slot's pending value; no other slot is touched and no
    /// host callback fires
    pub fn set(&self, value: FilterValue) {
        debug!(
            target: "filter_panel",
            "pending update for column {}: {:?}", self.index, value
        );
        self.pending.borrow_mut()[self.index].value = value;
    }
}

impl fmt::Debug for SlotUpdater {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlotUpdater")
            .field("index", &self.index)
            .finish()
    }
}

/// Owns the transient filter-editing state for one panel session
///
/// The host table keeps the authoritative filter list; this panel tracks
/// per-column pending edits between open and apply/reset. Whenever the
/// host pushes a changed committed list or column set, pending state is
/// rebuilt from scratch: external filter changes always win over unsaved
/// panel edits.
pub struct FilterPanel {
    columns: Vec<ColumnSpec>,
    committed: Vec<FilterValue>,
    options: PanelOptions,
    pending: PendingState,
}

impl FilterPanel {
    pub fn new(
        columns: Vec<ColumnSpec>,
        committed: Vec<FilterValue>,
        options: PanelOptions,
    ) -> Self {
        let panel = Self {
            columns,
            committed,
            options,
            pending: Rc::new(RefCell::new(Vec::new())),
        };
        panel.rebuild();
        panel
    }

    /// Rebuild every pending entry from the committed list
    ///
    /// One entry per column, including non-filterable ones (they render
    /// nothing but keep everything index-addressed). Any in-progress edit
    /// is discarded.
    fn rebuild(&self) {
        debug_assert_eq!(
            self.columns.len(),
            self.committed.len(),
            "host must keep columns and filter list the same length"
        );
        info!(
            target: "filter_panel",
            "rebuilding pending state for {} columns", self.columns.len()
        );

        let entries = self
            .columns
            .iter()
            .enumerate()
            .map(|(i, column)| PendingEntry {
                value: self.committed.get(i).cloned().unwrap_or_default(),
                resolved_type: column.filter_type.unwrap_or(self.options.filter_type),
                column: column.clone(),
            })
            .collect();
        *self.pending.borrow_mut() = entries;
    }

    /// The host's committed filter list changed externally
    pub fn sync_filter_list(&mut self, committed: Vec<FilterValue>) {
        self.committed = committed;
        self.rebuild();
    }

    /// The host's column set changed (the committed list comes with it,
    /// since the two must stay in step)
    pub fn sync_columns(&mut self, columns: Vec<ColumnSpec>, committed: Vec<FilterValue>) {
        self.columns = columns;
        self.committed = committed;
        self.rebuild();
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    pub fn committed(&self) -> &[FilterValue] {
        &self.committed
    }

    pub fn pending_value(&self, index: usize) -> FilterValue {
        self.pending.borrow()[index].value.clone()
    }

    pub fn resolved_type(&self, index: usize) -> FilterType {
        self.pending.borrow()[index].resolved_type
    }

    /// Issue the narrow per-slot capability for one column
    pub fn slot(&self, index: usize) -> SlotUpdater {
        SlotUpdater {
            pending: Rc::clone(&self.pending),
            index,
        }
    }

    /// Build the control adapter for one column, dispatched on its
    /// resolved filter type; `None` for non-filterable columns
    pub fn control<'a>(
        &'a self,
        index: usize,
        catalog: &'a FilterDataCatalog,
    ) -> Option<Control<'a>> {
        let column = self.columns.get(index)?;
        if !column.filterable {
            return None;
        }

        let slot = self.slot(index);
        let control = match column.filter_type.unwrap_or(self.options.filter_type) {
            FilterType::Checkbox => Control::Checkbox(CheckboxGroupControl::new(
                slot,
                catalog.values_for(index),
                column,
            )),
            FilterType::MultiSelect => Control::MultiSelect(MultiSelectControl::new(
                slot,
                catalog.values_for(index),
                column,
            )),
            FilterType::Text => Control::Text(TextControl::new(slot, column)),
            FilterType::Custom => Control::Custom(CustomControl::new(
                slot,
                index,
                column,
                self.custom_display_for(column),
                &self.committed,
            )),
            FilterType::Select => Control::Select(SingleSelectControl::new(
                slot,
                catalog.values_for(index),
                column,
                &self.options.text_labels,
            )),
        };
        Some(control)
    }

    /// Column-level display renderer, falling back to the panel-wide one
    fn custom_display_for(&self, column: &ColumnSpec) -> Option<CustomDisplay> {
        column
            .filter_options
            .as_ref()
            .and_then(|o| o.display.clone())
            .or_else(|| {
                self.options
                    .filter_options
                    .as_ref()
                    .and_then(|o| o.display.clone())
            })
    }

    /// Reconcile pending edits back into the host's filter list
    ///
    /// Walks columns in index order. A column is skipped only when its
    /// pending value equals the committed one AND it is not custom-typed;
    /// custom payloads are always forwarded since the panel cannot verify
    /// their equality. After all per-column notifications the host gets a
    /// single apply signal to recompute its visible rows.
    ///
    /// The panel's committed copy advances to the forwarded values (the
    /// host's contract is to store exactly what it was handed), so applying
    /// again without further edits sends no per-column notifications.
    pub fn apply(&mut self, host: &mut dyn HostBinding) {
        let updates: Vec<(usize, FilterValue, ColumnSpec, FilterType)> = self
            .pending
            .borrow()
            .iter()
            .enumerate()
            .filter_map(|(i, entry)| {
                let unchanged = self.committed.get(i) == Some(&entry.value);
                if unchanged && entry.resolved_type != FilterType::Custom {
                    return None;
                }
                Some((i, entry.value.clone(), entry.column.clone(), entry.resolved_type))
            })
            .collect();

        info!(
            target: "filter_panel",
            "apply: {} of {} columns changed", updates.len(), self.columns.len()
        );

        for (index, value, column, filter_type) in updates {
            if let Some(slot) = self.committed.get_mut(index) {
                *slot = value.clone();
            }
            host.on_filter_update(index, value, &column, filter_type);
        }
        host.on_filter_apply();
    }

    /// Ask the host to clear its filter list
    ///
    /// Pending state is deliberately left alone here; the host answers by
    /// pushing its cleared list through `sync_filter_list`, which rebuilds.
    pub fn reset(&self, host: &mut dyn HostBinding) {
        info!(target: "filter_panel", "reset requested, deferring to host");
        host.on_filter_reset();
    }

    /// Render the optional custom footer against the committed list
    pub fn footer(&self) -> Option<Renderable> {
        self.options
            .custom_footer
            .as_ref()
            .map(|footer| footer(&self.committed))
    }
}

impl fmt::Debug for FilterPanel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterPanel")
            .field("columns", &self.columns.len())
            .field("committed", &self.committed)
            .field("pending", &self.pending.borrow())
            .finish()
    }
}
