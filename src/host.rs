use crate::column::{ColumnSpec, FilterType};
use crate::value::FilterValue;

/// Callback contract between the filter panel and the host table
///
/// The host owns the authoritative filter list; the panel only talks back
/// through these three callbacks. During Apply the panel calls
/// `on_filter_update` once per changed column in index order, then
/// `on_filter_apply` exactly once. Reset produces a single
/// `on_filter_reset`; the host answers by pushing its cleared filter list
/// back into the panel, which rebuilds pending state.
pub trait HostBinding {
    fn on_filter_update(
        &mut self,
        column_index: usize,
        value: FilterValue,
        column: &ColumnSpec,
        filter_type: FilterType,
    );

    fn on_filter_apply(&mut self);

    fn on_filter_reset(&mut self);
}
