pub mod checkbox_group;
pub mod custom;
pub mod multi_select;
pub mod single_select;
pub mod text_field;

pub use checkbox_group::{CheckboxGroupControl, CheckboxGroupView};
pub use custom::CustomControl;
pub use multi_select::{MultiSelectControl, MultiSelectView};
pub use single_select::{SelectView, SingleSelectControl};
pub use text_field::{TextControl, TextView};

use crate::column::FilterType;

/// One selectable option and whether it is currently part of the pending set
#[derive(Debug, Clone, PartialEq)]
pub struct ChoiceState {
    pub value: String,
    pub checked: bool,
}

/// The control adapter for one filterable column, dispatched on the
/// column's resolved filter type
///
/// Every variant follows the same two-way contract: current pending value
/// and catalog in, new pending value out through the column's slot.
pub enum Control<'a> {
    Select(SingleSelectControl<'a>),
    MultiSelect(MultiSelectControl<'a>),
    Checkbox(CheckboxGroupControl<'a>),
    Text(TextControl<'a>),
    Custom(CustomControl<'a>),
}

impl Control<'_> {
    pub fn filter_type(&self) -> FilterType {
        match self {
            Control::Select(_) => FilterType::Select,
            Control::MultiSelect(_) => FilterType::MultiSelect,
            Control::Checkbox(_) => FilterType::Checkbox,
            Control::Text(_) => FilterType::Text,
            Control::Custom(_) => FilterType::Custom,
        }
    }
}
