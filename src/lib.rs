pub mod catalog;
pub mod column;
pub mod controls;
pub mod host;
pub mod labels;
pub mod logging;
pub mod panel;
pub mod value;

pub use catalog::FilterDataCatalog;
pub use column::{ColumnSpec, FilterOptions, FilterType, Renderable};
pub use controls::Control;
pub use host::HostBinding;
pub use labels::FilterTextLabels;
pub use panel::{FilterPanel, PanelOptions, SlotUpdater};
pub use value::FilterValue;
