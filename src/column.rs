use std::fmt;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

use crate::panel::SlotUpdater;
use crate::value::FilterValue;

/// What the host renders for custom controls and footers
///
/// The panel treats this as opaque; it is only a concrete type so that
/// host-supplied renderers have something to return.
pub type Renderable = ratatui::text::Text<'static>;

/// Host-supplied renderer for a custom-type column. Receives the committed
/// filter list, a slot updater for reporting edits, the column index and
/// the column spec.
pub type CustomDisplay =
    Rc<dyn Fn(&[FilterValue], SlotUpdater, usize, &ColumnSpec) -> Renderable>;

/// Host-supplied footer renderer, receives the committed filter list
pub type FooterRenderer = Rc<dyn Fn(&[FilterValue]) -> Renderable>;

/// Which control a filterable column gets
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum FilterType {
    #[default]
    Select,
    MultiSelect,
    Checkbox,
    Text,
    Custom,
}

/// Extra per-column filter configuration, currently just the custom
/// display renderer
#[derive(Clone, Default)]
pub struct FilterOptions {
    pub display: Option<CustomDisplay>,
}

impl FilterOptions {
    pub fn with_display(
        display: impl Fn(&[FilterValue], SlotUpdater, usize, &ColumnSpec) -> Renderable + 'static,
    ) -> Self {
        Self {
            display: Some(Rc::new(display)),
        }
    }
}

impl fmt::Debug for FilterOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FilterOptions")
            .field("display", &self.display.as_ref().map(|_| "<fn>"))
            .finish()
    }
}

/// One column of the host table, as the filter panel sees it
///
/// Immutable for the lifetime of a panel session.
#[derive(Debug, Clone, Default)]
pub struct ColumnSpec {
    pub name: String,
    pub label: String,
    pub filterable: bool,
    pub filter_type: Option<FilterType>,
    pub filter_options: Option<FilterOptions>,
}

impl ColumnSpec {
    pub fn new(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            label: name.clone(),
            name,
            filterable: true,
            filter_type: None,
            filter_options: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.label = label.into();
        self
    }

    pub fn with_type(mut self, filter_type: FilterType) -> Self {
        self.filter_type = Some(filter_type);
        self
    }

    pub fn with_filterable(mut self, filterable: bool) -> Self {
        self.filterable = filterable;
        self
    }

    pub fn with_options(mut self, options: FilterOptions) -> Self {
        self.filter_options = Some(options);
        self
    }
}
