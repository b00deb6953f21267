use anyhow::Result;
use serde_json::json;
use tracing::info;

use filter_panel::{
    ColumnSpec, FilterDataCatalog, FilterPanel, FilterType, FilterValue, HostBinding, PanelOptions,
};

/// A toy host table: owns the authoritative filter list and recomputes
/// visible rows on apply
struct DemoTable {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<String>>,
    filter_list: Vec<FilterValue>,
    visible: Vec<usize>,
}

impl DemoTable {
    fn new(columns: Vec<ColumnSpec>, rows: Vec<Vec<String>>) -> Self {
        let filter_list = vec![FilterValue::empty(); columns.len()];
        let visible = (0..rows.len()).collect();
        Self {
            columns,
            rows,
            filter_list,
            visible,
        }
    }

    fn row_matches(&self, row: &[String]) -> bool {
        self.filter_list.iter().enumerate().all(|(i, filter)| match filter {
            FilterValue::Values(values) => values.is_empty() || values.contains(&row[i]),
            FilterValue::Text(text) => text.is_empty() || row[i].contains(text.as_str()),
            FilterValue::Json(_) => true, // custom payloads are the host's business
        })
    }

    fn print(&self) {
        for &idx in &self.visible {
            println!("  {}", self.rows[idx].join(" | "));
        }
        println!("  ({} of {} rows)", self.visible.len(), self.rows.len());
    }
}

impl HostBinding for DemoTable {
    fn on_filter_update(
        &mut self,
        column_index: usize,
        value: FilterValue,
        column: &ColumnSpec,
        filter_type: FilterType,
    ) {
        info!(
            "host: filter update for '{}' ({:?}): {:?}",
            column.name, filter_type, value
        );
        self.filter_list[column_index] = value;
    }

    fn on_filter_apply(&mut self) {
        self.visible = (0..self.rows.len())
            .filter(|&idx| self.row_matches(&self.rows[idx]))
            .collect();
        info!("host: recomputed visible rows -> {}", self.visible.len());
    }

    fn on_filter_reset(&mut self) {
        self.filter_list = vec![FilterValue::empty(); self.columns.len()];
        self.visible = (0..self.rows.len()).collect();
    }
}

fn demo_rows() -> Vec<Vec<String>> {
    let data = json!([
        {"name": "Alice",  "status": "active",   "region": "emea"},
        {"name": "Bob",    "status": "inactive", "region": "apac"},
        {"name": "Carol",  "status": "active",   "region": "apac"},
        {"name": "Dave",   "status": "active",   "region": "amer"},
    ]);
    data.as_array()
        .unwrap()
        .iter()
        .map(|row| {
            ["name", "status", "region"]
                .iter()
                .map(|key| row[*key].as_str().unwrap().to_string())
                .collect()
        })
        .collect()
}

fn main() -> Result<()> {
    filter_panel::logging::init();

    let columns = vec![
        ColumnSpec::new("name").with_type(FilterType::Text),
        ColumnSpec::new("status"),
        ColumnSpec::new("region").with_type(FilterType::Checkbox),
    ];
    let rows = demo_rows();
    let catalog = FilterDataCatalog::from_rows(columns.len(), rows.iter().map(|r| r.as_slice()));

    let mut table = DemoTable::new(columns.clone(), rows);
    let mut panel = FilterPanel::new(
        columns,
        table.filter_list.clone(),
        PanelOptions::default(),
    );

    println!("unfiltered:");
    table.print();

    // User picks "active" on the status dropdown and toggles two regions
    if let Some(filter_panel::Control::Select(select)) = panel.control(1, &catalog) {
        select.choose("active");
    }
    if let Some(filter_panel::Control::Checkbox(checkbox)) = panel.control(2, &catalog) {
        checkbox.toggle("apac");
        checkbox.toggle("amer");
    }
    panel.apply(&mut table);
    panel.sync_filter_list(table.filter_list.clone());

    println!("\nactive rows in apac/amer:");
    table.print();

    // Reset clears everything host-side; the panel rebuilds from the
    // host's answering filter-list change
    panel.reset(&mut table);
    panel.sync_filter_list(table.filter_list.clone());

    println!("\nafter reset:");
    table.print();

    Ok(())
}
