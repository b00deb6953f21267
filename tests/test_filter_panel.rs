// Reconciliation behavior of the filter panel: rebuild, apply change
// detection, reset passthrough, external filter-list changes.

use filter_panel::{
    ColumnSpec, Control, FilterDataCatalog, FilterPanel, FilterType, FilterValue, HostBinding,
    PanelOptions,
};

/// Records every callback the panel makes, in order
#[derive(Default)]
struct RecordingHost {
    updates: Vec<(usize, FilterValue, String, FilterType)>,
    apply_calls: usize,
    reset_calls: usize,
}

impl HostBinding for RecordingHost {
    fn on_filter_update(
        &mut self,
        column_index: usize,
        value: FilterValue,
        column: &ColumnSpec,
        filter_type: FilterType,
    ) {
        self.updates
            .push((column_index, value, column.name.clone(), filter_type));
    }

    fn on_filter_apply(&mut self) {
        self.apply_calls += 1;
    }

    fn on_filter_reset(&mut self) {
        self.reset_calls += 1;
    }
}

fn empty_committed(n: usize) -> Vec<FilterValue> {
    vec![FilterValue::empty(); n]
}

#[test]
fn test_rebuild_initializes_from_committed_list() {
    let columns = vec![
        ColumnSpec::new("status"),
        ColumnSpec::new("region"),
        ColumnSpec::new("notes").with_filterable(false),
    ];
    let committed = vec![
        FilterValue::single("open"),
        FilterValue::Values(vec!["emea".into(), "apac".into()]),
        FilterValue::empty(),
    ];

    let panel = FilterPanel::new(columns, committed.clone(), PanelOptions::default());

    assert_eq!(panel.column_count(), committed.len());
    for (i, value) in committed.iter().enumerate() {
        assert_eq!(&panel.pending_value(i), value);
    }
}

#[test]
fn test_select_then_apply_notifies_changed_column_only() {
    // 3 columns, column 0 filterable select with catalog [A, B]
    let columns = vec![
        ColumnSpec::new("col0"),
        ColumnSpec::new("col1"),
        ColumnSpec::new("col2"),
    ];
    let catalog = FilterDataCatalog::from_columns(vec![
        vec!["A".into(), "B".into()],
        vec![],
        vec![],
    ]);
    let mut panel = FilterPanel::new(columns, empty_committed(3), PanelOptions::default());

    let Some(Control::Select(select)) = panel.control(0, &catalog) else {
        panic!("expected a select control for column 0");
    };
    select.choose("B");

    let mut host = RecordingHost::default();
    panel.apply(&mut host);

    assert_eq!(host.updates.len(), 1);
    let (index, value, name, filter_type) = &host.updates[0];
    assert_eq!(*index, 0);
    assert_eq!(*value, FilterValue::single("B"));
    assert_eq!(name, "col0");
    assert_eq!(*filter_type, FilterType::Select);
    assert_eq!(host.apply_calls, 1);
    assert_eq!(host.reset_calls, 0);
}

#[test]
fn test_apply_is_idempotent_without_edits() {
    let columns = vec![ColumnSpec::new("status"), ColumnSpec::new("region")];
    let catalog = FilterDataCatalog::from_columns(vec![vec!["open".into()], vec![]]);
    let mut panel = FilterPanel::new(columns, empty_committed(2), PanelOptions::default());

    let Some(Control::Select(select)) = panel.control(0, &catalog) else {
        panic!("expected a select control");
    };
    select.choose("open");

    let mut host = RecordingHost::default();
    panel.apply(&mut host);
    assert_eq!(host.updates.len(), 1);
    assert_eq!(host.apply_calls, 1);

    // No intervening edits and no host-side change: the second apply sends
    // no updates but still exactly one apply signal.
    panel.apply(&mut host);
    assert_eq!(host.updates.len(), 1);
    assert_eq!(host.apply_calls, 2);
}

#[test]
fn test_apply_notifies_in_column_index_order() {
    let columns = vec![
        ColumnSpec::new("a"),
        ColumnSpec::new("b"),
        ColumnSpec::new("c"),
    ];
    let catalog = FilterDataCatalog::from_columns(vec![
        vec!["1".into()],
        vec!["2".into()],
        vec!["3".into()],
    ]);
    let mut panel = FilterPanel::new(columns, empty_committed(3), PanelOptions::default());

    // Edit out of order
    for index in [2, 0, 1] {
        let Some(Control::Select(select)) = panel.control(index, &catalog) else {
            panic!("expected select controls");
        };
        select.choose(catalog.values_for(index).first().unwrap());
    }

    let mut host = RecordingHost::default();
    panel.apply(&mut host);

    let order: Vec<usize> = host.updates.iter().map(|u| u.0).collect();
    assert_eq!(order, vec![0, 1, 2]);
    assert_eq!(host.apply_calls, 1);
}

#[test]
fn test_custom_columns_are_always_forwarded() {
    use filter_panel::{FilterOptions, Renderable};

    let columns = vec![ColumnSpec::new("tags")
        .with_type(FilterType::Custom)
        .with_options(FilterOptions::with_display(|_, _, _, _| {
            Renderable::from("custom")
        }))];
    let mut panel = FilterPanel::new(columns, empty_committed(1), PanelOptions::default());

    // Pending equals committed, but custom equality cannot be verified by
    // the panel, so the column is forwarded anyway.
    let mut host = RecordingHost::default();
    panel.apply(&mut host);

    assert_eq!(host.updates.len(), 1);
    assert_eq!(host.updates[0].3, FilterType::Custom);
}

#[test]
fn test_custom_update_flows_through_apply() {
    use filter_panel::{FilterOptions, Renderable};

    let columns = vec![ColumnSpec::new("tags")
        .with_type(FilterType::Custom)
        .with_options(FilterOptions::with_display(|_, _, _, _| {
            Renderable::from("custom")
        }))];
    let catalog = FilterDataCatalog::default();
    let mut panel = FilterPanel::new(columns, empty_committed(1), PanelOptions::default());

    let Some(Control::Custom(control)) = panel.control(0, &catalog) else {
        panic!("expected a custom control");
    };
    let payload = FilterValue::Json(serde_json::json!({"min": 3, "max": 9}));
    control.update(payload.clone());

    let mut host = RecordingHost::default();
    panel.apply(&mut host);

    assert_eq!(host.updates.len(), 1);
    assert_eq!(host.updates[0].1, payload);
}

#[test]
fn test_custom_column_without_display_renders_nothing() {
    let columns = vec![
        ColumnSpec::new("tags").with_type(FilterType::Custom),
        ColumnSpec::new("status"),
    ];
    let catalog = FilterDataCatalog::from_columns(vec![vec![], vec!["open".into()]]);
    let panel = FilterPanel::new(columns, empty_committed(2), PanelOptions::default());

    let Some(Control::Custom(control)) = panel.control(0, &catalog) else {
        panic!("expected a custom control");
    };
    assert!(control.render().is_none());

    // The rest of the panel stays usable
    let Some(Control::Select(select)) = panel.control(1, &catalog) else {
        panic!("expected a select control");
    };
    assert_eq!(select.view().choices, vec!["All", "open"]);
}

#[test]
fn test_reset_only_calls_reset() {
    let panel = FilterPanel::new(
        vec![ColumnSpec::new("status")],
        empty_committed(1),
        PanelOptions::default(),
    );

    let mut host = RecordingHost::default();
    panel.reset(&mut host);

    assert_eq!(host.reset_calls, 1);
    assert_eq!(host.apply_calls, 0);
    assert!(host.updates.is_empty());
}

#[test]
fn test_external_filter_change_discards_pending_edit() {
    let columns = vec![ColumnSpec::new("status"), ColumnSpec::new("region")];
    let catalog = FilterDataCatalog::from_columns(vec![vec![], vec!["emea".into()]]);
    let mut panel = FilterPanel::new(columns, empty_committed(2), PanelOptions::default());

    let Some(Control::Select(select)) = panel.control(1, &catalog) else {
        panic!("expected a select control");
    };
    select.choose("emea");
    assert_eq!(panel.pending_value(1), FilterValue::single("emea"));

    // Host replaces its filter list while the edit is still pending
    let external = vec![FilterValue::single("open"), FilterValue::empty()];
    panel.sync_filter_list(external.clone());

    assert_eq!(panel.pending_value(0), external[0]);
    assert_eq!(panel.pending_value(1), external[1]);
}

#[test]
fn test_sync_columns_rebuilds_for_new_column_set() {
    let mut panel = FilterPanel::new(
        vec![ColumnSpec::new("status")],
        empty_committed(1),
        PanelOptions::default(),
    );

    let columns = vec![ColumnSpec::new("status"), ColumnSpec::new("region")];
    let committed = vec![FilterValue::single("open"), FilterValue::empty()];
    panel.sync_columns(columns, committed.clone());

    assert_eq!(panel.column_count(), 2);
    assert_eq!(panel.pending_value(0), committed[0]);
    assert_eq!(panel.pending_value(1), committed[1]);
}

#[test]
fn test_edits_do_not_touch_committed_list() {
    let columns = vec![ColumnSpec::new("region").with_type(FilterType::Checkbox)];
    let committed = vec![FilterValue::Values(vec!["emea".into()])];
    let catalog = FilterDataCatalog::from_columns(vec![vec!["emea".into(), "apac".into()]]);
    let panel = FilterPanel::new(columns, committed.clone(), PanelOptions::default());

    let Some(Control::Checkbox(checkbox)) = panel.control(0, &catalog) else {
        panic!("expected a checkbox control");
    };
    checkbox.toggle("apac");

    // Toggling produced a fresh collection; the committed copy used for
    // apply-time equality is untouched.
    assert_eq!(panel.committed(), committed.as_slice());
    assert_eq!(
        panel.pending_value(0),
        FilterValue::Values(vec!["emea".into(), "apac".into()])
    );
}
