/// Per-column distinct values, used to populate option-based controls
///
/// Supplied by the host and read-only for the panel. Non-filterable columns
/// still occupy a slot so everything stays index-addressed.
#[derive(Debug, Clone, Default)]
pub struct FilterDataCatalog {
    columns: Vec<Vec<String>>,
}

impl FilterDataCatalog {
    pub fn from_columns(columns: Vec<Vec<String>>) -> Self {
        Self { columns }
    }

    /// Build a catalog by scanning rows, collecting each column's distinct
    /// values in first-seen order
    pub fn from_rows<'a, I>(column_count: usize, rows: I) -> Self
    where
        I: IntoIterator<Item = &'a [String]>,
    {
        let mut columns: Vec<Vec<String>> = vec![Vec::new(); column_count];
        for row in rows {
            for (i, cell) in row.iter().enumerate().take(column_count) {
                if !columns[i].iter().any(|v| v == cell) {
                    columns[i].push(cell.clone());
                }
            }
        }
        Self { columns }
    }

    pub fn column_count(&self) -> usize {
        self.columns.len()
    }

    /// Distinct values for one column; empty for out-of-range indices
    pub fn values_for(&self, column_index: usize) -> &[String] {
        self.columns
            .get(column_index)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_rows_distinct_first_seen_order() {
        let rows: Vec<Vec<String>> = vec![
            vec!["b".into(), "1".into()],
            vec!["a".into(), "1".into()],
            vec!["b".into(), "2".into()],
        ];
        let catalog =
            FilterDataCatalog::from_rows(2, rows.iter().map(|r| r.as_slice()));

        assert_eq!(catalog.values_for(0), &["b", "a"]);
        assert_eq!(catalog.values_for(1), &["1", "2"]);
    }

    #[test]
    fn test_out_of_range_is_empty() {
        let catalog = FilterDataCatalog::from_columns(vec![vec!["x".into()]]);
        assert!(catalog.values_for(5).is_empty());
    }
}
