//! In-memory result sets.

/// A materialized query result: named columns and rows of text cells.
/// `None` is SQL NULL.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Table {
    columns: Vec<String>,
    rows: Vec<Vec<Option<String>>>,
}

impl Table {
    pub fn new<I, C>(columns: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<String>,
    {
        Self {
            columns: columns.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }
    pub fn push<I, C>(&mut self, cells: I)
    where
        I: IntoIterator<Item = Option<C>>,
        C: Into<String>,
    {
        let row = cells
            .into_iter()
            .map(|cell| cell.map(Into::into))
            .collect::<Vec<_>>();
        debug_assert!(row.len() == self.columns.len(), "row arity mismatch");
        self.rows.push(row);
    }
    /// Builder form of [`Table::push`].
    pub fn with<I, C>(mut self, cells: I) -> Self
    where
        I: IntoIterator<Item = Option<C>>,
        C: Into<String>,
    {
        self.push(cells);
        self
    }
    pub fn columns(&self) -> &[String] {
        &self.columns
    }
    pub fn rows(&self) -> &[Vec<Option<String>>] {
        &self.rows
    }
    pub fn len(&self) -> usize {
        self.rows.len()
    }
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rows_keep_insertion_order() {
        let table = Table::new(["id", "name"])
            .with([Some("1"), Some("Ada")])
            .with([Some("2"), None]);
        assert_eq!(table.len(), 2);
        assert_eq!(table.columns(), &["id".to_string(), "name".to_string()]);
        assert_eq!(table.rows()[1], vec![Some("2".to_string()), None]);
    }

    #[test]
    fn header_only() {
        let table = Table::new(["id"]);
        assert!(table.is_empty());
        assert_eq!(table.columns().len(), 1);
    }
}
