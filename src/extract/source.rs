use crate::table::Table;
use anyhow::Context;
use tokio_postgres::Client;
use tokio_postgres::SimpleQueryMessage;

/// Read interface between the extraction loop and the database.
#[async_trait::async_trait]
pub trait Source: Send + Sync {
    /// Run one statement and materialize its whole result.
    async fn fetch(&self, sql: &str) -> anyhow::Result<Table>;
}

/// Uses the simple-query protocol so every value arrives as PostgreSQL's
/// own text rendering, whatever its column type.
#[async_trait::async_trait]
impl Source for Client {
    async fn fetch(&self, sql: &str) -> anyhow::Result<Table> {
        let mut table = None;
        for message in self.simple_query(sql).await.context("simple query")? {
            match message {
                SimpleQueryMessage::RowDescription(columns) => {
                    table = Some(Table::new(columns.iter().map(|c| c.name())));
                }
                SimpleQueryMessage::Row(row) => {
                    let table = table.get_or_insert_with(|| {
                        Table::new(row.columns().iter().map(|c| c.name()))
                    });
                    table.push((0..row.len()).map(|i| row.get(i)));
                }
                _ => {}
            }
        }
        Ok(table.unwrap_or_default())
    }
}
