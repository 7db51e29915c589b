use super::*;
use crate::query::*;
use crate::sink::Sink;
use anyhow::Context;
use std::io::Write;
use std::path::PathBuf;

/// Outcome of one extract.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub name: &'static str,
    pub rows: usize,
    pub path: PathBuf,
}

/// Runs a catalog against a source, strictly in order.
///
/// Each result is written and announced before the next query is sent.
/// The first failure stops the run; files already written are left alone.
pub struct Extractor<'a, S: ?Sized> {
    source: &'a S,
    limit: Limit,
}

impl<'a, S> Extractor<'a, S>
where
    S: Source + ?Sized,
{
    pub fn new(source: &'a S, limit: Limit) -> Self {
        Self { source, limit }
    }

    pub async fn run<K, W>(
        &self,
        catalog: &Catalog,
        sink: &mut K,
        out: &mut W,
    ) -> anyhow::Result<Vec<Summary>>
    where
        K: Sink,
        W: Write,
    {
        log::info!("extracting {} tables ({})", catalog.len(), self.limit);
        let mut summaries = Vec::with_capacity(catalog.len());
        for extract in catalog {
            summaries.push(self.extract(extract, sink, out).await?);
        }
        Ok(summaries)
    }

    async fn extract<K, W>(&self, extract: &Extract, sink: &mut K, out: &mut W) -> anyhow::Result<Summary>
    where
        K: Sink,
        W: Write,
    {
        let ref sql = extract.statement(self.limit);
        log::debug!("querying {}: {}", extract, sql);
        let table = self
            .source
            .fetch(sql)
            .await
            .with_context(|| format!("query {}", extract))?;
        log::info!("fetched {} rows from {}", table.len(), extract);
        let path = sink
            .write(extract.name(), &table)
            .with_context(|| format!("write {}", extract.file()))?;
        writeln!(out, "Extracted the {} Successfully!", extract.file()).context("report progress")?;
        Ok(Summary {
            name: extract.name(),
            rows: table.len(),
            path,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sink::Directory;
    use crate::table::Table;
    use std::collections::HashMap;
    use std::sync::Mutex;

    /// Serves canned tables keyed by table name and records every statement.
    #[derive(Default)]
    struct Memory {
        tables: HashMap<&'static str, Table>,
        broken: Option<&'static str>,
        seen: Mutex<Vec<String>>,
    }

    impl Memory {
        fn gold() -> Self {
            let customers = Table::new(["customer_key", "first_name", "country"])
                .with([Some("1"), Some("Jon"), Some("Australia")])
                .with([Some("2"), Some("Eugene"), None]);
            let products = Table::new(["product_key", "product_name"])
                .with([Some("1"), Some("HL Road Frame, Black")]);
            let sales = Table::new(["order_number", "sales_amount"]);
            Self {
                tables: HashMap::from([
                    (crate::DIM_CUSTOMERS, customers),
                    (crate::DIM_PRODUCTS, products),
                    (crate::FACT_SALES, sales),
                ]),
                ..Self::default()
            }
        }
        fn broken(mut self, name: &'static str) -> Self {
            self.broken = Some(name);
            self
        }
        fn seen(&self) -> Vec<String> {
            self.seen.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl Source for Memory {
        async fn fetch(&self, sql: &str) -> anyhow::Result<Table> {
            self.seen.lock().unwrap().push(sql.to_string());
            let name = self
                .tables
                .keys()
                .copied()
                .find(|name| sql.contains(&format!("gold.{} ", name)) || sql.ends_with(&format!("gold.{}", name)))
                .ok_or_else(|| anyhow::anyhow!("relation does not exist"))?;
            match self.broken {
                Some(broken) if broken == name => Err(anyhow::anyhow!("permission denied for table {}", name)),
                _ => Ok(self.tables[name].clone()),
            }
        }
    }

    fn read(dir: &std::path::Path, file: &str) -> String {
        std::fs::read_to_string(dir.join(file)).unwrap()
    }

    #[tokio::test]
    async fn extracts_every_table_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let ref mut sink = Directory::from(dir.path().to_path_buf());
        let ref mut out = Vec::<u8>::new();
        let source = Memory::gold();
        let summaries = Extractor::new(&source, Limit::default())
            .run(&Catalog::gold(), sink, out)
            .await
            .unwrap();
        assert_eq!(
            source.seen(),
            vec![
                "SELECT * FROM gold.dim_customers LIMIT 5000",
                "SELECT * FROM gold.dim_products LIMIT 5000",
                "SELECT * FROM gold.fact_sales LIMIT 5000",
            ]
        );
        assert_eq!(
            String::from_utf8(out.clone()).unwrap(),
            concat!(
                "Extracted the dim_customers.csv Successfully!\n",
                "Extracted the dim_products.csv Successfully!\n",
                "Extracted the fact_sales.csv Successfully!\n",
            )
        );
        assert_eq!(
            summaries.iter().map(|s| (s.name, s.rows)).collect::<Vec<_>>(),
            vec![("dim_customers", 2), ("dim_products", 1), ("fact_sales", 0)]
        );
        assert_eq!(summaries[2].path, dir.path().join("fact_sales.csv"));
        assert_eq!(
            read(dir.path(), "dim_customers.csv"),
            "customer_key,first_name,country\n1,Jon,Australia\n2,Eugene,\n"
        );
        assert_eq!(
            read(dir.path(), "dim_products.csv"),
            "product_key,product_name\n1,\"HL Road Frame, Black\"\n"
        );
        assert_eq!(read(dir.path(), "fact_sales.csv"), "order_number,sales_amount\n");
    }

    #[tokio::test]
    async fn full_extract_sends_unbounded_queries() {
        let dir = tempfile::tempdir().unwrap();
        let ref mut sink = Directory::from(dir.path().to_path_buf());
        let source = Memory::gold();
        Extractor::new(&source, Limit::Full)
            .run(&Catalog::gold(), sink, &mut std::io::sink())
            .await
            .unwrap();
        assert!(source.seen().iter().all(|sql| !sql.contains("LIMIT")));
    }

    #[tokio::test]
    async fn failure_stops_after_first_file() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("fact_sales.csv"), "stale\n").unwrap();
        let ref mut sink = Directory::from(dir.path().to_path_buf());
        let ref mut out = Vec::<u8>::new();
        let source = Memory::gold().broken(crate::DIM_PRODUCTS);
        let err = Extractor::new(&source, Limit::default())
            .run(&Catalog::gold(), sink, out)
            .await
            .unwrap_err();
        assert!(format!("{:#}", err).contains("query dim_products"));
        assert_eq!(source.seen().len(), 2);
        assert!(dir.path().join("dim_customers.csv").is_file());
        assert!(!dir.path().join("dim_products.csv").exists());
        assert_eq!(read(dir.path(), "fact_sales.csv"), "stale\n");
        assert_eq!(
            String::from_utf8(out.clone()).unwrap(),
            "Extracted the dim_customers.csv Successfully!\n"
        );
    }

    #[tokio::test]
    async fn rerun_overwrites_previous_files() {
        let dir = tempfile::tempdir().unwrap();
        let ref mut sink = Directory::from(dir.path().to_path_buf());
        let source = Memory::gold();
        let extractor = Extractor::new(&source, Limit::default());
        for _ in 0..2 {
            extractor
                .run(&Catalog::gold(), sink, &mut std::io::sink())
                .await
                .unwrap();
        }
        assert_eq!(
            read(dir.path(), "dim_products.csv"),
            "product_key,product_name\n1,\"HL Road Frame, Black\"\n"
        );
    }

    #[tokio::test]
    async fn filtered_catalog_only_touches_selected_tables() {
        let dir = tempfile::tempdir().unwrap();
        let ref mut sink = Directory::from(dir.path().to_path_buf());
        let source = Memory::gold();
        let catalog = Catalog::gold().select(&["fact_sales"]).unwrap();
        Extractor::new(&source, Limit::Sample(10))
            .run(&catalog, sink, &mut std::io::sink())
            .await
            .unwrap();
        assert_eq!(source.seen(), vec!["SELECT * FROM gold.fact_sales LIMIT 10"]);
        assert!(!dir.path().join("dim_customers.csv").exists());
    }
}
