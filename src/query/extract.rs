use super::*;

/// A named query whose result lands in `{name}.csv`.
/// Names and SQL are `&'static str`; the catalog is fixed at compile time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extract {
    name: &'static str,
    sql: &'static str,
}

impl Extract {
    pub const fn new(name: &'static str, sql: &'static str) -> Self {
        Self { name, sql }
    }
    pub fn name(&self) -> &'static str {
        self.name
    }
    pub fn sql(&self) -> &'static str {
        self.sql
    }
    /// The statement actually sent to the server.
    pub fn statement(&self, limit: Limit) -> String {
        limit.apply(self.sql)
    }
    /// Output file name, relative to the sink.
    pub fn file(&self) -> String {
        format!("{}.csv", self.name)
    }
}

impl std::fmt::Display for Extract {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.name)
    }
}
