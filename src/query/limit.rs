/// Row cap applied to every extract.
///
/// `Sample` bounds each result for quick inspection; `Full` transfers the
/// whole table.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Limit {
    Sample(u64),
    Full,
}

impl Default for Limit {
    fn default() -> Self {
        Self::Sample(crate::SAMPLE_ROWS)
    }
}

impl Limit {
    pub fn apply(&self, sql: &str) -> String {
        match self {
            Self::Sample(n) => format!("{} LIMIT {}", sql, n),
            Self::Full => sql.to_string(),
        }
    }
}

impl std::fmt::Display for Limit {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Sample(n) => write!(f, "sample of {} rows", n),
            Self::Full => write!(f, "full extract"),
        }
    }
}
