//! CSV output for extracted tables.
mod directory;
mod encode;

pub use directory::*;
pub use encode::*;

use crate::table::Table;
use std::path::PathBuf;

/// Destination for extracted tables.
pub trait Sink {
    /// Persist `table` under `name`, replacing any previous output,
    /// and return where it went.
    fn write(&mut self, name: &str, table: &Table) -> anyhow::Result<PathBuf>;
}
