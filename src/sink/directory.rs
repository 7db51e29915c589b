use super::*;
use anyhow::Context;
use std::fs::File;
use std::io::BufWriter;

/// Writes `{name}.csv` files into a directory, creating it on first write.
#[derive(Debug, Clone)]
pub struct Directory(PathBuf);

impl From<PathBuf> for Directory {
    fn from(path: PathBuf) -> Self {
        Self(path)
    }
}

impl Directory {
    pub fn file(&self, name: &str) -> PathBuf {
        self.0.join(format!("{}.csv", name))
    }
}

impl Sink for Directory {
    fn write(&mut self, name: &str, table: &Table) -> anyhow::Result<PathBuf> {
        std::fs::create_dir_all(&self.0)
            .with_context(|| format!("create output directory {}", self.0.display()))?;
        let path = self.file(name);
        let file = File::create(&path).with_context(|| format!("create {}", path.display()))?;
        encode(table, BufWriter::new(file)).with_context(|| format!("write {}", path.display()))?;
        log::debug!("wrote {} rows to {}", table.len(), path.display());
        Ok(path)
    }
}
