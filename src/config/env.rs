use anyhow::Context;
use std::path::Path;

/// Load `KEY=VALUE` pairs from an environment-definition file.
///
/// Variables already set in the process environment win over the file.
/// A missing file is not an error; returns whether a file was loaded.
pub fn dotenv(path: &Path) -> anyhow::Result<bool> {
    match dotenvy::from_path(path) {
        Ok(()) => {
            log::info!("loaded environment from {}", path.display());
            Ok(true)
        }
        Err(dotenvy::Error::Io(ref e)) if e.kind() == std::io::ErrorKind::NotFound => {
            log::debug!("no environment file at {}", path.display());
            Ok(false)
        }
        Err(e) => Err(e).with_context(|| format!("load environment file {}", path.display())),
    }
}
