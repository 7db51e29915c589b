use super::*;
use crate::query::*;
use std::path::PathBuf;

/// Validated run settings.
#[derive(Debug, Clone)]
pub struct Settings {
    pub limit: Limit,
    pub output: PathBuf,
    pub env_file: PathBuf,
    pub catalog: Catalog,
}

impl TryFrom<Args> for Settings {
    type Error = ConfigError;
    fn try_from(args: Args) -> Result<Self, Self::Error> {
        let limit = match (args.full, args.limit) {
            (true, _) => Limit::Full,
            (false, None) => Limit::default(),
            (false, Some(0)) => return Err(ConfigError::ZeroLimit),
            (false, Some(n)) => Limit::Sample(n),
        };
        let catalog = match args.tables.as_slice() {
            [] => Catalog::gold(),
            names => Catalog::gold().select(names)?,
        };
        Ok(Self {
            limit,
            output: args.output,
            env_file: args.env_file,
            catalog,
        })
    }
}
