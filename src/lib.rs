//! Gold-layer extraction from PostgreSQL into CSV files.
//!
//! Runs a fixed, ordered catalog of `SELECT` statements against the curated
//! `gold` schema of a warehouse and writes every result set to `{name}.csv`.
//!
//! ## Modules
//!
//! - [`config`] — command-line arguments, `.env` loading, credentials
//! - [`query`] — the extract catalog and row limits
//! - [`table`] — in-memory result sets
//! - [`sink`] — CSV encoding and file output
//! - [`extract`] — database session and the sequential extraction loop
pub mod config;
pub mod extract;
pub mod query;
pub mod sink;
pub mod table;

pub use config::*;
pub use extract::*;
pub use query::*;
pub use sink::*;
pub use table::*;

use anyhow::Context;
use const_format::concatcp;

/// Schema holding the curated warehouse tables.
#[rustfmt::skip]
pub const GOLD:          &str = "gold";
/// Customer dimension.
#[rustfmt::skip]
pub const DIM_CUSTOMERS: &str = "dim_customers";
/// Product dimension.
#[rustfmt::skip]
pub const DIM_PRODUCTS:  &str = "dim_products";
/// Sales fact table.
#[rustfmt::skip]
pub const FACT_SALES:    &str = "fact_sales";

#[rustfmt::skip]
pub const SELECT_DIM_CUSTOMERS: &str = concatcp!("SELECT * FROM ", GOLD, ".", DIM_CUSTOMERS);
#[rustfmt::skip]
pub const SELECT_DIM_PRODUCTS:  &str = concatcp!("SELECT * FROM ", GOLD, ".", DIM_PRODUCTS);
#[rustfmt::skip]
pub const SELECT_FACT_SALES:    &str = concatcp!("SELECT * FROM ", GOLD, ".", FACT_SALES);

/// Row cap applied to every query unless a full extract is requested.
pub const SAMPLE_ROWS: u64 = 5000;

/// Initialize dual logging (terminal + file) with timestamped log files.
/// Writes INFO to the terminal and DEBUG to `logs/<time>.log`; when that
/// file cannot be created, logs to the terminal only.
pub fn log() -> anyhow::Result<()> {
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    match logfile(std::path::Path::new("logs")) {
        Ok(file) => {
            let file = simplelog::WriteLogger::new(log::LevelFilter::Debug, config.clone(), file);
            simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")?;
        }
        Err(e) => {
            simplelog::CombinedLogger::init(vec![term]).context("initialize logger")?;
            log::warn!("logging to terminal only: {:#}", e);
        }
    }
    Ok(())
}

/// Create a fresh timestamped log file inside `dir`.
fn logfile(dir: &std::path::Path) -> anyhow::Result<std::fs::File> {
    std::fs::create_dir_all(dir)
        .with_context(|| format!("create logs directory {}", dir.display()))?;
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let ref path = dir.join(format!("{}.log", time));
    std::fs::File::create(path).with_context(|| format!("create log file {}", path.display()))
}

/// Register Ctrl+C handler for immediate termination.
/// Files already written stay on disk; the one in flight may be truncated.
pub fn kys() {
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            println!();
            log::warn!("interrupt received, abandoning extraction");
            std::process::exit(130);
        }
    });
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logfile_lands_in_logs_directory() {
        let dir = tempfile::tempdir().unwrap();
        let ref logs = dir.path().join("logs");
        logfile(logs).unwrap();
        assert_eq!(std::fs::read_dir(logs).unwrap().count(), 1);
    }

    #[test]
    fn logs_path_blocked_by_file() {
        let dir = tempfile::tempdir().unwrap();
        let ref blocker = dir.path().join("logs");
        std::fs::write(blocker, "not a directory").unwrap();
        let err = logfile(blocker).unwrap_err();
        assert!(format!("{:#}", err).contains("create logs directory"));
    }
}
