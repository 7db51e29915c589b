//! Gold-Layer Extraction Binary
//!
//! Dumps the curated warehouse tables to CSV files in the output directory.
//! Connection parameters come from `DB_NAME`, `DB_USER`, `DB_PASSWORD`,
//! `DB_HOST` and `DB_PORT`, optionally seeded from a `.env` file.

use clap::Parser;
use gold_extract::*;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    log()?;
    kys();
    let settings = Settings::try_from(args)?;
    dotenv(&settings.env_file)?;
    let ref credentials = Credentials::from_env()?;
    let summaries = extract::run(&settings, credentials).await?;
    for summary in summaries.iter() {
        log::info!("{} rows -> {}", summary.rows, summary.path.display());
    }
    log::info!(
        "extracted {} tables ({} rows) into {}",
        summaries.len(),
        summaries.iter().map(|s| s.rows).sum::<usize>(),
        settings.output.display()
    );
    Ok(())
}
