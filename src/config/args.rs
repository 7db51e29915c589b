use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(
    author,
    version,
    about = "Extract gold-layer tables from PostgreSQL into CSV files",
    long_about = None
)]
pub struct Args {
    #[arg(
        long,
        value_name = "ROWS",
        conflicts_with = "full",
        help = "Row cap applied to every query [default: 5000]"
    )]
    pub limit: Option<u64>,
    #[arg(long, help = "Extract every row instead of a sample")]
    pub full: bool,
    #[arg(
        long,
        short,
        value_name = "DIR",
        default_value = ".",
        help = "Directory receiving the CSV files"
    )]
    pub output: PathBuf,
    #[arg(
        long,
        value_name = "PATH",
        default_value = ".env",
        help = "Environment file loaded before reading DB_* variables"
    )]
    pub env_file: PathBuf,
    #[arg(
        long = "table",
        short,
        value_name = "NAME",
        help = "Only extract the named table (repeatable)"
    )]
    pub tables: Vec<String>,
}
