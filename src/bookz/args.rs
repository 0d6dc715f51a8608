use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "bookz")]
#[command(about = "Command-driven catalog manager for book records", long_about = None)]
pub struct Cli {
    /// Book data file to load before the session starts (.csv)
    pub file: Option<PathBuf>,
}
