//! CLI argument definitions

use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "maxim")]
#[command(about = "Interactive wise-saying keeper", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Directory for persisted sayings (omit to run purely in memory)
    #[arg(long, value_name = "DIR")]
    pub db_dir: Option<PathBuf>,
}
