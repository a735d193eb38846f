//! CLI layer - argument parsing and output formatting

pub mod commands;
pub mod output;

pub use commands::Cli;
pub use output::format_saying_list;
