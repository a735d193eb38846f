//! maxim - Interactive wise-saying keeper
//!
//! A command-line application that manages short quote/author records,
//! optionally mirrored to per-record JSON files on disk.

pub mod application;
pub mod cli;
pub mod domain;
pub mod error;
pub mod infrastructure;

pub use error::MaximError;
