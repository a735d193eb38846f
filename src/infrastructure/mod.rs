//! Infrastructure layer - persistence

pub mod repository;

pub use repository::{
    FileSystemRepository, LoadFailure, LoadReport, NullRepository, SayingRepository,
};
