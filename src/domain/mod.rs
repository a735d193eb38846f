//! Domain layer - records, the in-memory store, and command parsing

pub mod command;
pub mod saying;
pub mod store;

pub use command::Command;
pub use saying::WiseSaying;
pub use store::SayingStore;
