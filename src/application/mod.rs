//! Application layer - the interactive session

pub mod session;

pub use session::AppSession;
