//! System orchestration, configuration, startup, and shutdown logic.

pub mod cli;
pub mod config;
pub mod store_system;
pub mod tracing;

pub use cli::*;
pub use config::*;
pub use store_system::*;
pub use self::tracing::*;
