//! Infrastructure layer: configuration file and diagnostic logging.
//!
//! Nothing here stores list contents; the list lives only in memory.

pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
