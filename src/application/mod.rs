//! Application layer managing screen state and user workflows.
//!
//! This module coordinates between the domain layer and presentation layer,
//! turning user intents into list operations and rejections into messages.

pub mod state;

pub use state::*;
