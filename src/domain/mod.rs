//! Domain layer: shopping list items and the list store.

pub mod models;
pub mod store;
pub mod errors;

pub use models::*;
pub use store::*;
pub use errors::*;
