//! shoplist - Terminal Shopping List Library
//!
//! An in-memory shopping list with an add dialog and in-place editing,
//! drawn in the terminal.

pub mod domain;
pub mod application;
pub mod infrastructure;
pub mod presentation;

pub use domain::*;
pub use application::*;
