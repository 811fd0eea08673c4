//! Club-specific store logic: the space operations and their atomic application.

mod actions;
pub mod entity;
pub mod error;

pub use actions::*;
pub use error::*;
