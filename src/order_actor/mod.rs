//! Order store records: id assignment and the insert-time checks.

pub mod entity;
pub mod error;

pub use error::*;
