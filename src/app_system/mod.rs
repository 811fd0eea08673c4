//! System orchestration: configuration, seed loading, actor startup and
//! shutdown, and tracing setup.

pub mod club_system;
pub mod config;
pub mod error;
pub mod tracing;

pub use self::club_system::*;
pub use self::config::*;
pub use self::error::*;
pub use self::tracing::*;
