pub mod club;
pub mod order;

pub use club::*;
pub use order::*;
