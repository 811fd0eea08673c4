//! Typed handles over the store actors.

#[macro_use]
mod macros;

mod club_client;
mod order_client;

pub use club_client::ClubClient;
pub use order_client::OrderClient;
