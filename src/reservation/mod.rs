//! Capacity reservation: validates order and space requests and applies them
//! to the catalog without ever letting a club's space go negative.

mod engine;
mod error;
mod request;

pub use engine::ReservationEngine;
pub use error::ReservationError;
pub use request::{ClubRequest, OrderRequest, SpaceMode};
