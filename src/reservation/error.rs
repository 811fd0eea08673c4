use thiserror::Error;

use crate::club_actor::ClubError;
use crate::domain::ClubId;
use crate::order_actor::OrderError;

/// Outcome of a failed reservation operation. Nothing is retried.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ReservationError {
    #[error("{0}")]
    Validation(String),
    #[error("Club with ID {0} not found")]
    ClubNotFound(ClubId),
    #[error("Insufficient space for Club ID {club_id}: requested {requested}, available {available}")]
    InsufficientSpace {
        club_id: ClubId,
        requested: u32,
        available: u32,
    },
    #[error("Store unavailable: {0}")]
    StoreUnavailable(String),
}

impl From<ClubError> for ReservationError {
    fn from(error: ClubError) -> Self {
        match error {
            ClubError::NotFound(id) => ReservationError::ClubNotFound(id),
            ClubError::Rejected(reason) => ReservationError::Validation(reason),
            ClubError::ActorCommunicationError(reason) => ReservationError::StoreUnavailable(reason),
        }
    }
}

impl From<OrderError> for ReservationError {
    fn from(error: OrderError) -> Self {
        match error {
            OrderError::Rejected(reason) => ReservationError::Validation(reason),
            OrderError::ActorCommunicationError(reason) => ReservationError::StoreUnavailable(reason),
        }
    }
}
