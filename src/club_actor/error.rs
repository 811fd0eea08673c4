use thiserror::Error;

use crate::actor_framework::FrameworkError;
use crate::domain::ClubId;

/// Errors surfaced by the club store client.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum ClubError {
    #[error("Club not found: {0}")]
    NotFound(ClubId),
    #[error("Club operation rejected: {0}")]
    Rejected(String),
    #[error("Actor communication error: {0}")]
    ActorCommunicationError(String),
}

impl ClubError {
    /// Maps framework errors for a request that targeted `id`.
    pub fn from_framework(id: ClubId, error: FrameworkError) -> Self {
        match error {
            FrameworkError::NotFound(_) => ClubError::NotFound(id),
            FrameworkError::Rejected(reason) => ClubError::Rejected(reason),
            other => other.into(),
        }
    }
}

impl From<FrameworkError> for ClubError {
    fn from(error: FrameworkError) -> Self {
        match error {
            FrameworkError::Rejected(reason) => ClubError::Rejected(reason),
            other => ClubError::ActorCommunicationError(other.to_string()),
        }
    }
}
