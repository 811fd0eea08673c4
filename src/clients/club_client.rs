use tracing::{debug, instrument};

use crate::actor_framework::ResourceClient;
use crate::club_actor::{ClubError, SpaceOp, SpaceUpdate};
use crate::domain::{Club, ClubFilter, ClubId};

/// Client for interacting with the club store actor.
#[derive(Clone)]
pub struct ClubClient {
    inner: ResourceClient<Club>,
}

impl_basic_client!(ClubClient, Club, ClubError, club);

impl ClubClient {
    #[instrument(skip(self))]
    pub async fn search_clubs(&self, filter: ClubFilter) -> Result<Vec<Club>, ClubError> {
        debug!("Sending request");
        self.inner.list(Some(filter)).await.map_err(ClubError::from)
    }

    /// Applies `op` atomically at the store.
    #[instrument(skip(self))]
    pub async fn update_space(&self, id: ClubId, op: SpaceOp) -> Result<SpaceUpdate, ClubError> {
        debug!("Sending request");
        let update = self
            .inner
            .perform_action(id, op)
            .await
            .map_err(|e| ClubError::from_framework(id, e))?;
        debug!(applied = update.is_applied(), available_space = update.available_space(), "Space update done");
        Ok(update)
    }
}
