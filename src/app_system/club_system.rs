use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;

use tracing::{error, info, instrument};

use crate::actor_framework::ResourceActor;
use crate::catalog::Catalog;
use crate::clients::{ClubClient, OrderClient};
use crate::domain::{Club, Order};
use super::SystemError;

/// Owns the store actors and hands out clients wired to them.
pub struct ClubSystem {
    pub club_client: ClubClient,
    pub order_client: OrderClient,
    handles: Vec<tokio::task::JoinHandle<()>>,
}

impl ClubSystem {
    /// Starts the club store seeded with `clubs` and an empty order store.
    ///
    /// # Errors
    /// Fails if two seeded clubs share an id.
    #[instrument(name = "club_system", skip(clubs), fields(clubs = clubs.len()))]
    pub fn start(buffer_size: usize, clubs: Vec<Club>) -> Result<Self, SystemError> {
        info!("Starting club system");

        let (club_actor, club_resource_client) = ResourceActor::with_entries(buffer_size, clubs)?;
        let club_handle = tokio::spawn(club_actor.run());

        let order_id_counter = Arc::new(AtomicU64::new(1));
        let next_order_id = move || {
            let id = order_id_counter.fetch_add(1, Ordering::SeqCst);
            format!("order_{}", id)
        };
        let (order_actor, order_resource_client) = ResourceActor::<Order>::new(buffer_size, next_order_id);
        let order_handle = tokio::spawn(order_actor.run());

        Ok(Self {
            club_client: ClubClient::new(club_resource_client),
            order_client: OrderClient::new(order_resource_client),
            handles: vec![club_handle, order_handle],
        })
    }

    pub fn catalog(&self) -> Catalog {
        Catalog::new(self.club_client.clone(), self.order_client.clone())
    }

    /// Drops this system's clients and waits for the actors to drain.
    ///
    /// Actors stop once every client clone is gone, so callers must drop the
    /// catalogs and engines built from this system first.
    #[instrument(skip(self))]
    pub async fn shutdown(self) -> Result<(), SystemError> {
        info!("Shutting down club system");
        drop(self.club_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!(error = ?e, "Actor task failed");
                return Err(SystemError::ActorTask(e.to_string()));
            }
        }

        info!("Club system shutdown complete");
        Ok(())
    }
}
