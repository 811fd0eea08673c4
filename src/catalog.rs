//! The store interface the reservation engine is written against.

use async_trait::async_trait;

use crate::club_actor::{ClubError, SpaceOp, SpaceUpdate};
use crate::clients::{ClubClient, OrderClient};
use crate::domain::{Club, ClubFilter, ClubId, OrderCreate, OrderId};
use crate::order_actor::OrderError;

/// Record-level operations over clubs and orders.
///
/// Implementations must apply every [`SpaceOp`] atomically per club; in
/// particular the guard of [`SpaceOp::Decrease`] and the subtraction must not
/// be separable.
#[async_trait]
pub trait CatalogStore: Send + Sync {
    async fn find_club(&self, id: ClubId) -> Result<Option<Club>, ClubError>;

    /// Clubs in ascending id order, optionally filtered.
    async fn list_clubs(&self, filter: Option<ClubFilter>) -> Result<Vec<Club>, ClubError>;

    async fn update_club_space(&self, id: ClubId, op: SpaceOp) -> Result<SpaceUpdate, ClubError>;

    async fn insert_order(&self, order: OrderCreate) -> Result<OrderId, OrderError>;
}

/// Actor-backed catalog.
#[derive(Clone)]
pub struct Catalog {
    clubs: ClubClient,
    orders: OrderClient,
}

impl Catalog {
    pub fn new(clubs: ClubClient, orders: OrderClient) -> Self {
        Self { clubs, orders }
    }
}

#[async_trait]
impl CatalogStore for Catalog {
    async fn find_club(&self, id: ClubId) -> Result<Option<Club>, ClubError> {
        self.clubs.get_club(id).await
    }

    async fn list_clubs(&self, filter: Option<ClubFilter>) -> Result<Vec<Club>, ClubError> {
        match filter {
            Some(filter) => self.clubs.search_clubs(filter).await,
            None => self.clubs.list_clubs().await,
        }
    }

    async fn update_club_space(&self, id: ClubId, op: SpaceOp) -> Result<SpaceUpdate, ClubError> {
        self.clubs.update_space(id, op).await
    }

    async fn insert_order(&self, order: OrderCreate) -> Result<OrderId, OrderError> {
        self.orders.create_order(order).await
    }
}
