use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, error, info, instrument, warn};

use crate::catalog::CatalogStore;
use crate::club_actor::{SpaceOp, SpaceUpdate};
use crate::domain::{Club, ClubFilter, ClubId, OrderCreate, OrderId, OrderLine};
use super::request::ValidOrder;
use super::{OrderRequest, ReservationError, SpaceMode};

/// Applies order and space requests to a [`CatalogStore`].
///
/// Holds no mutable state: every capacity decision is made by the store's
/// guarded decrease, never from a value read earlier.
#[derive(Clone)]
pub struct ReservationEngine {
    store: Arc<dyn CatalogStore>,
}

/// Debits applied so far by one order, in application order.
#[derive(Debug, Default)]
struct AppliedDebits(Vec<(ClubId, u32)>);

impl ReservationEngine {
    pub fn new(store: Arc<dyn CatalogStore>) -> Self {
        Self { store }
    }

    #[instrument(skip(self))]
    pub async fn list_clubs(&self) -> Result<Vec<Club>, ReservationError> {
        Ok(self.store.list_clubs(None).await?)
    }

    /// Clubs whose subject or location contains `query`, ignoring case.
    /// A blank query returns the whole catalog.
    #[instrument(skip(self))]
    pub async fn search_clubs(&self, query: &str) -> Result<Vec<Club>, ReservationError> {
        let clubs = self.store.list_clubs(ClubFilter::from_query(query)).await?;
        debug!(matches = clubs.len(), "Search complete");
        Ok(clubs)
    }

    /// Reserves every requested club and persists one order, or changes nothing.
    ///
    /// 1. Validate the request shape.
    /// 2. Resolve every club and check that the seats asked of it fit.
    /// 3. Debit each line with a guarded decrease.
    /// 4. Insert the order.
    ///
    /// A failure in 3 or 4 returns the applied debits before reporting it.
    #[instrument(skip(self, request), fields(lines = request.clubs.len()))]
    pub async fn submit_order(&self, request: OrderRequest) -> Result<OrderId, ReservationError> {
        let order = request.validate()?;
        let lines = self.resolve_lines(&order).await?;

        let mut debits = AppliedDebits::default();
        for line in &lines {
            if let Err(e) = self.debit(line).await {
                self.compensate(debits).await;
                return Err(e);
            }
            debits.0.push((line.club_id, line.spaces));
        }

        let create = OrderCreate {
            name: order.name,
            phone_number: order.phone_number,
            clubs: lines,
        };
        match self.store.insert_order(create).await {
            Ok(order_id) => {
                info!(order_id = %order_id, "Order saved");
                Ok(order_id)
            }
            Err(e) => {
                error!(error = %e, "Order insert failed");
                self.compensate(debits).await;
                Err(e.into())
            }
        }
    }

    /// Applies one explicit space operation to a club and returns the space left.
    #[instrument(skip(self))]
    pub async fn update_space(
        &self,
        club_id: ClubId,
        spaces: i64,
        mode: SpaceMode,
    ) -> Result<u32, ReservationError> {
        let amount = u32::try_from(spaces).map_err(|_| {
            ReservationError::Validation(
                "Invalid number of spaces. Must be a non-negative integer.".to_string(),
            )
        })?;

        match self.store.update_club_space(club_id, mode.op(amount)).await? {
            SpaceUpdate::Applied { available_space } => {
                info!(available_space, "Available space updated");
                Ok(available_space)
            }
            SpaceUpdate::NotApplied { available_space } => {
                warn!(available_space, "Decrease exceeds available space");
                Err(ReservationError::InsufficientSpace {
                    club_id,
                    requested: amount,
                    available: available_space,
                })
            }
        }
    }

    /// Resolves names and pre-checks capacity. No side effects.
    ///
    /// Seats asked of the same club on several lines are summed for the check.
    async fn resolve_lines(&self, order: &ValidOrder) -> Result<Vec<OrderLine>, ReservationError> {
        let mut requested: BTreeMap<ClubId, u64> = BTreeMap::new();
        let mut lines = Vec::with_capacity(order.lines.len());

        for &(club_id, spaces) in &order.lines {
            let club = self
                .store
                .find_club(club_id)
                .await?
                .ok_or(ReservationError::ClubNotFound(club_id))?;

            let total = requested.entry(club_id).or_default();
            *total += u64::from(spaces);
            if *total > u64::from(club.available_space) {
                warn!(club_id, requested = *total, available = club.available_space, "Pre-check failed");
                return Err(ReservationError::InsufficientSpace {
                    club_id,
                    requested: u32::try_from(*total).unwrap_or(u32::MAX),
                    available: club.available_space,
                });
            }

            lines.push(OrderLine {
                club_id,
                club_name: club.subject,
                spaces,
            });
        }

        Ok(lines)
    }

    async fn debit(&self, line: &OrderLine) -> Result<(), ReservationError> {
        match self
            .store
            .update_club_space(line.club_id, SpaceOp::Decrease(line.spaces))
            .await?
        {
            SpaceUpdate::Applied { available_space } => {
                debug!(club_id = line.club_id, spaces = line.spaces, available_space, "Debited");
                Ok(())
            }
            SpaceUpdate::NotApplied { available_space } => {
                warn!(club_id = line.club_id, spaces = line.spaces, available_space, "Debit not applied");
                Err(ReservationError::InsufficientSpace {
                    club_id: line.club_id,
                    requested: line.spaces,
                    available: available_space,
                })
            }
        }
    }

    /// Returns applied debits, newest first. Failures are logged for manual
    /// reconciliation and do not replace the error being reported.
    async fn compensate(&self, debits: AppliedDebits) {
        for (club_id, spaces) in debits.0.into_iter().rev() {
            match self.store.update_club_space(club_id, SpaceOp::Increase(spaces)).await {
                Ok(update) => {
                    info!(club_id, spaces, available_space = update.available_space(), "Debit compensated")
                }
                Err(e) => error!(
                    club_id,
                    spaces,
                    error = %e,
                    "Compensation failed; club space needs reconciliation"
                ),
            }
        }
    }
}
