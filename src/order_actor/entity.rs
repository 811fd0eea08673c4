use std::convert::Infallible;

use tracing::debug;

use crate::actor_framework::Entity;
use crate::domain::{Order, OrderCreate, OrderId};

impl Entity for Order {
    type Id = OrderId;
    type CreateParams = OrderCreate;
    type Filter = ();
    // Orders are immutable once stored.
    type Action = Infallible;
    type ActionResult = Infallible;

    fn id(&self) -> &OrderId {
        &self.id
    }

    fn from_create_params(id: OrderId, params: OrderCreate) -> Result<Self, String> {
        Ok(Self::new(id, params))
    }

    /// Refuses orders that reserve nothing.
    fn on_create(&mut self) -> Result<(), String> {
        if self.clubs.is_empty() {
            return Err("Order must reference at least one club".to_string());
        }
        if self.clubs.iter().any(|line| line.spaces == 0) {
            return Err("Every order line must reserve at least one space".to_string());
        }
        debug!(lines = self.clubs.len(), spaces = self.total_spaces(), "Order accepted");
        Ok(())
    }

    fn handle_action(&mut self, action: Infallible) -> Result<Infallible, String> {
        match action {}
    }
}
