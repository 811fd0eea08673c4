use std::convert::Infallible;

use crate::actor_framework::Entity;
use crate::domain::{Club, ClubFilter, ClubId};
use super::actions::{SpaceOp, SpaceUpdate};

impl Entity for Club {
    type Id = ClubId;
    // Clubs come from seed data with their own ids; the store never mints one.
    type CreateParams = Infallible;
    type Filter = ClubFilter;
    type Action = SpaceOp;
    type ActionResult = SpaceUpdate;

    fn id(&self) -> &ClubId {
        &self.id
    }

    fn from_create_params(_id: ClubId, params: Infallible) -> Result<Self, String> {
        match params {}
    }

    fn matches(&self, filter: &ClubFilter) -> bool {
        filter.matches(self)
    }

    /// Applies a space operation.
    ///
    /// # Errors
    /// Returns an error only when an increase would overflow the counter. A
    /// guarded decrease that does not fit is reported as
    /// [`SpaceUpdate::NotApplied`].
    fn handle_action(&mut self, op: SpaceOp) -> Result<SpaceUpdate, String> {
        match op {
            SpaceOp::Decrease(amount) => match self.available_space.checked_sub(amount) {
                Some(remaining) => {
                    self.available_space = remaining;
                    Ok(SpaceUpdate::Applied { available_space: remaining })
                }
                None => Ok(SpaceUpdate::NotApplied { available_space: self.available_space }),
            },
            SpaceOp::Increase(amount) => {
                self.available_space = self.available_space.checked_add(amount).ok_or_else(|| {
                    format!(
                        "Increase of {} overflows available space {}",
                        amount, self.available_space
                    )
                })?;
                Ok(SpaceUpdate::Applied { available_space: self.available_space })
            }
            SpaceOp::Set(amount) => {
                self.available_space = amount;
                Ok(SpaceUpdate::Applied { available_space: amount })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chess(space: u32) -> Club {
        Club::new(1, "Chess", "Hall A", space)
    }

    #[test]
    fn test_decrease_within_space_applies() {
        let mut club = chess(5);

        let outcome = club.handle_action(SpaceOp::Decrease(3)).unwrap();

        assert_eq!(outcome, SpaceUpdate::Applied { available_space: 2 });
        assert_eq!(club.available_space, 2);
    }

    #[test]
    fn test_decrease_beyond_space_is_not_applied() {
        let mut club = chess(2);

        let outcome = club.handle_action(SpaceOp::Decrease(3)).unwrap();

        assert_eq!(outcome, SpaceUpdate::NotApplied { available_space: 2 });
        assert_eq!(club.available_space, 2);
    }

    #[test]
    fn test_decrease_to_exactly_zero() {
        let mut club = chess(4);

        assert!(club.handle_action(SpaceOp::Decrease(4)).unwrap().is_applied());
        assert_eq!(club.available_space, 0);
    }

    #[test]
    fn test_set_is_idempotent() {
        let mut once = chess(9);
        let mut twice = chess(1);

        once.handle_action(SpaceOp::Set(4)).unwrap();
        twice.handle_action(SpaceOp::Set(4)).unwrap();
        twice.handle_action(SpaceOp::Set(4)).unwrap();

        assert_eq!(once, twice);
        assert_eq!(once.available_space, 4);
    }

    #[test]
    fn test_increase_overflow_is_rejected() {
        let mut club = chess(u32::MAX);

        assert!(club.handle_action(SpaceOp::Increase(1)).is_err());
        assert_eq!(club.handle_action(SpaceOp::Increase(0)).unwrap().available_space(), u32::MAX);
    }
}
