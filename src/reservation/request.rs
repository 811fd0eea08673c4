use std::str::FromStr;

use crate::club_actor::SpaceOp;
use crate::domain::ClubId;
use super::ReservationError;

/// One requested (club, seats) pair, as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClubRequest {
    pub club_id: ClubId,
    pub spaces: i64,
}

/// An order submission, as received from the caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderRequest {
    pub name: String,
    pub phone_number: String,
    pub clubs: Vec<ClubRequest>,
}

/// A request that passed shape validation.
#[derive(Debug)]
pub(super) struct ValidOrder {
    pub name: String,
    pub phone_number: String,
    pub lines: Vec<(ClubId, u32)>,
}

impl OrderRequest {
    pub(super) fn validate(self) -> Result<ValidOrder, ReservationError> {
        let name = self.name.trim();
        let phone_number = self.phone_number.trim();
        if name.is_empty() || phone_number.is_empty() || self.clubs.is_empty() {
            return Err(ReservationError::Validation(
                "Invalid order data. Ensure name, phone number, and club information are provided."
                    .to_string(),
            ));
        }

        let lines = self
            .clubs
            .iter()
            .map(|club| match u32::try_from(club.spaces) {
                Ok(spaces) if spaces > 0 => Ok((club.club_id, spaces)),
                _ => Err(ReservationError::Validation(format!(
                    "Invalid number of spaces for Club ID {}. Must be greater than 0.",
                    club.club_id
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(ValidOrder {
            name: name.to_string(),
            phone_number: phone_number.to_string(),
            lines,
        })
    }
}

/// How `updateSpace` applies its amount. Always explicit; there is no default.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SpaceMode {
    Decrease,
    Set,
    Increase,
}

impl SpaceMode {
    pub(super) fn op(self, amount: u32) -> SpaceOp {
        match self {
            SpaceMode::Decrease => SpaceOp::Decrease(amount),
            SpaceMode::Set => SpaceOp::Set(amount),
            SpaceMode::Increase => SpaceOp::Increase(amount),
        }
    }
}

impl FromStr for SpaceMode {
    type Err = ReservationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "decrease" => Ok(SpaceMode::Decrease),
            "set" => Ok(SpaceMode::Set),
            "increase" => Ok(SpaceMode::Increase),
            other => Err(ReservationError::Validation(format!(
                "Invalid update type '{other}'. Expected one of: decrease, set, increase."
            ))),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn request(name: &str, phone: &str, clubs: Vec<(ClubId, i64)>) -> OrderRequest {
        OrderRequest {
            name: name.to_string(),
            phone_number: phone.to_string(),
            clubs: clubs
                .into_iter()
                .map(|(club_id, spaces)| ClubRequest { club_id, spaces })
                .collect(),
        }
    }

    #[test]
    fn test_valid_request_keeps_line_order() {
        let valid = request(" Ada ", "0123", vec![(2, 1), (1, 3)]).validate().unwrap();

        assert_eq!(valid.name, "Ada");
        assert_eq!(valid.lines, vec![(2, 1), (1, 3)]);
    }

    #[test]
    fn test_missing_fields_are_rejected() {
        for bad in [
            request("", "0123", vec![(1, 1)]),
            request("Ada", "  ", vec![(1, 1)]),
            request("Ada", "0123", vec![]),
        ] {
            assert!(matches!(bad.validate(), Err(ReservationError::Validation(_))));
        }
    }

    #[test]
    fn test_non_positive_or_oversized_spaces_are_rejected() {
        for spaces in [0, -2, i64::from(u32::MAX) + 1] {
            let result = request("Ada", "0123", vec![(1, 1), (7, spaces)]).validate();
            assert_eq!(
                result.unwrap_err(),
                ReservationError::Validation(
                    "Invalid number of spaces for Club ID 7. Must be greater than 0.".to_string()
                )
            );
        }
    }

    #[test]
    fn test_space_mode_parsing_is_strict() {
        assert_eq!("set".parse::<SpaceMode>(), Ok(SpaceMode::Set));
        assert_eq!("decrease".parse::<SpaceMode>(), Ok(SpaceMode::Decrease));
        assert_eq!("increase".parse::<SpaceMode>(), Ok(SpaceMode::Increase));
        assert!("Set".parse::<SpaceMode>().is_err());
        assert!("".parse::<SpaceMode>().is_err());
    }
}
