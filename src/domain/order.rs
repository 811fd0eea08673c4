use super::ClubId;

pub type OrderId = String;

/// One reserved line of an order. `club_name` is a snapshot of the club's
/// subject at order time, not a live reference.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLine {
    pub club_id: ClubId,
    pub club_name: String,
    pub spaces: u32,
}

/// A persisted reservation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Order {
    pub id: OrderId,
    pub name: String,
    pub phone_number: String,
    pub clubs: Vec<OrderLine>,
}

/// Payload for inserting a new order; the store assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderCreate {
    pub name: String,
    pub phone_number: String,
    pub clubs: Vec<OrderLine>,
}

impl Order {
    pub fn new(id: impl Into<OrderId>, params: OrderCreate) -> Self {
        Self {
            id: id.into(),
            name: params.name,
            phone_number: params.phone_number,
            clubs: params.clubs,
        }
    }

    pub fn total_spaces(&self) -> u64 {
        self.clubs.iter().map(|line| u64::from(line.spaces)).sum()
    }
}
