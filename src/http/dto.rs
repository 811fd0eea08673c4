use serde::{Deserialize, Serialize};

use crate::domain::{ClubId, OrderId};
use crate::reservation::{ClubRequest, OrderRequest};

/// `POST /collection/orders` body. Missing fields default to empty so the
/// engine reports them with its own validation message.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderBody {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_number: String,
    #[serde(default)]
    pub clubs: Vec<ClubLineBody>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClubLineBody {
    pub club_id: ClubId,
    #[serde(default)]
    pub spaces: i64,
}

impl From<CreateOrderBody> for OrderRequest {
    fn from(body: CreateOrderBody) -> Self {
        OrderRequest {
            name: body.name,
            phone_number: body.phone_number,
            clubs: body
                .clubs
                .into_iter()
                .map(|line| ClubRequest {
                    club_id: line.club_id,
                    spaces: line.spaces,
                })
                .collect(),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderCreated {
    pub message: String,
    pub order_id: OrderId,
}

/// `PUT /collection/clubs/{clubId}/updateSpace` body.
#[derive(Debug, Deserialize)]
pub struct UpdateSpaceBody {
    pub spaces: Option<i64>,
    #[serde(rename = "type")]
    pub mode: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct MessageBody {
    pub message: String,
}

#[derive(Debug, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub query: String,
}
