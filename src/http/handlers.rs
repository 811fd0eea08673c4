use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection, QueryRejection},
        Path, Query, State,
    },
    http::StatusCode,
    Json,
};
use tracing::instrument;

use crate::domain::{Club, ClubId};
use crate::reservation::SpaceMode;
use super::dto::{CreateOrderBody, MessageBody, OrderCreated, SearchParams, UpdateSpaceBody};
use super::{ApiError, AppState};

pub async fn index() -> &'static str {
    "Select a collection, e.g., /collection/clubs"
}

#[instrument(skip(state))]
pub async fn list_clubs(State(state): State<AppState>) -> Result<Json<Vec<Club>>, ApiError> {
    Ok(Json(state.engine.list_clubs().await?))
}

#[instrument(skip(state, params))]
pub async fn search_clubs(
    State(state): State<AppState>,
    params: Result<Query<SearchParams>, QueryRejection>,
) -> Result<Json<Vec<Club>>, ApiError> {
    let Query(params) = params?;
    Ok(Json(state.engine.search_clubs(&params.query).await?))
}

#[instrument(skip(state, body))]
pub async fn create_order(
    State(state): State<AppState>,
    body: Result<Json<CreateOrderBody>, JsonRejection>,
) -> Result<(StatusCode, Json<OrderCreated>), ApiError> {
    let Json(body) = body?;
    let order_id = state.engine.submit_order(body.into()).await?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreated {
            message: "Order saved successfully".to_string(),
            order_id,
        }),
    ))
}

#[instrument(skip(state, club_id, body))]
pub async fn update_space(
    State(state): State<AppState>,
    club_id: Result<Path<ClubId>, PathRejection>,
    body: Result<Json<UpdateSpaceBody>, JsonRejection>,
) -> Result<Json<MessageBody>, ApiError> {
    let Path(club_id) = club_id?;
    let Json(body) = body?;

    let spaces = body.spaces.ok_or_else(|| {
        ApiError::BadRequest("Invalid number of spaces. Must be a non-negative integer.".to_string())
    })?;
    let mode = body
        .mode
        .ok_or_else(|| {
            ApiError::BadRequest(
                "Missing update type. Expected one of: decrease, set, increase.".to_string(),
            )
        })?
        .parse::<SpaceMode>()?;

    state.engine.update_space(club_id, spaces, mode).await?;

    Ok(Json(MessageBody {
        message: format!("Successfully updated available space for Club ID {}", club_id),
    }))
}
