//! Human resources: collection, item, and filmography.

use crate::error::AppError;
use crate::extractors::payload::Payload;
use crate::handlers::parse_id;
use crate::models::HumanSummary;
use crate::response::{success_created, success_keyed, success_many};
use crate::service::{CastingService, HumanService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

/// Listing carries id and name only.
pub async fn list_humans(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let humans: Vec<HumanSummary> = HumanService::list(&state.pool)
        .await?
        .into_iter()
        .map(HumanSummary::from)
        .collect();
    Ok(success_many("humans", humans))
}

pub async fn create_human(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let new_human = RequestValidator::new_human(&body)?;
    let human = HumanService::create(&state.pool, &new_human).await?;
    tracing::info!(id = human.id, %human, "human added");
    Ok(success_created(human))
}

pub async fn read_human(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let human = HumanService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("human {}", id)))?;
    Ok(success_keyed("human", human))
}

pub async fn list_filmography(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if HumanService::find(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound(format!("human {}", id)));
    }
    let movies = CastingService::movies_for_human(&state.pool, id).await?;
    Ok(success_many("movies", movies))
}
