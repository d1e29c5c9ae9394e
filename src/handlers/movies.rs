//! Movie resources: collection, item, and cast.

use crate::error::AppError;
use crate::extractors::payload::Payload;
use crate::handlers::parse_id;
use crate::response::{success_created, success_keyed, success_many};
use crate::service::{CastingService, MovieService, RequestValidator};
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
};

pub async fn list_movies(State(state): State<AppState>) -> Result<impl IntoResponse, AppError> {
    let movies = MovieService::list(&state.pool).await?;
    Ok(success_many("movies", movies))
}

pub async fn create_movie(
    State(state): State<AppState>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let new_movie = RequestValidator::new_movie(&body)?;
    let movie = MovieService::create(&state.pool, &new_movie).await?;
    tracing::info!(id = movie.id, %movie, "movie added");
    Ok(success_created(movie))
}

pub async fn read_movie(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let movie = MovieService::find(&state.pool, id)
        .await?
        .ok_or_else(|| AppError::NotFound(format!("movie {}", id)))?;
    Ok(success_keyed("movie", movie))
}

pub async fn list_cast(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    if MovieService::find(&state.pool, id).await?.is_none() {
        return Err(AppError::NotFound(format!("movie {}", id)));
    }
    let humans = CastingService::humans_in_movie(&state.pool, id).await?;
    Ok(success_many("humans", humans))
}

pub async fn add_cast_member(
    State(state): State<AppState>,
    Path(id_str): Path<String>,
    Payload(body): Payload,
) -> Result<impl IntoResponse, AppError> {
    let id = parse_id(&id_str)?;
    let casting = RequestValidator::new_casting(&body)?;
    let row = CastingService::create(&state.pool, id, &casting).await?;
    tracing::info!(id = row.id, casting = %row, "cast member added");
    Ok(success_created(row))
}
