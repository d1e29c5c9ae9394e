//! Movie and human resource routes.

use crate::handlers::humans::{create_human, list_filmography, list_humans, read_human};
use crate::handlers::movies::{add_cast_member, create_movie, list_cast, list_movies, read_movie};
use crate::state::AppState;
use axum::{routing::get, Router};

pub fn resource_routes(state: AppState) -> Router {
    Router::new()
        .route("/movies", get(list_movies).post(create_movie))
        .route("/movies/:id", get(read_movie))
        .route("/movies/:id/humans", get(list_cast).post(add_cast_member))
        .route("/humans", get(list_humans).post(create_human))
        .route("/humans/:id", get(read_human))
        .route("/humans/:id/movies", get(list_filmography))
        .with_state(state)
}
