//! Movie persistence.

use crate::error::AppError;
use crate::models::{Movie, NewMovie};
use sqlx::SqlitePool;

pub struct MovieService;

impl MovieService {
    /// Insert one movie and return it with its generated id.
    pub async fn create(pool: &SqlitePool, movie: &NewMovie) -> Result<Movie, AppError> {
        let row = sqlx::query_as::<_, Movie>(
            "INSERT INTO movies (name, genre, year) VALUES (?, ?, ?) RETURNING id, name, genre, year",
        )
        .bind(&movie.name)
        .bind(&movie.genre)
        .bind(&movie.year)
        .fetch_one(pool)
        .await?;
        tracing::debug!(id = row.id, "movie created");
        Ok(row)
    }

    /// Every movie. Order is by id but callers should not rely on it.
    pub async fn list(pool: &SqlitePool) -> Result<Vec<Movie>, AppError> {
        let rows = sqlx::query_as::<_, Movie>("SELECT id, name, genre, year FROM movies ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Movie>, AppError> {
        let row = sqlx::query_as::<_, Movie>("SELECT id, name, genre, year FROM movies WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
