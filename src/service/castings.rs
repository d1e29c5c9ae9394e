//! Join-table access: which humans appear in which movies, and in what role.

use crate::error::AppError;
use crate::models::{Appearance, CastMember, HumanInMovie, NewCasting};
use sqlx::SqlitePool;

pub struct CastingService;

impl CastingService {
    /// Record that a human plays `role` in a movie. Both rows must exist.
    pub async fn create(
        pool: &SqlitePool,
        movie_id: i64,
        casting: &NewCasting,
    ) -> Result<HumanInMovie, AppError> {
        let mut tx = pool.begin().await?;
        let movie: Option<(i64,)> = sqlx::query_as("SELECT id FROM movies WHERE id = ?")
            .bind(movie_id)
            .fetch_optional(&mut *tx)
            .await?;
        if movie.is_none() {
            return Err(AppError::NotFound(format!("movie {}", movie_id)));
        }
        let human: Option<(i64,)> = sqlx::query_as("SELECT id FROM humans WHERE id = ?")
            .bind(casting.human_id)
            .fetch_optional(&mut *tx)
            .await?;
        if human.is_none() {
            return Err(AppError::NotFound(format!("human {}", casting.human_id)));
        }
        let row = sqlx::query_as::<_, HumanInMovie>(
            "INSERT INTO humans_in_movies (role, movie_id, human_id) VALUES (?, ?, ?) \
             RETURNING id, role, movie_id, human_id",
        )
        .bind(&casting.role)
        .bind(movie_id)
        .bind(casting.human_id)
        .fetch_one(&mut *tx)
        .await?;
        tx.commit().await?;
        tracing::debug!(id = row.id, movie_id, human_id = casting.human_id, "casting created");
        Ok(row)
    }

    pub async fn humans_in_movie(pool: &SqlitePool, movie_id: i64) -> Result<Vec<CastMember>, AppError> {
        let rows = sqlx::query_as::<_, CastMember>(
            "SELECT h.id, h.name, c.role FROM humans_in_movies c \
             JOIN humans h ON h.id = c.human_id \
             WHERE c.movie_id = ? ORDER BY c.id",
        )
        .bind(movie_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }

    pub async fn movies_for_human(pool: &SqlitePool, human_id: i64) -> Result<Vec<Appearance>, AppError> {
        let rows = sqlx::query_as::<_, Appearance>(
            "SELECT m.id, m.name, m.genre, m.year, c.role FROM humans_in_movies c \
             JOIN movies m ON m.id = c.movie_id \
             WHERE c.human_id = ? ORDER BY c.id",
        )
        .bind(human_id)
        .fetch_all(pool)
        .await?;
        Ok(rows)
    }
}
