//! Human persistence.

use crate::error::AppError;
use crate::models::{Human, NewHuman};
use sqlx::SqlitePool;

pub struct HumanService;

impl HumanService {
    pub async fn create(pool: &SqlitePool, human: &NewHuman) -> Result<Human, AppError> {
        let row = sqlx::query_as::<_, Human>(
            "INSERT INTO humans (name, year_born) VALUES (?, ?) RETURNING id, name, year_born",
        )
        .bind(&human.name)
        .bind(human.year_born)
        .fetch_one(pool)
        .await?;
        tracing::debug!(id = row.id, "human created");
        Ok(row)
    }

    pub async fn list(pool: &SqlitePool) -> Result<Vec<Human>, AppError> {
        let rows = sqlx::query_as::<_, Human>("SELECT id, name, year_born FROM humans ORDER BY id")
            .fetch_all(pool)
            .await?;
        Ok(rows)
    }

    pub async fn find(pool: &SqlitePool, id: i64) -> Result<Option<Human>, AppError> {
        let row = sqlx::query_as::<_, Human>("SELECT id, name, year_born FROM humans WHERE id = ?")
            .bind(id)
            .fetch_optional(pool)
            .await?;
        Ok(row)
    }
}
