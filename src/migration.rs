//! Schema DDL for the catalog tables.
//! Tables are created in dependency order (movies, humans, then the join table) and dropped in reverse.

use crate::error::AppError;
use sqlx::SqlitePool;

const CREATE_MOVIES: &str = r#"
    CREATE TABLE IF NOT EXISTS movies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        genre VARCHAR(10) NOT NULL,
        year VARCHAR(80) NOT NULL
    )
"#;

const CREATE_HUMANS: &str = r#"
    CREATE TABLE IF NOT EXISTS humans (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        year_born INTEGER NOT NULL
    )
"#;

const CREATE_HUMANS_IN_MOVIES: &str = r#"
    CREATE TABLE IF NOT EXISTS humans_in_movies (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        role TEXT NOT NULL,
        movie_id INTEGER NOT NULL REFERENCES movies (id),
        human_id INTEGER NOT NULL REFERENCES humans (id)
    )
"#;

const CREATE_INDEXES: &[&str] = &[
    "CREATE INDEX IF NOT EXISTS humans_in_movies_movie_id_idx ON humans_in_movies (movie_id)",
    "CREATE INDEX IF NOT EXISTS humans_in_movies_human_id_idx ON humans_in_movies (human_id)",
];

/// Table names in creation order.
pub const TABLES: &[&str] = &["movies", "humans", "humans_in_movies"];

/// Create any missing tables. Existing data is left alone.
pub async fn apply_schema(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for ddl in [CREATE_MOVIES, CREATE_HUMANS, CREATE_HUMANS_IN_MOVIES] {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    for ddl in CREATE_INDEXES {
        sqlx::query(ddl).execute(&mut *tx).await?;
    }
    tx.commit().await?;
    Ok(())
}

/// Drop every catalog table and recreate it empty. Destroys all rows.
pub async fn reset_schema(pool: &SqlitePool) -> Result<(), AppError> {
    let mut tx = pool.begin().await?;
    for table in TABLES.iter().rev() {
        sqlx::query(&format!("DROP TABLE IF EXISTS {}", table))
            .execute(&mut *tx)
            .await?;
    }
    tx.commit().await?;
    tracing::warn!("catalog tables dropped");
    apply_schema(pool).await
}
