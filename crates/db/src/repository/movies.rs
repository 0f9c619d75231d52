//! Movie lookups by genre.

use async_trait::async_trait;
use sqlx::Row;
use tracing::debug;

use crate::{DbError, DbPool, MovieMinDto, MovieMinProjection};

#[async_trait]
pub trait MovieRepository: Send + Sync {
    /// Id and name of every movie whose genre is `genre`, via raw SQL.
    async fn search_native(&self, genre: &str) -> Result<Vec<MovieMinProjection>, DbError>;

    /// Id and name of every movie whose genre is `genre`, mapped straight into DTOs.
    async fn search_declarative(&self, genre: &str) -> Result<Vec<MovieMinDto>, DbError>;
}

/// [`MovieRepository`] backed by the `movies` table.
pub struct SqlMovieRepository {
    pool: DbPool,
}

impl SqlMovieRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

// `id` is INTEGER in the schema; widen it so every backend decodes it as i64.
#[async_trait]
impl MovieRepository for SqlMovieRepository {
    async fn search_native(&self, genre: &str) -> Result<Vec<MovieMinProjection>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT CAST(id AS BIGINT) AS id, name
            FROM movies
            WHERE UPPER(genre) = UPPER($1)
            ORDER BY id
            "#,
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await?;

        let projections = rows
            .iter()
            .map(|row| -> Result<MovieMinProjection, sqlx::Error> {
                Ok(MovieMinProjection {
                    id: row.try_get("id")?,
                    name: row.try_get("name")?,
                })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(genre, count = projections.len(), "native movie search");
        Ok(projections)
    }

    async fn search_declarative(&self, genre: &str) -> Result<Vec<MovieMinDto>, DbError> {
        let dtos = sqlx::query_as::<_, MovieMinDto>(
            r#"
            SELECT CAST(obj.id AS BIGINT) AS id, obj.name AS name
            FROM movies obj
            WHERE UPPER(obj.genre) = UPPER($1)
            ORDER BY obj.id
            "#,
        )
        .bind(genre)
        .fetch_all(&self.pool)
        .await?;

        debug!(genre, count = dtos.len(), "declarative movie search");
        Ok(dtos)
    }
}
