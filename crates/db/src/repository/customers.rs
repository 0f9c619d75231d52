//! Customer lookups by state code.

use async_trait::async_trait;
use sqlx::Row;
use tracing::debug;

use crate::{CustomerNameMinDto, CustomerNameProjection, DbError, DbPool};

#[async_trait]
pub trait CustomerRepository: Send + Sync {
    /// Names of customers living in `state`, via raw SQL.
    async fn search_native(&self, state: &str) -> Result<Vec<CustomerNameProjection>, DbError>;

    /// Names of customers living in `state`, mapped straight into DTOs.
    async fn search_declarative(&self, state: &str) -> Result<Vec<CustomerNameMinDto>, DbError>;
}

/// [`CustomerRepository`] backed by the `customers` table.
pub struct SqlCustomerRepository {
    pool: DbPool,
}

impl SqlCustomerRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CustomerRepository for SqlCustomerRepository {
    async fn search_native(&self, state: &str) -> Result<Vec<CustomerNameProjection>, DbError> {
        let rows = sqlx::query(
            r#"
            SELECT name
            FROM customers
            WHERE UPPER(state) = UPPER($1)
            ORDER BY id
            "#,
        )
        .bind(state)
        .fetch_all(&self.pool)
        .await?;

        let projections = rows
            .iter()
            .map(|row| -> Result<CustomerNameProjection, sqlx::Error> {
                Ok(CustomerNameProjection { name: row.try_get("name")? })
            })
            .collect::<Result<Vec<_>, _>>()?;

        debug!(state, count = projections.len(), "native customer search");
        Ok(projections)
    }

    async fn search_declarative(&self, state: &str) -> Result<Vec<CustomerNameMinDto>, DbError> {
        let dtos = sqlx::query_as::<_, CustomerNameMinDto>(
            r#"
            SELECT obj.name AS name
            FROM customers obj
            WHERE UPPER(obj.state) = UPPER($1)
            ORDER BY obj.id
            "#,
        )
        .bind(state)
        .fetch_all(&self.pool)
        .await?;

        debug!(state, count = dtos.len(), "declarative customer search");
        Ok(dtos)
    }
}
