//! Row insertion helpers and the sample data sets of the two reports.
//!
//! Inserts are keyed on `id` and skip rows that already exist, so loading a
//! sample twice leaves the table unchanged.

use tracing::info;

use crate::{DbError, DbPool};

/// A `customers` row to insert.
#[derive(Debug, Clone, Default)]
pub struct NewCustomer<'a> {
    pub id: i64,
    pub name: &'a str,
    pub street: Option<&'a str>,
    pub city: Option<&'a str>,
    pub state: &'a str,
    pub credit_limit: Option<f64>,
}

/// A `movies` row to insert.
#[derive(Debug, Clone, Default)]
pub struct NewMovie<'a> {
    pub id: i64,
    pub name: &'a str,
    pub genre: &'a str,
}

/// Insert one customer. Returns `false` if a row with the same id exists.
pub async fn insert_customer(pool: &DbPool, customer: &NewCustomer<'_>) -> Result<bool, DbError> {
    let result = sqlx::query(
        r#"
        INSERT INTO customers (id, name, street, city, state, credit_limit)
        VALUES ($1, $2, $3, $4, $5, $6)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(customer.id)
    .bind(customer.name)
    .bind(customer.street)
    .bind(customer.city)
    .bind(customer.state)
    .bind(customer.credit_limit)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

/// Insert one movie. Returns `false` if a row with the same id exists.
pub async fn insert_movie(pool: &DbPool, movie: &NewMovie<'_>) -> Result<bool, DbError> {
    let result = sqlx::query(
        r#"
        INSERT INTO movies (id, name, genre)
        VALUES ($1, $2, $3)
        ON CONFLICT (id) DO NOTHING
        "#,
    )
    .bind(movie.id)
    .bind(movie.name)
    .bind(movie.genre)
    .execute(pool)
    .await?;

    Ok(result.rows_affected() > 0)
}

// ---------------------------------------------------------------------------
// Sample data
// ---------------------------------------------------------------------------

/// The customer table of problem 2602. Filtering on `RS` yields rows 1, 4, 5.
pub const URI2602_CUSTOMERS: &[NewCustomer<'static>] = &[
    NewCustomer {
        id: 1,
        name: "Pedro Augusto da Rocha",
        street: Some("Rua Pedro Carlos Hoffman"),
        city: Some("Porto Alegre"),
        state: "RS",
        credit_limit: Some(700.00),
    },
    NewCustomer {
        id: 2,
        name: "Antonio Carlos Mamel",
        street: Some("Av. Pinheiros"),
        city: Some("Belo Horizonte"),
        state: "MG",
        credit_limit: Some(3500.50),
    },
    NewCustomer {
        id: 3,
        name: "Luiza Augusta Mhor",
        street: Some("Rua Salto Grande"),
        city: Some("Niteroi"),
        state: "RJ",
        credit_limit: Some(4000.00),
    },
    NewCustomer {
        id: 4,
        name: "Jane Ester",
        street: Some("Av 7 de setembro"),
        city: Some("Erechim"),
        state: "RS",
        credit_limit: Some(800.00),
    },
    NewCustomer {
        id: 5,
        name: "Marcos Antônio dos Santos",
        street: Some("Av Farrapos"),
        city: Some("Porto Alegre"),
        state: "RS",
        credit_limit: Some(4250.25),
    },
];

/// The movie table of problem 2611. Filtering on `Action` yields rows 1, 2, 5.
pub const URI2611_MOVIES: &[NewMovie<'static>] = &[
    NewMovie { id: 1, name: "Batman", genre: "Action" },
    NewMovie { id: 2, name: "The Battle of the Dark River", genre: "Action" },
    NewMovie { id: 3, name: "White Duck", genre: "Animation" },
    NewMovie { id: 4, name: "Breaking Bad", genre: "Drama" },
    NewMovie { id: 5, name: "The Dragon Battle", genre: "Action" },
    NewMovie { id: 6, name: "The Rotten Beast", genre: "Horror" },
];

/// Load [`URI2602_CUSTOMERS`]. Returns how many rows were newly inserted.
pub async fn load_uri2602_sample(pool: &DbPool) -> Result<usize, DbError> {
    let mut inserted = 0;
    for customer in URI2602_CUSTOMERS {
        if insert_customer(pool, customer).await? {
            inserted += 1;
        }
    }
    info!(inserted, "Loaded customer sample data");
    Ok(inserted)
}

/// Load [`URI2611_MOVIES`]. Returns how many rows were newly inserted.
pub async fn load_uri2611_sample(pool: &DbPool) -> Result<usize, DbError> {
    let mut inserted = 0;
    for movie in URI2611_MOVIES {
        if insert_movie(pool, movie).await? {
            inserted += 1;
        }
    }
    info!(inserted, "Loaded movie sample data");
    Ok(inserted)
}
