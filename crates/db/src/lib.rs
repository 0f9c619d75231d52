//! `db` crate — pure persistence layer.
//!
//! Provides a connection pool, projection and DTO types, repository traits
//! with their SQL implementations, and sample seed data for the `customers`
//! and `movies` tables. No presentation logic lives here.

pub mod error;
pub mod pool;
pub mod models;
pub mod dto;
pub mod repository;
pub mod seed;

pub use pool::DbPool;
pub use error::DbError;
pub use models::{CustomerNameProjection, MovieMinProjection};
pub use dto::{to_dtos, CustomerNameMinDto, MovieMinDto};
pub use repository::{CustomerRepository, MovieRepository, SqlCustomerRepository, SqlMovieRepository};
