//! Repository traits and their SQL implementations.
//!
//! Each repository exposes the same search in two styles:
//! - `search_native`      — raw SQL, rows decoded column-by-column into a projection.
//! - `search_declarative` — rows mapped by `FromRow` straight into a DTO.
//!
//! Both styles match the filter case-insensitively and return rows in
//! primary-key order, so equal filters yield equal sequences.

pub mod customers;
pub mod movies;

pub use customers::{CustomerRepository, SqlCustomerRepository};
pub use movies::{MovieRepository, SqlMovieRepository};
