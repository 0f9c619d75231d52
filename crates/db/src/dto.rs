//! Display value objects carried from the repositories to the console.
//!
//! Fields are nullable to match the columns they are read from. A DTO is
//! built either from literals or by copying the fields of a projection.

use std::fmt;

use sqlx::FromRow;

use crate::models::{CustomerNameProjection, MovieMinProjection};

/// Convert a slice of projections into DTOs, preserving order.
pub fn to_dtos<'a, P, D>(items: &'a [P]) -> Vec<D>
where
    D: From<&'a P>,
{
    items.iter().map(D::from).collect()
}

// ---------------------------------------------------------------------------
// customers
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct CustomerNameMinDto {
    name: Option<String>,
}

impl CustomerNameMinDto {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: Some(name.into()) }
    }

    /// Copy the name out of a native-query projection.
    pub fn from_projection(projection: &CustomerNameProjection) -> Self {
        Self::new(projection.name())
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

impl From<&CustomerNameProjection> for CustomerNameMinDto {
    fn from(projection: &CustomerNameProjection) -> Self {
        Self::from_projection(projection)
    }
}

impl fmt::Display for CustomerNameMinDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CustomerNameMinDto [name={}]", self.name().unwrap_or("null"))
    }
}

// ---------------------------------------------------------------------------
// movies
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Default, PartialEq, Eq, FromRow)]
pub struct MovieMinDto {
    id: Option<i64>,
    name: Option<String>,
}

impl MovieMinDto {
    pub fn new(id: i64, name: impl Into<String>) -> Self {
        Self { id: Some(id), name: Some(name.into()) }
    }

    /// Copy id and name out of a native-query projection.
    pub fn from_projection(projection: &MovieMinProjection) -> Self {
        Self::new(projection.id(), projection.name())
    }

    pub fn id(&self) -> Option<i64> {
        self.id
    }

    pub fn name(&self) -> Option<&str> {
        self.name.as_deref()
    }

    pub fn set_id(&mut self, id: Option<i64>) {
        self.id = id;
    }

    pub fn set_name(&mut self, name: Option<String>) {
        self.name = name;
    }
}

impl From<&MovieMinProjection> for MovieMinDto {
    fn from(projection: &MovieMinProjection) -> Self {
        Self::from_projection(projection)
    }
}

impl fmt::Display for MovieMinDto {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.id {
            Some(id) => write!(f, "MovieMinDto [id={id}, name={}]", self.name().unwrap_or("null")),
            None => write!(f, "MovieMinDto [id=null, name={}]", self.name().unwrap_or("null")),
        }
    }
}
