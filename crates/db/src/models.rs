//! Read-only projections over single result rows.
//!
//! A projection exposes only the columns a query selected. Instances are
//! built per row and dropped once printed.

/// Name of a customer, as returned by the native state search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerNameProjection {
    pub name: String,
}

impl CustomerNameProjection {
    pub fn name(&self) -> &str {
        &self.name
    }
}

/// Identifier and title of a movie, as returned by the native genre search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MovieMinProjection {
    pub id: i64,
    pub name: String,
}

impl MovieMinProjection {
    pub fn id(&self) -> i64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }
}
