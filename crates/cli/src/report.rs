//! Line-oriented report writers.
//!
//! Records are written one per line in the order given. A missing DTO field
//! prints as `null`.

use std::io::{self, Write};

use db::{CustomerNameMinDto, CustomerNameProjection, MovieMinDto, MovieMinProjection};

pub const CUSTOMER_SEPARATOR: &str = "------------------------------------";
pub const NATIVE_HEADER: &str = "*** RESULT NATIVE SQL";
pub const DECLARATIVE_HEADER: &str = "*** RESULT JPQL";

const NULL: &str = "null";

/// Customer names from the native projection, a separator, then the DTO names.
pub fn write_customer_names<W: Write>(
    out: &mut W,
    projections: &[CustomerNameProjection],
    dtos: &[CustomerNameMinDto],
) -> io::Result<()> {
    for projection in projections {
        writeln!(out, "{}", projection.name())?;
    }

    writeln!(out, "{CUSTOMER_SEPARATOR}")?;

    for dto in dtos {
        writeln!(out, "{}", dto.name().unwrap_or(NULL))?;
    }
    Ok(())
}

/// `<id> - <name>` lines, native results first, each block under its header.
pub fn write_movies<W: Write>(
    out: &mut W,
    projections: &[MovieMinProjection],
    dtos: &[MovieMinDto],
) -> io::Result<()> {
    writeln!(out)?;
    writeln!(out, "{NATIVE_HEADER}")?;
    for projection in projections {
        writeln!(out, "{} - {}", projection.id(), projection.name())?;
    }

    writeln!(out)?;
    writeln!(out, "{DECLARATIVE_HEADER}")?;
    for dto in dtos {
        let id = dto.id().map_or_else(|| NULL.to_string(), |id| id.to_string());
        writeln!(out, "{id} - {}", dto.name().unwrap_or(NULL))?;
    }
    Ok(())
}
