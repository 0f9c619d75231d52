//! `cli` crate — the two console reports and the plumbing they share.
//!
//! Binaries:
//! - `uri2602` — customer names for a state.
//! - `uri2611` — movies for a genre.

pub mod config;
pub mod report;
pub mod run;

pub use config::Config;

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber.
///
/// Logs go to stderr so stdout carries nothing but report lines. `RUST_LOG`
/// overrides the default filter.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| "info,sqlx=warn".into()),
        )
        .with_writer(std::io::stderr)
        .init();
}
