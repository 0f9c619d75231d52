//! One-shot flows behind the binaries: open the store, query, print, close.
//!
//! Errors are not handled here. Each stage adds context and hands the error
//! back to `main`, which exits non-zero.

use std::io::Write;

use anyhow::Context;
use tracing::info;

use db::pool::{create_pool, run_migrations};
use db::{
    seed, to_dtos, CustomerNameMinDto, CustomerRepository, DbPool, MovieRepository,
    SqlCustomerRepository, SqlMovieRepository,
};

use crate::{report, Config};

/// Which sample data set to load when seeding is enabled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sample {
    Customers,
    Movies,
}

/// Connect, migrate, and optionally seed, according to `config`.
pub async fn open_store(config: &Config, sample: Sample) -> anyhow::Result<DbPool> {
    let pool = create_pool(&config.database_url, config.max_connections)
        .await
        .context("failed to connect to database")?;

    if !config.skip_migrations {
        run_migrations(&pool).await.context("migration failed")?;
    }

    if config.seed_sample_data {
        let loaded = match sample {
            Sample::Customers => seed::load_uri2602_sample(&pool).await,
            Sample::Movies => seed::load_uri2611_sample(&pool).await,
        };
        loaded.context("failed to load sample data")?;
    }

    Ok(pool)
}

/// Native customer search, converted to DTOs, both printed.
pub async fn print_customers_by_state<W: Write>(
    repo: &dyn CustomerRepository,
    state: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let projections = repo
        .search_native(state)
        .await
        .with_context(|| format!("customer search for state {state:?} failed"))?;
    let dtos: Vec<CustomerNameMinDto> = to_dtos(&projections);

    report::write_customer_names(out, &projections, &dtos)
        .context("failed to write customer report")?;
    Ok(())
}

/// Native and declarative movie searches, printed one after the other.
pub async fn print_movies_by_genre<W: Write>(
    repo: &dyn MovieRepository,
    genre: &str,
    out: &mut W,
) -> anyhow::Result<()> {
    let projections = repo
        .search_native(genre)
        .await
        .with_context(|| format!("native movie search for genre {genre:?} failed"))?;
    let dtos = repo
        .search_declarative(genre)
        .await
        .with_context(|| format!("declarative movie search for genre {genre:?} failed"))?;

    report::write_movies(out, &projections, &dtos).context("failed to write movie report")?;
    Ok(())
}

/// Full `uri2602` flow.
pub async fn uri2602<W: Write>(config: &Config, state: &str, out: &mut W) -> anyhow::Result<()> {
    let pool = open_store(config, Sample::Customers).await?;
    let repo = SqlCustomerRepository::new(pool.clone());

    info!(state, "Searching customers");
    print_customers_by_state(&repo, state, out).await?;

    pool.close().await;
    Ok(())
}

/// Full `uri2611` flow.
pub async fn uri2611<W: Write>(config: &Config, genre: &str, out: &mut W) -> anyhow::Result<()> {
    let pool = open_store(config, Sample::Movies).await?;
    let repo = SqlMovieRepository::new(pool.clone());

    info!(genre, "Searching movies");
    print_movies_by_genre(&repo, genre, out).await?;

    pool.close().await;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    use db::seed::{NewCustomer, NewMovie};

    fn memory_config(seed_sample_data: bool) -> Config {
        Config {
            database_url: "sqlite::memory:".into(),
            max_connections: 1,
            skip_migrations: false,
            seed_sample_data,
        }
    }

    fn text(buf: Vec<u8>) -> String {
        String::from_utf8(buf).expect("utf-8")
    }

    #[tokio::test]
    async fn uri2602_prints_sample_answer() {
        let mut out = Vec::new();
        uri2602(&memory_config(true), "RS", &mut out).await.expect("run");

        let names = "Pedro Augusto da Rocha\nJane Ester\nMarcos Antônio dos Santos\n";
        assert_eq!(text(out), format!("{names}{}\n{names}", report::CUSTOMER_SEPARATOR));
    }

    #[tokio::test]
    async fn uri2602_upper_and_lower_filters_print_the_same() {
        let mut upper = Vec::new();
        let mut lower = Vec::new();
        uri2602(&memory_config(true), "RS", &mut upper).await.expect("upper");
        uri2602(&memory_config(true), "rs", &mut lower).await.expect("lower");
        assert_eq!(upper, lower);
    }

    #[tokio::test]
    async fn uri2611_prints_sample_answer() {
        let mut out = Vec::new();
        uri2611(&memory_config(true), "Action", &mut out).await.expect("run");

        let rows = "1 - Batman\n2 - The Battle of the Dark River\n5 - The Dragon Battle\n";
        assert_eq!(
            text(out),
            format!("\n*** RESULT NATIVE SQL\n{rows}\n*** RESULT JPQL\n{rows}")
        );
    }

    #[tokio::test]
    async fn memory_store_ignores_larger_pool_setting() {
        let config = Config { max_connections: 4, ..memory_config(true) };
        let mut out = Vec::new();
        uri2602(&config, "RS", &mut out).await.expect("run");

        let names = "Pedro Augusto da Rocha\nJane Ester\nMarcos Antônio dos Santos\n";
        assert_eq!(text(out), format!("{names}{}\n{names}", report::CUSTOMER_SEPARATOR));
    }

    #[tokio::test]
    async fn unseeded_store_prints_no_records() {
        let mut out = Vec::new();
        uri2602(&memory_config(false), "RS", &mut out).await.expect("run");
        assert_eq!(text(out), format!("{}\n", report::CUSTOMER_SEPARATOR));
    }

    #[tokio::test]
    async fn customers_flow_over_hand_seeded_store() {
        let pool = open_store(&memory_config(false), Sample::Customers).await.expect("store");
        for (id, name, state) in [(1, "Ana", "RS"), (2, "Bob", "SP")] {
            seed::insert_customer(&pool, &NewCustomer { id, name, state, ..Default::default() })
                .await
                .expect("insert");
        }
        let repo = SqlCustomerRepository::new(pool);

        let mut out = Vec::new();
        print_customers_by_state(&repo, "rs", &mut out).await.expect("print");
        assert_eq!(text(out), format!("Ana\n{}\nAna\n", report::CUSTOMER_SEPARATOR));
    }

    #[tokio::test]
    async fn movies_flow_over_hand_seeded_store() {
        let pool = open_store(&memory_config(false), Sample::Movies).await.expect("store");
        for (id, name, genre) in [(1, "Mad Max", "Action"), (2, "Her", "Drama")] {
            seed::insert_movie(&pool, &NewMovie { id, name, genre }).await.expect("insert");
        }
        let repo = SqlMovieRepository::new(pool);

        let mut out = Vec::new();
        print_movies_by_genre(&repo, "Action", &mut out).await.expect("print");
        assert_eq!(
            text(out),
            "\n*** RESULT NATIVE SQL\n1 - Mad Max\n\n*** RESULT JPQL\n1 - Mad Max\n"
        );
    }

    #[tokio::test]
    async fn missing_schema_is_reported_as_error() {
        let config = Config { skip_migrations: true, ..memory_config(false) };
        let mut out = Vec::new();

        let err = uri2611(&config, "Action", &mut out).await.unwrap_err();
        assert!(format!("{err:#}").contains("movie search"));
    }
}
