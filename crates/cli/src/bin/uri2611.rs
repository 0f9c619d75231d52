//! `uri2611` — print the id and name of every action movie.

use clap::Parser;

use cli::Config;

const GENRE: &str = "Action";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    cli::init_tracing();

    let config = Config::parse();
    let mut stdout = std::io::stdout().lock();
    cli::run::uri2611(&config, GENRE, &mut stdout).await
}
