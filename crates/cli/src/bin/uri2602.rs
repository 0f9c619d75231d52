//! `uri2602` — print the names of customers from Rio Grande do Sul.

use clap::Parser;

use cli::Config;

const STATE: &str = "RS";

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    cli::init_tracing();

    let config = Config::parse();
    let mut stdout = std::io::stdout().lock();
    cli::run::uri2602(&config, STATE, &mut stdout).await
}
