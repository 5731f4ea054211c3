use clap::Parser;
use service_catalog::cli::{self, Cli};
use service_catalog::config::AppConfig;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables from .env file if it exists
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let config = AppConfig::load()?;

    env_logger::Builder::new()
        .filter_level(config.log_level())
        .parse_env("RUST_LOG")
        .init();

    log::debug!(
        "configuration loaded: view={}, org={}",
        config.catalog.default_view,
        config.catalog.default_org_scope
    );

    cli::run(cli, &config)
}
