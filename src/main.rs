use clap::Parser;
use std::sync::Arc;
use std::time::Duration;
use vrctime::adapters::cache::CachedLocationResolver;
use vrctime::adapters::geo::IpApiLocationResolver;
use vrctime::adapters::tz::FinderTimezoneResolver;
use vrctime::app::routes::{self, AppState};
use vrctime::app::service::ClockService;
use vrctime::utils::{logger, validation::Validate};
use vrctime::CliConfig;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    logger::init_logger(config.verbose);

    tracing::info!("Starting vrctime server");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("{}", e);
        std::process::exit(1);
    }

    let fallback = config.fallback_tz()?;

    let resolver = CachedLocationResolver::new(
        IpApiLocationResolver::new(reqwest::Client::new(), config.geo_endpoint.clone()),
        Duration::from_secs(config.cache_ttl_secs),
    );
    // Boundary data load takes a moment; do it before accepting traffic.
    let finder = FinderTimezoneResolver::new();

    let clock = ClockService::new(Arc::new(resolver), Arc::new(finder)).with_fallback(fallback);

    let state = Arc::new(AppState {
        clock,
        ip_header: config.ip_header.to_lowercase(),
        cell_size: config.cell_size,
    });
    let app = routes::router(state);

    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!("Listening on http://{}", config.bind);
    axum::serve(listener, app).await?;

    Ok(())
}
