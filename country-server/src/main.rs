use std::process::ExitCode;

use tracing::{error, info, warn};
use tracing_subscriber::EnvFilter;

use country_server::config::AppConfig;
use country_server::restcountries::{CountrySource, MockCountryClient, RestCountriesClient};
use country_server::web::{AppState, create_router};

#[tokio::main]
async fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = match AppConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            error!("invalid configuration: {e}");
            return ExitCode::FAILURE;
        }
    };

    // Pick the upstream: canned data when a mock directory is configured
    let source = match &config.mock_dir {
        Some(dir) => match MockCountryClient::new(dir) {
            Ok(mock) => {
                warn!(dir = %dir.display(), "serving mock country data");
                CountrySource::Mock(mock)
            }
            Err(e) => {
                error!("failed to load mock data: {e}");
                return ExitCode::FAILURE;
            }
        },
        None => match RestCountriesClient::new(config.rest_countries()) {
            Ok(client) => CountrySource::Live(client),
            Err(e) => {
                error!("failed to create country API client: {e}");
                return ExitCode::FAILURE;
            }
        },
    };

    let app = create_router(AppState::new(source));

    let listener = match tokio::net::TcpListener::bind(config.listen_addr).await {
        Ok(listener) => listener,
        Err(e) => {
            error!(addr = %config.listen_addr, "failed to bind: {e}");
            return ExitCode::FAILURE;
        }
    };

    info!(addr = %config.listen_addr, "country lookup server listening");
    info!("  GET /health");
    info!("  GET /api/countries/search?name=<country>");
    info!("  GET /api/cache/stats");

    if let Err(e) = axum::serve(listener, app).await {
        error!("server error: {e}");
        return ExitCode::FAILURE;
    }

    ExitCode::SUCCESS
}
