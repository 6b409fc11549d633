//! HTTP server for the EOSB & compliance engine.

use clap::Parser;
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

use eosb_engine::api::{AppState, create_router};
use eosb_engine::config::{RuleRepository, ServerConfig};

fn init_logger(verbose: bool) {
    let default_filter = if verbose {
        "eosb_engine=debug,eosb_server=debug,info"
    } else {
        "eosb_engine=info,eosb_server=info"
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_target(false).compact())
        .init();
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = ServerConfig::parse();
    init_logger(config.verbose);

    let repository = match &config.rules_path {
        Some(path) => RuleRepository::load(path),
        None => RuleRepository::builtin(),
    };
    let repository = match repository {
        Ok(repository) => repository,
        Err(e) => {
            tracing::error!(error_kind = e.kind(), error = %e, "Failed to load rule repository");
            return Err(e.into());
        }
    };

    tracing::info!(
        code = %repository.metadata().code,
        version = %repository.version(),
        rules = repository.rules().len(),
        "Rule repository loaded"
    );

    let router = create_router(AppState::new(repository));
    let listener = tokio::net::TcpListener::bind(&config.bind).await?;
    tracing::info!(bind = %config.bind, "Listening");

    axum::serve(listener, router).await?;
    Ok(())
}
