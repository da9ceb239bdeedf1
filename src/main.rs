use roster::{config::Config, startup};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    let state = match startup::build_app_state(&config).await {
        Ok(state) => state,
        Err(e) => {
            tracing::error!("Failed to prepare database: {}", e);
            std::process::exit(1);
        }
    };

    // Readiness check, the ID only has to be readable, not present.
    match state.department_service().find_department_aggregate(0).await {
        Ok(_) => tracing::info!(
            "Database ready (max {} connections, {:?} isolation)",
            config.max_connections,
            state.isolation_level
        ),
        Err(e) => {
            tracing::error!("Database is not readable at the configured isolation level: {}", e);
            std::process::exit(1);
        }
    }
}
