use migration::{Migrator, MigratorTrait};
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use tracing::info;

use crate::{config::Config, error::Error, model::app::AppState};

/// Connect to the database and run migrations
///
/// Connection acquisition is bounded by [`Config::acquire_timeout`], so an unreachable
/// database fails with [`Error::ConnectivityFailure`] instead of hanging.
pub async fn connect_to_database(config: &Config) -> Result<DatabaseConnection, Error> {
    let mut opt = ConnectOptions::new(&config.database_url);
    opt.max_connections(config.max_connections)
        .acquire_timeout(config.acquire_timeout)
        .connect_timeout(config.acquire_timeout)
        .sqlx_logging(false);

    let db = Database::connect(opt).await?;

    Migrator::up(&db, None).await?;

    info!("Database schema is up to date");

    Ok(db)
}

/// Connect and migrate, then pair the connection with the configured isolation level
pub async fn build_app_state(config: &Config) -> Result<AppState, Error> {
    let db = connect_to_database(config).await?;

    Ok(AppState {
        db,
        isolation_level: config.isolation_level.clone(),
    })
}
