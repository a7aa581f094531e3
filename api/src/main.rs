use std::sync::Arc;

use actix_web::{web, HttpServer};
use anyhow::{bail, Context};
use log::{info, warn};

use sc_api::{create_app, AppState};
use sc_infra::{
    DatabasePool, MySqlCartItemRepository, MySqlCustomerRepository, MySqlProductRepository,
};
use sc_shared::AppConfig;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    // Load environment variables
    dotenvy::dotenv().ok();

    let config = AppConfig::from_env();

    // RUST_LOG wins; otherwise the level configured for the environment
    env_logger::init_from_env(env_logger::Env::new().default_filter_or(config.logging.level.as_str()));

    info!(
        "Starting shopping cart API v{} ({})",
        env!("CARGO_PKG_VERSION"),
        config.environment
    );

    if config.auth.jwt.is_using_default_secret() {
        if config.is_production() {
            bail!("JWT_SECRET must be set in production");
        }
        warn!("Using the default JWT secret; set JWT_SECRET before deploying");
    }

    let pool = DatabasePool::new(config.database.clone())
        .await
        .context("failed to connect to the database")?;

    if !pool.health_check().await? {
        bail!("database health check failed");
    }
    info!("{}", pool.get_statistics());

    if config.database.run_migrations {
        pool.run_migrations()
            .await
            .context("failed to run database migrations")?;
    }

    let mysql_pool = pool.get_pool().clone();
    let app_state = web::Data::new(AppState::new(
        Arc::new(MySqlCustomerRepository::new(mysql_pool.clone())),
        Arc::new(MySqlProductRepository::new(mysql_pool.clone())),
        Arc::new(MySqlCartItemRepository::new(mysql_pool)),
        &config.auth,
    ));

    let bind_address = config.server.bind_address();
    let workers = config.server.workers;
    info!("Server will bind to: {}", bind_address);

    let app_config = config.clone();
    let mut server = HttpServer::new(move || create_app(app_state.clone(), &app_config));
    if workers > 0 {
        server = server.workers(workers);
    }

    server
        .bind(&bind_address)
        .with_context(|| format!("failed to bind {}", bind_address))?
        .run()
        .await?;

    info!("Server stopped, closing database pool");
    pool.close().await;
    Ok(())
}
