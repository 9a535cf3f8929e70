use std::sync::Arc;

use actix_web::{web, HttpServer};
use dotenvy::dotenv;
use tracing_subscriber::EnvFilter;

use rp_api::app::create_app;
use rp_api::routes::AppState;
use rp_core::services::reservation::ReservationService;
use rp_infra::{
    DatabasePool, MySqlNotificationDispatcher, MySqlPropertyRepository,
    MySqlReservationRepository, MySqlUserDirectory,
};
use rp_shared::config::AppConfig;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = AppConfig::from_env();
    let bind_address = config.server.bind_address();

    tracing::info!(environment = ?config.environment, "starting RentAPlace API server");

    let pool = DatabasePool::new(&config.database)
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;
    pool.health_check()
        .await
        .map_err(|err| std::io::Error::new(std::io::ErrorKind::Other, err.to_string()))?;

    let properties = Arc::new(MySqlPropertyRepository::new(pool.inner()));
    let reservations = Arc::new(MySqlReservationRepository::new(pool.inner()));
    let users = Arc::new(MySqlUserDirectory::new(pool.inner()));
    let notifier = Arc::new(MySqlNotificationDispatcher::new(pool.inner()));

    let reservation_service = Arc::new(ReservationService::new(
        properties,
        reservations,
        users,
        notifier,
    ));

    let app_state = web::Data::new(AppState {
        reservation_service,
    });
    let auth_config = web::Data::new(config.auth.clone());
    let environment = config.environment;

    tracing::info!(address = %bind_address, "server listening");

    let mut server = HttpServer::new(move || {
        create_app(app_state.clone(), auth_config.clone(), environment)
    })
    .bind(&bind_address)?;

    if config.server.workers > 0 {
        server = server.workers(config.server.workers);
    }

    server
        .keep_alive(std::time::Duration::from_secs(config.server.keep_alive))
        .run()
        .await
}
