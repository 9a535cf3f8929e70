//! Application factory.
//!
//! Builds the actix-web App with middleware, routes and shared state.
//! Generic over the service collaborators so integration tests can run the
//! same app against the in-memory mocks.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use rp_core::repositories::{PropertyRepository, ReservationRepository, UserDirectory};
use rp_core::services::notification::NotificationDispatcher;
use rp_shared::config::{AuthConfig, Environment};
use rp_shared::types::response::{error_codes, ErrorResponse};

use crate::middleware::cors::create_cors;
use crate::routes::properties::search_properties;
use crate::routes::reservations::{
    cancel_reservation, create_reservation, get_reservation, list_my_reservations,
    update_reservation_status,
};
use crate::routes::AppState;

/// Create and configure the application with all dependencies
pub fn create_app<P, R, U, N>(
    app_state: web::Data<AppState<P, R, U, N>>,
    auth_config: web::Data<AuthConfig>,
    environment: Environment,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<impl actix_web::body::MessageBody>,
        Error = actix_web::Error,
        InitError = (),
    >,
>
where
    P: PropertyRepository + 'static,
    R: ReservationRepository + 'static,
    U: UserDirectory + 'static,
    N: NotificationDispatcher + 'static,
{
    let cors = create_cors(environment);

    App::new()
        .app_data(app_state)
        .app_data(auth_config)
        .wrap(TracingLogger::default())
        .wrap(cors)
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .service(
                    web::scope("/reservations")
                        .route("", web::post().to(create_reservation::<P, R, U, N>))
                        .route("/my", web::get().to(list_my_reservations::<P, R, U, N>))
                        .route("/{id}", web::get().to(get_reservation::<P, R, U, N>))
                        .route(
                            "/{id}/status",
                            web::put().to(update_reservation_status::<P, R, U, N>),
                        )
                        .route("/{id}", web::delete().to(cancel_reservation::<P, R, U, N>)),
                )
                .service(
                    web::scope("/properties")
                        .route("/search", web::get().to(search_properties::<P, R, U, N>)),
                ),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "rentaplace-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        error_codes::NOT_FOUND,
        "The requested resource was not found",
    ))
}
