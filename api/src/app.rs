//! Application factory.

use actix_web::{web, App, HttpResponse};
use tracing_actix_web::TracingLogger;

use bb_shared::config::CorsConfig;
use bb_shared::types::ErrorResponse;

use crate::middleware::cors::create_cors;
use crate::routes;
use crate::state::AppState;

/// Create and configure the application with all routes
pub fn create_app(
    state: web::Data<AppState>,
    cors_config: &CorsConfig,
) -> App<
    impl actix_web::dev::ServiceFactory<
        actix_web::dev::ServiceRequest,
        Config = (),
        Response = actix_web::dev::ServiceResponse<
            actix_web::body::EitherBody<tracing_actix_web::StreamSpan<actix_web::body::BoxBody>>,
        >,
        Error = actix_web::Error,
        InitError = (),
    >,
> {
    App::new()
        .app_data(state)
        .wrap(TracingLogger::default())
        .wrap(create_cors(cors_config))
        .route("/health", web::get().to(health_check))
        .service(
            web::scope("/api/v1")
                .configure(routes::auth::configure)
                .configure(routes::offers::configure)
                .configure(routes::counter_offers::configure)
                .configure(routes::rentals::configure)
                .configure(routes::categories::configure)
                .configure(routes::roles::configure)
                .configure(routes::users::configure)
                .configure(routes::files::configure),
        )
        .default_service(web::route().to(not_found))
}

/// Health check endpoint handler
async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "healthy",
        "service": "bookbarter-api",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}

/// Default 404 handler
async fn not_found() -> HttpResponse {
    HttpResponse::NotFound().json(ErrorResponse::new(
        "NOT_FOUND",
        "the requested resource was not found",
    ))
}
