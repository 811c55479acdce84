use std::sync::Arc;

use actix_web::{web, HttpServer};
use tracing::{info, warn};

use bb_core::repositories::{
    CategoryRepository, CounterOfferRepository, FileStore, OfferRepository, RentalRepository,
    RoleRepository, UserRepository, VerificationTokenRepository,
};
use bb_core::services::auth::EmailSender;
use bb_core::services::{
    AuthService, CategoryService, CleanupService, CounterOfferService, OfferService,
    RentalService, RoleService, TokenIssuer,
};
use bb_infra::database::mysql::{
    MySqlCategoryRepository, MySqlCounterOfferRepository, MySqlOfferRepository,
    MySqlRentalRepository, MySqlRoleRepository, MySqlUserRepository,
    MySqlVerificationTokenRepository,
};
use bb_infra::database::{create_pool, run_migrations};
use bb_infra::email::{HttpEmailSender, MockEmailSender};
use bb_infra::storage::MySqlFileStore;

use bb_api::app::create_app;
use bb_api::config;
use bb_api::state::AppState;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    let env_filter = std::env::var("RUST_LOG")
        .unwrap_or_else(|_| "bb_api=debug,bb_core=debug,bb_infra=debug,info".to_string());
    tracing_subscriber::fmt().with_env_filter(env_filter).init();

    let config = config::load()?;

    let pool = create_pool(&config.database).await?;
    if let Err(e) = run_migrations(&pool).await {
        warn!(error = %e, "migration failed; continuing with the existing schema");
    }

    // Repositories
    let offer_repository: Arc<dyn OfferRepository> =
        Arc::new(MySqlOfferRepository::new(pool.clone()));
    let counter_offer_repository: Arc<dyn CounterOfferRepository> =
        Arc::new(MySqlCounterOfferRepository::new(pool.clone()));
    let rental_repository: Arc<dyn RentalRepository> =
        Arc::new(MySqlRentalRepository::new(pool.clone()));
    let category_repository: Arc<dyn CategoryRepository> =
        Arc::new(MySqlCategoryRepository::new(pool.clone()));
    let role_repository: Arc<dyn RoleRepository> =
        Arc::new(MySqlRoleRepository::new(pool.clone()));
    let user_repository: Arc<dyn UserRepository> =
        Arc::new(MySqlUserRepository::new(pool.clone()));
    let token_repository: Arc<dyn VerificationTokenRepository> =
        Arc::new(MySqlVerificationTokenRepository::new(pool.clone()));
    let file_store: Arc<dyn FileStore> = Arc::new(MySqlFileStore::new(pool.clone()));

    // Outbound mail
    let email_sender: Arc<dyn EmailSender> = match config.mail.provider.as_str() {
        "http" => Arc::new(HttpEmailSender::new(config.mail.clone())?),
        other => {
            if other != "mock" {
                warn!("unknown mail provider '{}', using the mock sender", other);
            }
            Arc::new(MockEmailSender::new())
        }
    };

    // Services
    let token_issuer = Arc::new(TokenIssuer::new(config.auth.token.clone()));
    let auth_service = Arc::new(AuthService::new(
        user_repository.clone(),
        role_repository.clone(),
        token_repository.clone(),
        email_sender,
        token_issuer.clone(),
        config.auth.clone(),
    ));

    // The daily sweep of expired verification tokens and their unverified
    // accounts runs on its own timer, independent of request handling.
    let cleanup_service = Arc::new(CleanupService::new(
        token_repository,
        user_repository,
        config.cleanup.clone(),
    ));
    cleanup_service.start_background_task();

    let state = web::Data::new(AppState {
        offers: Arc::new(OfferService::new(offer_repository)),
        counter_offers: Arc::new(CounterOfferService::new(counter_offer_repository)),
        rentals: Arc::new(RentalService::new(rental_repository)),
        categories: Arc::new(CategoryService::new(category_repository)),
        roles: Arc::new(RoleService::new(role_repository)),
        auth: auth_service,
        token_issuer,
        files: file_store,
    });

    let bind_address = config.server.bind_address();
    let cors_config = config.cors.clone();
    info!("listening on {}", bind_address);

    let server = HttpServer::new(move || create_app(state.clone(), &cors_config));
    let server = if config.server.workers > 0 {
        server.workers(config.server.workers)
    } else {
        server
    };

    server.bind(&bind_address)?.run().await?;
    Ok(())
}
