//! Shared fixtures for the API integration tests: an application state wired
//! entirely over the in-memory repositories.

use std::sync::Arc;

use actix_web::web;

use bb_api::state::AppState;
use bb_core::domain::entities::role::{Role, ROLE_ADMIN};
use bb_core::repositories::category::MockCategoryRepository;
use bb_core::repositories::counter_offer::MockCounterOfferRepository;
use bb_core::repositories::file_store::MockFileStore;
use bb_core::repositories::offer::MockOfferRepository;
use bb_core::repositories::rental::MockRentalRepository;
use bb_core::repositories::role::MockRoleRepository;
use bb_core::repositories::user::MockUserRepository;
use bb_core::repositories::verification_token::MockVerificationTokenRepository;
use bb_core::repositories::{
    CategoryRepository, CounterOfferRepository, FileStore, OfferRepository, RentalRepository,
    RoleRepository, UserRepository, VerificationTokenRepository,
};
use bb_core::services::auth::EmailSender;
use bb_core::services::{
    AuthService, CategoryService, CounterOfferService, OfferService, RegisterUser, RentalService,
    RoleService, TokenIssuer,
};
use bb_infra::email::MockEmailSender;
use bb_shared::config::{AuthConfig, TokenConfig};

pub struct TestContext {
    pub state: web::Data<AppState>,
    pub mails: Arc<MockEmailSender>,
    pub users: Arc<MockUserRepository>,
    pub roles: Arc<MockRoleRepository>,
}

pub fn test_context() -> TestContext {
    let offer_repository: Arc<dyn OfferRepository> = Arc::new(MockOfferRepository::new());
    let counter_offer_repository: Arc<dyn CounterOfferRepository> =
        Arc::new(MockCounterOfferRepository::new());
    let rental_repository: Arc<dyn RentalRepository> = Arc::new(MockRentalRepository::new());
    let category_repository: Arc<dyn CategoryRepository> =
        Arc::new(MockCategoryRepository::new());
    let file_store: Arc<dyn FileStore> = Arc::new(MockFileStore::new());

    let users = Arc::new(MockUserRepository::new());
    let roles = Arc::new(MockRoleRepository::new());
    let tokens = Arc::new(MockVerificationTokenRepository::new());
    let mails = Arc::new(MockEmailSender::new());

    let user_repository: Arc<dyn UserRepository> = users.clone();
    let role_repository: Arc<dyn RoleRepository> = roles.clone();
    let token_repository: Arc<dyn VerificationTokenRepository> = tokens;
    let email_sender: Arc<dyn EmailSender> = mails.clone();

    let auth_config = AuthConfig {
        token: TokenConfig {
            secret: "integration-test-secret".to_string(),
            issuer: "bookbarter-test".to_string(),
            expiry_minutes: 30,
        },
        verification_token_expiry_hours: 24,
        bcrypt_cost: 4, // keep the tests fast
    };
    let token_issuer = Arc::new(TokenIssuer::new(auth_config.token.clone()));

    let auth_service = Arc::new(AuthService::new(
        user_repository,
        role_repository.clone(),
        token_repository,
        email_sender,
        token_issuer.clone(),
        auth_config,
    ));

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

    TestContext {
        state,
        mails,
        users,
        roles,
    }
}

/// Register, verify and log in a user directly through the services,
/// returning a bearer token for HTTP calls.
pub async fn auth_token(ctx: &TestContext, login: &str) -> String {
    let email = format!("{}@example.com", login);
    ctx.state
        .auth
        .register(RegisterUser {
            name: "Jan".to_string(),
            last_name: "Kowalski".to_string(),
            login: login.to_string(),
            password: "password123".to_string(),
            email: email.clone(),
        })
        .await
        .unwrap();

    let raw_token = ctx
        .mails
        .sent()
        .await
        .iter()
        .rev()
        .find(|mail| mail.to == email)
        .unwrap()
        .token
        .clone();
    ctx.state.auth.verify_email(&raw_token).await.unwrap();

    ctx.state
        .auth
        .login(login, "password123")
        .await
        .unwrap()
        .access_token
}

/// Like [`auth_token`] but grants the user the admin authority first.
pub async fn admin_token(ctx: &TestContext, login: &str) -> String {
    let email = format!("{}@example.com", login);
    ctx.state
        .auth
        .register(RegisterUser {
            name: "Ada".to_string(),
            last_name: "Nowak".to_string(),
            login: login.to_string(),
            password: "password123".to_string(),
            email: email.clone(),
        })
        .await
        .unwrap();

    let raw_token = ctx
        .mails
        .sent()
        .await
        .iter()
        .rev()
        .find(|mail| mail.to == email)
        .unwrap()
        .token
        .clone();
    let mut user = ctx.state.auth.verify_email(&raw_token).await.unwrap();

    let admin_role = match ctx.roles.find_by_name(ROLE_ADMIN).await.unwrap() {
        Some(role) => role,
        None => ctx.roles.create(Role::new(ROLE_ADMIN)).await.unwrap(),
    };
    user.roles.push(admin_role);
    ctx.users.save(user).await.unwrap();

    ctx.state
        .auth
        .login(login, "password123")
        .await
        .unwrap()
        .access_token
}

/// Bearer header tuple for a token
pub fn bearer(token: &str) -> (&'static str, String) {
    ("Authorization", format!("Bearer {}", token))
}
