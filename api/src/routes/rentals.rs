//! Rental endpoints.

use actix_web::{web, HttpResponse};
use chrono::Utc;
use uuid::Uuid;

use bb_core::domain::entities::rental::Rental;

use crate::dto::rental::{CreateRentalRequest, RentalQuery, RentalResponse};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/rentals")
            .route("/offer/{offer_id}", web::get().to(get_by_offer))
            .route("/counter-offer/{id}", web::get().to(get_by_counter_offer))
            .route("/user/{user_id}", web::get().to(list_by_user))
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::delete().to(delete)),
    );
}

async fn list(
    state: web::Data<AppState>,
    query: web::Query<RentalQuery>,
) -> Result<HttpResponse, ApiError> {
    let rentals = match query.into_inner().not_expired_after {
        Some(cutoff) => state.rentals.get_all_by_not_expired(cutoff).await?,
        None => state.rentals.get_all().await?,
    };
    Ok(HttpResponse::Ok().json(to_responses(rentals)))
}

async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let rental = state.rentals.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RentalResponse::from(rental)))
}

async fn get_by_offer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let rental = state.rentals.get_by_offer(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RentalResponse::from(rental)))
}

async fn get_by_counter_offer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let rental = state.rentals.get_by_counter_offer(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RentalResponse::from(rental)))
}

async fn list_by_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let rentals = state.rentals.get_all_by_user(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_responses(rentals)))
}

/// POST /rentals converts an accepted counter-offer into a rental.
///
/// Only the owner of the targeted offer (or an admin) accepts. The source
/// counter-offer is left untouched; acceptance is inferred from the rental
/// referencing it.
async fn create(
    state: web::Data<AppState>,
    ctx: AuthContext,
    body: web::Json<CreateRentalRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    let counter_offer = state.counter_offers.get_by_id(request.counter_offer).await?;
    let offer = state.offers.get_by_id(counter_offer.offer).await?;

    if offer.offer_owner != ctx.user_id && !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let rental = Rental::new(
        counter_offer.offer,
        counter_offer.user,
        counter_offer.id,
        Utc::now(),
        request.expires.unwrap_or(counter_offer.expires),
    );
    let created = state.rentals.add(rental).await?;

    Ok(HttpResponse::Created().json(RentalResponse::from(created)))
}

async fn delete(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let existing = state.rentals.get_by_id(id).await?;
    if existing.user != ctx.user_id && !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }

    state.rentals.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

fn to_responses(rentals: Vec<Rental>) -> Vec<RentalResponse> {
    rentals.into_iter().map(RentalResponse::from).collect()
}
