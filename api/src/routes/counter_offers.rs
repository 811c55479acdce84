//! Counter-offer endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use bb_core::domain::entities::counter_offer::CounterOffer;

use crate::dto::counter_offer::{
    CounterOfferQuery, CounterOfferResponse, CreateCounterOfferRequest,
    UpdateCounterOfferRequest,
};
use crate::handlers::ApiError;
use crate::middleware::AuthContext;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/counter-offers")
            .route("/offer/{offer_id}", web::get().to(list_by_offer))
            .route("/user/{user_id}", web::get().to(list_by_user))
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

/// GET /counter-offers returns all proposals, or those expiring within the
/// given range when both bounds are present.
async fn list(
    state: web::Data<AppState>,
    query: web::Query<CounterOfferQuery>,
) -> Result<HttpResponse, ApiError> {
    let q = query.into_inner();

    let counter_offers = if let (Some(after), Some(before)) = (q.expires_after, q.expires_before) {
        state
            .counter_offers
            .get_all_between_dates(after, before)
            .await?
    } else {
        state.counter_offers.get_all().await?
    };

    Ok(HttpResponse::Ok().json(to_responses(counter_offers)))
}

async fn list_by_offer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let counter_offers = state
        .counter_offers
        .get_all_by_offer(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(to_responses(counter_offers)))
}

async fn list_by_user(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let counter_offers = state
        .counter_offers
        .get_all_by_user(path.into_inner())
        .await?;
    Ok(HttpResponse::Ok().json(to_responses(counter_offers)))
}

async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let counter_offer = state.counter_offers.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CounterOfferResponse::from(counter_offer)))
}

async fn create(
    state: web::Data<AppState>,
    ctx: AuthContext,
    body: web::Json<CreateCounterOfferRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();

    // A proposal must reference an existing offer
    state.offers.get_by_id(request.offer).await?;

    let counter_offer = CounterOffer::new(request.offer, ctx.user_id, request.expires);
    let created = state.counter_offers.add(counter_offer).await?;

    Ok(HttpResponse::Created().json(CounterOfferResponse::from(created)))
}

async fn update(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCounterOfferRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let request = body.into_inner();

    if request.id != id {
        return Err(ApiError::BadRequest(
            "path id does not match body id".to_string(),
        ));
    }

    let mut existing = state.counter_offers.get_by_id(id).await?;
    if existing.user != ctx.user_id && !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }

    existing.expires = request.expires;
    let modified = state.counter_offers.modify(existing).await?;

    Ok(HttpResponse::Ok().json(CounterOfferResponse::from(modified)))
}

async fn delete(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let existing = state.counter_offers.get_by_id(id).await?;
    if existing.user != ctx.user_id && !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }

    state.counter_offers.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

fn to_responses(counter_offers: Vec<CounterOffer>) -> Vec<CounterOfferResponse> {
    counter_offers
        .into_iter()
        .map(CounterOfferResponse::from)
        .collect()
}
