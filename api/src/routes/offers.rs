//! Offer endpoints.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use bb_core::domain::entities::offer::Offer;
use bb_core::domain::value_objects::offer_filter::OfferFilter;

use crate::dto::offer::{CreateOfferRequest, OfferQuery, OfferResponse, UpdateOfferRequest};
use crate::handlers::{validate, ApiError};
use crate::middleware::AuthContext;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/offers")
            .route("/filter", web::post().to(filter_offers))
            .route("", web::get().to(list_offers))
            .route("", web::post().to(create_offer))
            .route("/{id}", web::get().to(get_offer))
            .route("/{id}", web::put().to(update_offer))
            .route("/{id}", web::delete().to(delete_offer)),
    );
}

/// GET /offers dispatches on the first single-field lookup present in the
/// query string; with no parameters it is a full scan.
async fn list_offers(
    state: web::Data<AppState>,
    query: web::Query<OfferQuery>,
) -> Result<HttpResponse, ApiError> {
    let q = query.into_inner();

    let offers = if let Some(title) = q.book_title {
        state.offers.get_all_by_book_title(&title).await?
    } else if let Some(publisher) = q.book_publisher {
        state.offers.get_all_by_book_publisher(&publisher).await?
    } else if let Some(city) = q.city {
        state.offers.get_all_by_city(&city).await?
    } else if let Some(voivodeship) = q.voivodeship {
        state.offers.get_all_by_voivodeship(&voivodeship).await?
    } else if let Some(owner) = q.owner {
        state.offers.get_all_by_offer_owner(owner).await?
    } else if let (Some(after), Some(before)) = (q.created_after, q.created_before) {
        state.offers.get_all_between_dates(after, before).await?
    } else if let Some(cutoff) = q.not_expired_after {
        state.offers.get_all_not_expired(cutoff).await?
    } else {
        state.offers.get_all().await?
    };

    Ok(HttpResponse::Ok().json(to_responses(offers)))
}

async fn filter_offers(
    state: web::Data<AppState>,
    body: web::Json<OfferFilter>,
) -> Result<HttpResponse, ApiError> {
    let offers = state.offers.get_by_filter(&body.into_inner()).await?;
    Ok(HttpResponse::Ok().json(to_responses(offers)))
}

async fn get_offer(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let offer = state.offers.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(OfferResponse::from(offer)))
}

async fn create_offer(
    state: web::Data<AppState>,
    ctx: AuthContext,
    body: web::Json<CreateOfferRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    validate(&request)?;

    let mut offer = Offer::new(
        request.offer_name,
        request.book_title,
        request.book_release_year,
        request.book_publisher,
        ctx.user_id,
        request.description,
        request.expires,
        request.city,
        request.voivodeship,
    );
    if let Some(category_id) = request.category_id {
        offer = offer.with_category(state.categories.get_by_id(category_id).await?);
    }
    if let Some(file_id) = request.file_id {
        offer = offer.with_file(file_id);
    }
    if request.active {
        offer.activate();
    }

    let created = state.offers.add(offer).await?;
    Ok(HttpResponse::Created().json(OfferResponse::from(created)))
}

async fn update_offer(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<UpdateOfferRequest>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let request = body.into_inner();
    validate(&request)?;

    // Transport-layer precondition: the path id must equal the body id
    if request.id != id {
        return Err(ApiError::BadRequest(
            "path id does not match body id".to_string(),
        ));
    }

    let existing = state.offers.get_by_id(id).await?;
    if existing.offer_owner != ctx.user_id && !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }

    let category = match request.category_id {
        Some(category_id) => Some(state.categories.get_by_id(category_id).await?),
        None => None,
    };

    // The owner and creation timestamp are immutable
    let offer = Offer {
        id: Some(id),
        book_title: request.book_title,
        book_release_year: request.book_release_year,
        book_publisher: request.book_publisher,
        offer_name: request.offer_name,
        offer_owner: existing.offer_owner,
        category,
        description: request.description,
        created_at: existing.created_at,
        expires: request.expires,
        active: request.active,
        city: request.city,
        voivodeship: request.voivodeship,
        file_id: request.file_id,
    };

    let modified = state.offers.modify(offer).await?;
    Ok(HttpResponse::Ok().json(OfferResponse::from(modified)))
}

async fn delete_offer(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();

    let existing = state.offers.get_by_id(id).await?;
    if existing.offer_owner != ctx.user_id && !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }

    state.offers.delete(id).await?;
    Ok(HttpResponse::NoContent().finish())
}

fn to_responses(offers: Vec<Offer>) -> Vec<OfferResponse> {
    offers.into_iter().map(OfferResponse::from).collect()
}
