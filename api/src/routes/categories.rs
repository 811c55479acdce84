//! Category endpoints. Reads are public; mutations are admin-only.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use bb_core::domain::entities::category::Category;

use crate::dto::category::{CategoryResponse, CreateCategoryRequest, UpdateCategoryRequest};
use crate::handlers::{validate, ApiError};
use crate::middleware::AuthContext;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/categories")
            .route("/name/{name}", web::get().to(get_by_name))
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

async fn list(state: web::Data<AppState>) -> Result<HttpResponse, ApiError> {
    let categories = state.categories.get_all().await?;
    let responses: Vec<CategoryResponse> =
        categories.into_iter().map(CategoryResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

async fn get_by_id(
    state: web::Data<AppState>,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    let category = state.categories.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CategoryResponse::from(category)))
}

async fn get_by_name(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let category = state.categories.get_by_name(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(CategoryResponse::from(category)))
}

async fn create(
    state: web::Data<AppState>,
    ctx: AuthContext,
    body: web::Json<CreateCategoryRequest>,
) -> Result<HttpResponse, ApiError> {
    if !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let request = body.into_inner();
    validate(&request)?;

    let created = state.categories.add(Category::new(request.name)).await?;
    Ok(HttpResponse::Created().json(CategoryResponse::from(created)))
}

async fn update(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<UpdateCategoryRequest>,
) -> Result<HttpResponse, ApiError> {
    if !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }
    let id = path.into_inner();
    let request = body.into_inner();
    validate(&request)?;

    if request.id != id {
        return Err(ApiError::BadRequest(
            "path id does not match body id".to_string(),
        ));
    }

    let category = Category {
        id: Some(id),
        name: request.name,
    };
    let modified = state.categories.modify(category).await?;
    Ok(HttpResponse::Ok().json(CategoryResponse::from(modified)))
}

async fn delete(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    if !ctx.is_admin() {
        return Err(ApiError::Forbidden);
    }
    state.categories.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
