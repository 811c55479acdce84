//! Role endpoints, all admin-only.

use actix_web::{web, HttpResponse};
use uuid::Uuid;

use bb_core::domain::entities::role::Role;

use crate::dto::role::{CreateRoleRequest, RoleResponse, UpdateRoleRequest};
use crate::handlers::{validate, ApiError};
use crate::middleware::AuthContext;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/roles")
            .route("/name/{name}", web::get().to(get_by_name))
            .route("", web::get().to(list))
            .route("", web::post().to(create))
            .route("/{id}", web::get().to(get_by_id))
            .route("/{id}", web::put().to(update))
            .route("/{id}", web::delete().to(delete)),
    );
}

fn require_admin(ctx: &AuthContext) -> Result<(), ApiError> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(ApiError::Forbidden)
    }
}

async fn list(state: web::Data<AppState>, ctx: AuthContext) -> Result<HttpResponse, ApiError> {
    require_admin(&ctx)?;
    let roles = state.roles.get_all().await?;
    let responses: Vec<RoleResponse> = roles.into_iter().map(RoleResponse::from).collect();
    Ok(HttpResponse::Ok().json(responses))
}

async fn get_by_id(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&ctx)?;
    let role = state.roles.get_by_id(path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RoleResponse::from(role)))
}

async fn get_by_name(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&ctx)?;
    let role = state.roles.get_by_name(&path.into_inner()).await?;
    Ok(HttpResponse::Ok().json(RoleResponse::from(role)))
}

async fn create(
    state: web::Data<AppState>,
    ctx: AuthContext,
    body: web::Json<CreateRoleRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&ctx)?;
    let request = body.into_inner();
    validate(&request)?;

    let created = state.roles.add(Role::new(request.name)).await?;
    Ok(HttpResponse::Created().json(RoleResponse::from(created)))
}

async fn update(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
    body: web::Json<UpdateRoleRequest>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&ctx)?;
    let id = path.into_inner();
    let request = body.into_inner();
    validate(&request)?;

    if request.id != id {
        return Err(ApiError::BadRequest(
            "path id does not match body id".to_string(),
        ));
    }

    let role = Role {
        id: Some(id),
        name: request.name,
    };
    let modified = state.roles.modify(role).await?;
    Ok(HttpResponse::Ok().json(RoleResponse::from(modified)))
}

async fn delete(
    state: web::Data<AppState>,
    ctx: AuthContext,
    path: web::Path<Uuid>,
) -> Result<HttpResponse, ApiError> {
    require_admin(&ctx)?;
    state.roles.delete(path.into_inner()).await?;
    Ok(HttpResponse::NoContent().finish())
}
