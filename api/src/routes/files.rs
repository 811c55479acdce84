//! Attachment endpoints.
//!
//! Uploads arrive as base64-encoded JSON bodies; downloads stream the raw
//! bytes with the stored content type.

use actix_web::http::header::{ContentDisposition, DispositionParam, DispositionType};
use actix_web::{web, HttpResponse};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;

use bb_core::domain::entities::stored_file::StoredFile;
use bb_core::errors::{RepositoryError, ServiceError};

use crate::dto::file::{FileUploadRequest, FileUploadResponse};
use crate::handlers::{validate, ApiError};
use crate::middleware::AuthContext;
use crate::state::AppState;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/files")
            .route("", web::post().to(upload))
            .route("/{id}", web::get().to(download))
            .route("/{id}", web::delete().to(delete)),
    );
}

async fn upload(
    state: web::Data<AppState>,
    _ctx: AuthContext,
    body: web::Json<FileUploadRequest>,
) -> Result<HttpResponse, ApiError> {
    let request = body.into_inner();
    validate(&request)?;

    let data = BASE64
        .decode(&request.data)
        .map_err(|e| ApiError::BadRequest(format!("invalid base64 payload: {}", e)))?;

    let file = StoredFile::new(request.filename, request.content_type, data);
    let file_id = state
        .files
        .store(file)
        .await
        .map_err(|e| ServiceError::Add {
            message: format!("could not store file: {}", e),
        })?;

    Ok(HttpResponse::Created().json(FileUploadResponse { file_id }))
}

async fn download(
    state: web::Data<AppState>,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    let file = state.files.load(&id).await.map_err(|e| match e {
        RepositoryError::NotFound { resource } => ServiceError::Get {
            message: format!("{} not found", resource),
        },
        other => ServiceError::Get {
            message: format!("could not load file {}: {}", id, other),
        },
    })?;

    Ok(HttpResponse::Ok()
        .content_type(file.content_type)
        .insert_header(ContentDisposition {
            disposition: DispositionType::Attachment,
            parameters: vec![DispositionParam::Filename(file.filename)],
        })
        .body(file.data))
}

async fn delete(
    state: web::Data<AppState>,
    _ctx: AuthContext,
    path: web::Path<String>,
) -> Result<HttpResponse, ApiError> {
    let id = path.into_inner();
    state.files.delete(&id).await.map_err(|e| ServiceError::Delete {
        message: format!("could not delete file {}: {}", id, e),
    })?;
    Ok(HttpResponse::NoContent().finish())
}
