//! Attachment upload/download over the HTTP surface.

mod common;

use actix_web::{http::StatusCode, test};
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use serde_json::json;

use bb_api::app::create_app;
use bb_shared::config::CorsConfig;

use common::{auth_token, bearer, test_context};

#[actix_web::test]
async fn test_upload_download_delete_round_trip() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let token = auth_token(&ctx, "uploader").await;

    let payload = b"not really a jpeg";
    let request = test::TestRequest::post()
        .uri("/api/v1/files")
        .insert_header(bearer(&token))
        .set_json(json!({
            "filename": "cover.jpg",
            "content_type": "image/jpeg",
            "data": BASE64.encode(payload),
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let body: serde_json::Value = test::read_body_json(response).await;
    let file_id = body["file_id"].as_str().unwrap().to_string();

    // Download returns the raw bytes with the stored content type
    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/files/{}", file_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(
        response.headers().get("content-type").unwrap(),
        "image/jpeg"
    );
    let bytes = test::read_body(response).await;
    assert_eq!(bytes.as_ref(), payload);

    // Delete, then the download is a 404
    let request = test::TestRequest::delete()
        .uri(&format!("/api/v1/files/{}", file_id))
        .insert_header(bearer(&token))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/files/{}", file_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_invalid_base64_is_bad_request() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let token = auth_token(&ctx, "uploader").await;

    let request = test::TestRequest::post()
        .uri("/api/v1/files")
        .insert_header(bearer(&token))
        .set_json(json!({
            "filename": "cover.jpg",
            "content_type": "image/jpeg",
            "data": "not base64 !!!",
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
