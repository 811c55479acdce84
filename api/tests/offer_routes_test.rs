//! Offer CRUD and filtering over the HTTP surface.

mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::json;
use uuid::Uuid;

use bb_api::app::create_app;
use bb_shared::config::CorsConfig;

use common::{auth_token, bearer, test_context};

fn offer_body(title: &str) -> serde_json::Value {
    json!({
        "offer_name": format!("{} do wypozyczenia", title),
        "book_title": title,
        "book_release_year": "1993",
        "book_publisher": "SuperNowa",
        "description": "Stan dobry",
        "expires": (Utc::now() + Duration::days(14)).to_rfc3339(),
        "city": "Lodz",
        "voivodeship": "lodzkie",
        "active": true,
    })
}

#[actix_web::test]
async fn test_create_requires_authentication() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;

    let request = test::TestRequest::post()
        .uri("/api/v1/offers")
        .set_json(offer_body("Wiedzmin"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn test_offer_crud_round_trip() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let token = auth_token(&ctx, "owner").await;

    // Create
    let request = test::TestRequest::post()
        .uri("/api/v1/offers")
        .insert_header(bearer(&token))
        .set_json(offer_body("Wiedzmin"))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let created: serde_json::Value = test::read_body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();
    assert_eq!(created["active"], true);

    // Read back
    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/offers/{}", id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let fetched: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(fetched["book_title"], "Wiedzmin");

    // Update with matching ids
    let mut update = offer_body("Wiedzmin");
    update["id"] = json!(id);
    update["city"] = json!("Krakow");
    let request = test::TestRequest::put()
        .uri(&format!("/api/v1/offers/{}", id))
        .insert_header(bearer(&token))
        .set_json(update)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let modified: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(modified["city"], "Krakow");

    // Delete
    let request = test::TestRequest::delete()
        .uri(&format!("/api/v1/offers/{}", id))
        .insert_header(bearer(&token))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/offers/{}", id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_missing_offer_is_not_found() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/offers/{}", Uuid::new_v4()))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn test_update_with_mismatched_ids_is_bad_request() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let token = auth_token(&ctx, "owner").await;

    let request = test::TestRequest::post()
        .uri("/api/v1/offers")
        .insert_header(bearer(&token))
        .set_json(offer_body("Wiedzmin"))
        .to_request();
    let response = test::call_service(&app, request).await;
    let created: serde_json::Value = test::read_body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut update = offer_body("Wiedzmin");
    update["id"] = json!(Uuid::new_v4());
    let request = test::TestRequest::put()
        .uri(&format!("/api/v1/offers/{}", id))
        .insert_header(bearer(&token))
        .set_json(update)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}

#[actix_web::test]
async fn test_only_the_owner_modifies_an_offer() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let owner_token = auth_token(&ctx, "owner").await;
    let other_token = auth_token(&ctx, "intruder").await;

    let request = test::TestRequest::post()
        .uri("/api/v1/offers")
        .insert_header(bearer(&owner_token))
        .set_json(offer_body("Wiedzmin"))
        .to_request();
    let response = test::call_service(&app, request).await;
    let created: serde_json::Value = test::read_body_json(response).await;
    let id = created["id"].as_str().unwrap().to_string();

    let mut update = offer_body("Wiedzmin");
    update["id"] = json!(id);
    let request = test::TestRequest::put()
        .uri(&format!("/api/v1/offers/{}", id))
        .insert_header(bearer(&other_token))
        .set_json(update)
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    let request = test::TestRequest::delete()
        .uri(&format!("/api/v1/offers/{}", id))
        .insert_header(bearer(&other_token))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);
}

#[actix_web::test]
async fn test_field_lookups_and_filter() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let token = auth_token(&ctx, "owner").await;

    for title in ["book1", "book1", "book2"] {
        let request = test::TestRequest::post()
            .uri("/api/v1/offers")
            .insert_header(bearer(&token))
            .set_json(offer_body(title))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);
    }

    // Exact-match field lookup
    let request = test::TestRequest::get()
        .uri("/api/v1/offers?book_title=book1")
        .to_request();
    let response = test::call_service(&app, request).await;
    let offers: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(offers.as_array().unwrap().len(), 2);

    // Fuzzy filter: case-insensitive substring on the city
    let request = test::TestRequest::post()
        .uri("/api/v1/offers/filter")
        .set_json(json!({"city": "lod"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    let offers: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(offers.as_array().unwrap().len(), 3);

    // A filter that matches nothing returns an empty list, not an error
    let request = test::TestRequest::post()
        .uri("/api/v1/offers/filter")
        .set_json(json!({"city": "Warszawa"}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);
    let offers: serde_json::Value = test::read_body_json(response).await;
    assert!(offers.as_array().unwrap().is_empty());
}
