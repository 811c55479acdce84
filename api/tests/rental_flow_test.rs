//! Offer -> counter-offer -> rental lifecycle over the HTTP surface.

mod common;

use actix_web::{http::StatusCode, test};
use chrono::{Duration, Utc};
use serde_json::json;

use bb_api::app::create_app;
use bb_shared::config::CorsConfig;

use common::{auth_token, bearer, test_context};

fn offer_body() -> serde_json::Value {
    json!({
        "offer_name": "Solaris do wypozyczenia",
        "book_title": "Solaris",
        "book_release_year": "1961",
        "book_publisher": "Wydawnictwo Literackie",
        "description": "Pierwsze wydanie",
        "expires": (Utc::now() + Duration::days(14)).to_rfc3339(),
        "city": "Lodz",
        "voivodeship": "lodzkie",
        "active": true,
    })
}

#[actix_web::test]
async fn test_accepting_a_counter_offer_creates_the_rental() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let owner_token = auth_token(&ctx, "owner").await;
    let renter_token = auth_token(&ctx, "renter").await;

    // The owner posts an offer
    let request = test::TestRequest::post()
        .uri("/api/v1/offers")
        .insert_header(bearer(&owner_token))
        .set_json(offer_body())
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let offer: serde_json::Value = test::read_body_json(response).await;
    let offer_id = offer["id"].as_str().unwrap().to_string();

    // Another user proposes against it
    let request = test::TestRequest::post()
        .uri("/api/v1/counter-offers")
        .insert_header(bearer(&renter_token))
        .set_json(json!({
            "offer": offer_id,
            "expires": (Utc::now() + Duration::days(30)).to_rfc3339(),
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let counter_offer: serde_json::Value = test::read_body_json(response).await;
    let counter_offer_id = counter_offer["id"].as_str().unwrap().to_string();

    // The renter cannot accept their own proposal
    let request = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(bearer(&renter_token))
        .set_json(json!({"counter_offer": counter_offer_id}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::FORBIDDEN);

    // The owner accepts: the rental links offer, renter and counter-offer
    let request = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(bearer(&owner_token))
        .set_json(json!({"counter_offer": counter_offer_id}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::CREATED);
    let rental: serde_json::Value = test::read_body_json(response).await;
    assert_eq!(rental["offer"], json!(offer_id));
    assert_eq!(rental["counter_offer"], json!(counter_offer_id));

    // Lookups by offer and by counter-offer both resolve it
    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/rentals/offer/{}", offer_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/rentals/counter-offer/{}", counter_offer_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // The accepted counter-offer is left untouched; acceptance is inferred
    let request = test::TestRequest::get()
        .uri(&format!("/api/v1/counter-offers/{}", counter_offer_id))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::OK);

    // A second rental for the same offer is rejected
    let request = test::TestRequest::post()
        .uri("/api/v1/rentals")
        .insert_header(bearer(&owner_token))
        .set_json(json!({"counter_offer": counter_offer_id}))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::INTERNAL_SERVER_ERROR);
}

#[actix_web::test]
async fn test_counter_offer_must_reference_an_existing_offer() {
    let ctx = test_context();
    let app = test::init_service(create_app(ctx.state.clone(), &CorsConfig::default())).await;
    let token = auth_token(&ctx, "renter").await;

    let request = test::TestRequest::post()
        .uri("/api/v1/counter-offers")
        .insert_header(bearer(&token))
        .set_json(json!({
            "offer": uuid::Uuid::new_v4(),
            "expires": (Utc::now() + Duration::days(30)).to_rfc3339(),
        }))
        .to_request();
    let response = test::call_service(&app, request).await;
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
