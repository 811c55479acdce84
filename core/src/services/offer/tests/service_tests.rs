//! Unit tests for the offer lifecycle service

use std::sync::Arc;

use chrono::{Duration, Utc};
use uuid::Uuid;

use crate::domain::entities::offer::Offer;
use crate::domain::value_objects::offer_filter::OfferFilter;
use crate::errors::ServiceError;
use crate::repositories::offer::MockOfferRepository;
use crate::services::offer::OfferService;

fn service() -> (OfferService<MockOfferRepository>, Arc<MockOfferRepository>) {
    let repository = Arc::new(MockOfferRepository::new());
    (OfferService::new(repository.clone()), repository)
}

fn offer_with_title(title: &str) -> Offer {
    Offer::new(
        format!("{} do wypozyczenia", title),
        title,
        "2001",
        "Znak",
        Uuid::new_v4(),
        "Stan dobry",
        Utc::now() + Duration::days(14),
        "Lodz",
        "lodzkie",
    )
}

#[tokio::test]
async fn test_add_then_get_by_id_round_trips() {
    let (service, _) = service();

    let offer = offer_with_title("Solaris");
    let added = service.add(offer.clone()).await.unwrap();
    let id = added.id.expect("store assigns an id");

    let fetched = service.get_by_id(id).await.unwrap();
    // Equal on all fields except the assigned id
    assert_eq!(fetched.book_title, offer.book_title);
    assert_eq!(fetched.offer_name, offer.offer_name);
    assert_eq!(fetched.offer_owner, offer.offer_owner);
    assert_eq!(fetched.created_at, offer.created_at);
    assert_eq!(fetched.expires, offer.expires);
    assert_eq!(fetched.city, offer.city);
}

#[tokio::test]
async fn test_get_by_id_missing_is_get_failure() {
    let (service, _) = service();

    let result = service.get_by_id(Uuid::new_v4()).await;
    match result.unwrap_err() {
        ServiceError::Get { message } => assert!(message.contains("not found")),
        other => panic!("expected GetFailure, got {:?}", other),
    }
}

#[tokio::test]
async fn test_get_all_empty_is_not_an_error() {
    let (service, _) = service();
    assert!(service.get_all().await.unwrap().is_empty());
}

#[tokio::test]
async fn test_modify_without_id_fails_before_store_write() {
    let (service, repository) = service();
    service.add(offer_with_title("Lalka")).await.unwrap();

    let detached = offer_with_title("Potop");
    assert!(detached.id.is_none());

    let result = service.modify(detached).await;
    match result.unwrap_err() {
        ServiceError::Modify { message } => assert!(message.contains("id is required")),
        other => panic!("expected ModifyFailure, got {:?}", other),
    }

    // The store was never touched by the failed modify
    assert_eq!(repository.len().await, 1);
}

#[tokio::test]
async fn test_modify_upserts_by_id() {
    let (service, _) = service();

    let mut added = service.add(offer_with_title("Ferdydurke")).await.unwrap();
    added.city = "Krakow".to_string();
    added.activate();

    let modified = service.modify(added.clone()).await.unwrap();
    assert_eq!(modified.city, "Krakow");

    let fetched = service.get_by_id(added.id.unwrap()).await.unwrap();
    assert_eq!(fetched.city, "Krakow");
    assert!(fetched.active);
}

#[tokio::test]
async fn test_delete_missing_id_is_not_an_error() {
    let (service, _) = service();
    assert!(service.delete(Uuid::new_v4()).await.is_ok());
}

#[tokio::test]
async fn test_delete_removes_offer() {
    let (service, _) = service();
    let added = service.add(offer_with_title("Quo Vadis")).await.unwrap();
    let id = added.id.unwrap();

    service.delete(id).await.unwrap();
    assert!(service.get_by_id(id).await.is_err());
}

#[tokio::test]
async fn test_two_offers_same_title_both_returned() {
    let (service, _) = service();
    service.add(offer_with_title("book1")).await.unwrap();
    service.add(offer_with_title("book1")).await.unwrap();
    service.add(offer_with_title("book2")).await.unwrap();

    let found = service.get_all_by_book_title("book1").await.unwrap();
    assert_eq!(found.len(), 2);
}

#[tokio::test]
async fn test_between_dates_is_closed_interval_on_created_at() {
    let (service, _) = service();
    let now = Utc::now();

    let mut offer = offer_with_title("Pan Tadeusz");
    offer.created_at = now - Duration::days(2);
    service.add(offer).await.unwrap();

    let wide = service
        .get_all_between_dates(now - Duration::days(5), now)
        .await
        .unwrap();
    assert_eq!(wide.len(), 1);

    let narrow = service
        .get_all_between_dates(now - Duration::days(1), now)
        .await
        .unwrap();
    assert!(narrow.is_empty());
}

#[tokio::test]
async fn test_not_expired_cutoff_is_inclusive_lower_bound() {
    let (service, _) = service();
    let now = Utc::now();

    let mut offer = offer_with_title("Kamienie na szaniec");
    offer.expires = now + Duration::days(5);
    service.add(offer).await.unwrap();

    let current = service.get_all_not_expired(now).await.unwrap();
    assert_eq!(current.len(), 1);

    let future = service
        .get_all_not_expired(now + Duration::days(6))
        .await
        .unwrap();
    assert!(future.is_empty());
}

#[tokio::test]
async fn test_filter_by_city_ignores_unset_fields() {
    let (service, _) = service();
    service.add(offer_with_title("Solaris")).await.unwrap();

    let mut elsewhere = offer_with_title("Niezwyciezony");
    elsewhere.city = "Gdansk".to_string();
    service.add(elsewhere).await.unwrap();

    let filter = OfferFilter::new().with_city("lodz");
    let found = service.get_by_filter(&filter).await.unwrap();
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].city, "Lodz");
}

#[tokio::test]
async fn test_field_lookups() {
    let (service, _) = service();
    let owner = Uuid::new_v4();

    let mut offer = offer_with_title("Solaris");
    offer.offer_owner = owner;
    service.add(offer).await.unwrap();
    service.add(offer_with_title("Eden")).await.unwrap();

    assert_eq!(
        service.get_all_by_book_publisher("Znak").await.unwrap().len(),
        2
    );
    assert_eq!(service.get_all_by_city("Lodz").await.unwrap().len(), 2);
    assert_eq!(
        service
            .get_all_by_voivodeship("lodzkie")
            .await
            .unwrap()
            .len(),
        2
    );
    assert_eq!(
        service.get_all_by_offer_owner(owner).await.unwrap().len(),
        1
    );
}
