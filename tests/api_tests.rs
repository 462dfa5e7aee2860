//! Live API integration tests
//!
//! These run against a real backend and are ignored by default.
//! Run with: cargo test -- --ignored
//!
//! Expects a development backend on localhost:8000 seeded with the admin
//! account below.

use std::time::Duration;

use chrono::Utc;
use otd_client::{
    booking::{AvailabilitySearch, DateRange, GuestConfiguration},
    config::{ApiConfig, ClientConfig},
    models::{BookingStatus, RoomDraft},
    Platform, Session,
};

const BASE_URL: &str = "http://localhost:8000";
const ADMIN_EMAIL: &str = "admin@otd.ru";
const ADMIN_PASSWORD: &str = "admin";

fn platform() -> Platform {
    let config = ClientConfig {
        api: ApiConfig {
            base_url: BASE_URL.to_string(),
            ..ApiConfig::default()
        },
        ..ClientConfig::default()
    };
    Platform::connect(config, Session::new()).expect("Failed to build client")
}

async fn login(platform: &Platform) {
    platform
        .services
        .auth
        .login(ADMIN_EMAIL, ADMIN_PASSWORD)
        .await
        .expect("Failed to log in");
}

#[tokio::test]
#[ignore]
async fn test_login_stores_session_token() {
    let platform = platform();
    assert!(!platform.session.is_authenticated());

    login(&platform).await;
    assert!(platform.session.is_authenticated());

    let me = platform.services.auth.me().await.expect("Failed to fetch profile");
    assert_eq!(me.email, ADMIN_EMAIL);
    assert!(me.is_admin());
}

#[tokio::test]
#[ignore]
async fn test_login_invalid_credentials() {
    let platform = platform();
    let result = platform.services.auth.login(ADMIN_EMAIL, "wrong").await;

    assert!(matches!(result, Err(otd_client::ApiError::Unauthorized)));
    assert!(!platform.session.is_authenticated());
}

#[tokio::test]
#[ignore]
async fn test_public_rooms_and_search() {
    let platform = platform();

    let rooms = platform
        .services
        .rooms
        .list_public_with_timeout(Duration::from_millis(3000))
        .await
        .expect("Failed to fetch public rooms");

    let range = DateRange::from_query(Some("2026-09-10"), Some("2026-09-12"), Utc::now());
    let guests = GuestConfiguration::default();

    let mut search = AvailabilitySearch::with_initial(rooms);
    let outcome = platform.services.rooms.search(&range, &guests);
    search.run(&range, outcome).await;

    assert!(search.error().is_none(), "search failed: {:?}", search.error());
    assert!(search.was_performed());
}

#[tokio::test]
#[ignore]
async fn test_room_crud_lifecycle() {
    let platform = platform();
    login(&platform).await;

    let draft = RoomDraft {
        title: "Интеграционный тест".to_string(),
        category: "standard".to_string(),
        rooms: 1,
        area: "20 м²".to_string(),
        beds: 2,
        tv: true,
        price_weekdays: "9900".to_string(),
        price_weekend: "11900".to_string(),
        images: vec![],
    };

    let created = platform
        .services
        .rooms
        .create(&draft)
        .await
        .expect("Failed to create room");
    assert_eq!(created.price_weekdays, 9900);

    let mut edited = created.clone();
    edited.title = "Интеграционный тест (изм.)".to_string();
    let saved = platform
        .services
        .rooms
        .update(edited.id, &edited)
        .await
        .expect("Failed to update room");
    assert_eq!(saved.title, edited.title);

    platform
        .services
        .rooms
        .delete(created.id)
        .await
        .expect("Failed to delete room");

    let remaining = platform
        .services
        .rooms
        .list()
        .await
        .expect("Failed to list rooms");
    assert!(remaining.iter().all(|r| r.id != created.id));
}

#[tokio::test]
#[ignore]
async fn test_booking_status_lifecycle() {
    let platform = platform();
    login(&platform).await;

    let bookings = platform
        .services
        .bookings
        .list()
        .await
        .expect("Failed to list bookings");

    let Some(target) = bookings.iter().find(|b| b.status == BookingStatus::Pending) else {
        return; // nothing pending to exercise
    };

    let confirmed = platform
        .services
        .bookings
        .set_status(target.id, BookingStatus::Confirmed)
        .await
        .expect("Failed to confirm booking");
    assert_eq!(confirmed.status, BookingStatus::Confirmed);

    let reverted = platform
        .services
        .bookings
        .set_status(target.id, BookingStatus::Pending)
        .await
        .expect("Failed to revert booking");
    assert_eq!(reverted.status, BookingStatus::Pending);
}

#[tokio::test]
#[ignore]
async fn test_unauthenticated_admin_call_clears_nothing_and_reports_401() {
    let platform = platform();

    let result = platform.services.auth.list_users().await;
    assert!(matches!(result, Err(otd_client::ApiError::Unauthorized)));
}
