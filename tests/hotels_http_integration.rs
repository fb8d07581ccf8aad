//! Integration tests for the hotel endpoints.
//!
//! Runs the complete router (auth middleware, handlers, tower-http layers)
//! against the in-memory store, with tokens signed the way the platform's
//! sign-in endpoint signs them.

use std::sync::Arc;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use chrono::{TimeZone, Utc};
use jsonwebtoken::{encode, EncodingKey, Header};
use serde_json::Value;
use tower::ServiceExt;

use hotel_access::adapters::auth::{JwtConfig, JwtSessionValidator, PlatformClaims};
use hotel_access::adapters::http::{build_router, AuthState, HotelsAppState};
use hotel_access::adapters::memory::InMemoryLodgingStore;
use hotel_access::config::ServerConfig;
use hotel_access::domain::foundation::{
    EnrollmentId, HotelId, PaymentId, RoomId, TicketId, TicketTypeId, UserId,
};
use hotel_access::domain::lodging::{
    Enrollment, Hotel, Payment, Room, Ticket, TicketStatus, TicketType,
};

const SECRET: &str = "integration-test-signing-secret-0001";
const USER_ID: i32 = 42;

// =============================================================================
// Fixtures
// =============================================================================

fn sign(user_id: i32) -> String {
    sign_with(user_id, SECRET)
}

fn sign_with(user_id: i32, secret: &str) -> String {
    let claims = PlatformClaims {
        user_id,
        iat: Some(Utc::now().timestamp()),
        exp: None,
    };
    encode(
        &Header::default(),
        &claims,
        &EncodingKey::from_secret(secret.as_bytes()),
    )
    .unwrap()
}

fn hotel(id: i32) -> Hotel {
    let at = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
    Hotel {
        id: HotelId::new(id),
        name: format!("Hotel {}", id),
        image: format!("https://images.example.com/hotel-{}.jpg", id),
        created_at: at,
        updated_at: at,
    }
}

fn room(id: i32, hotel_id: i32, capacity: i32) -> Room {
    let at = Utc.with_ymd_and_hms(2024, 5, 10, 8, 0, 0).unwrap();
    Room {
        id: RoomId::new(id),
        name: format!("Room {}", id),
        capacity,
        hotel_id: HotelId::new(hotel_id),
        created_at: at,
        updated_at: at,
    }
}

fn ticket_type(is_remote: bool, includes_hotel: bool) -> TicketType {
    TicketType {
        id: TicketTypeId::new(1),
        name: "Ticket".to_string(),
        price: 250,
        is_remote,
        includes_hotel,
    }
}

/// How far along the purchase flow the test user is.
#[derive(Clone, Copy)]
enum Progress {
    Nothing,
    Enrolled,
    Reserved,
    Paid { is_remote: bool, includes_hotel: bool },
    /// Paid, but the ticket's type row no longer exists.
    PaidWithoutTicketType,
}

struct TestApp {
    router: Router,
    store: Arc<InMemoryLodgingStore>,
    token: String,
}

impl TestApp {
    fn new(progress: Progress) -> Self {
        let token = sign(USER_ID);
        let mut store = InMemoryLodgingStore::new()
            .with_session(token.clone(), UserId::new(USER_ID))
            .with_hotel(hotel(1))
            .with_hotel(hotel(2))
            .with_room(room(1, 1, 2))
            .with_room(room(2, 1, 3))
            .with_room(room(3, 2, 1));

        if !matches!(progress, Progress::Nothing) {
            store = store.with_enrollment(Enrollment {
                id: EnrollmentId::new(7),
                user_id: UserId::new(USER_ID),
            });
        }

        if matches!(
            progress,
            Progress::Reserved | Progress::Paid { .. } | Progress::PaidWithoutTicketType
        ) {
            store = store.with_ticket(Ticket {
                id: TicketId::new(9),
                enrollment_id: EnrollmentId::new(7),
                ticket_type_id: TicketTypeId::new(1),
                status: TicketStatus::Reserved,
            });
        }

        match progress {
            Progress::Paid {
                is_remote,
                includes_hotel,
            } => {
                store = store
                    .with_ticket_type(ticket_type(is_remote, includes_hotel))
                    .with_payment(Payment {
                        id: PaymentId::new(3),
                        ticket_id: TicketId::new(9),
                        created_at: Utc.with_ymd_and_hms(2024, 5, 11, 9, 0, 0).unwrap(),
                    });
            }
            Progress::PaidWithoutTicketType => {
                store = store.with_payment(Payment {
                    id: PaymentId::new(3),
                    ticket_id: TicketId::new(9),
                    created_at: Utc.with_ymd_and_hms(2024, 5, 11, 9, 0, 0).unwrap(),
                });
            }
            _ => store = store.with_ticket_type(ticket_type(false, true)),
        }

        let store = Arc::new(store);
        let validator: AuthState = Arc::new(
            JwtSessionValidator::new(JwtConfig::new(SECRET)).with_session_reader(store.clone()),
        );
        let state = HotelsAppState::new(store.clone(), store.clone());
        let router = build_router(state, validator, &ServerConfig::default());

        Self {
            router,
            store,
            token,
        }
    }

    fn eligible() -> Self {
        Self::new(Progress::Paid {
            is_remote: false,
            includes_hotel: true,
        })
    }

    async fn get(&self, uri: &str, authorization: Option<&str>) -> (StatusCode, Value) {
        let mut builder = Request::builder().uri(uri);
        if let Some(value) = authorization {
            builder = builder.header("Authorization", value);
        }
        let response = self
            .router
            .clone()
            .oneshot(builder.body(Body::empty()).unwrap())
            .await
            .unwrap();

        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap()
        };
        (status, body)
    }

    async fn get_authed(&self, uri: &str) -> (StatusCode, Value) {
        let header = format!("Bearer {}", self.token);
        self.get(uri, Some(&header)).await
    }
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn missing_header_is_401_on_both_endpoints_without_store_access() {
    let app = TestApp::eligible();

    let (list, body) = app.get("/hotels", None).await;
    let (detail, _) = app.get("/hotels/1", None).await;

    assert_eq!(list, StatusCode::UNAUTHORIZED);
    assert_eq!(detail, StatusCode::UNAUTHORIZED);
    assert_eq!(body["error_code"], "UNAUTHORIZED");
    assert_eq!(app.store.lookup_count(), 0);
}

#[tokio::test]
async fn malformed_header_is_401_without_store_access() {
    let app = TestApp::eligible();

    let (basic, _) = app.get("/hotels", Some("Basic dXNlcjpwYXNz")).await;
    let (garbage, _) = app.get("/hotels/1", Some("Bearer not-a-jwt")).await;

    assert_eq!(basic, StatusCode::UNAUTHORIZED);
    assert_eq!(garbage, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.lookup_count(), 0);
}

#[tokio::test]
async fn token_signed_with_other_secret_is_401() {
    let app = TestApp::eligible();
    let forged = format!("Bearer {}", sign_with(USER_ID, "some-other-secret-entirely-00000"));

    let (status, _) = app.get("/hotels", Some(&forged)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(app.store.lookup_count(), 0);
}

#[tokio::test]
async fn valid_token_without_session_is_401() {
    let app = TestApp::eligible();
    let signed_out = format!("Bearer {}", sign(USER_ID + 1));

    let (status, body) = app.get("/hotels", Some(&signed_out)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Session not found");
}

// =============================================================================
// Eligibility chain
// =============================================================================

#[tokio::test]
async fn user_without_enrollment_gets_missing_codes() {
    let app = TestApp::new(Progress::Nothing);

    let (list, _) = app.get_authed("/hotels").await;
    let (detail, _) = app.get_authed("/hotels/1").await;

    assert_eq!(list, StatusCode::UNAUTHORIZED);
    assert_eq!(detail, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn user_without_ticket_gets_missing_codes() {
    let app = TestApp::new(Progress::Enrolled);

    let (list, _) = app.get_authed("/hotels").await;
    let (detail, body) = app.get_authed("/hotels/1").await;

    assert_eq!(list, StatusCode::UNAUTHORIZED);
    assert_eq!(detail, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "NOT_FOUND");
}

#[tokio::test]
async fn unpaid_ticket_is_402_on_both_endpoints() {
    let app = TestApp::new(Progress::Reserved);

    let (list, list_body) = app.get_authed("/hotels").await;
    let (detail, _) = app.get_authed("/hotels/1").await;

    assert_eq!(list, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(detail, StatusCode::PAYMENT_REQUIRED);
    assert_eq!(list_body["error_code"], "PAYMENT_REQUIRED");
}

#[tokio::test]
async fn remote_ticket_is_401_for_list_and_402_for_detail() {
    let app = TestApp::new(Progress::Paid {
        is_remote: true,
        includes_hotel: true,
    });

    let (list, _) = app.get_authed("/hotels").await;
    let (detail, _) = app.get_authed("/hotels/1").await;

    assert_eq!(list, StatusCode::UNAUTHORIZED);
    assert_eq!(detail, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn ticket_without_hotel_is_401_for_list_and_402_for_detail() {
    let app = TestApp::new(Progress::Paid {
        is_remote: false,
        includes_hotel: false,
    });

    let (list, _) = app.get_authed("/hotels").await;
    let (detail, _) = app.get_authed("/hotels/2").await;

    assert_eq!(list, StatusCode::UNAUTHORIZED);
    assert_eq!(detail, StatusCode::PAYMENT_REQUIRED);
}

#[tokio::test]
async fn paid_ticket_with_missing_type_is_treated_as_no_ticket() {
    let app = TestApp::new(Progress::PaidWithoutTicketType);

    let (list, _) = app.get_authed("/hotels").await;
    let (detail, body) = app.get_authed("/hotels/1").await;

    assert_eq!(list, StatusCode::UNAUTHORIZED);
    assert_eq!(detail, StatusCode::NOT_FOUND);
    assert_eq!(body["error_code"], "NOT_FOUND");
}

// =============================================================================
// Eligible attendee
// =============================================================================

#[tokio::test]
async fn eligible_user_lists_two_hotels() {
    let app = TestApp::eligible();

    let (status, body) = app.get_authed("/hotels").await;

    assert_eq!(status, StatusCode::OK);
    let hotels = body.as_array().unwrap();
    assert_eq!(hotels.len(), 2);
    for hotel in hotels {
        let object = hotel.as_object().unwrap();
        let mut keys: Vec<&str> = object.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["createdAt", "id", "image", "name", "updatedAt"]);
    }
    assert_eq!(hotels[0]["id"], 1);
    assert_eq!(hotels[1]["createdAt"], "2024-05-10T08:00:00.000Z");
}

#[tokio::test]
async fn eligible_user_gets_hotel_with_its_rooms() {
    let app = TestApp::eligible();

    let (status, body) = app.get_authed("/hotels/1").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 1);
    assert_eq!(body["name"], "Hotel 1");
    let rooms = body["Rooms"].as_array().unwrap();
    assert_eq!(rooms.len(), 2);
    assert!(rooms.iter().all(|r| r["hotelId"] == 1));
    assert_eq!(rooms[1]["capacity"], 3);
}

#[tokio::test]
async fn unknown_hotel_is_404_whatever_the_eligibility() {
    for progress in [
        Progress::Nothing,
        Progress::Reserved,
        Progress::Paid {
            is_remote: true,
            includes_hotel: false,
        },
        Progress::Paid {
            is_remote: false,
            includes_hotel: true,
        },
    ] {
        let app = TestApp::new(progress);
        let (status, body) = app.get_authed("/hotels/999").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body["error_code"], "HOTEL_NOT_FOUND");
    }
}

#[tokio::test]
async fn non_integer_hotel_id_is_404() {
    let app = TestApp::eligible();

    let (status, _) = app.get_authed("/hotels/first").await;

    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn unknown_hotel_without_token_is_401() {
    let app = TestApp::eligible();

    let (status, _) = app.get("/hotels/999", None).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn repeated_requests_are_idempotent() {
    let app = TestApp::eligible();

    let first = app.get_authed("/hotels/2").await;
    let second = app.get_authed("/hotels/2").await;
    assert_eq!(first, second);

    let first = app.get_authed("/hotels").await;
    let second = app.get_authed("/hotels").await;
    assert_eq!(first, second);
}

// =============================================================================
// Failures and health
// =============================================================================

#[tokio::test]
async fn session_store_failure_is_503() {
    let app = TestApp::eligible();
    let (warm, _) = app.get_authed("/hotels").await;
    assert_eq!(warm, StatusCode::OK);

    // The session lookup is the first read to fail.
    app.store.set_read_failure(true);
    let (status, body) = app.get_authed("/hotels").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["error_code"], "SERVICE_UNAVAILABLE");
}

#[tokio::test]
async fn health_check_is_unauthenticated() {
    let app = TestApp::new(Progress::Nothing);

    let (status, body) = app.get("/health", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, serde_json::json!({ "status": "ok" }));
    assert_eq!(app.store.lookup_count(), 0);
}
