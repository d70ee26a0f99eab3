//! Router tests: real handlers, middleware and services over mocked
//! repositories, driven with `tower::ServiceExt::oneshot`.

mod common;

use std::sync::Arc;

use axum::{
    body::{to_bytes, Body},
    http::{header, Method, Request, StatusCode},
    Router,
};
use mockall::predicate::eq;
use serde_json::{json, Value};
use tower::ServiceExt;

use budget_api::api::{create_router, AppState};
use budget_api::domain::{Password, UserRole};
use budget_api::infra::repositories::{
    MockPlaceRepository, MockTransactionRepository, MockUserRepository,
};
use budget_api::services::{generate_token, Services};

use common::{place, test_config, transaction, user, TestUnitOfWork};

fn app(uow: TestUnitOfWork) -> Router {
    let services = Services::with_unit_of_work(Arc::new(uow), test_config());
    create_router(AppState::from_container(&services))
}

fn token_for(id: i32, role: UserRole) -> String {
    generate_token(&user(id, role), &test_config()).unwrap()
}

fn get(uri: &str, token: Option<&str>) -> Request<Body> {
    let mut builder = Request::builder().method(Method::GET).uri(uri);
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::empty()).unwrap()
}

fn send_json(method: Method, uri: &str, token: Option<&str>, body: Value) -> Request<Body> {
    let mut builder = Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json");
    if let Some(token) = token {
        builder = builder.header(header::AUTHORIZATION, format!("Bearer {}", token));
    }
    builder.body(Body::from(body.to_string())).unwrap()
}

async fn call(app: Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

// =============================================================================
// Health
// =============================================================================

#[tokio::test]
async fn test_ping() {
    let (status, body) = call(app(TestUnitOfWork::empty()), get("/api/health/ping", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "pong": true }));
}

#[tokio::test]
async fn test_version() {
    let (status, body) =
        call(app(TestUnitOfWork::empty()), get("/api/health/version", None)).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["name"], "budget-api");
    assert_eq!(body["env"], "development");
    assert!(body["version"].is_string());
}

// =============================================================================
// Authentication
// =============================================================================

#[tokio::test]
async fn test_missing_token_is_unauthorized() {
    let (status, body) = call(app(TestUnitOfWork::empty()), get("/api/places", None)).await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["code"], "UNAUTHORIZED");
    assert_eq!(body["message"], "You need to be signed in");
    assert_eq!(body["details"], json!({}));
}

#[tokio::test]
async fn test_forged_token_is_unauthorized() {
    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        get("/api/places", Some("not-a-real-token")),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "Invalid authentication token");
}

#[tokio::test]
async fn test_expired_token_is_unauthorized() {
    let mut config = test_config();
    config.jwt_expiration_hours = -2;
    let token = generate_token(&user(1, UserRole::User), &config).unwrap();

    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        get("/api/places", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body["message"], "The token has expired");
}

#[tokio::test]
async fn test_login_returns_token_and_user() {
    let hash = Password::new("12345678").unwrap().into_string();
    let mut users = MockUserRepository::new();
    users.expect_find_by_email().returning(move |_| {
        let mut found = user(1, UserRole::Admin);
        found.password_hash = hash.clone();
        Ok(Some(found))
    });

    let (status, body) = call(
        app(TestUnitOfWork::with_users(users)),
        send_json(
            Method::POST,
            "/api/users/login",
            None,
            json!({ "email": "user1@example.com", "password": "12345678" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(
        body["user"],
        json!({ "id": 1, "name": "User 1", "email": "user1@example.com" })
    );
}

#[tokio::test]
async fn test_login_validation() {
    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        send_json(
            Method::POST,
            "/api/users/login",
            None,
            json!({ "email": "not-an-email", "password": "" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["details"]["body"]["email"].is_array());
    assert!(body["details"]["body"]["password"].is_array());
}

#[tokio::test]
async fn test_register_returns_token_and_user() {
    let mut users = MockUserRepository::new();
    users.expect_create().returning(|new_user| {
        Ok(budget_api::domain::User {
            id: 9,
            name: new_user.name,
            email: new_user.email,
            password_hash: new_user.password_hash,
            role: new_user.role,
        })
    });

    let (status, body) = call(
        app(TestUnitOfWork::with_users(users)),
        send_json(
            Method::POST,
            "/api/users/register",
            None,
            json!({ "name": "New", "email": "new@example.com", "password": "12345678" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(body["token"].is_string());
    assert_eq!(body["user"]["id"], 9);
    assert!(body["user"].get("password_hash").is_none());
}

// =============================================================================
// Users
// =============================================================================

#[tokio::test]
async fn test_list_users_requires_admin() {
    let token = token_for(2, UserRole::User);
    let (status, body) = call(app(TestUnitOfWork::empty()), get("/api/users", Some(&token))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "You are not allowed to view this part of the application"
    );
}

#[tokio::test]
async fn test_admin_lists_users() {
    let mut users = MockUserRepository::new();
    users
        .expect_list()
        .returning(|| Ok(vec![user(1, UserRole::Admin), user(2, UserRole::User)]));

    let token = token_for(1, UserRole::Admin);
    let (status, body) = call(
        app(TestUnitOfWork::with_users(users)),
        get("/api/users", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert!(body["items"][0].get("password_hash").is_none());
}

#[tokio::test]
async fn test_user_cannot_read_other_user() {
    let token = token_for(2, UserRole::User);
    let (status, body) = call(app(TestUnitOfWork::empty()), get("/api/users/3", Some(&token))).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "You are not allowed to view this user's information"
    );
}

#[tokio::test]
async fn test_user_reads_self() {
    let mut users = MockUserRepository::new();
    users
        .expect_find_by_id()
        .with(eq(2))
        .returning(|id| Ok(Some(user(id, UserRole::User))));

    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::with_users(users)),
        get("/api/users/2", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "id": 2, "name": "User 2", "email": "user2@example.com" }));
}

#[tokio::test]
async fn test_user_cannot_update_other_user() {
    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        send_json(
            Method::PUT,
            "/api/users/3",
            Some(&token),
            json!({ "name": "Karine", "email": "karine@example.com" }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(body["code"], "FORBIDDEN");
}

#[tokio::test]
async fn test_user_cannot_delete_other_user() {
    let token = token_for(2, UserRole::User);
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/users/3")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(app(TestUnitOfWork::empty()), request).await;

    assert_eq!(status, StatusCode::FORBIDDEN);
    assert_eq!(
        body["message"],
        "You are not allowed to view this user's information"
    );
}

#[tokio::test]
async fn test_admin_deletes_user() {
    let mut users = MockUserRepository::new();
    users.expect_delete().with(eq(5)).returning(|_| Ok(true));

    let token = token_for(1, UserRole::Admin);
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/users/5")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(app(TestUnitOfWork::with_users(users)), request).await;

    assert_eq!(status, StatusCode::NO_CONTENT);
    assert_eq!(body, Value::Null);
}

// =============================================================================
// Places
// =============================================================================

#[tokio::test]
async fn test_list_places() {
    let mut places = MockPlaceRepository::new();
    places
        .expect_list()
        .returning(|| Ok(vec![place(2, "Dranken Geers"), place(1, "Loon")]));

    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::with_places(places)),
        get("/api/places", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["count"], 2);
    assert_eq!(body["items"][0], json!({ "id": 2, "name": "Dranken Geers", "rating": 4 }));
}

#[tokio::test]
async fn test_list_places_rejects_query() {
    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        get("/api/places?limit=10", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["query"]["limit"].is_array());
}

#[tokio::test]
async fn test_invalid_id_param() {
    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        get("/api/places/abc", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["code"], "VALIDATION_FAILED");
    assert!(body["details"]["params"]["id"].is_array());
}

#[tokio::test]
async fn test_get_missing_place() {
    let mut places = MockPlaceRepository::new();
    places.expect_find_by_id().returning(|_| Ok(None));

    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::with_places(places)),
        get("/api/places/42", Some(&token)),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(
        body,
        json!({
            "code": "NOT_FOUND",
            "message": "No place with id 42 exists",
            "details": { "id": 42 }
        })
    );
}

#[tokio::test]
async fn test_create_place() {
    let mut places = MockPlaceRepository::new();
    places.expect_create().returning(|input| {
        Ok(budget_api::domain::Place {
            id: 4,
            name: input.name,
            rating: input.rating,
        })
    });

    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::with_places(places)),
        send_json(
            Method::POST,
            "/api/places",
            Some(&token),
            json!({ "name": "Chinese Restaurant", "rating": 3 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body, json!({ "id": 4, "name": "Chinese Restaurant", "rating": 3 }));
}

#[tokio::test]
async fn test_create_place_validation() {
    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        send_json(
            Method::POST,
            "/api/places",
            Some(&token),
            json!({ "name": "Too Good", "rating": 6 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"]["body"]["rating"],
        json!(["rating must be between 1 and 5"])
    );
}

// =============================================================================
// Transactions
// =============================================================================

#[tokio::test]
async fn test_foreign_transaction_is_not_found() {
    let mut transactions = MockTransactionRepository::new();
    transactions
        .expect_find_by_id()
        .returning(|id| Ok(Some(transaction(id, 3, 1))));

    let uow = TestUnitOfWork::new(
        MockUserRepository::new(),
        MockPlaceRepository::new(),
        transactions,
    );
    let token = token_for(2, UserRole::User);
    let (status, body) = call(app(uow), get("/api/transactions/5", Some(&token))).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No transaction with id 5 exists");
}

#[tokio::test]
async fn test_create_transaction() {
    let mut places = MockPlaceRepository::new();
    places
        .expect_find_by_id()
        .returning(|id| Ok(Some(place(id, "Dranken Geers"))));

    let mut transactions = MockTransactionRepository::new();
    transactions
        .expect_create()
        .withf(|input| input.user_id == 2 && input.place_id == 1)
        .returning(|_| Ok(8));
    transactions
        .expect_find_by_id()
        .returning(|id| Ok(Some(transaction(id, 2, 1))));

    let uow = TestUnitOfWork::new(MockUserRepository::new(), places, transactions);
    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(uow),
        send_json(
            Method::POST,
            "/api/transactions",
            Some(&token),
            json!({ "amount": -220, "date": "2021-05-08T20:00:00Z", "placeId": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], 8);
    assert_eq!(body["user"], json!({ "id": 2, "name": "User 2" }));
    assert_eq!(body["place"], json!({ "id": 1, "name": "Dranken Geers" }));
}

#[tokio::test]
async fn test_create_transaction_validation() {
    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        send_json(
            Method::POST,
            "/api/transactions",
            Some(&token),
            json!({ "amount": 0, "date": "2999-01-01T00:00:00Z", "placeId": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert!(body["details"]["body"]["amount"].is_array());
    assert!(body["details"]["body"]["date"].is_array());
}

#[tokio::test]
async fn test_create_transaction_reports_client_field_names() {
    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(TestUnitOfWork::empty()),
        send_json(
            Method::POST,
            "/api/transactions",
            Some(&token),
            json!({ "amount": 10, "date": "2021-05-08T20:00:00Z", "placeId": 0 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
        body["details"]["body"],
        json!({ "placeId": ["placeId must be a positive integer"] })
    );
}

#[tokio::test]
async fn test_update_own_transaction() {
    let mut places = MockPlaceRepository::new();
    places
        .expect_find_by_id()
        .with(eq(1))
        .returning(|id| Ok(Some(place(id, "Dranken Geers"))));

    let mut transactions = MockTransactionRepository::new();
    transactions
        .expect_find_by_id()
        .with(eq(5))
        .times(2)
        .returning(|id| Ok(Some(transaction(id, 2, 1))));
    transactions
        .expect_update()
        .withf(|id, input| *id == 5 && input.user_id == 2 && input.amount == -220)
        .times(1)
        .returning(|_, _| Ok(true));

    let uow = TestUnitOfWork::new(MockUserRepository::new(), places, transactions);
    let token = token_for(2, UserRole::User);
    let (status, body) = call(
        app(uow),
        send_json(
            Method::PUT,
            "/api/transactions/5",
            Some(&token),
            json!({ "amount": -220, "date": "2021-05-08T20:00:00Z", "placeId": 1 }),
        ),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], 5);
    assert_eq!(body["user"], json!({ "id": 2, "name": "User 2" }));
}

#[tokio::test]
async fn test_delete_foreign_transaction_is_not_found() {
    let mut transactions = MockTransactionRepository::new();
    transactions
        .expect_find_by_id()
        .returning(|id| Ok(Some(transaction(id, 3, 1))));
    transactions.expect_delete().never();

    let uow = TestUnitOfWork::new(
        MockUserRepository::new(),
        MockPlaceRepository::new(),
        transactions,
    );
    let token = token_for(2, UserRole::User);
    let request = Request::builder()
        .method(Method::DELETE)
        .uri("/api/transactions/7")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap();

    let (status, body) = call(app(uow), request).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["message"], "No transaction with id 7 exists");
    assert_eq!(body["details"], json!({ "id": 7 }));
}
