//! Integration tests for `POST /register`

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body_json};
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter};
use serde_json::json;

use credo_auth::entities::v1::users;
use credo_auth::requests::v1::auth::{LoginRequest, RegisterRequest};
use credo_auth::testing::setup;

/// A successful registration returns the generated id and the email, and
/// nothing that could disclose the stored hash.
#[actix_web::test]
async fn register_returns_id_and_email() {
    let (service, _db) = credo_auth::service!();

    let request = RegisterRequest {
        email: Some("mail@mail.com".to_string()),
        password: Some("qweqwe".to_string()),
    };

    let req = TestRequest::post()
        .uri("/register")
        .set_json(&request)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED, "Register should succeed");

    let body: serde_json::Value = read_body_json(resp).await;
    assert!(body["id"].is_number(), "id should be a number");
    assert_eq!(body["email"], "mail@mail.com");
    assert!(
        body.get("password").is_none(),
        "Response must not contain a password field"
    );
    assert!(
        body.get("passwordHash").is_none(),
        "Response must not contain a password hash field"
    );
}

/// Both required-field errors are reported together, email first.
#[actix_web::test]
async fn register_without_body_reports_both_required_fields() {
    let (service, _db) = credo_auth::service!();

    let req = TestRequest::post().uri("/register").to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = read_body_json(resp).await;
    assert_eq!(
        body["errors"],
        json!([
            { "message": "Email is required field" },
            { "message": "Password is required field" },
        ])
    );
}

/// An explicit empty JSON object behaves exactly like a missing body.
#[actix_web::test]
async fn register_with_empty_object_reports_both_required_fields() {
    let (service, _db) = credo_auth::service!();

    let req = TestRequest::post()
        .uri("/register")
        .set_json(json!({}))
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = read_body_json(resp).await;
    assert_eq!(
        body["errors"],
        json!([
            { "message": "Email is required field" },
            { "message": "Password is required field" },
        ])
    );
}

/// A present-but-short password fires only the length rule, never the
/// required rule.
#[actix_web::test]
async fn register_with_short_password_reports_only_length_error() {
    let (service, _db) = credo_auth::service!();

    let request = RegisterRequest {
        email: Some("mail@mail.com".to_string()),
        password: Some("qwe".to_string()),
    };

    let req = TestRequest::post()
        .uri("/register")
        .set_json(&request)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = read_body_json(resp).await;
    assert_eq!(
        body["errors"],
        json!([
            { "message": "Password at least have 6 characters" },
        ])
    );
}

/// No row is written when validation fails.
#[actix_web::test]
async fn failed_validation_writes_nothing() {
    let (service, db) = credo_auth::service!();

    let request = RegisterRequest {
        email: Some("short@mail.com".to_string()),
        password: Some("qwe".to_string()),
    };

    let req = TestRequest::post()
        .uri("/register")
        .set_json(&request)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let count = users::Entity::find()
        .filter(users::Column::Email.eq("short@mail.com"))
        .count(&db)
        .await
        .unwrap();

    assert_eq!(count, 0, "Validation failure must not touch the store");
}

/// Registering the same email twice conflicts, and the second attempt does
/// not insert another row.
#[actix_web::test]
async fn duplicate_email_conflicts_without_second_insert() {
    let (service, db) = credo_auth::service!();

    let request = RegisterRequest {
        email: Some("dup@mail.com".to_string()),
        password: Some("qweqwe".to_string()),
    };

    let req = TestRequest::post()
        .uri("/register")
        .set_json(&request)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let req = TestRequest::post()
        .uri("/register")
        .set_json(&request)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = read_body_json(resp).await;
    assert_eq!(
        body["errors"],
        json!([
            { "message": "Email already exists." },
        ])
    );

    let count = users::Entity::find()
        .filter(users::Column::Email.eq("dup@mail.com"))
        .count(&db)
        .await
        .unwrap();

    assert_eq!(count, 1, "Conflict must not produce a second row");
}

/// The seeder fixture occupies its email like any other registration.
#[actix_web::test]
async fn registering_the_seeded_email_conflicts() {
    let (service, _db) = credo_auth::service!();

    let request = RegisterRequest {
        email: Some(setup::SEEDED_EMAIL.to_string()),
        password: Some(setup::SEEDED_PASSWORD.to_string()),
    };

    let req = TestRequest::post()
        .uri("/register")
        .set_json(&request)
        .to_request();

    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);

    let body: serde_json::Value = read_body_json(resp).await;
    assert_eq!(
        body["errors"],
        json!([
            { "message": "Email already exists." },
        ])
    );
}

/// Two registrations with the same password store two different hashes, and
/// neither stores the plaintext.
#[actix_web::test]
async fn same_password_stores_different_hashes() {
    let (service, db) = credo_auth::service!();

    for email in ["first@mail.com", "second@mail.com"] {
        let request = RegisterRequest {
            email: Some(email.to_string()),
            password: Some("qweqwe".to_string()),
        };

        let req = TestRequest::post()
            .uri("/register")
            .set_json(&request)
            .to_request();
        let resp = call_service(&service, req).await;
        assert_eq!(resp.status(), StatusCode::CREATED);
    }

    let first = users::Model::find_by_email(&db, "first@mail.com")
        .await
        .unwrap();
    let second = users::Model::find_by_email(&db, "second@mail.com")
        .await
        .unwrap();

    assert_ne!(
        first.password, second.password,
        "Per-call salts must produce distinct hashes"
    );
    assert!(first.password.starts_with("$argon2id$"));
    assert!(second.password.starts_with("$argon2id$"));
    assert_ne!(first.password, "qweqwe", "Plaintext must never be stored");
}

/// A freshly registered user can log in with the same credentials; the wrong
/// password cannot.
#[actix_web::test]
async fn registered_user_can_login() {
    let (service, _db) = credo_auth::service!();

    let register = RegisterRequest {
        email: Some("mail@mail.com".to_string()),
        password: Some("qweqwe".to_string()),
    };

    let req = TestRequest::post()
        .uri("/register")
        .set_json(&register)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let login = LoginRequest {
        email: Some("mail@mail.com".to_string()),
        password: Some("qweqwe".to_string()),
    };

    let req = TestRequest::post()
        .uri("/login")
        .set_json(&login)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK, "Login should succeed");

    let body: serde_json::Value = read_body_json(resp).await;
    let token = body["token"].as_str().unwrap();
    assert!(!token.is_empty(), "Token should not be empty");

    let wrong = LoginRequest {
        email: Some("mail@mail.com".to_string()),
        password: Some("not-qweqwe".to_string()),
    };

    let req = TestRequest::post()
        .uri("/login")
        .set_json(&wrong)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);

    let body: serde_json::Value = read_body_json(resp).await;
    assert!(
        body.get("token").is_none(),
        "Failed login must not issue a token"
    );
}
