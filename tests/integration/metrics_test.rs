//! Integration tests for the Prometheus endpoint
//!
//! The recorder is process-global, so these run serially to keep the
//! rendered output stable while other suites drive the service.

use actix_web::http::StatusCode;
use actix_web::test::{TestRequest, call_service, read_body};
use serial_test::serial;

use credo_auth::requests::v1::auth::{LoginRequest, RegisterRequest};
use credo_auth::testing::setup;

#[actix_web::test]
#[serial]
async fn metrics_expose_auth_counters() {
    let (service, _db) = credo_auth::service!();

    let register = RegisterRequest {
        email: Some("metrics@mail.com".to_string()),
        password: Some("qweqwe".to_string()),
    };
    let req = TestRequest::post()
        .uri("/register")
        .set_json(&register)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::CREATED);

    let login = LoginRequest {
        email: Some(setup::SEEDED_EMAIL.to_string()),
        password: Some(setup::SEEDED_PASSWORD.to_string()),
    };
    let req = TestRequest::post()
        .uri("/login")
        .set_json(&login)
        .to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let req = TestRequest::get().uri("/metrics").to_request();
    let resp = call_service(&service, req).await;
    assert_eq!(resp.status(), StatusCode::OK);

    let body = read_body(resp).await;
    let text = std::str::from_utf8(&body).unwrap();

    assert!(text.contains("auth_registrations_total"));
    assert!(text.contains("auth_login_attempts_total"));
}
