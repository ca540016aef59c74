use actix_web::Responder;
use actix_web::web::{Data, Json};
use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::errors::{Error, ErrorBody};
use crate::metrics::AppMetrics;
use crate::requests::v1::auth::{LoginRequest, RegisterRequest};
use crate::responses::v1::auth::{Authenticated, Registered};
use crate::services;

/// Register a new user
///
/// Fail if:
/// - email or password is missing or malformed
/// - email already exists
#[utoipa::path(
    tag = "Auth",
    responses(
        (status = 201, description = "User created", body = Registered),
        (status = 400, description = "Validation or conflict failure", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
#[post("/register")]
pub async fn register(
    db: Data<DatabaseConnection>,
    config: Data<AuthConfig>,
    metrics: Data<AppMetrics>,
    request: Option<Json<RegisterRequest>>,
) -> Result<impl Responder, Error> {
    // An absent or malformed body fails validation like any other empty
    // input.
    let request = request.map(Json::into_inner).unwrap_or_default();
    let response = services::v1::auth::register::register(&db, &config, &metrics, request).await?;

    Ok(response)
}

/// Create a new session
///
/// Fail if:
/// - email or password is missing or malformed
/// - credentials do not match a stored user
#[utoipa::path(
    tag = "Auth",
    responses(
        (status = 200, description = "Authenticated", body = Authenticated),
        (status = 400, description = "Validation failure", body = ErrorBody),
        (status = 401, description = "Invalid credentials", body = ErrorBody),
        (status = 500, description = "Internal server error", body = ErrorBody),
    )
)]
#[post("/login")]
pub async fn login(
    db: Data<DatabaseConnection>,
    config: Data<AuthConfig>,
    metrics: Data<AppMetrics>,
    request: Option<Json<LoginRequest>>,
) -> Result<impl Responder, Error> {
    let request = request.map(Json::into_inner).unwrap_or_default();
    let response = services::v1::auth::login::login(&db, &config, &metrics, request).await?;

    Ok(response)
}
