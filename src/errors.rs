use actix_web::http::StatusCode;
use actix_web::{HttpResponse, ResponseError};
use sea_orm::DbErr;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use utoipa::ToSchema;

use crate::validation::{Message, Validation};

/// Uniform authentication failure message. Absent user and wrong password
/// must stay indistinguishable to the caller.
pub const INVALID_CREDENTIALS: &str = "Invalid email or password.";

/// Wire shape of every client-facing failure.
#[derive(Clone, Debug, Deserialize, Serialize, ToSchema, PartialEq, Eq)]
pub struct ErrorBody {
    #[schema()]
    pub errors: Vec<Message>,
}

#[derive(Debug, Error)]
pub enum Error {
    /// Client input malformed. Surfaced as 400 with itemized messages.
    #[error("validation failed")]
    Validation(Validation),
    /// Duplicate email. Surfaced as 400.
    #[error("{0}")]
    Conflict(String),
    /// Bad credentials. Surfaced as 401, cause never disclosed.
    #[error("{0}")]
    Authentication(String),
    #[error(transparent)]
    Database(#[from] DbErr),
    #[error("password hash failure: {0}")]
    PasswordHash(argon2::password_hash::Error),
    #[error(transparent)]
    Internal(#[from] anyhow::Error),
}

impl Error {
    pub fn conflict<T: ToString>(message: T) -> Self {
        Self::Conflict(message.to_string())
    }

    pub fn authentication() -> Self {
        Self::Authentication(INVALID_CREDENTIALS.to_string())
    }
}

impl From<Validation> for Error {
    fn from(validation: Validation) -> Self {
        Self::Validation(validation)
    }
}

impl From<argon2::password_hash::Error> for Error {
    fn from(error: argon2::password_hash::Error) -> Self {
        Self::PasswordHash(error)
    }
}

impl ResponseError for Error {
    fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) | Self::Conflict(_) => StatusCode::BAD_REQUEST,
            Self::Authentication(_) => StatusCode::UNAUTHORIZED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let errors = match self {
            Self::Validation(validation) => validation.messages().to_vec(),
            Self::Conflict(message) | Self::Authentication(message) => {
                vec![Message::new(message)]
            }
            error => {
                ::tracing::error!("Request failed: {error}");

                vec![Message::new("Internal server error")]
            }
        };

        HttpResponse::build(self.status_code()).json(ErrorBody { errors })
    }
}
