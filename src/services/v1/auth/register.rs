use sea_orm::{DatabaseConnection, SqlErr};

use crate::config::auth::AuthConfig;
use crate::entities::v1::users::Model;
use crate::errors::Error;
use crate::metrics::AppMetrics;
use crate::requests::v1::auth::RegisterRequest;
use crate::responses::v1::auth::Registered;
use crate::security::PasswordHasher;

#[::tracing::instrument(skip_all)]
pub async fn register(
    db: &DatabaseConnection,
    config: &AuthConfig,
    metrics: &AppMetrics,
    request: RegisterRequest,
) -> Result<Registered, Error> {
    let validation = request.validate();

    if !validation.is_empty() {
        return Err(validation.into());
    }

    // Rules guarantee presence past this point.
    let email = request.email.unwrap_or_default().trim().to_lowercase();
    let password = request.password.unwrap_or_default();

    if Model::email_exists(db, &email).await {
        return Err(Error::conflict("Email already exists."));
    }

    let hasher = PasswordHasher::from_config(config)?;

    ::tracing::debug!(email = %email, "Hashing password with Argon2id");
    let password = hasher.hash(&password)?;

    let user = match Model::store(db, &email, &password).await {
        Ok(user) => user,
        // The unique index is authoritative; a lost race against a concurrent
        // registration surfaces here, not in the pre-check above.
        Err(err) => match err.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(_)) => {
                return Err(Error::conflict("Email already exists."));
            }
            _ => return Err(err.into()),
        },
    };

    metrics.record_registration();
    ::tracing::info!(user_id = user.id, "User registered");

    Ok(user.into())
}
