use sea_orm::DatabaseConnection;

use crate::config::auth::AuthConfig;
use crate::entities::v1::users::Model;
use crate::errors::Error;
use crate::helpers::now;
use crate::metrics::AppMetrics;
use crate::requests::v1::auth::LoginRequest;
use crate::responses::v1::auth::Authenticated;
use crate::security::PasswordHasher;

#[::tracing::instrument(skip_all)]
pub async fn login(
    db: &DatabaseConnection,
    config: &AuthConfig,
    metrics: &AppMetrics,
    request: LoginRequest,
) -> Result<Authenticated, Error> {
    let validation = request.validate();

    if !validation.is_empty() {
        return Err(validation.into());
    }

    let email = request.email.unwrap_or_default().trim().to_lowercase();
    let password = request.password.unwrap_or_default();

    // Absent user and wrong password must stay indistinguishable to the
    // caller.
    let user = match Model::find_by_email(db, &email).await {
        Some(user) => user,
        None => {
            metrics.record_login_attempt(false);

            return Err(Error::authentication());
        }
    };

    let hasher = PasswordHasher::from_config(config)?;

    if !hasher.verify(&password, &user.password)? {
        metrics.record_login_attempt(false);

        return Err(Error::authentication());
    }

    let expired_at = now() + chrono::Duration::seconds(config.token_expiration as i64);
    let token = user.generate_token(db, Some(expired_at)).await?;

    metrics.record_login_attempt(true);
    ::tracing::info!(user_id = user.id, "Session created");

    Ok(Authenticated {
        token: token.encoded(),
    })
}
