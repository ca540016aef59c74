#[cfg(feature = "sqlite")]
use credo_auth_migration::MigratorTrait;
#[cfg(feature = "sqlite")]
use sea_orm::{DatabaseConnection, DbErr};

/// Migrated in-memory database for an in-process service instance.
#[cfg(feature = "sqlite")]
pub async fn database() -> Result<DatabaseConnection, DbErr> {
    let db = crate::database::memory().await?;

    credo_auth_migration::Migrator::up(&db, None).await?;

    Ok(db)
}

/// Build an in-process actix service wired like the production app, paired
/// with its database connection. Uses the reduced-cost hasher configuration
/// so suites stay fast.
#[macro_export]
macro_rules! service {
    () => {{
        let db = $crate::testing::instance::database().await.unwrap();
        let app = ::actix_web::App::new()
            .app_data(::actix_web::web::Data::new(db.clone()))
            .app_data(::actix_web::web::Data::new(
                $crate::testing::setup::auth_config(),
            ))
            .configure($crate::router::route);

        let service = ::actix_web::test::init_service(app).await;

        (service, db)
    }};
}
