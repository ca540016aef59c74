use actix_cors::Cors;
use actix_web::web::Data;
use actix_web::{App, HttpServer};
use credo_auth_migration::{Migrator, MigratorTrait};
use tracing_subscriber::EnvFilter;

use credo_auth::{config, database, router};

#[actix::main]
async fn main() -> anyhow::Result<()> {
    if let Err(e) = tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .try_init()
    {
        eprintln!("tracing init failed: {e}");
    }

    let config = config::load()?;
    let db = database::connect(&config.database).await?;

    Migrator::up(&db, None).await?;

    let auth = config.auth.clone();
    let cors_origins = config.security.cors.allowed_origins.clone();
    let server = config.server.clone();

    tracing::info!(host = %server.host, port = server.port, "Starting server");

    HttpServer::new(move || {
        let cors = if cors_origins.is_empty() {
            Cors::permissive()
        } else {
            cors_origins
                .iter()
                .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        };

        App::new()
            .wrap(cors)
            .app_data(Data::new(db.clone()))
            .app_data(Data::new(auth.clone()))
            .configure(router::route)
    })
    .workers(server.workers)
    .bind((server.host.as_str(), server.port))?
    .run()
    .await?;

    Ok(())
}
