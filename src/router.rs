use actix_web::web::{self, Data, ServiceConfig};
use utoipa::OpenApi;
use utoipa_swagger_ui::{SwaggerUi, Url};

use crate::api::Definition;
use crate::controllers;
use crate::metrics::AppMetrics;

pub fn route(app: &mut ServiceConfig) {
    app.app_data(Data::new(AppMetrics::new()));
    app.service(index);
    // Auth
    app.service(controllers::v1::auth::register);
    app.service(controllers::v1::auth::login);

    // Health check endpoints
    app.service(controllers::health::health);
    app.service(controllers::health::health_db);
    app.service(controllers::health::ready);
    app.service(controllers::health::live);

    // Metrics endpoint
    app.service(controllers::metrics::metrics);

    // must at the end!
    app.service(web::redirect("/docs", "/docs/"));
    app.service(SwaggerUi::new("/docs/{_:.*}").urls(vec![(
        Url::new("Authentication", "/api.json"),
        Definition::openapi(),
    )]));
}

#[get("/")]
pub async fn index() -> &'static str {
    "Hello World"
}
