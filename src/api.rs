use utoipa::OpenApi;

use crate::{controllers, errors, requests, responses, validation};

#[derive(OpenApi)]
#[openapi(
    tags(
        (name = "Auth"),
        (name = "Health"),
        (name = "Metrics"),
    ),
    paths(
        controllers::v1::auth::register,
        controllers::v1::auth::login,

        controllers::health::health,
        controllers::health::health_db,
        controllers::health::ready,
        controllers::health::live,

        controllers::metrics::metrics,
    ),
    components(schemas(
        requests::v1::auth::RegisterRequest,
        requests::v1::auth::LoginRequest,

        responses::v1::auth::Registered,
        responses::v1::auth::Authenticated,

        errors::ErrorBody,
        validation::Message,

        controllers::health::LivenessResponse,
        controllers::health::ReadinessResponse,
        controllers::health::HealthResponse,
    )),
)]
pub struct Definition;
