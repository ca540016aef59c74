use actix_web::Responder;
use actix_web::web::Data;

use crate::metrics::AppMetrics;

/// Prometheus metrics endpoint
#[utoipa::path(
    get,
    path = "/metrics",
    tag = "Metrics",
    responses(
        (status = 200, description = "Metrics in Prometheus text exposition format", body = String),
    )
)]
#[get("/metrics")]
pub async fn metrics(metrics: Data<AppMetrics>) -> impl Responder {
    metrics.render()
}
