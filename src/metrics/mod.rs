use std::sync::{Arc, OnceLock};

use metrics::{counter, describe_counter};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};

static PROMETHEUS_HANDLE: OnceLock<PrometheusHandle> = OnceLock::new();

/// Application metrics, backed by a process-wide Prometheus recorder.
///
/// The recorder is installed once; every instance shares the same handle.
#[derive(Clone)]
pub struct AppMetrics {
    prometheus_handle: Arc<PrometheusHandle>,
}

impl AppMetrics {
    pub fn new() -> Self {
        let handle = PROMETHEUS_HANDLE.get_or_init(|| {
            Self::describe_metrics();

            PrometheusBuilder::new()
                .install_recorder()
                .expect("Failed to install Prometheus recorder")
        });

        Self {
            prometheus_handle: Arc::new(handle.clone()),
        }
    }

    fn describe_metrics() {
        describe_counter!(
            "auth_registrations_total",
            "Total number of successful registrations"
        );
        describe_counter!(
            "auth_login_attempts_total",
            "Total number of login attempts"
        );
    }

    pub fn record_registration(&self) {
        counter!("auth_registrations_total").increment(1);
    }

    pub fn record_login_attempt(&self, success: bool) {
        let status = if success { "success" } else { "failure" };

        counter!("auth_login_attempts_total", "status" => status).increment(1);
    }

    /// Render all metrics in Prometheus text exposition format.
    pub fn render(&self) -> String {
        self.prometheus_handle.render()
    }
}

impl Default for AppMetrics {
    fn default() -> Self {
        Self::new()
    }
}
