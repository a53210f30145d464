//! Observability infrastructure - Prometheus metrics

mod config;
mod metrics;

pub use self::config::MetricsConfig;
pub use self::metrics::{
    create_metrics_router, init_metrics, record_http_request, record_user_operation,
    set_user_count, OperationOutcome, PrometheusMetrics,
};

#[cfg(test)]
pub(crate) use self::metrics::render_with_local_recorder;
