use anyhow::Context;
use metrics::{counter, describe_counter, describe_gauge, describe_histogram, gauge, histogram};
use metrics_exporter_prometheus::{PrometheusBuilder, PrometheusHandle};
use std::time::Duration;

/// Install the global Prometheus recorder
pub fn init_metrics() -> anyhow::Result<PrometheusHandle> {
    let handle = PrometheusBuilder::new()
        .install_recorder()
        .context("Failed to install Prometheus recorder")?;

    init_metric_descriptions();

    Ok(handle)
}

/// Initialize metric descriptions (can be called multiple times safely)
fn init_metric_descriptions() {
    describe_counter!(
        "pizza_calculations_total",
        "Total number of pizza pricing calculations"
    );
    describe_histogram!(
        "pizza_calculation_duration_seconds",
        "Pricing request duration in seconds"
    );
    describe_counter!(
        "pizza_request_errors_total",
        "Total number of rejected or failed pricing requests"
    );
    describe_gauge!(
        "pizza_pricing_info",
        "Service version and build information"
    );

    gauge!("pizza_pricing_info", "version" => env!("CARGO_PKG_VERSION")).set(1.0);
}

/// Record a finished calculation
pub fn record_calculation(outcome: &str, with_crust: bool) {
    counter!(
        "pizza_calculations_total",
        "outcome" => outcome.to_string(),
        "crust" => with_crust.to_string(),
    )
    .increment(1);
}

/// Record request duration
pub fn record_duration(duration: Duration) {
    histogram!("pizza_calculation_duration_seconds").record(duration.as_secs_f64());
}

/// Record an error response
pub fn record_error(error_type: &str) {
    counter!(
        "pizza_request_errors_total",
        "error_type" => error_type.to_string(),
    )
    .increment(1);
}
