//! Global subscriber setup: env filter, stderr fmt layer, optional sink.

use tracing_subscriber::EnvFilter;
use tracing_subscriber::Registry;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

use crate::config::ObservabilityConfig;
use crate::error::ObservabilityError;
use crate::log_sink;

pub fn build_filter(config: &ObservabilityConfig) -> Result<EnvFilter, ObservabilityError> {
    let directive = config.filter_directive();
    EnvFilter::try_new(directive).map_err(|e| ObservabilityError::InvalidFilter {
        filter: directive.to_string(),
        reason: e.to_string(),
    })
}

/// Installs the global subscriber. Call once, early in `main`.
///
/// Console output goes to stderr so that machine-readable output on stdout
/// stays clean.
pub fn init(config: ObservabilityConfig) -> Result<(), ObservabilityError> {
    let env_filter = build_filter(&config)?;

    let fmt_layer = config.enable_console.then(|| {
        tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
    });
    let sink_layer = log_sink::sink_layer(config.log_sink.clone());

    Registry::default()
        .with(env_filter)
        .with(fmt_layer)
        .with(sink_layer)
        .try_init()
        .map_err(|e| ObservabilityError::InitFailed(e.to_string()))?;

    tracing::debug!(
        service.name = %config.service_name,
        filter = config.filter_directive(),
        "logging initialized"
    );
    Ok(())
}

pub fn init_from_env() -> Result<(), ObservabilityError> {
    init(ObservabilityConfig::from_env())
}
