//! Telemetry initialization: tracing subscriber with an env-driven filter.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Directive used when `RUST_LOG` is unset.
pub fn default_directive(log_level: &str) -> String {
    format!(
        "resource_hub_backend={level},resource_hub={level},tower_http={level},sqlx::query=warn",
        level = log_level
    )
}

/// Initialize the tracing subscriber.
///
/// `RUST_LOG` wins over the configured level when present.
pub fn init_tracing(log_level: &str) {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| default_directive(log_level).into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();
}
