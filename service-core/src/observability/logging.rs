use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber for a service binary.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies globally
/// with the service's own crate bumped to `debug`.
pub fn init_tracing(service_name: &str, log_level: &str) {
    let default_directives = format!("{},{}=debug", log_level, service_name.replace('-', "_"));

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_directives));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_file(true)
                .with_line_number(true)
                .json()
                .flatten_event(true),
        )
        .init();
}
