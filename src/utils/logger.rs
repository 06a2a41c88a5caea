use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is unset. `-v` wins over the configured level.
pub fn default_filter(verbose: bool, level: Option<&str>) -> String {
    match level {
        _ if verbose => "user_registry=debug,info".to_string(),
        Some(level) => format!("user_registry={}", level),
        None => "user_registry=info".to_string(),
    }
}

/// Installs the global subscriber. `RUST_LOG` wins over everything else.
pub fn init_cli_logger(verbose: bool, level: Option<&str>) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose, level)));

    tracing_subscriber::registry()
        .with(filter)
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}
