//! Logging initialization

/// Initialize logging based on debug flag
///
/// With `--debug`, diagnostics go to stderr so stdout stays a clean table.
/// `RUST_LOG` narrows or widens the filter.
pub fn init_logging(debug: bool) {
    if !debug {
        // No logging by default (silent operation)
        return;
    }

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("kubectl_odlm=debug")),
        )
        .with_ansi(false)
        .with_target(true)
        .with_file(true)
        .with_line_number(true)
        .init();

    tracing::debug!("Debug logging enabled");
}
