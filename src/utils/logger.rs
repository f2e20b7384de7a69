use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter, Layer};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogStyle {
    Compact,
    Json,
}

/// `RUST_LOG` wins over the built-in default.
fn default_filter(verbose: bool) -> EnvFilter {
    let fallback = if verbose {
        "small_algos=debug,info"
    } else {
        "small_algos=info"
    };
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(fallback))
}

/// Installs the global subscriber. Logs always go to stderr so stdout only
/// carries results.
pub fn init_logger(style: LogStyle, verbose: bool) {
    let base = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let layer = match style {
        LogStyle::Compact => base.compact().boxed(),
        LogStyle::Json => base.json().boxed(),
    };

    tracing_subscriber::registry()
        .with(layer.with_filter(default_filter(verbose)))
        .init();
}
