use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

const CRATE_TARGET: &str = "anemia_calc";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines for the terminal.
    #[default]
    Compact,
    /// One JSON object per event, for collectors.
    Json,
}

impl LogFormat {
    pub fn from_json_flag(json: bool) -> Self {
        if json {
            LogFormat::Json
        } else {
            LogFormat::Compact
        }
    }
}

/// Filter used when `RUST_LOG` is unset. Results are printed on stdout, so the
/// terminal default only shows warnings.
pub fn default_directive(format: LogFormat, verbose: bool) -> String {
    match (format, verbose) {
        (_, true) => format!("{}=debug,info", CRATE_TARGET),
        (LogFormat::Json, false) => format!("{}=info", CRATE_TARGET),
        (LogFormat::Compact, false) => format!("{}=warn", CRATE_TARGET),
    }
}

/// Installs the global subscriber. Logs always go to stderr.
pub fn init_logger(format: LogFormat, verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(format, verbose)));
    let layer = tracing_subscriber::fmt::layer()
        .with_target(false)
        .with_writer(std::io::stderr);
    let registry = tracing_subscriber::registry().with(filter);

    match format {
        LogFormat::Compact => registry.with(layer.compact()).init(),
        LogFormat::Json => registry.with(layer.json().flatten_event(true)).init(),
    }
}
