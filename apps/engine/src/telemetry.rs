use tracing_subscriber::{fmt, prelude::*, EnvFilter};

/// Output format for [`init_tracing`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Text,
    Json,
}

/// Install the global subscriber. `RUST_LOG` overrides `default_filter`.
///
/// Safe to call more than once; later calls are ignored.
pub fn init_tracing(format: LogFormat, default_filter: &str) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));

    let base = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_writer(std::io::stderr);

    let registry = tracing_subscriber::registry().with(env_filter);
    let _ = match format {
        LogFormat::Json => registry.with(base.with_ansi(false).json()).try_init(),
        LogFormat::Text => registry.with(base).try_init(),
    };
}
