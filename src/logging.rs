use tracing_subscriber::filter::LevelFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` when set, `info` otherwise. `TracingSink` output and the
/// clear-text password warning are both at `info`/`warn`.
pub fn env_filter() -> EnvFilter {
    EnvFilter::builder()
        .with_default_directive(LevelFilter::INFO.into())
        .from_env_lossy()
}

pub fn init_logger() {
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(env_filter())
        .init();
}
