use tracing_subscriber::{fmt, EnvFilter};

/// RUST_LOG controls the level; defaults to info.
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = fmt().with_env_filter(filter).with_target(false).try_init();
}
