use std::io::IsTerminal;

use tracing::level_filters::LevelFilter;
use tracing::warn;
use tracing_subscriber::{
    EnvFilter, Registry, fmt, layer::SubscriberExt, reload, util::SubscriberInitExt,
};

/// Handle for changing the log level once the configuration is known.
pub struct LogHandle(reload::Handle<EnvFilter, Registry>);

impl LogHandle {
    /// Replaces the default level. `RUST_LOG` still takes precedence.
    pub fn set_level(&self, level: &str) {
        if let Err(err) = self.0.reload(build_filter(level)) {
            warn!(%err, level, "failed to apply configured log level");
        }
    }
}

fn build_filter(level: &str) -> EnvFilter {
    let default_level = level.parse::<LevelFilter>().unwrap_or(LevelFilter::INFO);

    EnvFilter::builder()
        .with_default_directive(default_level.into())
        .from_env_lossy()
}

/// Installs the global subscriber, writing to stderr.
///
/// `RUST_LOG` wins over `level` when set.
pub fn init(level: &str) -> LogHandle {
    let (filter, handle) = reload::Layer::new(build_filter(level));

    // A second initialisation is a no-op.
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_writer(std::io::stderr)
                .with_ansi(std::io::stderr().is_terminal()),
        )
        .try_init();

    LogHandle(handle)
}
