// src/logging.rs
use tracing_subscriber::EnvFilter;
use tracing_subscriber::filter::LevelFilter;

const fn level_for(verbosity: u8) -> LevelFilter {
    match verbosity {
        0 => LevelFilter::WARN,
        1 => LevelFilter::INFO,
        2 => LevelFilter::DEBUG,
        _ => LevelFilter::TRACE,
    }
}

/// Installs the stderr log subscriber.
///
/// Returns `false` if a global subscriber was already set; the existing one
/// stays in place. `RUST_LOG` takes precedence over `verbosity`.
pub fn init(verbosity: u8) -> bool {
    let filter = EnvFilter::builder()
        .with_default_directive(level_for(verbosity).into())
        .from_env_lossy();

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .is_ok()
}
