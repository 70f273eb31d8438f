use tracing_subscriber::EnvFilter;

use crate::config::DemoConfig;

/// Install the diagnostic subscriber for a demo binary.
///
/// `RUST_LOG` wins when set; otherwise `config.log_level` applies. Output goes
/// to stderr so stdout carries only the demo trace.
pub fn init(config: &DemoConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config.log_level.to_ascii_lowercase()));

    // A second call (e.g. from the all-patterns runner) keeps the first subscriber.
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
