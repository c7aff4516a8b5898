use tracing_subscriber::EnvFilter;

const DEFAULT_LEVEL: &str = "warn";
const VERBOSE_LEVEL: &str = "info";

/// Installs the stderr subscriber. `RUST_LOG` wins over `--verbose`.
///
/// Safe to call more than once; later calls are no-ops.
pub fn init(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

fn default_level(verbose: bool) -> &'static str {
    if verbose { VERBOSE_LEVEL } else { DEFAULT_LEVEL }
}
