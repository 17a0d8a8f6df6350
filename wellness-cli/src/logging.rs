use anyhow::{Result, anyhow};
use tracing_subscriber::EnvFilter;

const DEFAULT_LOG_DIRECTIVES: &str = "info,wellness_core=info";

/// Install the stderr subscriber. `RUST_LOG` wins over the defaults.
pub fn init_logging(verbose: bool) -> Result<()> {
    let fallback = if verbose { "debug" } else { DEFAULT_LOG_DIRECTIVES };
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(fallback))
        .map_err(|e| anyhow!("parse log filter: {e}"))?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .try_init()
        .map_err(|e| anyhow!("init logging: {e}"))
}
