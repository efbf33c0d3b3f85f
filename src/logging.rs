use tracing_subscriber::EnvFilter;

/// Installs the stdout subscriber. `--verbose` forces debug level, otherwise
/// `RUST_LOG` applies with `info` as the fallback.
pub fn init(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .without_time()
        .try_init()
        .ok();
}

#[cfg(test)]
#[path = "../tests/src_inline/logging.rs"]
mod tests;
