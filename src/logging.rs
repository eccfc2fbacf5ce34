use tracing_subscriber::EnvFilter;

/// Initialize structured logging on stderr.
///
/// Stdout carries the probe report, so log lines never go there. `RUST_LOG`
/// overrides the default filter.
pub fn init_logging() -> anyhow::Result<()> {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn,omdb_probe=info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init()
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    tracing::debug!("omdb-probe logging initialized");

    Ok(())
}
