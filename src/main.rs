use omdb_probe::{logging, run_probes, Config, OmdbClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    logging::init_logging()?;

    let config = Config::from_env()?;
    let client = OmdbClient::new(config.credentials(), &config.omdb_api_url)?;

    tracing::info!(base_url = %client.base_url(), "Running OMDb probes");

    let mut stdout = std::io::stdout().lock();
    run_probes(&client, &config.probe_plan(), &mut stdout).await?;

    Ok(())
}
