use ferrous_dig_domain::{CliOverrides, Config};
use tracing::debug;

pub fn load_config(
    config_path: Option<&str>,
    cli_overrides: CliOverrides,
) -> anyhow::Result<Config> {
    let config = Config::load(config_path, cli_overrides)?;
    config.validate()?;

    debug!(
        config_file = config_path.unwrap_or("default"),
        nameservers = ?config.lookup.nameservers,
        ndots = config.lookup.ndots,
        search = config.lookup.search,
        timeout_secs = config.lookup.timeout_secs,
        "Configuration loaded"
    );

    Ok(config)
}
