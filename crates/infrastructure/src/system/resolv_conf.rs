use async_trait::async_trait;
use ferrous_dig_application::ports::{SystemConfigProvider, SystemResolverConfig};
use ferrous_dig_domain::DomainError;
use std::net::IpAddr;
use std::path::PathBuf;
use tokio::fs;
use tracing::debug;

pub const DEFAULT_RESOLV_CONF: &str = "/etc/resolv.conf";

/// System resolver settings read from a `resolv.conf` file.
pub struct ResolvConfProvider {
    path: PathBuf,
}

impl ResolvConfProvider {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl Default for ResolvConfProvider {
    fn default() -> Self {
        Self::new(DEFAULT_RESOLV_CONF)
    }
}

#[async_trait]
impl SystemConfigProvider for ResolvConfProvider {
    async fn load(&self) -> Result<SystemResolverConfig, DomainError> {
        let content = fs::read(&self.path).await.map_err(|e| {
            DomainError::SystemConfigUnavailable(format!(
                "Failed to read {}: {}",
                self.path.display(),
                e
            ))
        })?;

        let config = parse(&content).map_err(|e| {
            DomainError::SystemConfigUnavailable(format!(
                "Failed to parse {}: {}",
                self.path.display(),
                e
            ))
        })?;

        debug!(
            path = %self.path.display(),
            nameservers = ?config.nameservers,
            ndots = config.ndots,
            search = ?config.search,
            "System resolver configuration loaded"
        );

        Ok(config)
    }
}

/// Nameservers are returned without scope ids or ports; a `domain` line
/// stands in for the search list when there is no `search` line.
pub fn parse(content: &[u8]) -> Result<SystemResolverConfig, resolv_conf::ParseError> {
    let config = resolv_conf::Config::parse(content)?;

    let nameservers = config
        .nameservers
        .iter()
        .map(|ns| IpAddr::from(ns.clone()).to_string())
        .collect();

    let search = match (config.get_search(), config.get_domain()) {
        (Some(search), _) => search.clone(),
        (None, Some(domain)) => vec![domain.clone()],
        (None, None) => Vec::new(),
    };

    Ok(SystemResolverConfig {
        nameservers,
        ndots: config.ndots,
        search,
    })
}
