use async_trait::async_trait;
use ferrous_dig_domain::DomainError;

/// Resolver settings read from the operating system.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SystemResolverConfig {
    /// Nameserver addresses without ports.
    pub nameservers: Vec<String>,

    pub ndots: u32,

    pub search: Vec<String>,
}

#[async_trait]
pub trait SystemConfigProvider: Send + Sync {
    async fn load(&self) -> Result<SystemResolverConfig, DomainError>;
}
