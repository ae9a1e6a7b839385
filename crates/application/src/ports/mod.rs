mod dns_exchange;
mod system_config;

pub use dns_exchange::{DnsExchange, Exchange};
pub use system_config::{SystemConfigProvider, SystemResolverConfig};
