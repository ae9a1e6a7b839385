use crate::ports::SystemConfigProvider;
use ferrous_dig_domain::{DefaultPorts, DnsProtocol, DomainError, Nameserver, ResolverOptions};
use std::sync::Arc;
use tracing::{debug, info, warn};

/// Final nameserver list and the resolver options to use with it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadedNameservers {
    pub nameservers: Vec<Nameserver>,
    pub options: ResolverOptions,
}

/// Use case: Resolve the nameservers for this run
///
/// User-supplied nameservers always win. The system configuration is only
/// consulted when none were given, and only then may it fill in `ndots` and
/// the search list.
pub struct LoadNameserversUseCase {
    system_config: Arc<dyn SystemConfigProvider>,
    ports: DefaultPorts,
}

impl LoadNameserversUseCase {
    pub fn new(system_config: Arc<dyn SystemConfigProvider>, ports: DefaultPorts) -> Self {
        Self {
            system_config,
            ports,
        }
    }

    pub async fn execute(
        &self,
        raw_nameservers: &[String],
        options: ResolverOptions,
    ) -> Result<LoadedNameservers, DomainError> {
        let mut nameservers = self.classify_all(raw_nameservers)?;
        let mut options = options;

        if nameservers.is_empty() {
            let system = self.system_config.load().await.map_err(|e| {
                warn!(error = %e, "Failed to load system nameservers");
                DomainError::NoUsableNameserver
            })?;

            if options.ndots == 0 {
                options.ndots = system.ndots;
            }
            if !system.search.is_empty() && options.use_search_list {
                options.search_list = system.search;
            }

            nameservers.extend(
                system
                    .nameservers
                    .iter()
                    .map(|addr| Nameserver::from_host(DnsProtocol::Udp, addr, self.ports.udp)),
            );

            info!(
                nameservers = nameservers.len(),
                ndots = options.ndots,
                search = ?options.search_list,
                "Using system nameservers"
            );
        }

        if nameservers.is_empty() {
            return Err(DomainError::NoUsableNameserver);
        }

        Ok(LoadedNameservers {
            nameservers,
            options,
        })
    }

    /// Classifies every string before reporting, so each bad entry is logged;
    /// the first failure is returned.
    fn classify_all(&self, raw_nameservers: &[String]) -> Result<Vec<Nameserver>, DomainError> {
        let mut nameservers = Vec::with_capacity(raw_nameservers.len());
        let mut first_error = None;

        for raw in raw_nameservers {
            match Nameserver::parse_with(raw, &self.ports) {
                Ok(ns) if ns.address().is_empty() => {
                    warn!(input = %raw, "Nameserver parsed without an address, skipping");
                }
                Ok(ns) => {
                    if has_unknown_scheme(raw) {
                        warn!(input = %raw, "Unknown nameserver scheme, using UDP");
                    }
                    debug!(input = %raw, protocol = %ns.protocol(), address = ns.address(), "Nameserver loaded");
                    nameservers.push(ns);
                }
                Err(e) => {
                    warn!(error = %e, "Rejected nameserver");
                    first_error.get_or_insert(e);
                }
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(nameservers),
        }
    }
}

fn has_unknown_scheme(raw: &str) -> bool {
    match raw.trim().split_once("://") {
        Some((scheme, _)) => !matches!(scheme, "udp" | "tcp" | "tls" | "https"),
        None => false,
    }
}
