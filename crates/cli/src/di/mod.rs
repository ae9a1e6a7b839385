use ferrous_dig_application::services::MessageBuilder;
use ferrous_dig_application::use_cases::{LoadNameserversUseCase, LookupUseCase};
use ferrous_dig_domain::Config;
use ferrous_dig_infrastructure::dns::TransportExchange;
use ferrous_dig_infrastructure::system::ResolvConfProvider;
use std::sync::Arc;
use std::time::Duration;

pub struct UseCases {
    pub load_nameservers: LoadNameserversUseCase,
    pub lookup: LookupUseCase,
}

impl UseCases {
    pub fn new(config: &Config) -> Self {
        let system_config = Arc::new(ResolvConfProvider::new(&config.lookup.resolv_conf_path));
        let exchange = Arc::new(TransportExchange::new(Duration::from_secs(
            config.lookup.timeout_secs,
        )));

        Self {
            load_nameservers: LoadNameserversUseCase::new(system_config, config.ports),
            lookup: LookupUseCase::new(exchange, MessageBuilder::default()),
        }
    }
}
