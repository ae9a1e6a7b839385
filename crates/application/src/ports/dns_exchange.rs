use async_trait::async_trait;
use ferrous_dig_domain::{DomainError, Nameserver};
use hickory_proto::op::Message;
use std::time::Duration;

/// A decoded response together with the time the exchange took.
#[derive(Debug, Clone)]
pub struct Exchange {
    pub response: Message,
    pub rtt: Duration,
}

/// Sends one prepared query to a nameserver over its protocol.
#[async_trait]
pub trait DnsExchange: Send + Sync {
    async fn exchange(
        &self,
        nameserver: &Nameserver,
        query: &Message,
    ) -> Result<Exchange, DomainError>;
}
