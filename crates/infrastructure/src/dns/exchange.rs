use super::transport::{create_transport, tcp::TcpTransport, DnsTransport};
use async_trait::async_trait;
use ferrous_dig_application::ports::{DnsExchange, Exchange};
use ferrous_dig_application::services::MessageBuilder;
use ferrous_dig_domain::{DnsProtocol, DomainError, Nameserver};
use hickory_proto::op::Message;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// [`DnsExchange`] over the transport matching each nameserver's protocol.
///
/// A truncated UDP answer is repeated once over TCP to the same address.
pub struct TransportExchange {
    timeout: Duration,
}

impl TransportExchange {
    pub fn new(timeout: Duration) -> Self {
        Self { timeout }
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

#[async_trait]
impl DnsExchange for TransportExchange {
    async fn exchange(
        &self,
        nameserver: &Nameserver,
        query: &Message,
    ) -> Result<Exchange, DomainError> {
        let request_bytes = MessageBuilder::to_wire(query)?;
        let transport = create_transport(nameserver)?;

        let started = Instant::now();
        let response = transport.send(&request_bytes, self.timeout).await?;
        let mut rtt = started.elapsed();
        let mut message = parse_response(&response.bytes, nameserver)?;

        if message.truncated() && nameserver.protocol() == DnsProtocol::Udp {
            info!(nameserver = %nameserver, "Truncated UDP response, retrying over TCP");
            let tcp = TcpTransport::new(nameserver.address());
            let started = Instant::now();
            let response = tcp.send(&request_bytes, self.timeout).await?;
            rtt = started.elapsed();
            message = parse_response(&response.bytes, nameserver)?;
        }

        debug!(
            nameserver = %nameserver,
            protocol = transport.protocol_name(),
            id = message.id(),
            rtt_ms = rtt.as_millis() as u64,
            answers = message.answers().len(),
            "DNS exchange complete"
        );

        Ok(Exchange {
            response: message,
            rtt,
        })
    }
}

fn parse_response(bytes: &[u8], nameserver: &Nameserver) -> Result<Message, DomainError> {
    Message::from_vec(bytes).map_err(|e| {
        DomainError::InvalidDnsResponse(format!(
            "Failed to parse response from {}: {}",
            nameserver, e
        ))
    })
}
