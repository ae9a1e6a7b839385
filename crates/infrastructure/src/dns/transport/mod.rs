pub mod https;
pub mod tcp;
pub mod tls;
pub mod udp;

use async_trait::async_trait;
use ferrous_dig_domain::{DnsProtocol, DomainError, Nameserver};
use std::io;
use std::net::SocketAddr;
use std::time::Duration;

#[derive(Debug)]
pub struct TransportResponse {
    pub bytes: Vec<u8>,

    pub protocol_used: &'static str,
}

#[async_trait]
pub trait DnsTransport: Send + Sync {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError>;

    fn protocol_name(&self) -> &'static str;
}

pub enum Transport {
    Udp(udp::UdpTransport),
    Tcp(tcp::TcpTransport),
    #[cfg(feature = "dns-over-rustls")]
    Tls(tls::TlsTransport),
    #[cfg(feature = "dns-over-https")]
    Https(https::HttpsTransport),
}

impl Transport {
    pub async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        match self {
            Self::Udp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            Self::Tcp(t) => DnsTransport::send(t, message_bytes, timeout).await,
            #[cfg(feature = "dns-over-rustls")]
            Self::Tls(t) => DnsTransport::send(t, message_bytes, timeout).await,
            #[cfg(feature = "dns-over-https")]
            Self::Https(t) => DnsTransport::send(t, message_bytes, timeout).await,
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            Self::Udp(_) => "UDP",
            Self::Tcp(_) => "TCP",
            #[cfg(feature = "dns-over-rustls")]
            Self::Tls(_) => "TLS",
            #[cfg(feature = "dns-over-https")]
            Self::Https(_) => "HTTPS",
        }
    }
}

pub fn create_transport(nameserver: &Nameserver) -> Result<Transport, DomainError> {
    let address = nameserver.address().to_string();

    match nameserver.protocol() {
        DnsProtocol::Udp => Ok(Transport::Udp(udp::UdpTransport::new(address))),
        DnsProtocol::Tcp => Ok(Transport::Tcp(tcp::TcpTransport::new(address))),

        #[cfg(feature = "dns-over-rustls")]
        DnsProtocol::Tls => {
            let hostname = nameserver.host().unwrap_or_default().to_string();
            Ok(Transport::Tls(tls::TlsTransport::new(address, hostname)))
        }

        #[cfg(not(feature = "dns-over-rustls"))]
        DnsProtocol::Tls => {
            tracing::warn!("TLS feature not enabled, falling back to TCP for {}", address);
            Ok(Transport::Tcp(tcp::TcpTransport::new(address)))
        }

        #[cfg(feature = "dns-over-https")]
        DnsProtocol::Https => Ok(Transport::Https(https::HttpsTransport::new(address))),

        #[cfg(not(feature = "dns-over-https"))]
        DnsProtocol::Https => Err(DomainError::transport(
            address,
            "HTTPS feature not enabled. Enable 'dns-over-https' feature to use it",
        )),
    }
}

/// Resolves a `host:port` address, skipping DNS for IP literals.
pub(crate) async fn resolve_server(
    address: &str,
    timeout: Duration,
) -> Result<SocketAddr, DomainError> {
    if let Ok(addr) = address.parse::<SocketAddr>() {
        return Ok(addr);
    }

    let mut addrs = tokio::time::timeout(timeout, tokio::net::lookup_host(address))
        .await
        .map_err(|_| DomainError::TransportTimeout {
            server: address.to_string(),
        })?
        .map_err(|e| DomainError::transport(address, format!("cannot resolve host: {}", e)))?;

    addrs
        .next()
        .ok_or_else(|| DomainError::transport(address, "host resolved to no addresses"))
}

pub(crate) fn io_error(server: impl ToString, error: io::Error) -> DomainError {
    let server = server.to_string();
    match error.kind() {
        io::ErrorKind::ConnectionRefused => DomainError::TransportConnectionRefused { server },
        io::ErrorKind::ConnectionReset | io::ErrorKind::ConnectionAborted => {
            DomainError::TransportConnectionReset { server }
        }
        io::ErrorKind::TimedOut => DomainError::TransportTimeout { server },
        _ => DomainError::transport(server, error),
    }
}
