//! TLS Transport for DNS queries, DNS-over-TLS (RFC 7858)
//!
//! Uses a static shared `ClientConfig` with the webpki root store. The
//! server name presented for SNI and certificate checks is the nameserver
//! host.

use super::tcp::{connect, read_with_length_prefix, send_with_length_prefix};
use super::{io_error, resolve_server, DnsTransport, TransportResponse};
use async_trait::async_trait;
use ferrous_dig_domain::DomainError;
use rustls::pki_types::ServerName;
use std::sync::{Arc, LazyLock};
use std::time::Duration;
use tracing::debug;

/// Shared TLS config, built once.
static SHARED_TLS_CONFIG: LazyLock<Arc<rustls::ClientConfig>> = LazyLock::new(|| {
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();

    let mut root_store = rustls::RootCertStore::empty();
    root_store.extend(webpki_roots::TLS_SERVER_ROOTS.iter().cloned());

    let config = rustls::ClientConfig::builder()
        .with_root_certificates(root_store)
        .with_no_client_auth();

    Arc::new(config)
});

/// DNS-over-TLS transport (RFC 7858)
pub struct TlsTransport {
    server: String,
    hostname: String,
}

impl TlsTransport {
    pub fn new(server: impl Into<String>, hostname: impl Into<String>) -> Self {
        Self {
            server: server.into(),
            hostname: hostname.into(),
        }
    }
}

#[async_trait]
impl DnsTransport for TlsTransport {
    async fn send(
        &self,
        message_bytes: &[u8],
        timeout: Duration,
    ) -> Result<TransportResponse, DomainError> {
        let server_name = ServerName::try_from(self.hostname.clone()).map_err(|e| {
            DomainError::transport(
                &self.server,
                format!("invalid TLS server name '{}': {}", self.hostname, e),
            )
        })?;

        let server_addr = resolve_server(&self.server, timeout).await?;
        let tcp_stream = connect(server_addr, timeout).await?;

        let connector = tokio_rustls::TlsConnector::from(SHARED_TLS_CONFIG.clone());
        let mut stream = tokio::time::timeout(timeout, connector.connect(server_name, tcp_stream))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server_addr.to_string(),
            })?
            .map_err(|e| {
                DomainError::transport(server_addr.to_string(), format!("TLS handshake failed: {}", e))
            })?;

        debug!(server = %server_addr, hostname = %self.hostname, "TLS connection established");

        tokio::time::timeout(timeout, send_with_length_prefix(&mut stream, message_bytes))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server_addr.to_string(),
            })?
            .map_err(|e| io_error(server_addr, e))?;

        let response_bytes = tokio::time::timeout(timeout, read_with_length_prefix(&mut stream))
            .await
            .map_err(|_| DomainError::TransportTimeout {
                server: server_addr.to_string(),
            })?
            .map_err(|e| io_error(server_addr, e))?;

        debug!(
            server = %server_addr,
            response_len = response_bytes.len(),
            "TLS response received"
        );

        Ok(TransportResponse {
            bytes: response_bytes,
            protocol_used: "TLS",
        })
    }

    fn protocol_name(&self) -> &'static str {
        "TLS"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tls_transport_creation() {
        let transport = TlsTransport::new("1.1.1.1:853", "1.1.1.1");
        assert_eq!(transport.server, "1.1.1.1:853");
        assert_eq!(transport.hostname, "1.1.1.1");
        assert_eq!(transport.protocol_name(), "TLS");
    }

    #[test]
    fn test_shared_tls_config() {
        let _config = &*SHARED_TLS_CONFIG;
    }

    #[tokio::test]
    async fn test_invalid_server_name_fails_before_connecting() {
        let transport = TlsTransport::new("127.0.0.1:853", "bad name!");
        let result = transport.send(&[0, 1], Duration::from_millis(100)).await;
        assert!(matches!(result, Err(DomainError::Transport { .. })));
    }
}
