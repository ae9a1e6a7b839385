use crate::DomainError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;
use std::sync::Arc;
use url::Url;

const DEFAULT_DNS_PORT: u16 = 53;
const DEFAULT_TLS_PORT: u16 = 853;

/// Transport used to reach a nameserver.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum DnsProtocol {
    #[serde(rename = "udp")]
    Udp,
    #[serde(rename = "tcp")]
    Tcp,
    #[serde(rename = "dot")]
    Tls,
    #[serde(rename = "doh")]
    Https,
}

impl DnsProtocol {
    pub fn as_str(&self) -> &'static str {
        match self {
            DnsProtocol::Udp => "udp",
            DnsProtocol::Tcp => "tcp",
            DnsProtocol::Tls => "dot",
            DnsProtocol::Https => "doh",
        }
    }

    pub fn protocol_name(&self) -> &'static str {
        match self {
            DnsProtocol::Udp => "UDP",
            DnsProtocol::Tcp => "TCP",
            DnsProtocol::Tls => "TLS",
            DnsProtocol::Https => "HTTPS",
        }
    }
}

impl fmt::Display for DnsProtocol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ports applied when a nameserver string does not carry one.
///
/// DoH endpoints keep their URL verbatim, so there is no HTTPS entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Serialize)]
pub struct DefaultPorts {
    #[serde(default = "default_dns_port")]
    pub udp: u16,

    #[serde(default = "default_dns_port")]
    pub tcp: u16,

    #[serde(default = "default_tls_port")]
    pub tls: u16,
}

impl Default for DefaultPorts {
    fn default() -> Self {
        Self {
            udp: DEFAULT_DNS_PORT,
            tcp: DEFAULT_DNS_PORT,
            tls: DEFAULT_TLS_PORT,
        }
    }
}

fn default_dns_port() -> u16 {
    DEFAULT_DNS_PORT
}

fn default_tls_port() -> u16 {
    DEFAULT_TLS_PORT
}

/// A nameserver endpoint: protocol plus canonical address.
///
/// For UDP, TCP and TLS the address is always `host:port`, with IPv6 hosts
/// bracketed. For HTTPS it is the full endpoint URL.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct Nameserver {
    protocol: DnsProtocol,
    address: Arc<str>,
}

impl Nameserver {
    pub fn new(protocol: DnsProtocol, address: impl Into<Arc<str>>) -> Self {
        Self {
            protocol,
            address: address.into(),
        }
    }

    /// Builds an endpoint from a bare host and port, bracketing IPv6 hosts.
    pub fn from_host(protocol: DnsProtocol, host: &str, port: u16) -> Self {
        Self::new(protocol, join_host_port(host, port))
    }

    /// Classifies a raw nameserver string using `ports` for omitted ports.
    ///
    /// Accepted forms are `[scheme://]host[:port]` where scheme is one of
    /// `udp`, `tcp`, `tls` or `https`. A missing or unrecognised scheme falls
    /// back to UDP.
    pub fn parse_with(input: &str, ports: &DefaultPorts) -> Result<Self, DomainError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(DomainError::nameserver_parse(input, "empty nameserver"));
        }

        if !trimmed.contains("://") {
            return parse_bare(input, trimmed, ports.udp);
        }

        let url = Url::parse(trimmed)
            .map_err(|e| DomainError::nameserver_parse(input, e.to_string()))?;

        match url.scheme() {
            "https" => Ok(Self::new(DnsProtocol::Https, trimmed)),
            "tls" => from_url(input, &url, DnsProtocol::Tls, ports.tls),
            "tcp" => from_url(input, &url, DnsProtocol::Tcp, ports.tcp),
            "udp" => from_url(input, &url, DnsProtocol::Udp, ports.udp),
            _ => from_url(input, &url, DnsProtocol::Udp, ports.udp),
        }
    }

    pub fn protocol(&self) -> DnsProtocol {
        self.protocol
    }

    pub fn address(&self) -> &str {
        &self.address
    }

    /// Host part of a `host:port` address, without IPv6 brackets.
    ///
    /// Returns `None` for HTTPS endpoints.
    pub fn host(&self) -> Option<&str> {
        if self.protocol == DnsProtocol::Https {
            return None;
        }
        let (host, _) = self.address.rsplit_once(':')?;
        Some(host.trim_start_matches('[').trim_end_matches(']'))
    }

    pub fn port(&self) -> Option<u16> {
        if self.protocol == DnsProtocol::Https {
            return None;
        }
        let (_, port) = self.address.rsplit_once(':')?;
        port.parse().ok()
    }
}

impl FromStr for Nameserver {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse_with(s, &DefaultPorts::default())
    }
}

impl fmt::Display for Nameserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.protocol {
            DnsProtocol::Https => write!(f, "{}", self.address),
            DnsProtocol::Udp => write!(f, "udp://{}", self.address),
            DnsProtocol::Tcp => write!(f, "tcp://{}", self.address),
            DnsProtocol::Tls => write!(f, "tls://{}", self.address),
        }
    }
}

fn parse_bare(input: &str, s: &str, default_port: u16) -> Result<Nameserver, DomainError> {
    if let Ok(ip) = s.parse::<IpAddr>() {
        return Ok(Nameserver::from_host(
            DnsProtocol::Udp,
            &ip.to_string(),
            default_port,
        ));
    }
    if let Ok(addr) = s.parse::<SocketAddr>() {
        return Ok(Nameserver::new(DnsProtocol::Udp, addr.to_string()));
    }

    let url = Url::parse(&format!("udp://{}", s))
        .map_err(|e| DomainError::nameserver_parse(input, e.to_string()))?;
    from_url(input, &url, DnsProtocol::Udp, default_port)
}

fn from_url(
    input: &str,
    url: &Url,
    protocol: DnsProtocol,
    default_port: u16,
) -> Result<Nameserver, DomainError> {
    let host = url
        .host_str()
        .filter(|host| !host.is_empty())
        .ok_or_else(|| DomainError::nameserver_parse(input, "missing host"))?;
    let port = url.port().unwrap_or(default_port);
    Ok(Nameserver::from_host(protocol, host, port))
}

fn join_host_port(host: &str, port: u16) -> String {
    let host = host.trim_start_matches('[').trim_end_matches(']');
    if host.contains(':') {
        format!("[{}]:{}", host, port)
    } else {
        format!("{}:{}", host, port)
    }
}
