use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("Error parsing nameserver '{input}': {reason}")]
    NameserverParse { input: String, reason: String },

    #[error("No usable nameserver found")]
    NoUsableNameserver,

    #[error("System resolver configuration unavailable: {0}")]
    SystemConfigUnavailable(String),

    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Invalid DNS response: {0}")]
    InvalidDnsResponse(String),

    #[error("Unsupported record type: {0}")]
    UnsupportedRecordType(String),

    #[error("Unsupported query class: {0}")]
    UnsupportedClass(String),

    #[error("Invalid address for reverse lookup: {0}")]
    InvalidReverseAddress(String),

    #[error("Transport timeout connecting to {server}")]
    TransportTimeout { server: String },

    #[error("Transport connection refused by {server}")]
    TransportConnectionRefused { server: String },

    #[error("Transport connection reset by {server}")]
    TransportConnectionReset { server: String },

    #[error("Transport error with {server}: {reason}")]
    Transport { server: String, reason: String },
}

impl DomainError {
    pub fn nameserver_parse(input: &str, reason: impl Into<String>) -> Self {
        DomainError::NameserverParse {
            input: input.to_string(),
            reason: reason.into(),
        }
    }

    pub fn transport(server: impl Into<String>, reason: impl ToString) -> Self {
        DomainError::Transport {
            server: server.into(),
            reason: reason.to_string(),
        }
    }

    pub fn is_transport_error(&self) -> bool {
        matches!(
            self,
            DomainError::TransportTimeout { .. }
                | DomainError::TransportConnectionRefused { .. }
                | DomainError::TransportConnectionReset { .. }
                | DomainError::Transport { .. }
        )
    }
}
