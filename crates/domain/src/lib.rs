//! ferrous-dig domain layer
pub mod config;
pub mod dns_question;
pub mod dns_record;
pub mod errors;
pub mod lookup_result;
pub mod nameserver;
pub mod query_name;
pub mod resolver_options;

pub use config::{CliOverrides, Config, ConfigError};
pub use dns_question::DnsQuestion;
pub use dns_record::{QueryClass, RecordType};
pub use errors::DomainError;
pub use lookup_result::{Answer, Authority, LookupResponse, LookupResult};
pub use nameserver::{DefaultPorts, DnsProtocol, Nameserver};
pub use query_name::{expand_query_names, reverse_name};
pub use resolver_options::ResolverOptions;
