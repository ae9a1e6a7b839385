use crate::{DnsQuestion, DomainError, Nameserver};
use serde::Serialize;

/// A display-ready record from the answer section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Answer {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: String,
    pub class: String,
    pub address: String,
    pub rtt: String,
    pub nameserver: String,
}

/// A display-ready SOA record from the authority section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Authority {
    pub name: String,
    #[serde(rename = "type")]
    pub record_type: String,
    pub ttl: String,
    pub class: String,
    pub mname: String,
    pub status: String,
    pub rtt: String,
    pub nameserver: String,
}

/// Normalized content of one response, in wire order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct LookupResult {
    pub answers: Vec<Answer>,
    pub authorities: Vec<Authority>,
}

impl LookupResult {
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty() && self.authorities.is_empty()
    }
}

/// Outcome of asking one question to one nameserver.
#[derive(Debug, Clone, Serialize)]
pub struct LookupResponse {
    pub nameserver: Nameserver,
    pub question: DnsQuestion,
    #[serde(serialize_with = "serialize_outcome")]
    pub outcome: Result<LookupResult, DomainError>,
}

fn serialize_outcome<S>(
    outcome: &Result<LookupResult, DomainError>,
    serializer: S,
) -> Result<S::Ok, S::Error>
where
    S: serde::Serializer,
{
    #[derive(Serialize)]
    #[serde(rename_all = "lowercase")]
    enum Outcome<'a> {
        Response(&'a LookupResult),
        Error(String),
    }

    match outcome {
        Ok(result) => Outcome::Response(result).serialize(serializer),
        Err(e) => Outcome::Error(e.to_string()).serialize(serializer),
    }
}
