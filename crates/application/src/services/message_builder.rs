//! DNS Message Builder
//!
//! Turns each candidate name produced by query name expansion into its own
//! query message using `hickory-proto`. Every message carries exactly one
//! question; some resolvers misbehave when several are batched together.

use super::record_type_map::RecordTypeMapper;
use ferrous_dig_domain::{
    expand_query_names, DnsQuestion, DomainError, QueryClass, RecordType, ResolverOptions,
};
use hickory_proto::op::{Message, MessageType, OpCode, Query};
use hickory_proto::rr::Name;
use hickory_proto::serialize::binary::{BinEncodable, BinEncoder};
use std::str::FromStr;
use std::sync::Arc;
use tracing::debug;

/// Source of transaction ids for outgoing queries.
pub trait QueryIdSource: Send + Sync {
    fn next_id(&self) -> u16;
}

/// Uniformly random, non-zero transaction ids.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomQueryIds;

impl QueryIdSource for RandomQueryIds {
    fn next_id(&self) -> u16 {
        fastrand::u16(1..)
    }
}

/// Builds query messages, one per candidate name.
#[derive(Clone)]
pub struct MessageBuilder {
    ids: Arc<dyn QueryIdSource>,
}

impl Default for MessageBuilder {
    fn default() -> Self {
        Self::new(Arc::new(RandomQueryIds))
    }
}

impl MessageBuilder {
    pub fn new(ids: Arc<dyn QueryIdSource>) -> Self {
        Self { ids }
    }

    /// Build a recursive query for a single name
    ///
    /// Creates a standard recursive query with:
    /// - Fresh ID from the configured id source
    /// - RD (Recursion Desired) flag set
    /// - Single question section
    pub fn build_query(
        &self,
        name: &str,
        record_type: &RecordType,
        class: &QueryClass,
    ) -> Result<Message, DomainError> {
        let name = Name::from_str(name).map_err(|e| {
            DomainError::InvalidDomainName(format!("Invalid domain '{}': {}", name, e))
        })?;

        let mut query = Query::new();
        query.set_name(name);
        query.set_query_type(RecordTypeMapper::to_hickory(record_type));
        query.set_query_class(RecordTypeMapper::class_to_hickory(class));

        let mut message = Message::new(self.ids.next_id(), MessageType::Query, OpCode::Query);
        message.set_recursion_desired(true);
        message.add_query(query);

        Ok(message)
    }

    /// Expands the question name and builds one message per candidate, in
    /// the order the candidates should be tried.
    pub fn prepare(
        &self,
        question: &DnsQuestion,
        options: &ResolverOptions,
    ) -> Result<Vec<Message>, DomainError> {
        let candidates = expand_query_names(
            &question.name,
            options.ndots,
            options.effective_search_list(),
        );

        debug!(
            name = %question.name,
            record_type = %question.record_type,
            candidates = ?candidates,
            "Query name expanded"
        );

        candidates
            .iter()
            .map(|candidate| self.build_query(candidate, &question.record_type, &question.class))
            .collect()
    }

    /// Serialize a Message to wire format bytes
    pub fn to_wire(message: &Message) -> Result<Vec<u8>, DomainError> {
        let mut buf = Vec::with_capacity(512);
        let mut encoder = BinEncoder::new(&mut buf);

        message.emit(&mut encoder).map_err(|e| {
            DomainError::InvalidDomainName(format!("Failed to serialize DNS message: {}", e))
        })?;

        Ok(buf)
    }
}
