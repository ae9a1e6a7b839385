use crate::ports::DnsExchange;
use crate::services::{MessageBuilder, ResponseNormalizer};
use ferrous_dig_domain::{
    DnsQuestion, DomainError, LookupResponse, LookupResult, Nameserver, ResolverOptions,
};
use futures::future::join_all;
use hickory_proto::op::ResponseCode;
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case: Ask every question to every nameserver
///
/// Nameservers are queried concurrently. For one nameserver the expanded
/// candidate names are sent in order until one comes back `NOERROR` with
/// answers; otherwise the last response received is reported.
pub struct LookupUseCase {
    exchange: Arc<dyn DnsExchange>,
    builder: MessageBuilder,
}

impl LookupUseCase {
    pub fn new(exchange: Arc<dyn DnsExchange>, builder: MessageBuilder) -> Self {
        Self { exchange, builder }
    }

    /// Results are ordered by question, then by nameserver.
    pub async fn execute(
        &self,
        nameservers: &[Nameserver],
        questions: &[DnsQuestion],
        options: &ResolverOptions,
    ) -> Vec<LookupResponse> {
        let lookups = questions.iter().flat_map(|question| {
            nameservers
                .iter()
                .map(move |nameserver| self.lookup_one(nameserver, question, options))
        });

        join_all(lookups).await
    }

    async fn lookup_one(
        &self,
        nameserver: &Nameserver,
        question: &DnsQuestion,
        options: &ResolverOptions,
    ) -> LookupResponse {
        let outcome = self.resolve(nameserver, question, options).await;

        if let Err(e) = &outcome {
            warn!(
                nameserver = %nameserver,
                name = %question.name,
                error = %e,
                "Lookup failed"
            );
        }

        LookupResponse {
            nameserver: nameserver.clone(),
            question: question.clone(),
            outcome,
        }
    }

    async fn resolve(
        &self,
        nameserver: &Nameserver,
        question: &DnsQuestion,
        options: &ResolverOptions,
    ) -> Result<LookupResult, DomainError> {
        let messages = self.builder.prepare(question, options)?;
        let server = nameserver.address();

        let mut last_result: Option<LookupResult> = None;
        let mut last_error: Option<DomainError> = None;

        for message in &messages {
            let exchange = match self.exchange.exchange(nameserver, message).await {
                Ok(exchange) => exchange,
                Err(e) => {
                    debug!(nameserver = %server, id = message.id(), error = %e, "Candidate failed");
                    last_error = Some(e);
                    continue;
                }
            };

            let response = &exchange.response;
            let result = ResponseNormalizer::normalize(response, exchange.rtt, server);

            if response.response_code() == ResponseCode::NoError && !response.answers().is_empty() {
                return Ok(result);
            }

            debug!(
                nameserver = %server,
                status = %ResponseNormalizer::rcode_to_status(response.response_code()),
                "No answers for candidate, trying next"
            );
            last_result = Some(result);
        }

        match (last_result, last_error) {
            (Some(result), _) => Ok(result),
            (None, Some(e)) => Err(e),
            (None, None) => Ok(LookupResult::default()),
        }
    }
}
