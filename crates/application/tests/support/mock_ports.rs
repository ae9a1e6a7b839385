use async_trait::async_trait;
use ferrous_dig_application::ports::{
    DnsExchange, Exchange, SystemConfigProvider, SystemResolverConfig,
};
use ferrous_dig_domain::{DomainError, Nameserver};
use hickory_proto::op::Message;
use std::collections::HashMap;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;
use std::time::Duration;

pub struct MockSystemConfig {
    result: Result<SystemResolverConfig, DomainError>,
    calls: AtomicUsize,
}

impl MockSystemConfig {
    pub fn with(config: SystemResolverConfig) -> Self {
        Self {
            result: Ok(config),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn failing() -> Self {
        Self {
            result: Err(DomainError::SystemConfigUnavailable(
                "resolv.conf missing".to_string(),
            )),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl SystemConfigProvider for MockSystemConfig {
    async fn load(&self) -> Result<SystemResolverConfig, DomainError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.result.clone()
    }
}

/// Answers queries by question name; unscripted names fail with a timeout.
#[derive(Default)]
pub struct MockExchange {
    responses: Mutex<HashMap<String, Result<Message, DomainError>>>,
    sent: Mutex<Vec<(String, String)>>,
}

impl MockExchange {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn respond(&self, name: &str, response: Message) {
        self.responses
            .lock()
            .unwrap()
            .insert(name.to_string(), Ok(response));
    }

    pub fn fail(&self, name: &str, error: DomainError) {
        self.responses
            .lock()
            .unwrap()
            .insert(name.to_string(), Err(error));
    }

    /// `(nameserver, question name)` pairs in send order.
    pub fn sent(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    pub fn sent_names(&self) -> Vec<String> {
        self.sent().into_iter().map(|(_, name)| name).collect()
    }
}

#[async_trait]
impl DnsExchange for MockExchange {
    async fn exchange(
        &self,
        nameserver: &Nameserver,
        query: &Message,
    ) -> Result<Exchange, DomainError> {
        let name = query.queries()[0].name().to_utf8();
        self.sent
            .lock()
            .unwrap()
            .push((nameserver.to_string(), name.clone()));

        let scripted = self.responses.lock().unwrap().get(&name).cloned();
        match scripted {
            Some(Ok(mut response)) => {
                let mut header = *response.header();
                header.set_id(query.id());
                response.set_header(header);
                Ok(Exchange {
                    response,
                    rtt: Duration::from_millis(12),
                })
            }
            Some(Err(e)) => Err(e),
            None => Err(DomainError::TransportTimeout {
                server: nameserver.to_string(),
            }),
        }
    }
}
