mod support;

use ferrous_dig_application::ports::SystemResolverConfig;
use ferrous_dig_application::use_cases::LoadNameserversUseCase;
use ferrous_dig_domain::{DefaultPorts, DnsProtocol, DomainError, ResolverOptions};
use std::sync::Arc;
use support::MockSystemConfig;

fn system_config() -> SystemResolverConfig {
    SystemResolverConfig {
        nameservers: vec!["10.0.0.1".to_string(), "2001:db8::53".to_string()],
        ndots: 3,
        search: vec!["corp.local".to_string(), "lab.local".to_string()],
    }
}

fn raw(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn make_use_case(provider: Arc<MockSystemConfig>) -> LoadNameserversUseCase {
    LoadNameserversUseCase::new(provider, DefaultPorts::default())
}

// ── user-supplied nameservers ──────────────────────────────────────────────

#[tokio::test]
async fn test_user_nameservers_skip_system_provider() {
    let provider = Arc::new(MockSystemConfig::with(system_config()));
    let use_case = make_use_case(provider.clone());
    let options = ResolverOptions::new(0, vec![], true);

    let loaded = use_case
        .execute(&raw(&["1.1.1.1", "tls://dns.quad9.net"]), options.clone())
        .await
        .unwrap();

    assert_eq!(provider.calls(), 0);
    assert_eq!(loaded.nameservers.len(), 2);
    assert_eq!(loaded.nameservers[0].address(), "1.1.1.1:53");
    assert_eq!(loaded.nameservers[1].protocol(), DnsProtocol::Tls);
    assert_eq!(loaded.nameservers[1].address(), "dns.quad9.net:853");
    assert_eq!(loaded.options, options, "options are only reconciled on fallback");
}

#[tokio::test]
async fn test_user_nameserver_order_is_preserved() {
    let provider = Arc::new(MockSystemConfig::failing());
    let use_case = make_use_case(provider);

    let loaded = use_case
        .execute(
            &raw(&["9.9.9.9", "tcp://8.8.8.8", "https://cloudflare-dns.com/dns-query"]),
            ResolverOptions::default(),
        )
        .await
        .unwrap();

    let protocols: Vec<_> = loaded.nameservers.iter().map(|n| n.protocol()).collect();
    assert_eq!(
        protocols,
        vec![DnsProtocol::Udp, DnsProtocol::Tcp, DnsProtocol::Https]
    );
}

#[tokio::test]
async fn test_malformed_nameserver_fails_load() {
    let provider = Arc::new(MockSystemConfig::with(system_config()));
    let use_case = make_use_case(provider.clone());

    let result = use_case
        .execute(&raw(&["1.1.1.1", "udp://:53"]), ResolverOptions::default())
        .await;

    assert!(matches!(result, Err(DomainError::NameserverParse { .. })));
    assert_eq!(provider.calls(), 0);
}

#[tokio::test]
async fn test_first_malformed_nameserver_is_reported() {
    let provider = Arc::new(MockSystemConfig::with(system_config()));
    let use_case = make_use_case(provider);

    let result = use_case
        .execute(
            &raw(&["tcp://:53", "udp://8.8.8.8:99999"]),
            ResolverOptions::default(),
        )
        .await;

    match result {
        Err(DomainError::NameserverParse { input, .. }) => assert_eq!(input, "tcp://:53"),
        other => panic!("expected parse error, got {:?}", other),
    }
}

// ── system fallback ────────────────────────────────────────────────────────

#[tokio::test]
async fn test_fallback_uses_system_nameservers_over_udp() {
    let provider = Arc::new(MockSystemConfig::with(system_config()));
    let use_case = make_use_case(provider.clone());

    let loaded = use_case
        .execute(&[], ResolverOptions::default())
        .await
        .unwrap();

    assert_eq!(provider.calls(), 1);
    let addresses: Vec<_> = loaded.nameservers.iter().map(|n| n.address()).collect();
    assert_eq!(addresses, vec!["10.0.0.1:53", "[2001:db8::53]:53"]);
    assert!(loaded
        .nameservers
        .iter()
        .all(|n| n.protocol() == DnsProtocol::Udp));
}

#[tokio::test]
async fn test_fallback_uses_configured_udp_port() {
    let provider = Arc::new(MockSystemConfig::with(system_config()));
    let ports = DefaultPorts {
        udp: 5353,
        ..DefaultPorts::default()
    };
    let use_case = LoadNameserversUseCase::new(provider, ports);

    let loaded = use_case
        .execute(&[], ResolverOptions::default())
        .await
        .unwrap();

    assert_eq!(loaded.nameservers[0].address(), "10.0.0.1:5353");
}

#[tokio::test]
async fn test_fallback_adopts_ndots_when_unset() {
    let provider = Arc::new(MockSystemConfig::with(system_config()));
    let use_case = make_use_case(provider);

    let loaded = use_case
        .execute(&[], ResolverOptions::new(0, vec![], false))
        .await
        .unwrap();

    assert_eq!(loaded.options.ndots, 3);
}

#[tokio::test]
async fn test_fallback_keeps_user_ndots() {
    let provider = Arc::new(MockSystemConfig::with(system_config()));
    let use_case = make_use_case(provider);

    let loaded = use_case
        .execute(&[], ResolverOptions::new(2, vec![], false))
        .await
        .unwrap();

    assert_eq!(loaded.options.ndots, 2);
}

#[tokio::test]
async fn test_fallback_adopts_search_list_only_when_opted_in() {
    let provider = Arc::new(MockSystemConfig::with(system_config()));
    let use_case = make_use_case(provider);

    let opted_in = use_case
        .execute(&[], ResolverOptions::new(1, vec![], true))
        .await
        .unwrap();
    assert_eq!(opted_in.options.search_list, vec!["corp.local", "lab.local"]);

    let opted_out = use_case
        .execute(&[], ResolverOptions::new(1, vec![], false))
        .await
        .unwrap();
    assert!(opted_out.options.search_list.is_empty());
}

#[tokio::test]
async fn test_fallback_keeps_user_search_list_when_system_has_none() {
    let provider = Arc::new(MockSystemConfig::with(SystemResolverConfig {
        nameservers: vec!["10.0.0.1".to_string()],
        ndots: 1,
        search: vec![],
    }));
    let use_case = make_use_case(provider);

    let loaded = use_case
        .execute(&[], ResolverOptions::new(1, raw(&["home.arpa"]), true))
        .await
        .unwrap();

    assert_eq!(loaded.options.search_list, vec!["home.arpa"]);
}

#[tokio::test]
async fn test_failing_provider_returns_no_usable_nameserver() {
    let provider = Arc::new(MockSystemConfig::failing());
    let use_case = make_use_case(provider.clone());

    let result = use_case.execute(&[], ResolverOptions::default()).await;

    assert_eq!(result, Err(DomainError::NoUsableNameserver));
    assert_eq!(provider.calls(), 1);
}

#[tokio::test]
async fn test_empty_system_list_returns_no_usable_nameserver() {
    let provider = Arc::new(MockSystemConfig::with(SystemResolverConfig::default()));
    let use_case = make_use_case(provider);

    let result = use_case.execute(&[], ResolverOptions::default()).await;

    assert_eq!(result, Err(DomainError::NoUsableNameserver));
}
