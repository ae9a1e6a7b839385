use ferrous_dig_domain::{DefaultPorts, DnsProtocol, DomainError, Nameserver};

#[test]
fn test_parse_bare_ip() {
    let ns: Nameserver = "8.8.8.8".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Udp);
    assert_eq!(ns.address(), "8.8.8.8:53");
}

#[test]
fn test_parse_bare_ip_with_port() {
    let ns: Nameserver = "127.0.0.1:5353".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Udp);
    assert_eq!(ns.address(), "127.0.0.1:5353");
}

#[test]
fn test_parse_bare_hostname() {
    let ns: Nameserver = "dns.google".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Udp);
    assert_eq!(ns.address(), "dns.google:53");
}

#[test]
fn test_parse_udp_scheme() {
    let ns: Nameserver = "udp://1.0.0.1".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Udp);
    assert_eq!(ns.address(), "1.0.0.1:53");

    let ns: Nameserver = "udp://1.0.0.1:5300".parse().unwrap();
    assert_eq!(ns.address(), "1.0.0.1:5300");
}

#[test]
fn test_parse_tcp_default_port() {
    let ns: Nameserver = "tcp://9.9.9.9".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Tcp);
    assert_eq!(ns.address(), "9.9.9.9:53");
}

#[test]
fn test_parse_tcp_explicit_port() {
    let ns: Nameserver = "tcp://9.9.9.9:5353".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Tcp);
    assert_eq!(ns.address(), "9.9.9.9:5353");
}

#[test]
fn test_parse_tls() {
    let ns: Nameserver = "tls://1.1.1.1".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Tls);
    assert_eq!(ns.address(), "1.1.1.1:853");
}

#[test]
fn test_parse_tls_hostname_with_port() {
    let ns: Nameserver = "tls://dns.google:8853".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Tls);
    assert_eq!(ns.address(), "dns.google:8853");
    assert_eq!(ns.host(), Some("dns.google"));
}

#[test]
fn test_parse_tls_ipv6() {
    let ns: Nameserver = "tls://[2606:4700:4700::1111]".parse().unwrap();
    assert_eq!(ns.address(), "[2606:4700:4700::1111]:853");
    assert_eq!(ns.host(), Some("2606:4700:4700::1111"));
    assert_eq!(ns.port(), Some(853));
}

#[test]
fn test_parse_https() {
    let ns: Nameserver = "https://dns.google/dns-query".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Https);
    assert_eq!(ns.address(), "https://dns.google/dns-query");
}

#[test]
fn test_parse_https_keeps_port_and_path() {
    let ns: Nameserver = "https://doh.example:8443/custom".parse().unwrap();
    assert_eq!(ns.address(), "https://doh.example:8443/custom");
}

#[test]
fn test_unknown_scheme_falls_back_to_udp() {
    let ns: Nameserver = "quic://1.1.1.1".parse().unwrap();
    assert_eq!(ns.protocol(), DnsProtocol::Udp);
    assert_eq!(ns.address(), "1.1.1.1:53");
}

#[test]
fn test_classification_is_idempotent() {
    let inputs = [
        "8.8.8.8",
        "tls://1.1.1.1",
        "tcp://9.9.9.9:5353",
        "https://dns.google/dns-query",
    ];

    for input in inputs {
        let first: Nameserver = input.parse().unwrap();
        let second: Nameserver = input.parse().unwrap();
        assert_eq!(first, second, "classification differs for {}", input);
    }
}

#[test]
fn test_invalid_port_is_rejected() {
    let err = "tcp://9.9.9.9:99999".parse::<Nameserver>().unwrap_err();
    match err {
        DomainError::NameserverParse { input, .. } => assert_eq!(input, "tcp://9.9.9.9:99999"),
        other => panic!("Expected NameserverParse, got {:?}", other),
    }
}

#[test]
fn test_missing_host_is_rejected() {
    assert!("https://".parse::<Nameserver>().is_err());
    assert!("tls://".parse::<Nameserver>().is_err());
}

#[test]
fn test_whitespace_host_is_rejected() {
    assert!("dns google".parse::<Nameserver>().is_err());
}

#[test]
fn test_custom_default_ports() {
    let ports = DefaultPorts {
        udp: 10053,
        tcp: 10054,
        tls: 10853,
    };

    let tcp = Nameserver::parse_with("tcp://10.0.0.1", &ports).unwrap();
    assert_eq!(tcp.address(), "10.0.0.1:10054");

    let explicit = Nameserver::parse_with("tcp://10.0.0.1:53", &ports).unwrap();
    assert_eq!(explicit.address(), "10.0.0.1:53");
}

#[test]
fn test_display() {
    let tls: Nameserver = "tls://1.1.1.1".parse().unwrap();
    assert_eq!(tls.to_string(), "tls://1.1.1.1:853");

    let https: Nameserver = "https://dns.google/dns-query".parse().unwrap();
    assert_eq!(https.to_string(), "https://dns.google/dns-query");
}
