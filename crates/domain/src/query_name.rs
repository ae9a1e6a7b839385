//! Query name expansion following resolver `ndots`/search-list semantics.
//!
//! A name that is already fully qualified is sent as-is. Otherwise the name
//! is tried bare and with every search suffix appended; whether the bare name
//! goes first or last depends on how many labels it has compared to `ndots`.

use std::net::IpAddr;

/// Returns `true` when `name` ends with an unescaped root label.
pub fn is_fqdn(name: &str) -> bool {
    let Some(stripped) = name.strip_suffix('.') else {
        return false;
    };
    let trailing_backslashes = stripped.bytes().rev().take_while(|b| *b == b'\\').count();
    trailing_backslashes % 2 == 0
}

/// Appends the root label unless `name` already has one.
pub fn fqdn(name: &str) -> String {
    if is_fqdn(name) {
        name.to_string()
    } else {
        format!("{}.", name)
    }
}

/// Counts the labels of `name`, treating `\.` as part of a label.
pub fn count_labels(name: &str) -> usize {
    if name.is_empty() || name == "." {
        return 0;
    }

    let mut dots = 0;
    let mut escaped = false;
    for byte in name.bytes() {
        match byte {
            _ if escaped => escaped = false,
            b'\\' => escaped = true,
            b'.' => dots += 1,
            _ => {}
        }
    }

    let labels = dots + 1;
    if is_fqdn(name) {
        labels - 1
    } else {
        labels
    }
}

/// Expands `name` into the ordered list of fully-qualified names to query.
///
/// Names with more than `ndots` labels are tried bare first, then with each
/// suffix of `search_list`. Shorter names get the suffixes first and the bare
/// name last. Fully-qualified names are never expanded.
pub fn expand_query_names(name: &str, ndots: u32, search_list: &[String]) -> Vec<String> {
    if is_fqdn(name) {
        return vec![name.to_string()];
    }

    let has_enough_dots = count_labels(name) > ndots as usize;
    let name = fqdn(name);

    let mut names = Vec::with_capacity(search_list.len() + 1);
    if has_enough_dots {
        names.push(name.clone());
    }
    for suffix in search_list {
        let suffix = suffix.trim_start_matches('.');
        if suffix.is_empty() {
            continue;
        }
        names.push(fqdn(&format!("{}{}", name, suffix)));
    }
    if !has_enough_dots {
        names.push(name);
    }
    names
}

/// Builds the `in-addr.arpa`/`ip6.arpa` name used for PTR lookups of `ip`.
pub fn reverse_name(ip: &IpAddr) -> String {
    match ip {
        IpAddr::V4(ipv4) => {
            let octets = ipv4.octets();
            format!(
                "{}.{}.{}.{}.in-addr.arpa.",
                octets[3], octets[2], octets[1], octets[0]
            )
        }
        IpAddr::V6(ipv6) => {
            let mut nibbles = Vec::with_capacity(32);
            for byte in ipv6.octets().iter().rev() {
                nibbles.push(format!("{:x}", byte & 0x0f));
                nibbles.push(format!("{:x}", (byte >> 4) & 0x0f));
            }
            format!("{}.ip6.arpa.", nibbles.join("."))
        }
    }
}
