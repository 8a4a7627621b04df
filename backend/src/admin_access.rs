//! Gate for the maintenance endpoints. A caller is let in when it presents
//! the configured admin token, or when the request is local: loopback peer,
//! loopback-only forwarding headers, and no foreign browser `Origin`.

use std::net::{IpAddr, SocketAddr};

use axum::http::{header::ORIGIN, HeaderMap, HeaderValue};

pub const ADMIN_TOKEN_HEADER: &str = "x-admin-token";

const CLIENT_IP_HEADERS: [&str; 4] = ["x-forwarded-for", "x-real-ip", "cf-connecting-ip", "x-client-ip"];

pub fn is_authorized(peer: Option<SocketAddr>, headers: &HeaderMap, admin_token: Option<&str>) -> bool {
    let token_matches = admin_token.is_some_and(|expected| {
        headers
            .get(ADMIN_TOKEN_HEADER)
            .and_then(|value| value.to_str().ok())
            .is_some_and(|presented| presented == expected)
    });
    token_matches || is_local_request(peer, headers)
}

fn is_local_request(peer: Option<SocketAddr>, headers: &HeaderMap) -> bool {
    // Without connection info the peer is unknown, which is not local.
    let Some(peer) = peer else {
        return false;
    };
    if !peer.ip().is_loopback() {
        return false;
    }

    let forwarded_local = CLIENT_IP_HEADERS
        .iter()
        .flat_map(|name| headers.get_all(*name))
        .all(|value| all_tokens_loopback(value, |token| Some(token)))
        && headers
            .get_all("forwarded")
            .iter()
            .all(|value| all_tokens_loopback(value, forwarded_for));

    // A page on another site can still make the local browser POST here.
    let origin_local = headers.get(ORIGIN).map_or(true, is_loopback_origin);

    forwarded_local && origin_local
}

/// Every address in a comma-separated header value is loopback. Unreadable
/// values and entries without an address count as foreign.
fn all_tokens_loopback(value: &HeaderValue, pick: impl Fn(&str) -> Option<&str>) -> bool {
    let Ok(raw) = value.to_str() else {
        return false;
    };
    raw.split(',')
        .all(|entry| pick(entry).and_then(parse_ip).is_some_and(|ip| ip.is_loopback()))
}

/// The `for=` parameter of one `Forwarded` element.
fn forwarded_for(entry: &str) -> Option<&str> {
    entry.split(';').find_map(|segment| {
        let segment = segment.trim();
        segment
            .get(..4)
            .filter(|prefix| prefix.eq_ignore_ascii_case("for="))
            .map(|_| &segment[4..])
    })
}

fn parse_ip(token: &str) -> Option<IpAddr> {
    let token = token.trim().trim_matches('"');
    if let Ok(ip) = token.parse::<IpAddr>() {
        return Some(ip);
    }
    if let Ok(addr) = token.parse::<SocketAddr>() {
        return Some(addr.ip());
    }
    // `[::1]` without a port.
    token
        .strip_prefix('[')
        .and_then(|rest| rest.strip_suffix(']'))
        .and_then(|inner| inner.parse().ok())
}

fn is_loopback_origin(origin: &HeaderValue) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    let Some((_, authority)) = origin.split_once("://") else {
        return false;
    };
    let host = if let Some(rest) = authority.strip_prefix('[') {
        rest.split(']').next().unwrap_or_default()
    } else {
        authority.split(':').next().unwrap_or_default()
    };
    host.eq_ignore_ascii_case("localhost") || host.parse::<IpAddr>().is_ok_and(|ip| ip.is_loopback())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn loopback() -> Option<SocketAddr> {
        Some(SocketAddr::from(([127, 0, 0, 1], 51000)))
    }

    fn headers(pairs: &[(&'static str, &'static str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.append(*name, HeaderValue::from_static(value));
        }
        map
    }

    #[test]
    fn direct_loopback_caller_is_local() {
        assert!(is_authorized(loopback(), &HeaderMap::new(), None));
        assert!(is_authorized(
            Some("[::1]:4000".parse().expect("addr")),
            &headers(&[("origin", "http://localhost:8080")]),
            None
        ));
    }

    #[test]
    fn unknown_or_remote_peer_is_rejected() {
        assert!(!is_authorized(None, &HeaderMap::new(), None));
        assert!(!is_authorized(
            Some(SocketAddr::from(([203, 0, 113, 9], 443))),
            &HeaderMap::new(),
            None
        ));
    }

    #[test]
    fn proxied_remote_client_is_rejected() {
        assert!(!is_authorized(loopback(), &headers(&[("x-forwarded-for", "198.51.100.7, 127.0.0.1")]), None));
        assert!(!is_authorized(loopback(), &headers(&[("forwarded", "for=198.51.100.7;proto=https")]), None));
        assert!(!is_authorized(loopback(), &headers(&[("forwarded", "proto=https")]), None));
        assert!(is_authorized(loopback(), &headers(&[("forwarded", "for=\"[::1]:8080\"")]), None));
        assert!(is_authorized(loopback(), &headers(&[("x-real-ip", "127.0.0.1")]), None));
    }

    #[test]
    fn foreign_origin_is_rejected_even_from_loopback() {
        assert!(!is_authorized(loopback(), &headers(&[("origin", "https://evil.example")]), None));
        assert!(!is_authorized(loopback(), &headers(&[("origin", "null")]), None));
        assert!(!is_authorized(loopback(), &headers(&[("origin", "http://localhost.evil.example")]), None));
    }

    #[test]
    fn admin_token_admits_any_caller() {
        let remote = Some(SocketAddr::from(([203, 0, 113, 9], 443)));
        let with_token = headers(&[(ADMIN_TOKEN_HEADER, "s3cret")]);
        assert!(is_authorized(remote, &with_token, Some("s3cret")));
        assert!(!is_authorized(remote, &with_token, Some("other")));
        assert!(!is_authorized(remote, &with_token, None));
    }
}
