use std::collections::HashMap;

use super::*;

fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn from_lookup_defaults() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[])).unwrap();
    assert_eq!(cfg.bind, SocketAddr::from(([0, 0, 0, 0], DEFAULT_PORT)));
    assert_eq!(cfg.api_upstream, None);
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS));
}

#[test]
fn from_lookup_reads_port_and_bind_addr() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("PORT", "8080"), ("BIND_ADDR", "127.0.0.1")])).unwrap();
    assert_eq!(cfg.bind, SocketAddr::from(([127, 0, 0, 1], 8080)));
}

#[test]
fn from_lookup_rejects_bad_port() {
    let err = ServerConfig::from_lookup(lookup_from(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "PORT", value: "http".to_owned() });
}

#[test]
fn from_lookup_rejects_bad_bind_addr() {
    let err = ServerConfig::from_lookup(lookup_from(&[("BIND_ADDR", "localhost")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "BIND_ADDR", .. }));
}

#[test]
fn from_lookup_trims_upstream_trailing_slash() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "https://api.example.com/")])).unwrap();
    assert_eq!(cfg.api_upstream.as_deref(), Some("https://api.example.com"));
}

#[test]
fn from_lookup_blank_upstream_is_none() {
    let cfg = ServerConfig::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "  ")])).unwrap();
    assert_eq!(cfg.api_upstream, None);
}

#[test]
fn from_lookup_rejects_upstream_without_scheme() {
    let err = ServerConfig::from_lookup(lookup_from(&[("API_UPSTREAM_URL", "api.example.com")])).unwrap_err();
    assert_eq!(err, ConfigError::Invalid { var: "API_UPSTREAM_URL", value: "api.example.com".to_owned() });
}

#[test]
fn from_lookup_rejects_zero_timeout() {
    let err = ServerConfig::from_lookup(lookup_from(&[("API_PROXY_TIMEOUT_SECS", "0")])).unwrap_err();
    assert!(matches!(err, ConfigError::Invalid { var: "API_PROXY_TIMEOUT_SECS", .. }));
}

#[test]
fn config_error_display_names_variable() {
    let err = ConfigError::Invalid { var: "PORT", value: "x".to_owned() };
    assert_eq!(err.to_string(), "invalid PORT: \"x\"");
}
