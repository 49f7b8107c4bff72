use super::*;

use std::collections::HashMap;

fn lookup(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = pairs.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_when_unset() {
    let config = ServerConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(config, ServerConfig::default());
    assert_eq!(config.socket_addr().to_string(), "0.0.0.0:3000");
}

#[test]
fn reads_host_and_port() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", "127.0.0.1"), ("PORT", "8080")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "127.0.0.1:8080");
}

#[test]
fn blank_values_fall_back_to_defaults() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", " "), ("PORT", "")])).unwrap();
    assert_eq!(config, ServerConfig::default());
}

#[test]
fn accepts_ipv6_host() {
    let config = ServerConfig::from_lookup(lookup(&[("HOST", "::1")])).unwrap();
    assert_eq!(config.socket_addr().to_string(), "[::1]:3000");
}

#[test]
fn rejects_malformed_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "http")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("http".to_owned()));
}

#[test]
fn rejects_out_of_range_port() {
    let err = ServerConfig::from_lookup(lookup(&[("PORT", "70000")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidPort("70000".to_owned()));
}

#[test]
fn rejects_hostname() {
    let err = ServerConfig::from_lookup(lookup(&[("HOST", "localhost")])).unwrap_err();
    assert_eq!(err, ConfigError::InvalidHost("localhost".to_owned()));
    assert!(err.to_string().contains("expected an IP address"));
}
