use super::*;

use std::collections::HashMap;

fn lookup(vars: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
    let map: HashMap<String, String> = vars.iter().map(|(k, v)| ((*k).to_owned(), (*v).to_owned())).collect();
    move |key| map.get(key).cloned()
}

#[test]
fn defaults_apply_when_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[])).unwrap();
    assert_eq!(
        cfg,
        HostConfig {
            port: DEFAULT_PORT,
            api_upstream: DEFAULT_API_UPSTREAM.to_owned(),
            proxy_timeout: Duration::from_secs(DEFAULT_PROXY_TIMEOUT_SECS),
        }
    );
}

#[test]
fn blank_values_count_as_unset() {
    let cfg = HostConfig::from_lookup(lookup(&[("PORT", "  "), ("API_UPSTREAM", "")])).unwrap();
    assert_eq!(cfg.port, DEFAULT_PORT);
    assert_eq!(cfg.api_upstream, DEFAULT_API_UPSTREAM);
}

#[test]
fn overrides_are_parsed() {
    let cfg = HostConfig::from_lookup(lookup(&[
        ("PORT", "8080"),
        ("API_UPSTREAM", "https://api.example.test/"),
        ("PROXY_TIMEOUT_SECS", "5"),
    ]))
    .unwrap();
    assert_eq!(cfg.port, 8080);
    assert_eq!(cfg.api_upstream, "https://api.example.test");
    assert_eq!(cfg.proxy_timeout, Duration::from_secs(5));
}

#[test]
fn malformed_port_is_rejected() {
    assert_eq!(
        HostConfig::from_lookup(lookup(&[("PORT", "eighty")])),
        Err(ConfigError::Invalid { var: "PORT", value: "eighty".to_owned() })
    );
    assert!(HostConfig::from_lookup(lookup(&[("PORT", "70000")])).is_err());
}

#[test]
fn upstream_without_http_scheme_is_rejected() {
    for raw in ["localhost:5000", "ftp://api", "http://", "https:///"] {
        assert!(HostConfig::from_lookup(lookup(&[("API_UPSTREAM", raw)])).is_err(), "{raw:?}");
    }
}

#[test]
fn zero_timeout_is_rejected() {
    assert_eq!(
        HostConfig::from_lookup(lookup(&[("PROXY_TIMEOUT_SECS", "0")])),
        Err(ConfigError::Invalid { var: "PROXY_TIMEOUT_SECS", value: "0".to_owned() })
    );
}

#[test]
fn error_message_names_the_variable() {
    let err = HostConfig::from_lookup(lookup(&[("PORT", "x")])).unwrap_err();
    assert_eq!(err.to_string(), "invalid PORT: \"x\"");
}
