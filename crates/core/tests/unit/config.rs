//! # Configuration Tests
//!
//! Verifies the default configuration and JSON overrides.

use std::io::Write;

use pretty_assertions::assert_eq;

use sysprobe_core::Config;

/// The default configuration matches the documented baseline.
#[test]
fn defaults() {
    let config = Config::default();
    assert_eq!(config.mem.device, "/dev/mem");
    assert_eq!(config.net.bind_addr, "0.0.0.0");
    assert_eq!(config.net.tcp_port, 7000);
    assert_eq!(config.net.udp_port, 7001);
    assert_eq!(config.net.buffer_size, 1024);
}

/// A partial JSON document overrides only the fields it names.
#[test]
fn partial_json_overrides() {
    let config = Config::from_json(r#"{"net": {"tcp_port": 9000}}"#).expect("valid json");
    assert_eq!(config.net.tcp_port, 9000);
    assert_eq!(config.net.udp_port, 7001);
    assert_eq!(config.mem.device, "/dev/mem");
}

/// An empty document yields the defaults.
#[test]
fn empty_json_is_all_defaults() {
    let config = Config::from_json("{}").expect("valid json");
    assert_eq!(config, Config::default());
}

/// Malformed JSON is rejected.
#[test]
fn malformed_json_rejected() {
    assert!(Config::from_json("{net:").is_err());
}

/// Loading from a file round-trips through the filesystem.
#[test]
fn load_from_file() {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    write!(
        file,
        r#"{{"mem": {{"device": "/dev/fake-mem"}}, "net": {{"buffer_size": 4096}}}}"#
    )
    .expect("write config");

    let config = Config::load(file.path()).expect("load config");
    assert_eq!(config.mem.device, "/dev/fake-mem");
    assert_eq!(config.net.buffer_size, 4096);
    assert_eq!(config.net.tcp_port, 7000);
}

/// A missing file surfaces an I/O error.
#[test]
fn missing_file_is_io_error() {
    assert!(Config::load("/nonexistent/sysprobe.json").is_err());
}
