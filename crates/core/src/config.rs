//! Configuration for the diagnostic tools.
//!
//! This module defines the configuration structures used to parameterize the
//! tools. It provides:
//! 1. **Defaults:** Baseline values (device path, echo ports, buffer size).
//! 2. **Structures:** Per-tool config for the memory accessor and the echo
//!    demo.
//! 3. **Loading:** Optional JSON overrides; every field falls back to its
//!    default when absent.

use std::fs;
use std::io;
use std::path::Path;

use serde::Deserialize;

/// Default configuration constants.
mod defaults {
    /// Path of the privileged raw physical-memory device.
    pub const MEM_DEVICE: &str = "/dev/mem";

    /// Address the echo servers bind to.
    pub const BIND_ADDR: &str = "0.0.0.0";

    /// Default TCP echo port.
    pub const TCP_PORT: u16 = 7000;

    /// Default UDP echo port.
    pub const UDP_PORT: u16 = 7001;

    /// Receive buffer size in bytes for both echo transports.
    pub const BUFFER_SIZE: usize = 1024;
}

/// Root configuration for all tools.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Config {
    /// Memory accessor configuration.
    pub mem: MemConfig,
    /// Echo demo configuration.
    pub net: NetConfig,
}

/// Memory accessor configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct MemConfig {
    /// Path of the raw memory device to open.
    pub device: String,
}

/// Echo demo configuration.
#[derive(Clone, Debug, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct NetConfig {
    /// Address the servers bind to.
    pub bind_addr: String,
    /// TCP echo port.
    pub tcp_port: u16,
    /// UDP echo port.
    pub udp_port: u16,
    /// Receive buffer size in bytes.
    pub buffer_size: usize,
}

impl Default for MemConfig {
    fn default() -> Self {
        Self {
            device: defaults::MEM_DEVICE.to_string(),
        }
    }
}

impl Default for NetConfig {
    fn default() -> Self {
        Self {
            bind_addr: defaults::BIND_ADDR.to_string(),
            tcp_port: defaults::TCP_PORT,
            udp_port: defaults::UDP_PORT,
            buffer_size: defaults::BUFFER_SIZE,
        }
    }
}

impl Config {
    /// Parses a configuration from a JSON string.
    ///
    /// # Arguments
    ///
    /// * `json` - JSON document; missing fields take their defaults.
    ///
    /// # Errors
    ///
    /// Returns the underlying `serde_json` error on malformed input.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Loads a configuration from a JSON file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the JSON file.
    ///
    /// # Errors
    ///
    /// I/O errors reading the file, or parse errors mapped to
    /// `InvalidData`.
    pub fn load<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let text = fs::read_to_string(path)?;
        Self::from_json(&text).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
    }
}
