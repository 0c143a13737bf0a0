//! Unit tests for the library components.

/// Tests for common types (addresses, widths, errors).
pub mod common;
/// Tests for the configuration system.
pub mod config;
/// Tests for the GPIO uapi layer.
pub mod gpio;
/// Tests for the echo demo.
pub mod net;
