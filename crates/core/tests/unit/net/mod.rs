//! Unit tests for the echo demo.

/// Loopback server round trips.
pub mod echo;
