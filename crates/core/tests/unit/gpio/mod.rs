//! Unit tests for the GPIO layer.
