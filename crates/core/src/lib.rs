//! Low-level Linux diagnostic library.
//!
//! This crate implements the logic behind the `sysprobe` command-line tools:
//! 1. **Memory:** Single-shot physical memory read/write through `/dev/mem`
//!    with a page-scoped RAII mapping.
//! 2. **GPIO:** Single-line control through the GPIO character device using
//!    the v1 line-handle ioctl ABI.
//! 3. **Net:** A minimal TCP/UDP echo client/server demo with a fixed
//!    two-command vocabulary.
//! 4. **Common:** Address math, access widths, and error types shared by the
//!    tools.
//!
//! Every tool is one operation per process: open, use, close. Nothing
//! persists across invocations.

/// Common types and constants (addresses, access widths, errors).
pub mod common;
/// Tool configuration (defaults, JSON overrides).
pub mod config;
/// GPIO line control (chip handle, kernel uapi structures).
pub mod gpio;
/// Physical memory access (device backends, the access operation).
pub mod mem;
/// TCP/UDP echo demo (protocol, servers, clients).
pub mod net;

/// Root configuration type; use `Config::default()` or load from JSON.
pub use crate::config::Config;
/// Error type for physical memory access operations.
pub use crate::common::error::AccessError;
/// Physical memory access entry point; see [`mem::access`].
pub use crate::mem::{AccessReport, AccessRequest, access};
