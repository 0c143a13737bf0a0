//! TCP/UDP echo demo.
//!
//! This module implements the interactive echo client/server demo. It
//! contains:
//! 1. **Protocol:** The fixed two-command vocabulary ("ping", "time") with
//!    an "Unknown command" fallback.
//! 2. **Servers:** A one-client TCP echo server and a datagram UDP echo
//!    server.
//! 3. **Clients:** Interactive senders with a background receive thread,
//!    driven by an explicit per-operation running flag rather than
//!    process-wide state.
//!
//! This is a toy demo: no framing, retries, backpressure, or ordering
//! guarantees.

/// Request/response vocabulary.
pub mod proto;
/// TCP echo server and client.
pub mod tcp;
/// UDP echo server and client.
pub mod udp;

pub use tcp::TcpEcho;
pub use udp::UdpEcho;

/// Default receive buffer size in bytes for both transports.
pub const DEFAULT_BUFFER_SIZE: usize = 1024;
