//! Error types for the diagnostic tools.
//!
//! This module defines the terminal error kinds surfaced by the memory and
//! GPIO tools. It provides:
//! 1. **Validation Errors:** Detected before any system resource is touched.
//! 2. **Resource Errors:** Device open, mapping, and I/O failures detected
//!    during an operation; the scoped mapping is always released first.
//! 3. **Reporting:** One-line diagnostics via `Display` for the error stream.
//!
//! No error is retried; every kind ends the current invocation.

use std::io;

use thiserror::Error;

/// Errors produced by a physical memory access operation.
#[derive(Debug, Error)]
pub enum AccessError {
    /// The requested width is not one of the supported sizes.
    ///
    /// Detected while parsing the request, before the memory device is
    /// opened. The associated value is the rejected bit count.
    #[error("invalid width: {0} bits (supported: 8, 16, 32, 64)")]
    InvalidWidth(u32),

    /// The value to write does not fit within the requested width.
    ///
    /// Detected before any memory operation occurs; no mutation happens.
    #[error("value {value:#X} does not fit in {width} bits (max {max:#X})")]
    ValueOutOfRange {
        /// The rejected value.
        value: u64,
        /// The requested width in bits.
        width: u32,
        /// The maximum representable value at that width.
        max: u64,
    },

    /// The raw memory device is absent or could not be opened.
    #[error("memory device unavailable: {0}")]
    DeviceUnavailable(#[source] io::Error),

    /// Opening the raw memory device was denied (insufficient privilege).
    #[error("access to memory device denied: {0}")]
    AccessDenied(#[source] io::Error),

    /// Mapping a page of the device failed after it was opened.
    #[error("failed to map page at {base:#X}: {source}")]
    MappingFailure {
        /// Page-aligned base address of the failed mapping.
        base: u64,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Reading or writing through an established mapping failed.
    #[error("memory I/O failed: {0}")]
    IoFailure(#[source] io::Error),
}

/// Errors produced by the GPIO line tool.
#[derive(Debug, Error)]
pub enum GpioError {
    /// The GPIO chip device is absent or could not be opened.
    #[error("gpiochip unavailable: {0}")]
    ChipUnavailable(#[source] io::Error),

    /// The line-handle request ioctl was rejected by the kernel.
    #[error("line handle request for line {line} failed: {source}")]
    RequestFailed {
        /// The requested line offset on the chip.
        line: u32,
        /// Underlying OS error.
        #[source]
        source: io::Error,
    },

    /// Reading line values through an acquired handle failed.
    #[error("gpio I/O failed: {0}")]
    IoFailure(#[source] io::Error),

    /// An output value other than 0 or 1 was supplied.
    #[error("invalid line value {0} (must be 0 or 1)")]
    InvalidValue(u64),
}
