//! Kernel GPIO character-device ABI (v1 line handles).
//!
//! This module mirrors the `linux/gpio.h` uapi structures and ioctl request
//! codes needed to request a line handle and read line values. It provides:
//! 1. **Structures:** `#[repr(C)]` layouts matching the kernel exactly.
//! 2. **Request Codes:** `_IOWR`-encoded ioctl numbers computed from the
//!    structure sizes.
//! 3. **Flags:** Input/output direction bits for handle requests.

use std::os::raw::c_int;

/// Maximum number of lines per handle request (`GPIOHANDLES_MAX`).
pub const GPIOHANDLES_MAX: usize = 64;

/// Request the line as input (`GPIOHANDLE_REQUEST_INPUT`).
pub const GPIOHANDLE_REQUEST_INPUT: u32 = 1 << 0;

/// Request the line as output (`GPIOHANDLE_REQUEST_OUTPUT`).
pub const GPIOHANDLE_REQUEST_OUTPUT: u32 = 1 << 1;

/// Mirror of `struct gpiohandle_request`.
///
/// Passed to [`GPIO_GET_LINEHANDLE_IOCTL`]; on success the kernel fills
/// `fd` with a new line-handle file descriptor the caller must close.
#[repr(C)]
#[derive(Debug)]
pub struct GpioHandleRequest {
    /// Chip-relative offsets of the requested lines.
    pub lineoffsets: [u32; GPIOHANDLES_MAX],
    /// Direction and configuration flags.
    pub flags: u32,
    /// Initial values for output requests.
    pub default_values: [u8; GPIOHANDLES_MAX],
    /// Label identifying the consumer, NUL-terminated.
    pub consumer_label: [u8; 32],
    /// Number of lines requested.
    pub lines: u32,
    /// Line-handle fd returned by the kernel.
    pub fd: c_int,
}

impl Default for GpioHandleRequest {
    /// Returns a zeroed request, as the C tools `memset` theirs.
    fn default() -> Self {
        // SAFETY: all fields are plain integers/arrays; all-zero is a valid
        // representation.
        unsafe { std::mem::zeroed() }
    }
}

/// Mirror of `struct gpiohandle_data`.
#[repr(C)]
#[derive(Debug)]
pub struct GpioHandleData {
    /// One value slot per line on the handle.
    pub values: [u8; GPIOHANDLES_MAX],
}

impl Default for GpioHandleData {
    fn default() -> Self {
        Self {
            values: [0; GPIOHANDLES_MAX],
        }
    }
}

// The kernel's _IOC encoding: dir:2 | size:14 | type:8 | nr:8, with the
// direction field in the top bits.
const IOC_NRSHIFT: u32 = 0;
const IOC_TYPESHIFT: u32 = 8;
const IOC_SIZESHIFT: u32 = 16;
const IOC_DIRSHIFT: u32 = 30;
const IOC_READ: u32 = 2;
const IOC_WRITE: u32 = 1;

/// Encodes an `_IOWR` ioctl request number.
const fn iowr(ty: u32, nr: u32, size: usize) -> u64 {
    (((IOC_READ | IOC_WRITE) as u64) << IOC_DIRSHIFT)
        | ((size as u64) << IOC_SIZESHIFT)
        | ((ty as u64) << IOC_TYPESHIFT)
        | ((nr as u64) << IOC_NRSHIFT)
}

/// `GPIO_GET_LINEHANDLE_IOCTL`: request a line handle from a chip fd.
pub const GPIO_GET_LINEHANDLE_IOCTL: u64 =
    iowr(0xB4, 0x03, std::mem::size_of::<GpioHandleRequest>());

/// `GPIOHANDLE_GET_LINE_VALUES_IOCTL`: read line values from a handle fd.
pub const GPIOHANDLE_GET_LINE_VALUES_IOCTL: u64 =
    iowr(0xB4, 0x08, std::mem::size_of::<GpioHandleData>());
