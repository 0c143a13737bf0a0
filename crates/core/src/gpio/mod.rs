//! GPIO line control.
//!
//! This module drives single GPIO lines through the GPIO character device
//! (`/dev/gpiochipN`). It performs:
//! 1. **Chip Access:** Opens a chip device and requests line handles via the
//!    v1 ioctl ABI.
//! 2. **Input:** Requests a line as input and reads its current value.
//! 3. **Output:** Requests a line as output with an initial value, then
//!    releases the handle.
//!
//! Line-handle file descriptors are owned values closed on every exit path.

/// Kernel uapi structures and ioctl request codes.
pub mod uapi;

use std::fs::File;
use std::io;
use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use crate::common::error::GpioError;

/// Direction of a GPIO line request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Direction {
    /// Input: read the line's current value.
    In,
    /// Output: drive the line to a value.
    Out,
}

impl FromStr for Direction {
    type Err = String;

    /// Parses `"in"` or `"out"` (case-insensitive).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "in" => Ok(Self::In),
            "out" => Ok(Self::Out),
            other => Err(format!("direction must be 'in' or 'out', got '{other}'")),
        }
    }
}

/// Label reported to the kernel as the line consumer.
const CONSUMER_LABEL: &[u8] = b"sysprobe";

/// An open GPIO chip character device.
#[derive(Debug)]
pub struct Chip {
    file: File,
    path: PathBuf,
}

impl Chip {
    /// Opens a GPIO chip device read-only.
    ///
    /// # Arguments
    ///
    /// * `path` - Chip device path (e.g. `/dev/gpiochip0`).
    ///
    /// # Errors
    ///
    /// [`GpioError::ChipUnavailable`] if the device cannot be opened.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, GpioError> {
        let path = path.as_ref();
        let file = File::open(path).map_err(GpioError::ChipUnavailable)?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }

    /// Returns the chip device path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Requests a single-line handle from the kernel.
    ///
    /// The returned fd owns the handle and releases the line when dropped.
    fn request_handle(
        &self,
        line: u32,
        flags: u32,
        default_value: u8,
    ) -> Result<OwnedFd, GpioError> {
        let mut req = uapi::GpioHandleRequest::default();
        req.lineoffsets[0] = line;
        req.flags = flags;
        req.default_values[0] = default_value;
        req.consumer_label[..CONSUMER_LABEL.len()].copy_from_slice(CONSUMER_LABEL);
        req.lines = 1;

        // SAFETY: the chip fd is valid for the lifetime of `self.file` and
        // `req` is a properly initialized gpiohandle_request.
        let rc = unsafe {
            libc::ioctl(
                self.file.as_raw_fd(),
                uapi::GPIO_GET_LINEHANDLE_IOCTL as libc::c_ulong,
                &raw mut req,
            )
        };
        if rc < 0 {
            return Err(GpioError::RequestFailed {
                line,
                source: io::Error::last_os_error(),
            });
        }

        // SAFETY: on success the kernel placed a fresh, owned fd in req.fd.
        Ok(unsafe { OwnedFd::from_raw_fd(req.fd) })
    }

    /// Requests `line` as input and reads its current value.
    ///
    /// # Arguments
    ///
    /// * `line` - Chip-relative line offset.
    ///
    /// # Errors
    ///
    /// [`GpioError::RequestFailed`] if the handle request is rejected,
    /// [`GpioError::IoFailure`] if reading the value fails. The handle is
    /// released on both paths.
    pub fn read_line(&self, line: u32) -> Result<u8, GpioError> {
        let handle = self.request_handle(line, uapi::GPIOHANDLE_REQUEST_INPUT, 0)?;

        let mut data = uapi::GpioHandleData::default();
        // SAFETY: `handle` is a valid line-handle fd and `data` matches the
        // gpiohandle_data layout the ioctl writes into.
        let rc = unsafe {
            libc::ioctl(
                handle.as_raw_fd(),
                uapi::GPIOHANDLE_GET_LINE_VALUES_IOCTL as libc::c_ulong,
                &raw mut data,
            )
        };
        if rc < 0 {
            return Err(GpioError::IoFailure(io::Error::last_os_error()));
        }
        Ok(data.values[0])
    }

    /// Requests `line` as output driven to `value`, then releases the
    /// handle, leaving the line configured as the original tool does.
    ///
    /// # Arguments
    ///
    /// * `line` - Chip-relative line offset.
    /// * `value` - Initial output value; must be 0 or 1.
    ///
    /// # Errors
    ///
    /// [`GpioError::InvalidValue`] for values other than 0/1 (checked
    /// before any request), [`GpioError::RequestFailed`] if the kernel
    /// rejects the handle request.
    pub fn drive_line(&self, line: u32, value: u64) -> Result<(), GpioError> {
        if value > 1 {
            return Err(GpioError::InvalidValue(value));
        }
        let handle = self.request_handle(line, uapi::GPIOHANDLE_REQUEST_OUTPUT, value as u8)?;
        drop(handle);
        Ok(())
    }
}
