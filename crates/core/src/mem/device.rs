//! Memory device backends.
//!
//! This module provides a safe wrapper around raw page mapping of the
//! privileged physical-memory device. It supplies:
//! 1. **Trait Seam:** `MemDevice`/`PageMapping` so tests can substitute a
//!    fake backing device.
//! 2. **Real Backend:** `DevMem`, which opens `/dev/mem` and maps one page
//!    at a time with `mmap`.
//! 3. **Guaranteed Release:** Mappings are unmapped in `Drop`, so release
//!    happens exactly once on every exit path.

use std::fs::{File, OpenOptions};
use std::io;
use std::os::fd::AsRawFd;
use std::path::{Path, PathBuf};

use crate::common::addr::PhysAddr;
use crate::common::constants::PAGE_SIZE;
use crate::common::error::AccessError;

/// A transient, page-sized view of physical memory.
///
/// The mapping is owned exclusively by the operation that created it and is
/// released unconditionally when the value is dropped.
pub trait PageMapping {
    /// Reads `buf.len()` bytes at the given in-page offset.
    ///
    /// # Errors
    ///
    /// [`AccessError::IoFailure`] if the range does not fit in the page or
    /// the backing store rejects the read.
    fn read_bytes(&self, offset: usize, buf: &mut [u8]) -> Result<(), AccessError>;

    /// Writes `data` at the given in-page offset.
    ///
    /// # Errors
    ///
    /// [`AccessError::IoFailure`] if the range does not fit in the page or
    /// the backing store rejects the write.
    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> Result<(), AccessError>;
}

/// A mappable memory device.
///
/// The real implementation is [`DevMem`]; tests provide fakes through this
/// trait so access logic and release discipline can be verified without
/// privilege.
pub trait MemDevice {
    /// Returns a short name for this device (e.g. `"/dev/mem"`).
    fn name(&self) -> &str;

    /// Acquires a read-write scoped mapping of exactly one page at the
    /// page-aligned `base`.
    ///
    /// # Errors
    ///
    /// [`AccessError::MappingFailure`] (or a backend-specific resource
    /// error) if the page cannot be mapped.
    fn map_page(&mut self, base: PhysAddr) -> Result<Box<dyn PageMapping>, AccessError>;
}

/// The privileged raw physical-memory character device.
///
/// Treated as an opaque resource: opened once, mapped one page at a time,
/// closed when dropped. Its internals (driver, permissions model) are out of
/// scope here.
#[derive(Debug)]
pub struct DevMem {
    file: File,
    path: PathBuf,
}

impl DevMem {
    /// Default path of the raw physical-memory device.
    pub const DEFAULT_PATH: &'static str = "/dev/mem";

    /// Opens the raw memory device read-write.
    ///
    /// # Arguments
    ///
    /// * `path` - Device path, normally [`Self::DEFAULT_PATH`].
    ///
    /// # Errors
    ///
    /// [`AccessError::AccessDenied`] when the open is refused for lack of
    /// privilege, [`AccessError::DeviceUnavailable`] when the device is
    /// absent or otherwise unopenable.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self, AccessError> {
        let path = path.as_ref();
        let file = OpenOptions::new()
            .read(true)
            .write(true)
            .open(path)
            .map_err(|e| match e.kind() {
                io::ErrorKind::PermissionDenied => AccessError::AccessDenied(e),
                _ => AccessError::DeviceUnavailable(e),
            })?;
        Ok(Self {
            file,
            path: path.to_path_buf(),
        })
    }
}

impl MemDevice for DevMem {
    /// Returns the device path.
    fn name(&self) -> &str {
        self.path.to_str().unwrap_or(Self::DEFAULT_PATH)
    }

    /// Maps one page of physical memory at `base` with `MAP_SHARED` and
    /// read-write protection.
    fn map_page(&mut self, base: PhysAddr) -> Result<Box<dyn PageMapping>, AccessError> {
        let len = PAGE_SIZE as usize;
        // SAFETY: fd is a valid open file descriptor for the lifetime of
        // `self.file`; length and offset describe one whole page, and the
        // resulting pointer is owned by MmapPage which unmaps it on drop.
        let ptr = unsafe {
            libc::mmap(
                std::ptr::null_mut(),
                len,
                libc::PROT_READ | libc::PROT_WRITE,
                libc::MAP_SHARED,
                self.file.as_raw_fd(),
                base.val() as libc::off_t,
            )
        };

        if ptr == libc::MAP_FAILED {
            return Err(AccessError::MappingFailure {
                base: base.val(),
                source: io::Error::last_os_error(),
            });
        }

        Ok(Box::new(MmapPage {
            ptr: ptr.cast::<u8>(),
            len,
        }))
    }
}

/// One page of physical memory mapped into this process.
struct MmapPage {
    ptr: *mut u8,
    len: usize,
}

impl MmapPage {
    /// Bounds-checks an access range against the page.
    fn check(&self, offset: usize, len: usize) -> Result<(), AccessError> {
        if offset.checked_add(len).is_none_or(|end| end > self.len) {
            return Err(AccessError::IoFailure(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("range {offset}+{len} exceeds page size {}", self.len),
            )));
        }
        Ok(())
    }
}

impl PageMapping for MmapPage {
    fn read_bytes(&self, offset: usize, buf: &mut [u8]) -> Result<(), AccessError> {
        self.check(offset, buf.len())?;
        // SAFETY: range is bounds-checked above and the mapping is live for
        // the lifetime of `self`.
        unsafe {
            std::ptr::copy_nonoverlapping(self.ptr.add(offset), buf.as_mut_ptr(), buf.len());
        }
        Ok(())
    }

    fn write_bytes(&mut self, offset: usize, data: &[u8]) -> Result<(), AccessError> {
        self.check(offset, data.len())?;
        // SAFETY: range is bounds-checked above and the mapping is writable
        // (PROT_WRITE, MAP_SHARED).
        unsafe {
            std::ptr::copy_nonoverlapping(data.as_ptr(), self.ptr.add(offset), data.len());
        }
        Ok(())
    }
}

impl Drop for MmapPage {
    /// Unmaps the page. Runs on every exit path of the owning operation.
    fn drop(&mut self) {
        // SAFETY: ptr/len came from a successful mmap of exactly this range.
        unsafe {
            let _ = libc::munmap(self.ptr.cast(), self.len);
        }
    }
}
