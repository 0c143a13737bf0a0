//! Physical memory access.
//!
//! This module implements the single-shot physical memory accessor. It
//! performs:
//! 1. **Validation:** Width and value-range checks before any system
//!    resource is touched.
//! 2. **Mapping:** A page-scoped, RAII-released view of physical memory via
//!    a swappable device backend.
//! 3. **Access:** An optional little-endian write followed by an
//!    unconditional read-back at the in-page offset.
//! 4. **Reporting:** The read-back value in hex, decimal, and binary.
//!
//! Mutating live physical memory is an intentional, irreversible effect
//! outside this tool's control; the caller chooses the addresses.

/// Memory device backends (trait seam and the `/dev/mem` implementation).
pub mod device;

use std::fmt;

use crate::common::addr::PhysAddr;
use crate::common::error::AccessError;
use crate::common::width::AccessWidth;

pub use device::{DevMem, MemDevice, PageMapping};

/// A single physical memory access request.
///
/// Invariant: if `write_value` is present it must fit within `width` bits,
/// or the request is rejected before any memory operation occurs.
#[derive(Clone, Copy, Debug)]
pub struct AccessRequest {
    /// Target physical address.
    pub addr: PhysAddr,
    /// Access width in bits.
    pub width: AccessWidth,
    /// Optional value to write before the read-back.
    pub write_value: Option<u64>,
}

impl AccessRequest {
    /// Builds a request from raw CLI-level inputs.
    ///
    /// # Arguments
    ///
    /// * `address` - Target physical address.
    /// * `width_bits` - Requested width in bits (8, 16, 32, or 64).
    /// * `write_value` - Optional value to write before reading back.
    ///
    /// # Errors
    ///
    /// [`AccessError::InvalidWidth`] for an unsupported width and
    /// [`AccessError::ValueOutOfRange`] for a value that does not fit.
    /// Both are detected here, before any device is opened.
    pub fn new(
        address: u64,
        width_bits: u32,
        write_value: Option<u64>,
    ) -> Result<Self, AccessError> {
        let width = AccessWidth::try_from_bits(width_bits)?;
        let req = Self {
            addr: PhysAddr::new(address),
            width,
            write_value,
        };
        req.validate()?;
        Ok(req)
    }

    /// Checks the value-range invariant.
    ///
    /// # Errors
    ///
    /// [`AccessError::ValueOutOfRange`] if a present `write_value` exceeds
    /// the maximum representable unsigned value for `width`.
    pub fn validate(&self) -> Result<(), AccessError> {
        if let Some(value) = self.write_value {
            if !self.width.fits(value) {
                return Err(AccessError::ValueOutOfRange {
                    value,
                    width: self.width.bits(),
                    max: self.width.max_value(),
                });
            }
        }
        Ok(())
    }
}

/// Outcome of a completed access, carrying everything the CLI reports.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AccessReport {
    /// The accessed physical address.
    pub addr: PhysAddr,
    /// The access width.
    pub width: AccessWidth,
    /// The value written, if the request included one.
    pub written: Option<u64>,
    /// The value read back after any write.
    pub value: u64,
}

impl fmt::Display for AccessReport {
    /// Renders the human-readable report: the performed write (if any),
    /// then the address, width, and read-back value in hexadecimal
    /// (zero-padded to width/4 digits), decimal, and binary.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = self.width.hex_digits();
        if let Some(written) = self.written {
            writeln!(
                f,
                "Write successful: {} = 0x{:0digits$X}",
                self.addr, written
            )?;
        }
        writeln!(f, "Physical Address: {}", self.addr)?;
        writeln!(f, "Width: {}", self.width)?;
        writeln!(f, "Current Value: 0x{:0digits$X} ({})", self.value, self.value)?;
        writeln!(f)?;
        writeln!(f, "Alternative Formats:")?;
        writeln!(f, "  Hex: 0x{:0digits$X}", self.value)?;
        writeln!(f, "  Decimal: {}", self.value)?;
        write!(f, "  Binary: {:#b}", self.value)
    }
}

/// Performs one physical memory access against a device backend.
///
/// Maps the page containing `req.addr`, performs the optional write, always
/// reads back `width/8` bytes at the in-page offset, and returns the report.
/// The page mapping is released exactly once on every exit path, success or
/// failure, by the mapping's destructor.
///
/// An address that is not a multiple of `width/8` bytes is not rejected; a
/// non-fatal alignment warning is emitted to the diagnostic stream and the
/// access proceeds at the literal byte offset requested.
///
/// # Arguments
///
/// * `dev` - The memory device backend to map pages from.
/// * `req` - The validated (or to-be-validated) access request.
///
/// # Errors
///
/// Validation errors before any resource is touched; device, mapping, and
/// I/O errors afterwards. See [`AccessError`].
pub fn access(dev: &mut dyn MemDevice, req: &AccessRequest) -> Result<AccessReport, AccessError> {
    req.validate()?;

    if !req.addr.is_aligned(req.width) {
        tracing::warn!(
            address = %req.addr,
            "address not aligned for {} access",
            req.width
        );
    }

    let base = PhysAddr::new(req.addr.page_base());
    let offset = req.addr.page_offset() as usize;

    // The mapping is scoped to this call; drop releases it on every path.
    let mut page = dev.map_page(base)?;

    if let Some(value) = req.write_value {
        page.write_bytes(offset, &req.width.encode(value))?;
    }

    let mut buf = [0u8; 8];
    page.read_bytes(offset, &mut buf[..req.width.bytes()])?;
    let value = req.width.decode(&buf[..req.width.bytes()]);

    Ok(AccessReport {
        addr: req.addr,
        width: req.width,
        written: req.write_value,
        value,
    })
}
