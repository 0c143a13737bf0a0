//! Physical address type.
//!
//! This module defines a strong type for physical addresses to prevent
//! accidental mixing with plain integers. It provides the following:
//! 1. **Type Safety:** Distinguishes raw hardware addresses at compile time.
//! 2. **Page Math:** Splits an address into a page-aligned base and an
//!    in-page offset for mapping.
//! 3. **Alignment:** Checks natural alignment for a given access width.

use std::fmt;

use super::constants::PAGE_OFFSET_MASK;
use super::width::AccessWidth;

/// An address into the raw hardware memory space, distinct from a process's
/// virtual address space.
///
/// Physical addresses are mapped through the privileged raw-memory device one
/// page at a time; `page_base` and `page_offset` give the mapping coordinates.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub struct PhysAddr(pub u64);

impl PhysAddr {
    /// Creates a new physical address from a raw 64-bit value.
    ///
    /// # Arguments
    ///
    /// * `addr` - The raw 64-bit address value.
    ///
    /// # Returns
    ///
    /// A new `PhysAddr` instance wrapping the provided address.
    #[inline(always)]
    pub const fn new(addr: u64) -> Self {
        Self(addr)
    }

    /// Returns the raw 64-bit address value.
    #[inline(always)]
    pub const fn val(&self) -> u64 {
        self.0
    }

    /// Returns the page-aligned base address containing this address.
    ///
    /// This is the address rounded down to the nearest multiple of the
    /// system page size (4096 bytes).
    #[inline]
    pub const fn page_base(&self) -> u64 {
        self.0 & !PAGE_OFFSET_MASK
    }

    /// Returns the byte offset of this address within its page.
    ///
    /// The offset is the lower 12 bits of the address (0-4095).
    #[inline]
    pub const fn page_offset(&self) -> u64 {
        self.0 & PAGE_OFFSET_MASK
    }

    /// Returns `true` if the address is naturally aligned for `width`.
    ///
    /// # Arguments
    ///
    /// * `width` - The access width whose natural alignment is checked.
    pub const fn is_aligned(&self, width: AccessWidth) -> bool {
        self.0 % width.bytes() as u64 == 0
    }
}

impl fmt::Display for PhysAddr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:#010X}", self.0)
    }
}

impl From<u64> for PhysAddr {
    fn from(addr: u64) -> Self {
        Self(addr)
    }
}
