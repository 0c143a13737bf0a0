//! Page-size constants.
//!
//! This module defines the memory-page constants used for mapping physical
//! memory. It includes:
//! 1. **Page Size:** The fixed 4 KiB granule mapped per access.
//! 2. **Masks and Shifts:** Helpers for splitting an address into a
//!    page-aligned base and an in-page offset.

/// Page size in bytes (4 KiB). One page is mapped per access.
pub const PAGE_SIZE: u64 = 4096;

/// Number of bits to shift to convert between bytes and pages.
pub const PAGE_SHIFT: u64 = 12;

/// Mask for extracting the in-page offset from an address.
pub const PAGE_OFFSET_MASK: u64 = PAGE_SIZE - 1;
