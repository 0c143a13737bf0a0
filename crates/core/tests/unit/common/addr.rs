//! # Address Arithmetic Tests
//!
//! This module contains unit tests for the `PhysAddr` type. It verifies
//! address construction, page-base and in-page offset calculations, and
//! alignment checks used by the memory accessor.

use sysprobe_core::common::addr::PhysAddr;
use sysprobe_core::common::width::AccessWidth;

/// Tests the creation of a [`PhysAddr`] and verifies that the stored value
/// can be retrieved correctly.
#[test]
fn phys_addr_new_and_val() {
    let pa = PhysAddr::new(0xFEDC_0000);
    assert_eq!(pa.val(), 0xFEDC_0000);
}

/// Tests that a page-aligned address is its own page base with offset zero.
#[test]
fn page_math_aligned_address() {
    // 0x1000 is itself page-aligned
    let pa = PhysAddr::new(0x1000);
    assert_eq!(pa.page_base(), 0x1000);
    assert_eq!(pa.page_offset(), 0);
}

/// Tests that an address within a page splits into the containing page base
/// and the remaining byte offset.
#[test]
fn page_math_offset_within_page() {
    let pa = PhysAddr::new(0x1004);
    assert_eq!(pa.page_base(), 0x1000);
    assert_eq!(pa.page_offset(), 0x4);
}

/// Tests that `page_offset` extracts at most the lower 12 bits.
#[test]
fn page_offset_max_is_0xfff() {
    let pa = PhysAddr::new(0xFFFF_FFFF_FFFF_FFFF);
    assert_eq!(pa.page_offset(), 0xFFF);
    assert_eq!(pa.page_base(), 0xFFFF_FFFF_FFFF_F000);
}

/// Tests that the zero address maps to page zero.
#[test]
fn page_math_zero() {
    let pa = PhysAddr::new(0);
    assert_eq!(pa.page_base(), 0);
    assert_eq!(pa.page_offset(), 0);
}

/// Verifies natural-alignment checks per access width.
#[test]
fn alignment_per_width() {
    let pa = PhysAddr::new(0x1004);
    assert!(pa.is_aligned(AccessWidth::W8));
    assert!(pa.is_aligned(AccessWidth::W16));
    assert!(pa.is_aligned(AccessWidth::W32));
    assert!(!pa.is_aligned(AccessWidth::W64));

    let odd = PhysAddr::new(0x1001);
    assert!(odd.is_aligned(AccessWidth::W8));
    assert!(!odd.is_aligned(AccessWidth::W16));
    assert!(!odd.is_aligned(AccessWidth::W32));
}

/// Verifies the zero-padded hex display used in reports.
#[test]
fn display_is_zero_padded_hex() {
    assert_eq!(PhysAddr::new(0x1000).to_string(), "0x00001000");
}
