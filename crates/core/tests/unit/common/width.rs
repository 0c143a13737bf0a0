//! # Access Width Tests
//!
//! This module contains unit tests for the `AccessWidth` type: parsing from
//! bit counts, range limits, and little-endian encoding.

use pretty_assertions::assert_eq;
use rstest::rstest;

use sysprobe_core::common::error::AccessError;
use sysprobe_core::common::width::AccessWidth;

/// Verifies that each supported bit count parses to the matching width.
#[rstest]
#[case(8, AccessWidth::W8)]
#[case(16, AccessWidth::W16)]
#[case(32, AccessWidth::W32)]
#[case(64, AccessWidth::W64)]
fn try_from_bits_supported(#[case] bits: u32, #[case] expected: AccessWidth) {
    assert_eq!(AccessWidth::try_from_bits(bits).expect("supported"), expected);
}

/// Verifies that unsupported bit counts are rejected with `InvalidWidth`.
#[rstest]
#[case(0)]
#[case(1)]
#[case(12)]
#[case(24)]
#[case(128)]
fn try_from_bits_rejected(#[case] bits: u32) {
    match AccessWidth::try_from_bits(bits) {
        Err(AccessError::InvalidWidth(b)) => assert_eq!(b, bits),
        other => panic!("expected InvalidWidth, got {other:?}"),
    }
}

/// Verifies byte counts and hex digit counts per width.
#[rstest]
#[case(AccessWidth::W8, 1, 2)]
#[case(AccessWidth::W16, 2, 4)]
#[case(AccessWidth::W32, 4, 8)]
#[case(AccessWidth::W64, 8, 16)]
fn bytes_and_hex_digits(#[case] width: AccessWidth, #[case] bytes: usize, #[case] digits: usize) {
    assert_eq!(width.bytes(), bytes);
    assert_eq!(width.hex_digits(), digits);
}

/// Verifies the per-width maximum values and the `fits` boundary.
#[test]
fn max_value_boundaries() {
    assert_eq!(AccessWidth::W8.max_value(), 0xFF);
    assert_eq!(AccessWidth::W16.max_value(), 0xFFFF);
    assert_eq!(AccessWidth::W32.max_value(), 0xFFFF_FFFF);
    assert_eq!(AccessWidth::W64.max_value(), u64::MAX);

    assert!(AccessWidth::W8.fits(0xFF));
    assert!(!AccessWidth::W8.fits(0x100));
    assert!(AccessWidth::W16.fits(0xFFFF));
    assert!(!AccessWidth::W16.fits(0x1_0000));
}

/// Verifies little-endian encoding produces exactly width/8 bytes with the
/// low byte first.
#[test]
fn encode_is_little_endian() {
    assert_eq!(AccessWidth::W16.encode(0x1234), vec![0x34, 0x12]);
    assert_eq!(AccessWidth::W32.encode(0xDEAD_BEEF), vec![0xEF, 0xBE, 0xAD, 0xDE]);
    assert_eq!(AccessWidth::W8.encode(0x7F), vec![0x7F]);
}

/// Verifies decode mirrors encode for a representative value per width.
#[test]
fn decode_mirrors_encode() {
    let value = 0xCAFE;
    let bytes = AccessWidth::W16.encode(value);
    assert_eq!(AccessWidth::W16.decode(&bytes), value);
}

/// The CLI default width is 32 bits.
#[test]
fn default_width_is_32() {
    assert_eq!(AccessWidth::default(), AccessWidth::W32);
}
