//! # Error Reporting Tests
//!
//! Verifies the one-line diagnostics produced for each terminal error kind.

use std::error::Error;
use std::io;

use sysprobe_core::common::error::{AccessError, GpioError};

/// An invalid width names the rejected bit count and the supported set.
#[test]
fn invalid_width_message() {
    let e = AccessError::InvalidWidth(12);
    let msg = e.to_string();
    assert!(msg.contains("12"), "message was: {msg}");
    assert!(msg.contains("8, 16, 32, 64"), "message was: {msg}");
}

/// An out-of-range value names the value, the width, and the maximum.
#[test]
fn value_out_of_range_message() {
    let e = AccessError::ValueOutOfRange {
        value: 0x100,
        width: 8,
        max: 0xFF,
    };
    let msg = e.to_string();
    assert!(msg.contains("0x100"), "message was: {msg}");
    assert!(msg.contains("8 bits"), "message was: {msg}");
    assert!(msg.contains("0xFF"), "message was: {msg}");
}

/// Resource errors carry the underlying OS error as their source.
#[test]
fn resource_errors_have_sources() {
    let e = AccessError::AccessDenied(io::Error::from(io::ErrorKind::PermissionDenied));
    assert!(e.source().is_some());

    let e = AccessError::MappingFailure {
        base: 0x1000,
        source: io::Error::from(io::ErrorKind::InvalidInput),
    };
    assert!(e.to_string().contains("0x1000"));
    assert!(e.source().is_some());
}

/// GPIO request failures name the line that was requested.
#[test]
fn gpio_request_failed_names_line() {
    let e = GpioError::RequestFailed {
        line: 17,
        source: io::Error::from(io::ErrorKind::InvalidInput),
    };
    assert!(e.to_string().contains("17"));
}

/// Output values other than 0/1 are reported as invalid.
#[test]
fn gpio_invalid_value_message() {
    let e = GpioError::InvalidValue(2);
    assert!(e.to_string().contains("must be 0 or 1"));
}
