//! Common utilities and types used throughout the diagnostic tools.
//!
//! This module provides the building blocks shared across the tools:
//! 1. **Address Types:** A strong type for physical addresses with page math.
//! 2. **Constants:** Page size and related masks.
//! 3. **Access Widths:** The supported 8/16/32/64-bit access sizes with
//!    little-endian encoding helpers.
//! 4. **Error Handling:** Terminal error kinds for the memory and GPIO tools.

/// Physical address type and page arithmetic.
pub mod addr;

/// Page-size constants.
pub mod constants;

/// Error types for the memory and GPIO tools.
pub mod error;

/// Supported memory access widths.
pub mod width;

pub use addr::PhysAddr;
pub use constants::{PAGE_OFFSET_MASK, PAGE_SHIFT, PAGE_SIZE};
pub use error::{AccessError, GpioError};
pub use width::AccessWidth;
