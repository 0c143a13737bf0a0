//! Supported memory access widths.
//!
//! This module defines the classification of memory accesses by size. It is
//! used for the following:
//! 1. **Validation:** Rejecting unsupported widths and out-of-range values
//!    before any system resource is touched.
//! 2. **Encoding:** Little-endian conversion between integers and the exact
//!    byte count of the access.
//! 3. **Reporting:** Zero-padded hex rendering of read-back values.

use std::fmt;

use super::error::AccessError;

/// Width of a single memory access in bits.
///
/// Only 8, 16, 32, and 64-bit accesses are supported; any other width is
/// rejected with [`AccessError::InvalidWidth`] during parsing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum AccessWidth {
    /// 8-bit (single byte) access.
    W8,
    /// 16-bit (half-word) access.
    W16,
    /// 32-bit (word) access. The default for the CLI.
    W32,
    /// 64-bit (double-word) access.
    W64,
}

impl AccessWidth {
    /// Parses a width from a bit count.
    ///
    /// # Arguments
    ///
    /// * `bits` - Requested width in bits.
    ///
    /// # Errors
    ///
    /// Returns [`AccessError::InvalidWidth`] for anything other than
    /// 8, 16, 32, or 64. This check runs before any device is opened.
    pub const fn try_from_bits(bits: u32) -> Result<Self, AccessError> {
        match bits {
            8 => Ok(Self::W8),
            16 => Ok(Self::W16),
            32 => Ok(Self::W32),
            64 => Ok(Self::W64),
            other => Err(AccessError::InvalidWidth(other)),
        }
    }

    /// Returns the width in bits.
    pub const fn bits(&self) -> u32 {
        match self {
            Self::W8 => 8,
            Self::W16 => 16,
            Self::W32 => 32,
            Self::W64 => 64,
        }
    }

    /// Returns the width in bytes.
    pub const fn bytes(&self) -> usize {
        (self.bits() / 8) as usize
    }

    /// Returns the number of hex digits needed to print a value of this
    /// width zero-padded (bits / 4).
    pub const fn hex_digits(&self) -> usize {
        (self.bits() / 4) as usize
    }

    /// Returns the maximum unsigned value representable at this width.
    pub const fn max_value(&self) -> u64 {
        match self {
            Self::W8 => u8::MAX as u64,
            Self::W16 => u16::MAX as u64,
            Self::W32 => u32::MAX as u64,
            Self::W64 => u64::MAX,
        }
    }

    /// Returns `true` if `value` fits within this width.
    ///
    /// # Arguments
    ///
    /// * `value` - The candidate value to range-check.
    pub const fn fits(&self, value: u64) -> bool {
        value <= self.max_value()
    }

    /// Encodes `value` in little-endian byte order using exactly
    /// [`Self::bytes`] bytes.
    ///
    /// The caller is responsible for range-checking `value` first; excess
    /// high bytes are truncated.
    pub fn encode(&self, value: u64) -> Vec<u8> {
        value.to_le_bytes()[..self.bytes()].to_vec()
    }

    /// Decodes a little-endian byte slice of exactly [`Self::bytes`] bytes
    /// into an unsigned integer.
    ///
    /// # Panics
    ///
    /// Debug-asserts that `bytes` has the expected length; extra bytes are
    /// ignored, missing bytes read as zero.
    pub fn decode(&self, bytes: &[u8]) -> u64 {
        debug_assert_eq!(bytes.len(), self.bytes());
        let mut raw = [0u8; 8];
        let n = self.bytes().min(bytes.len());
        raw[..n].copy_from_slice(&bytes[..n]);
        u64::from_le_bytes(raw)
    }
}

impl Default for AccessWidth {
    /// The CLI default access width (32 bits).
    fn default() -> Self {
        Self::W32
    }
}

impl fmt::Display for AccessWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-bit", self.bits())
    }
}
