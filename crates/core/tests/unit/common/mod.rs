//! Unit tests for common types.

/// Physical address page math.
pub mod addr;
/// Error display and classification.
pub mod error;
/// Access width parsing and encoding.
pub mod width;
