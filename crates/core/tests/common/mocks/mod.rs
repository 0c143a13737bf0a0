//! Mock implementations of system components for testing.


pub use memdev::MockMemDevice;
