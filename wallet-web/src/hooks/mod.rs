//! Reusable reactive hooks

pub mod mounted;

pub use mounted::use_is_mounted;
