//! Bowling test support utilities
//!
//! Shared helpers for the `bowling` unit and integration tests. Currently this
//! is only the unified logging initialization.

pub mod logging;
