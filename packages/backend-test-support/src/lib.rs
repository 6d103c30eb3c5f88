//! Backend test support utilities
//!
//! Shared by the engine's integration tests and the simulator: unified
//! logging initialization, proptest configuration and unique test names.

pub mod logging;
pub mod proptest_prelude;
pub mod unique_helpers;
