//! Engine test support utilities
//!
//! Shared by the engine's unit tests and integration tests: one-time logging
//! initialization and the project-wide proptest configuration.

pub mod logging;
pub mod proptest_prelude;
