#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Rules engine for Rang, the four-seat partnership trick-taking game with a
//! two-part deal, an open auction, and a concealed trump suit.

pub mod ai;
pub mod config;
pub mod domain;
pub mod error;
pub mod errors;
pub mod services;
pub mod telemetry;

// Re-exports for public API
pub use config::{EngineConfig, SeatKind};
pub use error::AppError;
pub use errors::{DomainError, ErrorCode, ValidationKind};
pub use services::game_flow::{ActionOutcome, GameFlow, PendingAction, SeatController};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    engine_test_support::logging::init();
}
