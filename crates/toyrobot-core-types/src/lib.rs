//! Core types shared across the toy robot crates
//!
//! - **Correlation types**: RequestId for tagging one command invocation
//! - **Schema constants**: Canonical field keys and event names used by
//!   the logging macros

pub mod correlation;
pub mod schema;

pub use correlation::RequestId;
