//! # Use Cases
//!
//! Application-level orchestration logic.
//!
//! - [`checker`]: runs access checks and routes denials to a diagnostic sink
//! - [`dto`]: Data transfer objects for use case boundaries
//!
//! Use cases depend on both domain and ports, but not on infrastructure.

#![allow(clippy::multiple_crate_versions)]

pub mod checker;
pub mod dto;

pub use checker::SlideAccessChecker;
pub use dto::{AccessOutcome, AccessReport, CheckAccessInput};
