//! # Ports
//!
//! Interface definitions for external dependencies.
//!
//! - [`diagnostics`]: where denial messages are delivered
//!
//! These ports allow the domain and application layers to remain
//! independent of specific implementations.

// crates/ports/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;
