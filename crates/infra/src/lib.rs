// crates/infra/src/lib.rs
#![allow(clippy::multiple_crate_versions)]

pub mod diagnostics;

pub use diagnostics::{ConsoleDiagnostics, SilentDiagnostics, TracingDiagnostics};
