// crates/infra/src/diagnostics.rs
//! [`DiagnosticSink`](slide_access_ports::diagnostics::DiagnosticSink) adapters.

pub mod console;
pub mod silent;
pub mod tracing_sink;

pub use console::ConsoleDiagnostics;
pub use silent::SilentDiagnostics;
pub use tracing_sink::TracingDiagnostics;
