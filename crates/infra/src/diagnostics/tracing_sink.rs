// crates/infra/src/diagnostics/tracing_sink.rs
use slide_access_ports::diagnostics::{DenialNotice, DiagnosticSink};
use slide_access_shared_kernel::Result;

/// Sends denial messages to the `tracing` subscriber at WARN level.
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingDiagnostics;

impl DiagnosticSink for TracingDiagnostics {
    fn on_denied(&self, notice: &DenialNotice) -> Result<()> {
        tracing::warn!(
            slide = %notice.slide,
            visitor = %notice.visitor,
            kind = %notice.kind,
            "{}",
            notice.message
        );
        Ok(())
    }
}
