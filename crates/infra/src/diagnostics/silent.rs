// crates/infra/src/diagnostics/silent.rs
use slide_access_ports::diagnostics::{DenialNotice, DiagnosticSink};
use slide_access_shared_kernel::Result;

/// Drops every notice.
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentDiagnostics;

impl DiagnosticSink for SilentDiagnostics {
    fn on_denied(&self, _notice: &DenialNotice) -> Result<()> {
        Ok(())
    }
}
