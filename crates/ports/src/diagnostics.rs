// crates/ports/src/diagnostics.rs
use serde::Serialize;
use slide_access_domain::DenialKind;
use slide_access_shared_kernel::Result;

/// A denied access check, ready to be shown to someone.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DenialNotice {
    pub slide: String,
    pub visitor: String,
    pub kind: DenialKind,
    pub message: String,
}

/// Receives one notice per denied check. Grants produce nothing.
///
/// A failing sink is not a visitor problem: the error propagates to whoever
/// ran the check.
pub trait DiagnosticSink: Send + Sync {
    fn on_denied(&self, notice: &DenialNotice) -> Result<()>;
}
