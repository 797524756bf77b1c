// crates/infra/src/diagnostics/console.rs
use std::io::{self, Stderr, Stdout, Write};
use std::sync::{Mutex, PoisonError};

use slide_access_ports::diagnostics::{DenialNotice, DiagnosticSink};
use slide_access_shared_kernel::{ErrorContext, Result};

/// Prints each denial message as its own line.
pub struct ConsoleDiagnostics<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleDiagnostics<Stdout> {
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl ConsoleDiagnostics<Stderr> {
    /// Keeps stdout clean for machine-readable reports.
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write + Send> ConsoleDiagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out: Mutex::new(out) }
    }

    /// Returns the wrapped writer.
    pub fn into_inner(self) -> W {
        self.out.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<W: Write + Send> DiagnosticSink for ConsoleDiagnostics<W> {
    fn on_denied(&self, notice: &DenialNotice) -> Result<()> {
        let mut out = self.out.lock().unwrap_or_else(PoisonError::into_inner);
        writeln!(out, "{}", notice.message)
            .and_then(|()| out.flush())
            .with_context(|| format!("writing diagnostic for '{}'", notice.visitor))
    }
}

#[cfg(test)]
mod tests {
    use slide_access_domain::DenialKind;

    use super::*;

    fn notice(message: &str) -> DenialNotice {
        DenialNotice {
            slide: "Kids slide".into(),
            visitor: "Max".into(),
            kind: DenialKind::RequirementsNotMet,
            message: message.into(),
        }
    }

    #[test]
    fn writes_one_line_per_notice() {
        let sink = ConsoleDiagnostics::new(Vec::new());
        sink.on_denied(&notice("first")).unwrap();
        sink.on_denied(&notice("second")).unwrap();

        let written = String::from_utf8(sink.into_inner()).unwrap();
        assert_eq!(written, "first\nsecond\n");
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn write_failures_are_reported_with_context() {
        let sink = ConsoleDiagnostics::new(BrokenPipe);
        let err = sink.on_denied(&notice("lost")).unwrap_err();
        assert!(err.to_string().starts_with("writing diagnostic for 'Max'"));
    }
}
