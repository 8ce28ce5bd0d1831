use super::errors::Diagnostic;

/// Receives diagnostics as the scanner finds them. Reporting never stops the
/// scan.
pub trait DiagnosticSink {
    fn report(&mut self, diagnostic: Diagnostic);
}

impl DiagnosticSink for Vec<Diagnostic> {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.push(diagnostic);
    }
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &mut S {
    fn report(&mut self, diagnostic: Diagnostic) {
        (**self).report(diagnostic);
    }
}

/// Forwards diagnostics to the `log` facade instead of keeping them.
#[derive(Debug, Default, Clone, Copy)]
pub struct LogSink {
    reported: usize,
}

impl LogSink {
    pub fn new() -> Self {
        LogSink::default()
    }

    pub fn reported(&self) -> usize {
        self.reported
    }
}

impl DiagnosticSink for LogSink {
    fn report(&mut self, diagnostic: Diagnostic) {
        self.reported += 1;
        log::warn!(
            "{}: {} ({})",
            diagnostic.get_error_name(),
            diagnostic,
            diagnostic.get_position().file
        );
    }
}
