//! Compiler-style diagnostic printing.

use std::io::{self, Stderr, Write};

use companion_codegen::pipeline::{Diagnostic, DiagnosticSink};

/// Prints each diagnostic as it arrives:
///
/// ```text
/// error: CustomLombok can not be used on Shape
///   --> com::example::Shape
/// ```
pub struct ConsoleDiagnostics<W: Write = Stderr> {
    out: W,
    errors: usize,
}

impl ConsoleDiagnostics {
    pub fn stderr() -> Self {
        Self::new(io::stderr())
    }
}

impl<W: Write> ConsoleDiagnostics<W> {
    pub fn new(out: W) -> Self {
        Self { out, errors: 0 }
    }

    /// Number of error diagnostics printed so far.
    pub fn errors(&self) -> usize {
        self.errors
    }

    #[cfg(test)]
    fn into_inner(self) -> W {
        self.out
    }

    fn print(&mut self, diagnostic: &Diagnostic) -> io::Result<()> {
        writeln!(self.out, "{}: {}", diagnostic.severity, diagnostic.message)?;
        if let Some(element) = &diagnostic.element {
            writeln!(self.out, "  --> {}", element)?;
        }
        Ok(())
    }
}

impl<W: Write> DiagnosticSink for ConsoleDiagnostics<W> {
    fn report(&mut self, diagnostic: Diagnostic) {
        if diagnostic.severity.is_error() {
            self.errors += 1;
        }
        // Still counted toward the exit status
        if let Err(err) = self.print(&diagnostic) {
            tracing::warn!(
                error = %err,
                message = %diagnostic.message,
                "failed to print diagnostic"
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prints_severity_and_location() {
        let mut console = ConsoleDiagnostics::new(Vec::new());
        console.report(Diagnostic::note("Processing User").at("com::example::User"));
        console.report(Diagnostic::error("CustomLombok can not be used on Shape"));

        assert_eq!(console.errors(), 1);
        let text = String::from_utf8(console.into_inner()).unwrap();
        assert_eq!(
            text,
            "note: Processing User\n  --> com::example::User\nerror: CustomLombok can not be used on Shape\n"
        );
    }

    struct ClosedPipe;

    impl Write for ClosedPipe {
        fn write(&mut self, _buf: &[u8]) -> io::Result<usize> {
            Err(io::Error::from(io::ErrorKind::BrokenPipe))
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_write_failure_still_counts_errors() {
        let mut console = ConsoleDiagnostics::new(ClosedPipe);
        let diagnostic = Diagnostic::error("FATAL ERROR: disk full").at("User");

        assert_eq!(
            console.print(&diagnostic).unwrap_err().kind(),
            io::ErrorKind::BrokenPipe
        );
        console.report(diagnostic);
        assert_eq!(console.errors(), 1);
    }
}
