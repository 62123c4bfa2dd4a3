use crate::error::Error;

/// Side channel for failures the controller swallows. Must not fail.
#[cfg_attr(test, mockall::automock)]
pub trait DiagnosticSink: Send + Sync {
    fn report(&self, context: &str, error: &Error);
}

/// Default sink: emits a `tracing` error event.
#[derive(Clone, Copy, Default, Debug)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn report(&self, context: &str, error: &Error) {
        tracing::error!("{}", report_line(context, error));
    }
}

/// `context: message`, with the cause chain of wrapped errors inlined.
fn report_line(context: &str, error: &Error) -> String {
    format!("{context}: {error:#}")
}
