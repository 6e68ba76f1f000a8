use crate::domain::model::DiagnosticEvent;
use crate::domain::ports::DiagnosticSink;

/// Pre-existing component whose interface cannot change. It knows nothing
/// about [`Target`](crate::domain::ports::Target).
#[derive(Debug, Clone)]
pub struct LegacyComponent<S: DiagnosticSink> {
    sink: S,
}

impl<S: DiagnosticSink> LegacyComponent<S> {
    pub fn new(sink: S) -> Self {
        Self { sink }
    }

    pub fn invoke_legacy(&self) {
        tracing::debug!("legacy component executing");
        self.sink.emit(DiagnosticEvent::LegacyExecuted);
    }
}
