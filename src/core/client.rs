use crate::domain::model::DiagnosticEvent;
use crate::domain::ports::{DiagnosticSink, Target};

/// Consumer that only knows about the [`Target`] capability.
pub struct Client<T: Target, S: DiagnosticSink> {
    target: T,
    sink: S,
}

impl<T: Target, S: DiagnosticSink> Client<T, S> {
    pub fn new(target: T, sink: S) -> Self {
        Self { target, sink }
    }

    pub fn run_operation(&self) {
        tracing::debug!("client delegating to target");
        self.sink.emit(DiagnosticEvent::ClientDelegating);
        self.target.invoke_target();
    }
}
