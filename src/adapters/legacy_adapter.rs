use crate::core::legacy::LegacyComponent;
use crate::domain::model::DiagnosticEvent;
use crate::domain::ports::{DiagnosticSink, Target};

/// Presents a [`LegacyComponent`] through the [`Target`] capability.
///
/// The wrapped component is owned and never handed back out, so callers can
/// only reach it through `invoke_target`.
pub struct LegacyAdapter<L: DiagnosticSink, S: DiagnosticSink> {
    legacy: LegacyComponent<L>,
    sink: S,
}

impl<L: DiagnosticSink, S: DiagnosticSink> LegacyAdapter<L, S> {
    pub fn new(legacy: LegacyComponent<L>, sink: S) -> Self {
        Self { legacy, sink }
    }
}

impl<L: DiagnosticSink, S: DiagnosticSink> Target for LegacyAdapter<L, S> {
    fn invoke_target(&self) {
        tracing::debug!("adapter translating invoke_target -> invoke_legacy");
        self.sink.emit(DiagnosticEvent::AdapterTranslating);
        self.legacy.invoke_legacy();
    }
}
