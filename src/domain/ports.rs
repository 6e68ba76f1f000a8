use crate::domain::model::DiagnosticEvent;

/// The capability a client depends on.
pub trait Target {
    fn invoke_target(&self);
}

impl<T: Target + ?Sized> Target for &T {
    fn invoke_target(&self) {
        (**self).invoke_target()
    }
}

impl<T: Target + ?Sized> Target for Box<T> {
    fn invoke_target(&self) {
        (**self).invoke_target()
    }
}

/// Destination for diagnostic events. Emitting never fails.
pub trait DiagnosticSink {
    fn emit(&self, event: DiagnosticEvent);
}

impl<S: DiagnosticSink + ?Sized> DiagnosticSink for &S {
    fn emit(&self, event: DiagnosticEvent) {
        (**self).emit(event)
    }
}
