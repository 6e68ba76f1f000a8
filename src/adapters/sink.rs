use crate::domain::model::{DiagnosticEvent, Locale, OutputFormat};
use crate::domain::ports::DiagnosticSink;
use std::cell::{Cell, RefCell};
use std::io::{self, Write};
use std::rc::Rc;

/// Prints one line per event to stdout.
///
/// Once a write fails (typically a closed pipe) the sink goes quiet; clones
/// share that state.
#[derive(Debug, Clone, Default)]
pub struct ConsoleSink {
    locale: Locale,
    format: OutputFormat,
    closed: Rc<Cell<bool>>,
}

impl ConsoleSink {
    pub fn new(locale: Locale, format: OutputFormat) -> Self {
        Self {
            locale,
            format,
            closed: Rc::new(Cell::new(false)),
        }
    }

    pub fn is_closed(&self) -> bool {
        self.closed.get()
    }

    /// Writes `event` to `out`, or does nothing once a previous write failed.
    pub fn write_event<W: Write>(&self, out: &mut W, event: DiagnosticEvent) {
        if self.closed.get() {
            return;
        }
        if let Err(e) = writeln!(out, "{}", self.render_line(event)) {
            tracing::warn!("stdout closed, dropping remaining diagnostics: {}", e);
            self.closed.set(true);
        }
    }

    pub fn render_line(&self, event: DiagnosticEvent) -> String {
        match self.format {
            OutputFormat::Text => event.message(self.locale).to_string(),
            OutputFormat::Json => {
                let rendered = event.render(self.locale);
                match serde_json::to_string(&rendered) {
                    Ok(line) => line,
                    Err(e) => {
                        tracing::warn!("failed to serialize {:?}, falling back to text: {}", event, e);
                        rendered.message
                    }
                }
            }
        }
    }
}

impl DiagnosticSink for ConsoleSink {
    fn emit(&self, event: DiagnosticEvent) {
        self.write_event(&mut io::stdout().lock(), event);
    }
}

/// Records events in emission order. Clones share the same buffer.
#[derive(Debug, Clone, Default)]
pub struct MemorySink {
    events: Rc<RefCell<Vec<DiagnosticEvent>>>,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn events(&self) -> Vec<DiagnosticEvent> {
        self.events.borrow().clone()
    }

    pub fn len(&self) -> usize {
        self.events.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.events.borrow().is_empty()
    }

    /// Drains the buffer.
    pub fn take(&self) -> Vec<DiagnosticEvent> {
        std::mem::take(&mut *self.events.borrow_mut())
    }
}

impl DiagnosticSink for MemorySink {
    fn emit(&self, event: DiagnosticEvent) {
        self.events.borrow_mut().push(event);
    }
}

/// Forwards to an inner sink and counts what passed through.
#[derive(Debug, Clone)]
pub struct CountingSink<S> {
    inner: S,
    count: Rc<Cell<usize>>,
}

impl<S: DiagnosticSink> CountingSink<S> {
    pub fn new(inner: S) -> Self {
        Self {
            inner,
            count: Rc::new(Cell::new(0)),
        }
    }

    pub fn count(&self) -> usize {
        self.count.get()
    }
}

impl<S: DiagnosticSink> DiagnosticSink for CountingSink<S> {
    fn emit(&self, event: DiagnosticEvent) {
        self.count.set(self.count.get() + 1);
        tracing::trace!(role = %event.role(), seq = self.count.get(), "diagnostic emitted");
        self.inner.emit(event);
    }
}
