use crate::adapters::legacy_adapter::LegacyAdapter;
use crate::adapters::sink::{ConsoleSink, CountingSink};
use crate::config::DemoSettings;
use crate::core::client::Client;
use crate::core::legacy::LegacyComponent;
use crate::domain::model::RunSummary;
use crate::domain::ports::DiagnosticSink;

/// Wires legacy component, adapter and client together and drives the client.
pub struct DemoRunner {
    settings: DemoSettings,
}

impl DemoRunner {
    pub fn new(settings: DemoSettings) -> Self {
        Self { settings }
    }

    /// Runs against stdout using the configured locale and format.
    pub fn run(&self) -> RunSummary {
        let sink = ConsoleSink::new(self.settings.locale, self.settings.format);
        self.run_with(sink)
    }

    pub fn run_with<S: DiagnosticSink + Clone>(&self, sink: S) -> RunSummary {
        let counting = CountingSink::new(sink);

        let legacy = LegacyComponent::new(counting.clone());
        let adapter = LegacyAdapter::new(legacy, counting.clone());
        let client = Client::new(adapter, counting.clone());

        tracing::info!(repeat = self.settings.repeat, "running adapter demo");
        for _ in 0..self.settings.repeat {
            client.run_operation();
        }

        let summary = RunSummary {
            operations: self.settings.repeat,
            events: counting.count(),
        };
        tracing::info!(
            operations = summary.operations,
            events = summary.events,
            "adapter demo finished"
        );
        summary
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::sink::MemorySink;
    use crate::domain::model::DiagnosticEvent;

    #[test]
    fn test_default_run_emits_three_events() {
        let sink = MemorySink::new();
        let summary = DemoRunner::new(DemoSettings::default()).run_with(sink.clone());

        assert_eq!(summary, RunSummary { operations: 1, events: 3 });
        assert_eq!(sink.events(), DiagnosticEvent::SEQUENCE.to_vec());
    }

    #[test]
    fn test_repeat_multiplies_sequence() {
        let settings = DemoSettings {
            repeat: 4,
            ..DemoSettings::default()
        };
        let sink = MemorySink::new();
        let summary = DemoRunner::new(settings).run_with(sink.clone());

        assert_eq!(summary.events, 12);
        for chunk in sink.events().chunks(3) {
            assert_eq!(chunk, DiagnosticEvent::SEQUENCE);
        }
    }
}
