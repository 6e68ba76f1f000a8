use serde::{Deserialize, Serialize};
use std::fmt;

/// Which of the cooperating roles produced a diagnostic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Client,
    Adapter,
    Legacy,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Role::Client => "client",
            Role::Adapter => "adapter",
            Role::Legacy => "legacy",
        };
        f.write_str(name)
    }
}

/// Language used when rendering diagnostics.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Locale {
    #[default]
    En,
    Es,
}

/// How a console sink renders each event.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

/// Status lines emitted while a call travels client -> adapter -> legacy.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DiagnosticEvent {
    ClientDelegating,
    AdapterTranslating,
    LegacyExecuted,
}

impl DiagnosticEvent {
    /// The sequence a single `run_operation` call produces.
    pub const SEQUENCE: [DiagnosticEvent; 3] = [
        DiagnosticEvent::ClientDelegating,
        DiagnosticEvent::AdapterTranslating,
        DiagnosticEvent::LegacyExecuted,
    ];

    pub fn role(self) -> Role {
        match self {
            DiagnosticEvent::ClientDelegating => Role::Client,
            DiagnosticEvent::AdapterTranslating => Role::Adapter,
            DiagnosticEvent::LegacyExecuted => Role::Legacy,
        }
    }

    pub fn message(self, locale: Locale) -> &'static str {
        match (self, locale) {
            (DiagnosticEvent::ClientDelegating, Locale::En) => {
                "Client: calling target method on adapter"
            }
            (DiagnosticEvent::ClientDelegating, Locale::Es) => {
                "Cliente: llamando al método objetivo del adaptador"
            }
            (DiagnosticEvent::AdapterTranslating, Locale::En) => "Adapter: target method called",
            (DiagnosticEvent::AdapterTranslating, Locale::Es) => {
                "Adaptador: método objetivo llamado"
            }
            (DiagnosticEvent::LegacyExecuted, Locale::En) => "Existing method called",
            (DiagnosticEvent::LegacyExecuted, Locale::Es) => "Método existente llamado",
        }
    }

    pub fn render(self, locale: Locale) -> RenderedEvent {
        RenderedEvent {
            role: self.role(),
            message: self.message(locale).to_string(),
        }
    }
}

/// Serializable form of an event, used for JSON output.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedEvent {
    pub role: Role,
    pub message: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub operations: usize,
    pub events: usize,
}
