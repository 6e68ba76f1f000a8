pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::legacy_adapter::LegacyAdapter;
pub use adapters::sink::{ConsoleSink, CountingSink, MemorySink};
pub use config::DemoSettings;
pub use crate::core::{client::Client, legacy::LegacyComponent, runner::DemoRunner};
pub use domain::model::{DiagnosticEvent, Locale, OutputFormat, Role, RunSummary};
pub use domain::ports::{DiagnosticSink, Target};
pub use utils::error::{DemoError, Result};
