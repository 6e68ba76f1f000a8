pub mod toml_config;

use crate::domain::model::{Locale, OutputFormat};
use crate::utils::error::Result;
use crate::utils::validation::{validate_range, Validate};

pub const MIN_REPEAT: usize = 1;
pub const MAX_REPEAT: usize = 1000;

/// Resolved settings for one demo run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoSettings {
    pub locale: Locale,
    pub format: OutputFormat,
    pub repeat: usize,
}

impl Default for DemoSettings {
    fn default() -> Self {
        Self {
            locale: Locale::En,
            format: OutputFormat::Text,
            repeat: 1,
        }
    }
}

impl Validate for DemoSettings {
    fn validate(&self) -> Result<()> {
        validate_range("repeat", self.repeat, MIN_REPEAT, MAX_REPEAT)
    }
}

#[cfg(feature = "cli")]
#[derive(Debug, Clone, clap::Parser)]
#[command(name = "adapter-demo")]
#[command(about = "Shows a client reaching a legacy component through an adapter")]
pub struct CliConfig {
    /// Path to a TOML file with a [demo] table
    #[arg(short, long)]
    pub config: Option<String>,

    #[arg(long, value_enum)]
    pub locale: Option<Locale>,

    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// How many times the client runs its operation
    #[arg(long)]
    pub repeat: Option<usize>,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON on stderr")]
    pub log_json: bool,
}

#[cfg(feature = "cli")]
impl CliConfig {
    /// Defaults, then the TOML file if given, then flags.
    pub fn resolve(&self) -> Result<DemoSettings> {
        let mut settings = match &self.config {
            Some(path) => {
                crate::utils::validation::validate_path("config", path)?;
                toml_config::TomlConfig::from_file(path)?.into_settings()
            }
            None => DemoSettings::default(),
        };

        if let Some(locale) = self.locale {
            settings.locale = locale;
        }
        if let Some(format) = self.format {
            settings.format = format;
        }
        if let Some(repeat) = self.repeat {
            settings.repeat = repeat;
        }

        settings.validate()?;
        Ok(settings)
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_no_arguments_resolve_to_defaults() {
        let cli = CliConfig::parse_from(["adapter-demo"]);
        assert_eq!(cli.resolve().unwrap(), DemoSettings::default());
    }

    #[test]
    fn test_flags_override_defaults() {
        let cli = CliConfig::parse_from([
            "adapter-demo",
            "--locale",
            "es",
            "--format",
            "json",
            "--repeat",
            "3",
        ]);
        let settings = cli.resolve().unwrap();
        assert_eq!(settings.locale, Locale::Es);
        assert_eq!(settings.format, OutputFormat::Json);
        assert_eq!(settings.repeat, 3);
    }

    #[test]
    fn test_zero_repeat_rejected() {
        let cli = CliConfig::parse_from(["adapter-demo", "--repeat", "0"]);
        assert!(cli.resolve().is_err());
    }
}
