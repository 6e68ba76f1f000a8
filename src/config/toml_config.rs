use crate::config::DemoSettings;
use crate::domain::model::{Locale, OutputFormat};
use crate::utils::error::Result;
use serde::Deserialize;
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TomlConfig {
    pub demo: Option<DemoSection>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct DemoSection {
    pub locale: Option<Locale>,
    pub format: Option<OutputFormat>,
    pub repeat: Option<usize>,
}

impl TomlConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        tracing::debug!("loading configuration from {}", path.display());
        let content = fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: TomlConfig = toml::from_str(content)?;
        Ok(config)
    }

    /// Fills unset keys from [`DemoSettings::default`].
    pub fn into_settings(self) -> DemoSettings {
        let defaults = DemoSettings::default();
        let section = self.demo.unwrap_or_default();
        DemoSettings {
            locale: section.locale.unwrap_or(defaults.locale),
            format: section.format.unwrap_or(defaults.format),
            repeat: section.repeat.unwrap_or(defaults.repeat),
        }
    }
}
