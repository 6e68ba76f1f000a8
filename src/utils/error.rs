use thiserror::Error;

#[derive(Error, Debug)]
pub enum DemoError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("TOML parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Invalid value '{value}' for {field}: {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

impl DemoError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            DemoError::IoError(e) => format!("Could not read a file: {}", e),
            DemoError::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            DemoError::InvalidConfigValueError { field, reason, .. } => {
                format!("Setting '{}' is invalid: {}", field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            DemoError::IoError(_) => "Check that the --config path exists and is readable",
            DemoError::TomlError(_) => {
                "Only a [demo] table with locale, format and repeat keys is accepted"
            }
            DemoError::InvalidConfigValueError { .. } => "Run with --help to see accepted values",
        }
    }
}

pub type Result<T> = std::result::Result<T, DemoError>;
