use anyhow::Result;
use config::builder::DefaultState;
use config::{Config, ConfigBuilder, FileFormat};
use serde::Deserialize;

use crate::error::{CoreError, CoreResult};

#[derive(Debug, Clone, Deserialize)]
pub struct Settings {
    pub logging: LoggingConfig,
    pub output: OutputConfig,
    pub codec: CodecConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Clone, Deserialize)]
pub struct OutputConfig {
    pub format: OutputFormat,
}

#[derive(Debug, Clone, Deserialize)]
pub struct CodecConfig {
    /// Property name used when rendering a full content line.
    pub property_name: String,
}

impl CodecConfig {
    /// ## Summary
    /// Checks that the configured property name is a legal iCalendar name.
    ///
    /// ## Errors
    /// Returns `CoreError::InvalidConfiguration` if the name is empty or
    /// contains characters other than ASCII alphanumerics and `-`.
    pub fn validate(&self) -> CoreResult<()> {
        let name = self.property_name.as_str();
        if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '-') {
            return Err(CoreError::InvalidConfiguration(format!(
                "codec.property_name '{name}' is not a valid property name"
            )));
        }
        Ok(())
    }
}

impl Settings {
    fn builder() -> Result<ConfigBuilder<DefaultState>> {
        Ok(Config::builder()
            .set_default("logging.level", "info")?
            .set_default("output.format", "text")?
            .set_default("codec.property_name", "RDATE")?)
    }

    /// ## Summary
    /// Loads configuration from defaults, environment variables prefixed with
    /// `KUNAI_`, and an optional `kunai.toml` in the working directory.
    ///
    /// ## Errors
    /// Returns an error if building, deserializing, or validating the
    /// configuration fails.
    pub fn load() -> Result<Self> {
        let settings = Self::builder()?
            .add_source(
                config::Environment::with_prefix("KUNAI")
                    .prefix_separator("_")
                    .separator("__")
                    .ignore_empty(true)
                    .try_parsing(true),
            )
            .add_source(config::File::with_name("kunai.toml").required(false))
            .build()?
            .try_deserialize::<Settings>()?;
        settings.codec.validate()?;
        Ok(settings)
    }

    /// ## Summary
    /// Loads configuration from defaults overlaid with a TOML document.
    ///
    /// ## Errors
    /// Returns an error if the TOML is malformed or the result is invalid.
    pub fn from_toml_str(toml: &str) -> Result<Self> {
        let settings = Self::builder()?
            .add_source(config::File::from_str(toml, FileFormat::Toml))
            .build()?
            .try_deserialize::<Settings>()?;
        settings.codec.validate()?;
        Ok(settings)
    }
}

/// ## Summary
/// Loads configuration from the `.env` file, environment variables, and
/// `kunai.toml`.
///
/// ## Errors
/// Returns an error if loading or deserializing the configuration fails.
pub fn load_config() -> Result<Settings> {
    if let Err(e) = dotenvy::dotenv() {
        tracing::trace!(error = %e, "No .env file loaded");
    }

    Settings::load()
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
