use config::{builder::DefaultState, Config, ConfigBuilder, Environment};
use error_stack::{report, ResultExt};
use serde::Deserialize;
use serde_path_to_error::{Deserializer as PathDeserializer, Segment, Track};
use thiserror::Error;

use super::{
    general_config::GeneralConfig, google_config::GoogleConfig, server_config::ServerConfig,
};

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Error reading config source '{0}'")]
    UnreadableSource(String),
    #[error("Invalid config field '{0}'")]
    InvalidField(String),
    #[error("Missing google.service_account_json; the dashboard cannot start without a service account")]
    MissingCredential,
    #[error("Unknown timezone '{0}'")]
    InvalidTimezone(String),
}

#[derive(serde::Deserialize, Debug, Clone, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub general: GeneralConfig,
    #[serde(default)]
    pub google: GoogleConfig,
    #[serde(default)]
    pub server: ServerConfig,
}

impl AppConfig {
    /// Reads the file named by `CONFIG_PATH` (default `Config`, any format the
    /// `config` crate knows) overlaid with `APP__SECTION__KEY` environment
    /// variables.
    pub fn load() -> error_stack::Result<Self, ConfigError> {
        let config_path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "Config".to_string());
        let builder = Config::builder()
            .add_source(config::File::with_name(&config_path).required(false))
            .add_source(Environment::with_prefix("APP").separator("__"));
        Self::from_builder(builder, &config_path)
    }

    fn from_builder(
        builder: ConfigBuilder<DefaultState>,
        origin: &str,
    ) -> error_stack::Result<Self, ConfigError> {
        let config = builder
            .build()
            .change_context_lazy(|| ConfigError::UnreadableSource(origin.to_string()))?;
        let value = config
            .try_deserialize::<serde_json::Value>()
            .change_context_lazy(|| ConfigError::UnreadableSource(origin.to_string()))?;

        use serde::de::IntoDeserializer;
        let mut track = Track::new();
        let path_de = PathDeserializer::new(value.into_deserializer(), &mut track);
        let app_config = match AppConfig::deserialize(path_de) {
            Ok(val) => val,
            Err(e) => {
                let path_str = track
                    .path()
                    .iter()
                    .map(|seg| match seg {
                        Segment::Seq { index } => format!("[{}]", index),
                        Segment::Map { key } => format!(".{}", key),
                        Segment::Enum { variant } => format!("::{}", variant),
                        Segment::Unknown => String::from("<?>"),
                    })
                    .collect::<String>();
                return Err(report!(ConfigError::InvalidField(
                    path_str.trim_start_matches('.').to_string()
                )))
                .attach_printable(e.to_string())
                .attach_printable(format!("while reading '{}'", origin));
            }
        };

        app_config.validate()?;
        Ok(app_config)
    }

    /// Rejects configurations the dashboard cannot run with.
    pub fn validate(&self) -> error_stack::Result<(), ConfigError> {
        if self.google.service_account_json.trim().is_empty() {
            return Err(report!(ConfigError::MissingCredential));
        }
        self.general.tz()?;
        Ok(())
    }
}

#[cfg(test)]
impl AppConfig {
    pub(crate) fn from_toml_str(toml: &str) -> error_stack::Result<Self, ConfigError> {
        let builder =
            Config::builder().add_source(config::File::from_str(toml, config::FileFormat::Toml));
        Self::from_builder(builder, "<inline>")
    }
}
