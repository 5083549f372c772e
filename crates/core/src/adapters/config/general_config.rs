use chrono_tz::Tz;
use error_stack::report;

use super::app_config::ConfigError;

pub const DEFAULT_TIMEZONE: &str = "Europe/Berlin";

#[derive(serde::Deserialize, Debug, Clone)]
pub struct GeneralConfig {
    /// IANA timezone name used for the sidebar clock.
    #[serde(default = "default_timezone")]
    pub timezone: String,
}

fn default_timezone() -> String {
    DEFAULT_TIMEZONE.to_string()
}

impl Default for GeneralConfig {
    fn default() -> Self {
        GeneralConfig {
            timezone: default_timezone(),
        }
    }
}

impl GeneralConfig {
    pub fn tz(&self) -> error_stack::Result<Tz, ConfigError> {
        self.timezone
            .parse::<Tz>()
            .map_err(|_| report!(ConfigError::InvalidTimezone(self.timezone.clone())))
    }
}
