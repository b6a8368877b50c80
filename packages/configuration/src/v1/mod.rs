//! Version `1` of the configuration.
//!
//! ```toml
//! [logging]
//! threshold = "info"
//! style = "default"
//!
//! [http_api]
//! bind_address = "127.0.0.1:7070"
//! ```
//!
//! All sections and fields are optional. Missing values take the defaults.
pub mod http_api;
pub mod logging;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};

use self::http_api::HttpApi;
use self::logging::Logging;
use crate::{Error, Info, CONFIG_OVERRIDE_PREFIX, CONFIG_OVERRIDE_SEPARATOR};

/// Core configuration for the application.
#[derive(Serialize, Deserialize, PartialEq, Eq, Debug, Clone, Default)]
pub struct Configuration {
    /// Logging configuration.
    #[serde(default)]
    pub logging: Logging,

    /// The HTTP API configuration.
    #[serde(default)]
    pub http_api: HttpApi,
}

impl Configuration {
    /// Loads the configuration from the sources described in `info`, on top
    /// of the default values.
    ///
    /// # Errors
    ///
    /// Will return `Err` if a source has invalid TOML or values that do not
    /// match the configuration types.
    pub fn load(info: &Info) -> Result<Configuration, Error> {
        let mut figment = Figment::from(Serialized::defaults(Configuration::default())).merge(Toml::file(&info.config_toml_path));

        if let Some(config_toml) = &info.config_toml {
            figment = figment.merge(Toml::string(config_toml));
        }

        let figment = figment.merge(Env::prefixed(CONFIG_OVERRIDE_PREFIX).split(CONFIG_OVERRIDE_SEPARATOR));

        let config: Configuration = figment.extract()?;

        Ok(config)
    }

    /// Encodes the configuration to TOML.
    ///
    /// # Errors
    ///
    /// Will return `Err` if the configuration cannot be encoded.
    pub fn to_toml(&self) -> Result<String, Error> {
        Ok(toml::to_string(self)?)
    }
}
