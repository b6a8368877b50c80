//! Configuration data structures for the `clientip` HTTP API.
//!
//! The configuration is loaded from these sources, each one overriding the
//! values of the previous ones:
//!
//! 1. The default values.
//! 2. The TOML file at [`ENV_VAR_CONFIG_TOML_PATH`], or the default path given
//!    by the application. A missing file is ignored.
//! 3. The whole TOML document in [`ENV_VAR_CONFIG_TOML`].
//! 4. Single values in environment variables prefixed with
//!    [`CONFIG_OVERRIDE_PREFIX`], using [`CONFIG_OVERRIDE_SEPARATOR`] between
//!    sections. For example:
//!
//! ```text
//! CLIENTIP_CONFIG_OVERRIDE_HTTP_API__BIND_ADDRESS=0.0.0.0:8080
//! ```
//!
//! This is the default configuration:
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
//! The current version for configuration is [`v1`].
pub mod v1;

use std::env;
use std::panic::Location;

use thiserror::Error;

/// The whole `clientip.toml` file content. It has priority over the config file.
/// Even if the file is not on the default path.
pub const ENV_VAR_CONFIG_TOML: &str = "CLIENTIP_CONFIG_TOML";

/// The `clientip.toml` file location.
pub const ENV_VAR_CONFIG_TOML_PATH: &str = "CLIENTIP_CONFIG_TOML_PATH";

/// Prefix for the environment variables that override single values.
pub const CONFIG_OVERRIDE_PREFIX: &str = "CLIENTIP_CONFIG_OVERRIDE_";

/// Path separator in the override environment variable names.
pub const CONFIG_OVERRIDE_SEPARATOR: &str = "__";

pub type Configuration = v1::Configuration;
pub type Logging = v1::logging::Logging;
pub type Threshold = v1::logging::Threshold;
pub type Style = v1::logging::Style;
pub type HttpApi = v1::http_api::HttpApi;

/// Information required for loading config
#[derive(Debug, Default, Clone)]
pub struct Info {
    config_toml: Option<String>,
    config_toml_path: String,
}

impl Info {
    /// Build Configuration Info from the environment.
    ///
    /// The path in [`ENV_VAR_CONFIG_TOML_PATH`] has priority over
    /// `default_config_toml_path`.
    #[must_use]
    pub fn new(default_config_toml_path: String) -> Self {
        let config_toml = if let Ok(config_toml) = env::var(ENV_VAR_CONFIG_TOML) {
            println!("Loading extra configuration from environment variable:\n {config_toml}");
            Some(config_toml)
        } else {
            None
        };

        let config_toml_path = if let Ok(config_toml_path) = env::var(ENV_VAR_CONFIG_TOML_PATH) {
            println!("Loading extra configuration from file: `{config_toml_path}` ...");
            config_toml_path
        } else {
            println!("Loading extra configuration from default configuration file: `{default_config_toml_path}` ...");
            default_config_toml_path
        };

        Self {
            config_toml,
            config_toml_path,
        }
    }
}

/// Errors that can occur when loading the configuration.
#[derive(Error, Debug)]
pub enum Error {
    /// The sources could not be merged or do not match the configuration
    /// structure.
    #[error("Failed processing the configuration: {source}, {location}")]
    ConfigError {
        source: Box<figment::Error>,
        location: &'static Location<'static>,
    },

    /// The configuration could not be encoded as TOML.
    #[error("Failed encoding the configuration: {source}, {location}")]
    EncodeError {
        source: toml::ser::Error,
        location: &'static Location<'static>,
    },
}

impl From<figment::Error> for Error {
    #[track_caller]
    fn from(err: figment::Error) -> Self {
        Self::ConfigError {
            source: Box::new(err),
            location: Location::caller(),
        }
    }
}

impl From<toml::ser::Error> for Error {
    #[track_caller]
    fn from(err: toml::ser::Error) -> Self {
        Self::EncodeError {
            source: err,
            location: Location::caller(),
        }
    }
}
