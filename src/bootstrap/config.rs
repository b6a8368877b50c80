//! Initialize configuration from file or env var.
//!
//! All environment variables are prefixed with `CLIENTIP_`.
use clientip_configuration::{Configuration, Info};

// Default values
pub const DEFAULT_PATH_CONFIG: &str = "./share/default/config/clientip.toml";

/// It loads the application configuration from the environment.
///
/// There are three methods to inject the configuration:
///
/// 1. By using a config file: `clientip.toml`.
/// 2. Environment variable: `CLIENTIP_CONFIG_TOML`. The variable contains the same contents as the `clientip.toml` file.
/// 3. Environment variables overriding single values, like `CLIENTIP_CONFIG_OVERRIDE_LOGGING__THRESHOLD`.
///
/// Refer to the [configuration documentation](https://docs.rs/clientip-configuration) for the configuration options.
///
/// # Panics
///
/// Will panic if the configuration sources contain invalid values.
#[must_use]
pub fn initialize_configuration() -> Configuration {
    let info = Info::new(DEFAULT_PATH_CONFIG.to_string());

    match Configuration::load(&info) {
        Ok(configuration) => configuration,
        Err(err) => panic!("invalid configuration: {err}"),
    }
}
