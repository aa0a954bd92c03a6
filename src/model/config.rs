use std::str::FromStr;
use cron::Schedule;
use crate::addon_error::{create_addon_error_result, AddonError, AddonErrorKind};
use crate::model::config_log::LogConfig;
use crate::model::config_provider::ConfigProvider;
use crate::utils::constants::{ENV_PORT, ENV_PROVIDER_PASS, ENV_PROVIDER_URL, ENV_PROVIDER_USER};
use crate::utils::default_utils::{default_host, default_keep_alive, default_port};

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigApi {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ConfigApi {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

#[derive(Debug, Clone, Default, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct AddonConfig {
    /// Meta requests look up the real title in a freshly fetched playlist instead of
    /// answering with the placeholder.
    #[serde(default)]
    pub meta_lookup: bool,
}

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    pub api: ConfigApi,
    #[serde(default)]
    pub provider: ConfigProvider,
    #[serde(default)]
    pub addon: AddonConfig,
    #[serde(default)]
    pub log: LogConfig,
    #[serde(default = "default_keep_alive")]
    pub keep_alive: Option<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api: ConfigApi::default(),
            provider: ConfigProvider::default(),
            addon: AddonConfig::default(),
            log: LogConfig::default(),
            keep_alive: default_keep_alive(),
        }
    }
}

impl Config {
    /// Applies `PORT`, `IPTV_DNS`, `IPTV_USER` and `IPTV_PASS` on top of the file values.
    pub fn apply_overrides<F>(&mut self, lookup: F) -> Result<(), AddonError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(port) = lookup(ENV_PORT) {
            match port.trim().parse::<u16>() {
                Ok(value) => self.api.port = value,
                Err(err) => return create_addon_error_result!(AddonErrorKind::Config, "invalid {ENV_PORT} value {port}: {err}"),
            }
        }
        if let Some(url) = lookup(ENV_PROVIDER_URL) {
            self.provider.url = url;
        }
        if let Some(username) = lookup(ENV_PROVIDER_USER) {
            self.provider.username = username;
        }
        if let Some(password) = lookup(ENV_PROVIDER_PASS) {
            self.provider.password = password;
        }
        Ok(())
    }

    pub fn prepare(&mut self) -> Result<(), AddonError> {
        self.provider.prepare()?;
        self.keep_alive = self.keep_alive.take()
            .map(|expression| expression.trim().to_string())
            .filter(|expression| !expression.is_empty());
        if let Some(expression) = self.keep_alive.as_deref() {
            if let Err(err) = Schedule::from_str(expression) {
                return create_addon_error_result!(AddonErrorKind::Config, "invalid keep_alive schedule {expression}: {err}");
            }
        }
        Ok(())
    }
}
