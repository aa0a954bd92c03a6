use std::env;
use std::path::Path;
use std::sync::LazyLock;
use regex::Regex;
use crate::addon_error::{create_addon_error_result, info_err, AddonError, AddonErrorKind};
use crate::model::config::Config;
use crate::utils::constants::{CONFIG_FILE, CONFIG_PATH};

static ENV_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\$\{env:(?P<var>[a-zA-Z_][a-zA-Z0-9_]*)}").unwrap());

pub fn get_default_config_path() -> String {
    Path::new(CONFIG_PATH).join(CONFIG_FILE).to_string_lossy().to_string()
}

/// Replaces `${env:NAME}` with the value of the environment variable; unknown variables
/// resolve to an empty string.
pub fn resolve_env_var(value: &str) -> String {
    ENV_REGEX.replace_all(value, |caps: &regex::Captures| {
        env::var(&caps["var"]).unwrap_or_default()
    }).to_string()
}

pub fn parse_config(content: &str) -> Result<Config, AddonError> {
    let resolved = resolve_env_var(content);
    if resolved.trim().is_empty() {
        return Ok(Config::default());
    }
    serde_yaml::from_str::<Config>(&resolved).map_err(|err| info_err!("cant read config file: {err}"))
}

/// Reads the config file when it exists, applies the environment overrides and validates the
/// result. Without a config file every value comes from the environment.
pub fn read_config(config_file: &str) -> Result<Config, AddonError> {
    let path = Path::new(config_file);
    let mut cfg = if path.exists() {
        match std::fs::read_to_string(path) {
            Ok(content) => parse_config(&content)?,
            Err(err) => return create_addon_error_result!(AddonErrorKind::Config, "cant read config file {config_file}: {err}"),
        }
    } else {
        Config::default()
    };
    cfg.apply_overrides(|name| env::var(name).ok().filter(|value| !value.trim().is_empty()))?;
    cfg.prepare()?;
    Ok(cfg)
}

#[cfg(test)]
mod tests {
    use crate::addon_error::AddonErrorKind;
    use crate::utils::file::config_reader::{parse_config, resolve_env_var};

    #[test]
    fn test_resolve() {
        std::env::set_var("IPTV_ADDON_TEST_RESOLVE", "resolved");
        assert_eq!(resolve_env_var("url: ${env:IPTV_ADDON_TEST_RESOLVE}/x"), "url: resolved/x");
        assert_eq!(resolve_env_var("${env:IPTV_ADDON_TEST_UNSET_VARIABLE}"), "");
        assert_eq!(resolve_env_var("plain"), "plain");
    }

    #[test]
    fn test_parse_config() {
        let yaml = r#"
api:
  port: 9000
provider:
  url: http://iptv.example.com
  username: user
  password: pass
  timeout_secs: 5
addon:
  meta_lookup: true
log:
  sanitize_sensitive_info: false
keep_alive: ""
"#;
        let mut cfg = parse_config(yaml).unwrap();
        assert_eq!(cfg.api.host, "0.0.0.0");
        assert_eq!(cfg.api.port, 9000);
        assert_eq!(cfg.provider.timeout_secs, 5);
        assert!(cfg.provider.headers.contains_key("User-Agent"));
        assert!(cfg.addon.meta_lookup);
        assert!(!cfg.log.sanitize_sensitive_info);
        cfg.prepare().unwrap();
        assert!(cfg.keep_alive.is_none());
    }

    #[test]
    fn test_parse_empty_config() {
        let cfg = parse_config("").unwrap();
        assert_eq!(cfg.api.port, 8080);
        assert_eq!(cfg.provider.timeout_secs, 60);
        assert!(cfg.keep_alive.is_some());
    }

    #[test]
    fn test_unknown_field() {
        let err = parse_config("api:\n  prot: 1\n").unwrap_err();
        assert_eq!(err.kind, AddonErrorKind::Info);
    }
}
