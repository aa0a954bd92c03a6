use std::collections::HashMap;
use crate::addon_error::{create_addon_error_result, AddonError, AddonErrorKind};
use crate::utils::default_utils::{default_request_headers, default_timeout_secs};

const HEADER_REFERER: &str = "Referer";

/// Upstream playlist server. Credentials have no built-in default, they come from the
/// config file or the environment.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigProvider {
    #[serde(default)]
    pub url: String,
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
    /// Whole-request deadline, `0` waits forever.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_request_headers")]
    pub headers: HashMap<String, String>,
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self {
            url: String::new(),
            username: String::new(),
            password: String::new(),
            timeout_secs: default_timeout_secs(),
            headers: default_request_headers(),
        }
    }
}

impl ConfigProvider {
    pub fn prepare(&mut self) -> Result<(), AddonError> {
        self.url = self.url.trim().trim_end_matches('/').to_string();
        self.username = self.username.trim().to_string();
        self.password = self.password.trim().to_string();

        if self.url.is_empty() {
            return create_addon_error_result!(AddonErrorKind::Config, "provider url is required");
        }
        match self.url.parse::<url::Url>() {
            Ok(url) if matches!(url.scheme(), "http" | "https") => {}
            Ok(url) => return create_addon_error_result!(AddonErrorKind::Config, "provider url scheme not supported: {}", url.scheme()),
            Err(err) => return create_addon_error_result!(AddonErrorKind::Config, "provider url is malformed: {err}"),
        }
        if self.username.is_empty() || self.password.is_empty() {
            return create_addon_error_result!(AddonErrorKind::Config, "provider username and password are required");
        }

        if !self.headers.keys().any(|k| k.eq_ignore_ascii_case(HEADER_REFERER)) {
            self.headers.insert(HEADER_REFERER.to_string(), self.url.clone());
        }
        Ok(())
    }

    pub fn get_playlist_url(&self) -> String {
        format!("{}/get.php?username={}&password={}&type=m3u_plus&output=mpegts",
                self.url, self.username, self.password)
    }
}

#[cfg(test)]
mod tests {
    use crate::addon_error::AddonErrorKind;
    use crate::model::config_provider::ConfigProvider;

    fn provider(url: &str, username: &str, password: &str) -> ConfigProvider {
        ConfigProvider {
            url: url.to_string(),
            username: username.to_string(),
            password: password.to_string(),
            ..ConfigProvider::default()
        }
    }

    #[test]
    fn test_playlist_url() {
        let mut input = provider("http://iptv.example.com/", "user", "secret");
        input.prepare().unwrap();
        assert_eq!(input.get_playlist_url(),
                   "http://iptv.example.com/get.php?username=user&password=secret&type=m3u_plus&output=mpegts");
        assert_eq!(input.headers.get("Referer").map(String::as_str), Some("http://iptv.example.com"));
        assert!(input.headers.contains_key("User-Agent"));
    }

    #[test]
    fn test_prepare_rejects_missing_values() {
        for (url, user, pass) in [("", "u", "p"), ("not a url", "u", "p"), ("ftp://x", "u", "p"), ("http://x", "", "p"), ("http://x", "u", " ")] {
            let err = provider(url, user, pass).prepare().unwrap_err();
            assert_eq!(err.kind, AddonErrorKind::Config, "{url} {user} {pass}");
        }
    }

    #[test]
    fn test_configured_referer_is_kept() {
        let mut input = provider("http://iptv.example.com", "u", "p");
        input.headers.insert("referer".to_string(), "http://other".to_string());
        input.prepare().unwrap();
        assert_eq!(input.headers.get("referer").map(String::as_str), Some("http://other"));
        assert!(!input.headers.contains_key("Referer"));
    }
}
