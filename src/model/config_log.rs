use crate::utils::default_utils::default_as_true;

#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
#[serde(deny_unknown_fields)]
pub struct LogConfig {
    #[serde(default = "default_as_true")]
    pub sanitize_sensitive_info: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            sanitize_sensitive_info: true,
            log_level: None,
        }
    }
}
