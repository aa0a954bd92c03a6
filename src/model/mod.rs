pub mod config;
pub mod config_log;
pub mod config_provider;
pub mod stremio;
