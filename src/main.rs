use std::sync::Arc;
use clap::Parser;
use env_logger::Builder;
use log::{info, LevelFilter};

use crate::utils::file::config_reader::{get_default_config_path, read_config};
use crate::utils::network::request::set_sanitize_sensitive_info;

mod addon_error;
mod api;
mod model;
mod processing;
mod utils;

const LOG_ENV: &str = "RUST_LOG";
const QUIET_MODULES: &[&str] = &["hyper", "hyper_util", "reqwest", "rustls", "tower_http"];

#[derive(Parser)]
#[command(version, about = "Serves an IPTV m3u playlist as a Stremio addon catalog", long_about = None)]
struct Args {
    /// The config file
    #[arg(short = 'c', long = "config")]
    config_file: Option<String>,

    /// Log level (error, warn, info, debug, trace), overrides RUST_LOG and the config file
    #[arg(short = 'l', long = "log-level")]
    log_level: Option<String>,

    /// Validates the configuration and exits
    #[arg(long, default_value_t = false)]
    check: bool,
}

#[tokio::main]
async fn main() {
    let args = Args::parse();

    let config_file = args.config_file.unwrap_or_else(get_default_config_path);
    let cfg_result = read_config(&config_file);

    init_logger(args.log_level.as_deref(), cfg_result.as_ref().ok().and_then(|cfg| cfg.log.log_level.as_deref()));

    info!("Version: {}", env!("CARGO_PKG_VERSION"));
    if let Some(build_time) = option_env!("VERGEN_BUILD_TIMESTAMP") {
        info!("Build time: {build_time}");
    }

    let cfg = match cfg_result {
        Ok(cfg) => cfg,
        Err(err) => exit!("Failed to load config {config_file}: {err}"),
    };
    set_sanitize_sensitive_info(cfg.log.sanitize_sensitive_info);
    if std::path::Path::new(&config_file).exists() {
        info!("Config file: {config_file}");
    } else {
        info!("Config file {config_file} not found, using environment");
    }

    if args.check {
        info!("Config is valid");
        return;
    }

    if let Err(err) = api::main_api::start_server(Arc::new(cfg)).await {
        exit!("Can't start server: {err}");
    }
}

fn init_logger(user_log_level: Option<&str>, config_log_level: Option<&str>) {
    let env_log_level = std::env::var(LOG_ENV).ok().filter(|level| !level.trim().is_empty());
    let log_level = user_log_level
        .map(str::to_string)
        .or(env_log_level)
        .or_else(|| config_log_level.map(str::to_string))
        .unwrap_or_else(|| String::from("info"));

    let mut log_builder = Builder::new();
    log_builder.format_timestamp_millis();
    log_builder.parse_filters(&log_level);
    // plain levels only, explicit module directives win
    if !log_level.contains('=') {
        for module in QUIET_MODULES {
            log_builder.filter_module(module, LevelFilter::Warn);
        }
    }
    log_builder.init();
    info!("Log level {log_level}");
}
