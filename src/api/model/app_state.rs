use std::sync::Arc;
use crate::addon_error::AddonError;
use crate::model::config::Config;
use crate::model::stremio::Manifest;
use crate::utils::network::request::create_client;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub http_client: Arc<reqwest::Client>,
    pub manifest: Arc<Manifest>,
}

impl AppState {
    pub fn new(config: Arc<Config>) -> Result<Self, AddonError> {
        let http_client = create_client(&config.provider)?;
        Ok(Self {
            config,
            http_client: Arc::new(http_client),
            manifest: Arc::new(Manifest::new(env!("CARGO_PKG_VERSION"))),
        })
    }
}
