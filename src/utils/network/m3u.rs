use log::{error, info};
use crate::addon_error::AddonError;
use crate::model::config_provider::ConfigProvider;
use crate::model::stremio::MetaPreview;
use crate::processing::parser::m3u;
use crate::utils::network::request;

/// Fetches the provider playlist and turns it into catalog items.
pub async fn get_m3u_playlist(client: &reqwest::Client, provider: &ConfigProvider) -> Result<Vec<MetaPreview>, AddonError> {
    let url = provider.get_playlist_url();
    let text = request::download_text_content(client, provider, &url).await?;
    let metas = m3u::parse_m3u(text.lines());
    if metas.is_empty() {
        error!("No movies found in m3u playlist");
    } else {
        info!("{} movies loaded from m3u playlist", metas.len());
    }
    Ok(metas)
}
