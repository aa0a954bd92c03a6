//! Response shapes of the Stremio addon protocol.

use serde::{Deserialize, Serialize};
use crate::utils::constants::{ADDON_DESCRIPTION, ADDON_ID, ADDON_ID_PREFIX, ADDON_NAME, CATALOG_ITEM_DESCRIPTION,
                              CATALOG_MOVIES_ID, CATALOG_MOVIES_NAME, CATALOG_SERIES_ID, CATALOG_SERIES_NAME, META_DESCRIPTION,
                              META_NAME, PLACEHOLDER_POSTER, RESOURCE_CATALOG, RESOURCE_META, RESOURCE_STREAM, STREAM_TITLE,
                              TYPE_MOVIE, TYPE_SERIES};
use crate::utils::id_utils::encode_item_id;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    pub id: String,
    pub version: String,
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
    pub types: Vec<String>,
    pub id_prefixes: Vec<String>,
    pub catalogs: Vec<CatalogDescriptor>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CatalogDescriptor {
    #[serde(rename = "type")]
    pub content_type: String,
    pub id: String,
    pub name: String,
}

impl Manifest {
    pub fn new(version: &str) -> Self {
        Self {
            id: ADDON_ID.to_string(),
            version: version.to_string(),
            name: ADDON_NAME.to_string(),
            description: ADDON_DESCRIPTION.to_string(),
            resources: vec![RESOURCE_CATALOG.to_string(), RESOURCE_META.to_string(), RESOURCE_STREAM.to_string()],
            types: vec![TYPE_MOVIE.to_string(), TYPE_SERIES.to_string()],
            id_prefixes: vec![ADDON_ID_PREFIX.to_string()],
            catalogs: vec![
                CatalogDescriptor {
                    content_type: TYPE_MOVIE.to_string(),
                    id: CATALOG_MOVIES_ID.to_string(),
                    name: CATALOG_MOVIES_NAME.to_string(),
                },
                CatalogDescriptor {
                    content_type: TYPE_SERIES.to_string(),
                    id: CATALOG_SERIES_ID.to_string(),
                    name: CATALOG_SERIES_NAME.to_string(),
                },
            ],
        }
    }
}

/// One `#EXTINF` title paired with the url line that followed it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlaylistEntry {
    pub title: String,
    pub stream_url: String,
}

/// Catalog item, also used for the meta response.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct MetaPreview {
    pub id: String,
    #[serde(rename = "type")]
    pub content_type: String,
    pub name: String,
    pub poster: String,
    pub description: String,
}

impl From<PlaylistEntry> for MetaPreview {
    fn from(entry: PlaylistEntry) -> Self {
        Self {
            id: encode_item_id(&entry.stream_url),
            content_type: TYPE_MOVIE.to_string(),
            name: entry.title,
            poster: PLACEHOLDER_POSTER.to_string(),
            description: CATALOG_ITEM_DESCRIPTION.to_string(),
        }
    }
}

impl MetaPreview {
    pub fn placeholder(id: &str) -> Self {
        Self {
            id: id.to_string(),
            content_type: TYPE_MOVIE.to_string(),
            name: META_NAME.to_string(),
            poster: PLACEHOLDER_POSTER.to_string(),
            description: META_DESCRIPTION.to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Stream {
    pub title: String,
    pub url: String,
}

impl Stream {
    pub fn new(url: String) -> Self {
        Self { title: STREAM_TITLE.to_string(), url }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CatalogResponse {
    pub metas: Vec<MetaPreview>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MetaResponse {
    pub meta: MetaPreview,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StreamResponse {
    pub streams: Vec<Stream>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;
    use crate::model::stremio::{Manifest, MetaPreview, PlaylistEntry};

    #[test]
    fn test_manifest_json() {
        let value = serde_json::to_value(Manifest::new("1.0.0")).unwrap();
        assert_eq!(value, json!({
            "id": "iptv.stremio.addon",
            "version": "1.0.0",
            "name": "IPTV Addon Stremio",
            "description": "Filmes e séries do IPTV no Stremio",
            "resources": ["catalog", "meta", "stream"],
            "types": ["movie", "series"],
            "idPrefixes": ["custom"],
            "catalogs": [
                {"type": "movie", "id": "iptv-movies", "name": "Filmes IPTV"},
                {"type": "series", "id": "iptv-series", "name": "Séries IPTV"}
            ]
        }));
    }

    #[test]
    fn test_meta_preview_from_entry() {
        let meta = MetaPreview::from(PlaylistEntry { title: "My Movie".to_string(), stream_url: "http://x/y.ts".to_string() });
        assert_eq!(serde_json::to_value(meta).unwrap(), json!({
            "id": "custom_http%3A%2F%2Fx%2Fy.ts",
            "type": "movie",
            "name": "My Movie",
            "poster": "https://via.placeholder.com/150",
            "description": "Filme IPTV"
        }));
    }
}
