pub const CONFIG_PATH: &str = "config";
pub const CONFIG_FILE: &str = "config.yml";

pub const ENV_PORT: &str = "PORT";
pub const ENV_PROVIDER_URL: &str = "IPTV_DNS";
pub const ENV_PROVIDER_USER: &str = "IPTV_USER";
pub const ENV_PROVIDER_PASS: &str = "IPTV_PASS";

pub const ENCODING_GZIP: &str = "gzip";
pub const ENCODING_DEFLATE: &str = "deflate";

pub const DEFAULT_USER_AGENT: &str = "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

// every five minutes
pub const DEFAULT_KEEP_ALIVE_SCHEDULE: &str = "0 */5 * * * *";

pub const M3U_EXTINF: &str = "#EXTINF";
pub const M3U_URL_PREFIX: &str = "http";

pub const ADDON_ID: &str = "iptv.stremio.addon";
pub const ADDON_NAME: &str = "IPTV Addon Stremio";
pub const ADDON_DESCRIPTION: &str = "Filmes e séries do IPTV no Stremio";
pub const ADDON_ID_PREFIX: &str = "custom";
pub const ITEM_ID_PREFIX: &str = "custom_";

pub const CATALOG_MOVIES_ID: &str = "iptv-movies";
pub const CATALOG_MOVIES_NAME: &str = "Filmes IPTV";
pub const CATALOG_SERIES_ID: &str = "iptv-series";
pub const CATALOG_SERIES_NAME: &str = "Séries IPTV";

pub const TYPE_MOVIE: &str = "movie";
pub const TYPE_SERIES: &str = "series";

pub const RESOURCE_CATALOG: &str = "catalog";
pub const RESOURCE_META: &str = "meta";
pub const RESOURCE_STREAM: &str = "stream";

pub const UNKNOWN_TITLE: &str = "Filme Desconhecido";
pub const PLACEHOLDER_POSTER: &str = "https://via.placeholder.com/150";
pub const CATALOG_ITEM_DESCRIPTION: &str = "Filme IPTV";
pub const META_NAME: &str = "Filme IPTV";
pub const META_DESCRIPTION: &str = "Filme transmitido via IPTV";
pub const STREAM_TITLE: &str = "🎬 IPTV Stream";

pub const JSON_EXT: &str = ".json";
