use std::collections::HashMap;
use std::io::Read;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::LazyLock;
use std::time::{Duration, Instant};

use flate2::read::{GzDecoder, ZlibDecoder};
use log::{log_enabled, trace, Level};
use regex::Regex;
use reqwest::header::{HeaderMap, HeaderName, HeaderValue, CONTENT_ENCODING};

use crate::addon_error::{create_addon_error, create_addon_error_result, AddonError, AddonErrorKind};
use crate::model::config_provider::ConfigProvider;
use crate::utils::constants::{ENCODING_DEFLATE, ENCODING_GZIP};
use crate::utils::debug_if_enabled;

static USERNAME_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(username=)[^&]*").unwrap());
static PASSWORD_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(password=)[^&]*").unwrap());
static TOKEN_REGEX: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"(token=)[^&]*").unwrap());

static SANITIZE_SENSITIVE_INFO: AtomicBool = AtomicBool::new(true);

pub fn set_sanitize_sensitive_info(value: bool) {
    SANITIZE_SENSITIVE_INFO.store(value, Ordering::Relaxed);
}

pub fn sanitize_sensitive_info(query: &str) -> String {
    if SANITIZE_SENSITIVE_INFO.load(Ordering::Relaxed) {
        let masked_query = USERNAME_REGEX.replace_all(query, "$1***");
        let masked_query = PASSWORD_REGEX.replace_all(&masked_query, "$1***");
        let masked_query = TOKEN_REGEX.replace_all(&masked_query, "$1***");
        masked_query.to_string()
    } else {
        query.to_string()
    }
}

pub fn create_client(provider: &ConfigProvider) -> Result<reqwest::Client, AddonError> {
    let mut builder = reqwest::Client::builder();
    if provider.timeout_secs > 0 {
        builder = builder.timeout(Duration::from_secs(provider.timeout_secs));
    }
    builder.build().map_err(|err| create_addon_error!(AddonErrorKind::Config, "failed to create http client: {err}"))
}

pub fn get_request_headers(defined_headers: &HashMap<String, String>) -> HeaderMap {
    let mut headers = HeaderMap::new();
    for (key, value) in defined_headers {
        match (HeaderName::from_bytes(key.as_bytes()), HeaderValue::from_str(value)) {
            (Ok(name), Ok(val)) => { headers.insert(name, val); }
            _ => log::warn!("Ignoring invalid request header {key}"),
        }
    }
    if log_enabled!(Level::Trace) {
        let he: HashMap<String, String> = headers.iter().map(|(k, v)| (k.to_string(), String::from_utf8_lossy(v.as_bytes()).to_string())).collect();
        if !he.is_empty() {
            trace!("Request headers {he:?}");
        }
    }
    headers
}

fn is_gzip(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0] == 0x1F && bytes[1] == 0x8B
}

fn is_deflate(bytes: &[u8]) -> bool {
    bytes.len() >= 2 && bytes[0] == 0x78 && matches!(bytes[1], 0x01 | 0x5E | 0x9C | 0xDA)
}

/// Inflates gzip / zlib bodies, recognized by their magic bytes since the upstream does not
/// always send a matching `Content-Encoding`. Invalid UTF-8 is replaced, not rejected.
fn decode_content(bytes: &[u8]) -> Result<String, AddonError> {
    let mut decode_buffer = Vec::new();
    let content = if is_gzip(bytes) {
        GzDecoder::new(bytes).read_to_end(&mut decode_buffer)
            .map_err(|err| create_addon_error!(AddonErrorKind::Decode, "failed to decode {ENCODING_GZIP} content {err}"))?;
        &decode_buffer[..]
    } else if is_deflate(bytes) {
        ZlibDecoder::new(bytes).read_to_end(&mut decode_buffer)
            .map_err(|err| create_addon_error!(AddonErrorKind::Decode, "failed to decode {ENCODING_DEFLATE} content {err}"))?;
        &decode_buffer[..]
    } else {
        bytes
    };
    Ok(String::from_utf8_lossy(content).into_owned())
}

fn request_error(err: &reqwest::Error, url: &str) -> AddonError {
    let kind = if err.is_timeout() { AddonErrorKind::Timeout } else { AddonErrorKind::Network };
    create_addon_error!(kind, "Request failed {} {}", sanitize_sensitive_info(url), sanitize_sensitive_info(&err.to_string()))
}

/// Downloads the body of `url` as text. Compressed bodies are inflated.
pub async fn download_text_content(client: &reqwest::Client, provider: &ConfigProvider, url: &str) -> Result<String, AddonError> {
    let start_time = Instant::now();
    debug_if_enabled!("downloading text content from {}", sanitize_sensitive_info(url));
    let response = client.get(url)
        .headers(get_request_headers(&provider.headers))
        .send().await
        .map_err(|err| request_error(&err, url))?;

    let status = response.status();
    if !status.is_success() {
        return create_addon_error_result!(AddonErrorKind::Status, "Request failed with status {} {}", status, sanitize_sensitive_info(url));
    }

    if let Some(encoding) = response.headers().get(CONTENT_ENCODING) {
        debug_if_enabled!("Response content encoding {:?}", encoding);
    }
    let bytes = response.bytes().await.map_err(|err| request_error(&err, url))?;
    let content = decode_content(&bytes)?;
    debug_if_enabled!("Request took:{}ms {}", start_time.elapsed().as_millis(), sanitize_sensitive_info(url));
    Ok(content)
}
