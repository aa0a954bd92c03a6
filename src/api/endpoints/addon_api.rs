use std::sync::Arc;
use axum::extract::rejection::PathRejection;
use axum::extract::Path;
use axum::response::IntoResponse;
use log::{error, info, warn};
use crate::api::model::app_state::AppState;
use crate::model::stremio::{CatalogResponse, MetaPreview, MetaResponse, Stream, StreamResponse};
use crate::utils::constants::{JSON_EXT, META_DESCRIPTION};
use crate::utils::debug_if_enabled;
use crate::utils::id_utils::decode_item_id;
use crate::utils::network::m3u::get_m3u_playlist;
use crate::utils::network::request::sanitize_sensitive_info;

async fn manifest(
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse + Send {
    axum::Json(app_state.manifest.as_ref().clone())
}

type ResourceParams = Result<Path<(String, String)>, PathRejection>;

/// Type and id of a `/<resource>/<type>/<id>.json` request. The id is path-decoded once,
/// which undoes the encoding clients apply when they put a catalog id into the url. A
/// segment that does not decode to UTF-8 yields an empty id.
fn resource_params(params: ResourceParams) -> (String, String) {
    match params {
        Ok(Path((content_type, id))) => {
            match id.strip_suffix(JSON_EXT) {
                Some(stripped) => (content_type, stripped.to_string()),
                None => (content_type, id),
            }
        }
        Err(err) => {
            warn!("Invalid resource path: {err}");
            (String::new(), String::new())
        }
    }
}

async fn load_catalog(app_state: &AppState) -> Vec<MetaPreview> {
    match get_m3u_playlist(&app_state.http_client, &app_state.config.provider).await {
        Ok(metas) => metas,
        Err(err) => {
            error!("Failed to load m3u playlist: {err}");
            vec![]
        }
    }
}

// The type and id of the request do not filter anything, every catalog holds the whole playlist.
async fn catalog(
    params: ResourceParams,
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse + Send {
    let (content_type, catalog_id) = resource_params(params);
    info!("Catalog request: {content_type}, ID: {catalog_id}");
    axum::Json(CatalogResponse { metas: load_catalog(&app_state).await })
}

async fn lookup_meta(app_state: &AppState, item_id: &str) -> MetaPreview {
    let stream_url = decode_item_id(item_id);
    load_catalog(app_state).await.into_iter()
        .find(|meta| decode_item_id(&meta.id) == stream_url)
        .map_or_else(|| MetaPreview::placeholder(item_id), |meta| MetaPreview {
            id: item_id.to_string(),
            description: META_DESCRIPTION.to_string(),
            ..meta
        })
}

async fn meta(
    params: ResourceParams,
    axum::extract::State(app_state): axum::extract::State<Arc<AppState>>,
) -> impl axum::response::IntoResponse + Send {
    let (content_type, item_id) = resource_params(params);
    debug_if_enabled!("Meta request: {}, ID: {}", content_type, sanitize_sensitive_info(&item_id));
    let meta = if app_state.config.addon.meta_lookup {
        lookup_meta(&app_state, &item_id).await
    } else {
        MetaPreview::placeholder(&item_id)
    };
    axum::Json(MetaResponse { meta })
}

async fn stream(params: ResourceParams) -> impl axum::response::IntoResponse + Send {
    let (_, item_id) = resource_params(params);
    let url = decode_item_id(&item_id).into_owned();
    debug_if_enabled!("Stream request for {}", sanitize_sensitive_info(&url));
    axum::Json(StreamResponse { streams: vec![Stream::new(url)] })
}

async fn index() -> impl axum::response::IntoResponse + Send {
    axum::response::Redirect::temporary("/manifest.json").into_response()
}

pub fn addon_api_register() -> axum::Router<Arc<AppState>> {
    axum::Router::new()
        .route("/", axum::routing::get(index))
        .route("/manifest.json", axum::routing::get(manifest))
        .route("/catalog/{content_type}/{id}", axum::routing::get(catalog))
        .route("/meta/{content_type}/{id}", axum::routing::get(meta))
        .route("/stream/{content_type}/{id}", axum::routing::get(stream))
}
