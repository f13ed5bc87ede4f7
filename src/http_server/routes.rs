//! Ad serving routes
//!
//! - `GET /api/get_ad` - ads active now (privileged clients may pass `dt`, `tz`, `all`)
//! - `GET /internal/status` - liveness, privileged only
//! - `GET /internal/states` - full catalog dump, privileged only
//! - anything else - 404

use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::{ConnectInfo, Query, State},
    http::{StatusCode, Uri},
    response::{IntoResponse, Response},
    routing::get,
    Json, Router,
};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::catalog::{AdId, AdRecord};
use crate::config::AdServerConfig;
use crate::index::IntervalIndex;
use crate::query::{QueryParams, SearchQuery};

/// Shared, read-only state behind every route
pub struct AdState {
    /// Replacing the catalog means building a new index and a new state
    pub index: Arc<IntervalIndex>,
    pub config: AdServerConfig,
}

impl AdState {
    pub fn new(index: Arc<IntervalIndex>, config: AdServerConfig) -> Self {
        Self { index, config }
    }

    fn is_privileged(&self, peer: &SocketAddr) -> bool {
        self.config.is_privileged(peer.ip())
    }
}

/// One ad as returned by `/api/get_ad`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdView {
    pub id: AdId,
    pub img: String,
}

impl From<&AdRecord> for AdView {
    fn from(ad: &AdRecord) -> Self {
        Self {
            id: ad.id,
            img: ad.content.img_url.clone(),
        }
    }
}

/// Status response
#[derive(Debug, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

/// Create ad routes
pub fn ad_routes(state: Arc<AdState>) -> Router {
    Router::new()
        .route("/api/get_ad", get(get_ad_handler))
        .route("/internal/status", get(status_handler))
        .route("/internal/states", get(states_handler))
        .fallback(unknown_handler)
        .with_state(state)
}

async fn get_ad_handler(
    State(state): State<Arc<AdState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
    Query(raw): Query<HashMap<String, String>>,
) -> Json<Vec<AdView>> {
    let params = QueryParams::from_map(&raw);
    let resolved = SearchQuery::resolve(&params, state.is_privileged(&peer), Utc::now().timestamp());
    let query = resolved.query;

    let ids = state.index.search_active(query.current_time, query.all_active);
    let ads: Vec<AdView> = state.index.get_by_ids(&ids).into_iter().map(AdView::from).collect();

    debug!(
        %peer,
        current_time = query.current_time,
        all_active = query.all_active,
        time_source = ?resolved.time_source,
        results = ads.len(),
        "get_ad"
    );
    Json(ads)
}

async fn status_handler(
    State(state): State<Arc<AdState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> Response {
    if !state.is_privileged(&peer) {
        return forbidden(&peer);
    }
    let response = StatusResponse {
        status: "ok".to_string(),
    };
    (StatusCode::OK, Json(response)).into_response()
}

async fn states_handler(
    State(state): State<Arc<AdState>>,
    ConnectInfo(peer): ConnectInfo<SocketAddr>,
) -> Response {
    if !state.is_privileged(&peer) {
        return forbidden(&peer);
    }
    (StatusCode::OK, Json(state.index.status().clone())).into_response()
}

async fn unknown_handler(uri: Uri) -> impl IntoResponse {
    warn!(%uri, "unknown API path");
    (StatusCode::NOT_FOUND, format!("Unknown method: {}", uri))
}

fn forbidden(peer: &SocketAddr) -> Response {
    warn!(%peer, "unprivileged access to internal endpoint");
    StatusCode::FORBIDDEN.into_response()
}
