//! The routing exposure endpoint.
//!
//! # Responsibilities
//! - Orchestrate one request: group → exposed set → context → payload →
//!   serialize → JSONP → cache headers → response
//!
//! # Design Decisions
//! - Linear flow with fail-fast validation; a bad callback stops the
//!   request before any body is emitted
//! - The exposure config is loaded once and shared by the exposure policy
//!   and the cache resolver, so one request never sees two versions

use crate::error::EndpointError;
use crate::http::cache::resolve_cache;
use crate::http::jsonp;
use crate::http::payload::RoutesResponse;
use crate::http::server::AppState;
use crate::routing::context::{resolve_context, BaseUrlPolicy};
use crate::routing::exposure::exposed_routes;
use crate::routing::table::RouterContext;
use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap};
use axum::response::{IntoResponse, Response};
use serde::Deserialize;

pub const DEFAULT_GROUP: &str = "default";

/// Query parameters accepted by the endpoint.
#[derive(Debug, Default, Deserialize)]
pub struct RoutesQuery {
    /// Group, when not given as a path segment.
    pub group: Option<String>,

    /// JSONP callback token.
    pub callback: Option<String>,

    /// Request locale.
    #[serde(rename = "_locale")]
    pub locale: Option<String>,
}

/// `GET /routes`
pub async fn routes_index(
    State(state): State<AppState>,
    Query(query): Query<RoutesQuery>,
    headers: HeaderMap,
) -> Result<Response, EndpointError> {
    build_response(&state, None, query, &headers)
}

/// `GET /routes/{group}`
pub async fn routes_for_group(
    State(state): State<AppState>,
    Path(group): Path<String>,
    Query(query): Query<RoutesQuery>,
    headers: HeaderMap,
) -> Result<Response, EndpointError> {
    build_response(&state, Some(group), query, &headers)
}

fn build_response(
    state: &AppState,
    path_group: Option<String>,
    query: RoutesQuery,
    headers: &HeaderMap,
) -> Result<Response, EndpointError> {
    let group = path_group
        .or(query.group)
        .unwrap_or_else(|| DEFAULT_GROUP.to_string());
    let locale = query
        .locale
        .unwrap_or_else(|| state.config.urls.default_locale.clone());

    // One load serves both the exposure policy and the cache resolver.
    let exposure_config = state.exposure.load()?;

    let exposed = exposed_routes(&state.table, &exposure_config, &group);

    let router_ctx = RouterContext::for_request(
        &state.config.context,
        forwarded_proto(headers),
        host_header(headers),
    );
    let request_ctx = resolve_context(
        &router_ctx,
        &locale,
        BaseUrlPolicy::new(&state.config.urls, state.config.environment),
        state.locale_prefix.as_ref(),
    );

    tracing::debug!(
        group = %group,
        locale = %locale,
        exposed = exposed.len(),
        total = state.table.len(),
        "Serving routing payload"
    );

    let payload = RoutesResponse::new(request_ctx, exposed, locale);
    let content = state.serializer.serialize(&payload)?;
    let body = jsonp::wrap(&content, query.callback.as_deref())?;

    let cache = resolve_cache(&exposure_config, Some(&group))?;

    let mut response =
        ([(header::CONTENT_TYPE, "application/javascript")], body).into_response();
    if let Some(value) = cache.and_then(|policy| policy.header_value()) {
        response.headers_mut().insert(header::CACHE_CONTROL, value);
    }
    Ok(response)
}

fn host_header(headers: &HeaderMap) -> Option<&str> {
    headers.get(header::HOST).and_then(|v| v.to_str().ok())
}

fn forwarded_proto(headers: &HeaderMap) -> Option<&str> {
    headers
        .get("x-forwarded-proto")
        .and_then(|v| v.to_str().ok())
        .filter(|proto| *proto == "http" || *proto == "https")
}
