//! HTTP request handlers and shared application state.
//!
//! Each public async function corresponds to an API route registered in
//! [`create_router`](crate::api::create_router). Handlers extract path/query/body
//! parameters via Axum extractors and delegate to the
//! [`MemberStore`](roster_core::storage::MemberStore) or the list pipeline,
//! returning JSON responses or [`ApiError`](crate::api::errors::ApiError) on failure.

use crate::api::errors::ApiError;
use crate::api::metrics;
use crate::api::models::*;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use metrics_exporter_prometheus::PrometheusHandle;
use roster_core::member::{Member, MemberFields};
use roster_core::query::{run_query, ResultPage};
use roster_core::storage::MemberStore;
use serde_json::Value;
use std::time::Instant;

/// Shared application state passed to every handler via Axum's `State` extractor.
#[derive(Clone)]
pub struct AppState {
    pub store: MemberStore,
    pub prometheus_handle: PrometheusHandle,
    pub start_time: Instant,
}

/// Path ids that are not integers, or not even UTF-8, cannot match any member.
fn parse_member_id(path: Result<Path<String>, PathRejection>) -> Result<u64, ApiError> {
    let Path(raw) = path.map_err(|e| {
        tracing::debug!("Unreadable member id: {}", e);
        ApiError::member_not_found()
    })?;
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ApiError::member_not_found())
}

fn member_fields(body: Result<Json<Value>, JsonRejection>) -> Result<MemberFields, ApiError> {
    let Json(value) = body?;
    Ok(MemberFields::from_json(&value)?)
}

/// `GET /`
pub async fn root() -> &'static str {
    "Hello, World!"
}

/// `GET /health`
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        members: state.store.len(),
    })
}

/// `GET /metrics`
pub async fn metrics_endpoint(State(state): State<AppState>) -> String {
    state.prometheus_handle.render()
}

/// `GET /api/members`
pub async fn list_members(
    State(state): State<AppState>,
    pairs: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Json<ResultPage> {
    let params = match pairs {
        Ok(Query(pairs)) => ListMembersParams::from_pairs(pairs),
        Err(e) => {
            tracing::debug!("Unreadable list query, using defaults: {}", e);
            ListMembersParams::default()
        }
    };
    let spec = params.to_spec();
    let snapshot = state.store.snapshot();
    let page = run_query(&snapshot, &spec);

    metrics::record_operation("list");
    tracing::debug!(
        page = page.page,
        limit = page.limit,
        sort_by = %spec.sort_by,
        count = page.count,
        "Members listed"
    );
    Json(page)
}

/// `GET /api/members/:id`
pub async fn get_member(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Member>, ApiError> {
    let id = parse_member_id(id)?;
    let member = state.store.get_by_id(id)?;
    Ok(Json(member))
}

/// `POST /api/members`
pub async fn create_member(
    State(state): State<AppState>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<(StatusCode, Json<Member>), ApiError> {
    let fields = member_fields(body)?;
    let member = state.store.create(fields);

    metrics::record_operation("create");
    tracing::info!(member_id = member.id, "Member created");
    Ok((StatusCode::CREATED, Json(member)))
}

/// `PUT /api/members/:id`
pub async fn update_member(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
    body: Result<Json<Value>, JsonRejection>,
) -> Result<Json<Member>, ApiError> {
    let id = parse_member_id(id)?;
    let fields = member_fields(body)?;
    let member = state.store.update(id, fields)?;

    metrics::record_operation("update");
    tracing::info!(member_id = id, "Member updated");
    Ok(Json(member))
}

/// `DELETE /api/members/:id`
pub async fn delete_member(
    State(state): State<AppState>,
    id: Result<Path<String>, PathRejection>,
) -> Result<Json<Member>, ApiError> {
    let id = parse_member_id(id)?;
    let member = state.store.delete_by_id(id)?;

    metrics::record_operation("delete");
    tracing::info!(member_id = id, "Member deleted");
    Ok(Json(member))
}
