use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Deserialize;
use tracing::warn;

use alumnet_views::{
    build_graph, companies, roles, search_profiles, sort_for_display, topics, ProfileFilter,
};

use crate::state::{AppState, RefreshOutcome};

// --- Query structs ---

#[derive(Deserialize)]
pub struct SearchQuery {
    q: Option<String>,
    company: Option<String>,
    role: Option<String>,
    topic: Option<String>,
    contact_type: Option<String>,
}

// --- Helpers ---

/// The filter controls send `"all"` for an unselected facet; treat it the
/// same as an absent or empty parameter.
fn facet_param(raw: Option<String>) -> Option<String> {
    raw.map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty() && v != "all")
}

fn unavailable(message: String) -> Response {
    warn!(error = %message, "Directory unavailable");
    (
        StatusCode::SERVICE_UNAVAILABLE,
        Json(serde_json::json!({ "error": message })),
    )
        .into_response()
}

// --- Handlers ---

/// Load state of the directory: profile count when loaded, the fetch time,
/// and the last load error if any. Mirrors the loading/error/success states
/// a consuming view renders.
pub async fn api_status(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let directory = state.directory.read().await;
    Json(serde_json::json!({
        "profiles": directory.profiles.as_ref().map(|p| p.len()),
        "fetched_at": directory.fetched_at,
        "error": directory.last_error,
    }))
}

pub async fn api_profiles(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.profiles().await {
        Ok(profiles) => Json(sort_for_display(&profiles)).into_response(),
        Err(message) => unavailable(message),
    }
}

pub async fn api_profile_detail(
    State(state): State<Arc<AppState>>,
    Path(id): Path<String>,
) -> impl IntoResponse {
    match state.profiles().await {
        Ok(profiles) => match profiles.iter().find(|p| p.id == id) {
            Some(profile) => Json(profile.clone()).into_response(),
            None => StatusCode::NOT_FOUND.into_response(),
        },
        Err(message) => unavailable(message),
    }
}

pub async fn api_facets(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.profiles().await {
        Ok(profiles) => Json(serde_json::json!({
            "companies": companies(&profiles),
            "roles": roles(&profiles),
            "topics": topics(&profiles),
        }))
        .into_response(),
        Err(message) => unavailable(message),
    }
}

pub async fn api_graph(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.profiles().await {
        Ok(profiles) => Json(build_graph(&profiles)).into_response(),
        Err(message) => unavailable(message),
    }
}

pub async fn api_search(
    State(state): State<Arc<AppState>>,
    Query(params): Query<SearchQuery>,
) -> impl IntoResponse {
    let filter = ProfileFilter {
        company: facet_param(params.company),
        role: facet_param(params.role),
        topic: facet_param(params.topic),
        contact_type: facet_param(params.contact_type),
    };
    let term = params.q.unwrap_or_default();

    match state.profiles().await {
        Ok(profiles) => Json(search_profiles(&profiles, &term, &filter)).into_response(),
        Err(message) => unavailable(message),
    }
}

pub async fn api_refresh(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    match state.refresh().await {
        Ok(RefreshOutcome::Applied(count)) => Json(serde_json::json!({
            "status": "ok",
            "profiles": count,
        }))
        .into_response(),
        Ok(RefreshOutcome::Superseded) => Json(serde_json::json!({
            "status": "superseded",
        }))
        .into_response(),
        Err(e) => {
            warn!(error = %e, "Manual refresh failed");
            (
                StatusCode::BAD_GATEWAY,
                Json(serde_json::json!({ "error": e.to_string() })),
            )
                .into_response()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn facet_param_drops_sentinel_and_blanks() {
        assert_eq!(facet_param(None), None);
        assert_eq!(facet_param(Some("".to_string())), None);
        assert_eq!(facet_param(Some("  ".to_string())), None);
        assert_eq!(facet_param(Some("all".to_string())), None);
        assert_eq!(
            facet_param(Some(" Acme ".to_string())),
            Some("Acme".to_string())
        );
    }
}
