use std::{fmt::Display, net::SocketAddr};

use appnest_shared::{
    filter_apps, AppFilter, AppViewModel, Catalog, CategorySelection, CategoryViewModel,
    FETCH_FAILED_MESSAGE,
};
use axum::{
    extract::{ConnectInfo, Path, Query, State},
    http::{HeaderMap, StatusCode},
    response::Json,
};
use serde::{Deserialize, Serialize};

use crate::{admin_access, state::AppState};

type ApiResult<T> = Result<Json<T>, (StatusCode, Json<ErrorResponse>)>;

#[derive(Debug, Deserialize)]
pub struct AppsQuery {
    #[serde(default)]
    pub q: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct AppListResponse {
    pub featured: Vec<AppViewModel>,
    pub other: Vec<AppViewModel>,
    pub total: usize,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct CategoriesResponse {
    pub categories: Vec<CategoryViewModel>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
    })
}

pub async fn get_catalog(State(state): State<AppState>) -> ApiResult<Catalog> {
    let catalog = state.load_catalog().await.map_err(fetch_failed)?;
    Ok(Json(catalog))
}

pub async fn list_apps(
    State(state): State<AppState>,
    Query(query): Query<AppsQuery>,
) -> ApiResult<AppListResponse> {
    let apps = state.load_apps().await.map_err(fetch_failed)?;

    let filter = AppFilter::new(
        query.q.as_deref().unwrap_or_default(),
        CategorySelection::from_slug(query.category.as_deref().unwrap_or_default()),
    );
    let filtered = filter_apps(&apps, &filter);

    Ok(Json(AppListResponse {
        total: filtered.total(),
        featured: filtered.featured,
        other: filtered.other,
    }))
}

pub async fn get_app(State(state): State<AppState>, Path(id): Path<u32>) -> ApiResult<AppViewModel> {
    let apps = state.load_apps().await.map_err(fetch_failed)?;

    match apps.into_iter().find(|app| app.id == id) {
        Some(app) => Ok(Json(app)),
        None => Err((
            StatusCode::NOT_FOUND,
            Json(ErrorResponse {
                error: "App not found".to_string(),
                code: 404,
            }),
        )),
    }
}

pub async fn list_categories(State(state): State<AppState>) -> ApiResult<CategoriesResponse> {
    let categories = state.load_categories().await.map_err(fetch_failed)?;
    Ok(Json(CategoriesResponse {
        categories,
    }))
}

/// Local callers only, unless the caller presents the admin token.
pub async fn invalidate_cache(
    State(state): State<AppState>,
    connect_info: Option<ConnectInfo<SocketAddr>>,
    headers: HeaderMap,
) -> Result<StatusCode, (StatusCode, Json<ErrorResponse>)> {
    let peer = connect_info.map(|ConnectInfo(addr)| addr);
    if !admin_access::is_authorized(peer, &headers, state.admin_token()) {
        tracing::warn!(?peer, "rejected cache invalidation from non-local caller");
        return Err((
            StatusCode::FORBIDDEN,
            Json(ErrorResponse {
                error: "Forbidden".to_string(),
                code: 403,
            }),
        ));
    }

    state.invalidate_cache().await;
    Ok(StatusCode::NO_CONTENT)
}

/// Network, status, GraphQL and decode failures all look the same to users.
fn fetch_failed(err: impl Display) -> (StatusCode, Json<ErrorResponse>) {
    tracing::error!("content fetch failed: {}", err);
    (
        StatusCode::BAD_GATEWAY,
        Json(ErrorResponse {
            error: FETCH_FAILED_MESSAGE.to_string(),
            code: 502,
        }),
    )
}
