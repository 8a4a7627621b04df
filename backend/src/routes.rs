use std::path::Path;

use axum::{
    http::Method,
    middleware,
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    services::{ServeDir, ServeFile},
};

use crate::{handlers, request_context::request_context_middleware, state::AppState};

/// API routes plus the built frontend. Unknown paths fall back to
/// `index.html` so client-side routes (`/apps`, `/about`, ...) load directly.
pub fn create_router(state: AppState, static_dir: &str) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods([Method::GET])
        .allow_headers(Any);

    let index = Path::new(static_dir).join("index.html");
    let frontend = ServeDir::new(static_dir).fallback(ServeFile::new(index));

    Router::new()
        .route("/api/health", get(handlers::health))
        .route("/api/catalog", get(handlers::get_catalog))
        .route("/api/apps", get(handlers::list_apps))
        .route("/api/apps/:id", get(handlers::get_app))
        .route("/api/categories", get(handlers::list_categories))
        .route("/api/cache/invalidate", post(handlers::invalidate_cache))
        .fallback_service(frontend)
        .with_state(state)
        .layer(middleware::from_fn(request_context_middleware))
        .layer(cors)
}

#[cfg(test)]
mod tests {
    use std::{net::SocketAddr, time::Duration};

    use appnest_shared::{Catalog, FeaturedPolicy, FETCH_FAILED_MESSAGE};
    use axum::{
        body::{to_bytes, Body},
        extract::ConnectInfo,
        http::{Request, StatusCode},
    };
    use serde::de::DeserializeOwned;
    use serde_json::json;
    use tower::ServiceExt;
    use wiremock::{
        matchers::{body_string_contains, method},
        Mock, MockServer, ResponseTemplate,
    };

    use super::create_router;
    use crate::{
        admin_access::ADMIN_TOKEN_HEADER,
        cms_client::CmsClient,
        handlers::{AppListResponse, CategoriesResponse, ErrorResponse},
        request_context::REQUEST_ID_HEADER,
        state::AppState,
    };

    fn apps_body() -> serde_json::Value {
        json!({
            "data": {
                "mobileApps": [
                    {"title": "TaskFlow", "about": "Smart tasks", "languages": [{"id": "1", "languages": "React"}]},
                    {"title": "WeatherPro", "about": "Forecasts", "languages": [{"id": "2", "languages": "Go"}]},
                    {"title": "FitTracker", "about": "Workouts", "languages": [{"id": "3", "languages": "React"}]},
                    {"title": "Expense Buddy", "about": "Budgets", "languages": [{"id": "4", "languages": "React"}]},
                    {"title": "Study Cards", "about": "Flashcards"}
                ]
            }
        })
    }

    fn categories_body() -> serde_json::Value {
        json!({
            "data": {
                "categories": [
                    {"name": "📱 Utility", "slug": "utility", "id": "c1"},
                    {"name": "💪 Health", "slug": "health", "id": "c2"},
                    {"name": "💰 Finance", "slug": "finance", "id": "c3"}
                ]
            }
        })
    }

    async fn mount_cms(server: &MockServer, apps_status: u16) {
        Mock::given(method("POST"))
            .and(body_string_contains("mobileApps"))
            .respond_with(ResponseTemplate::new(apps_status).set_body_json(apps_body()))
            .mount(server)
            .await;
        Mock::given(method("POST"))
            .and(body_string_contains("categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories_body()))
            .mount(server)
            .await;
    }

    fn state(server: &MockServer, ttl: Duration) -> AppState {
        let cms = CmsClient::new(&server.uri(), Duration::from_secs(5), false).expect("client");
        AppState::with_client(cms, ttl, FeaturedPolicy::default())
    }

    async fn send(state: AppState, method: &str, uri: &str) -> (StatusCode, Vec<u8>) {
        let request = Request::builder()
            .method(method)
            .uri(uri)
            .body(Body::empty())
            .expect("request");
        send_request(state, request).await
    }

    async fn send_request(state: AppState, request: Request<Body>) -> (StatusCode, Vec<u8>) {
        let response = create_router(state, "/nonexistent-appnest-dist")
            .oneshot(request)
            .await
            .expect("response");
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX)
            .await
            .expect("body");
        (status, body.to_vec())
    }

    fn decode<T: DeserializeOwned>(body: &[u8]) -> T {
        serde_json::from_slice(body).expect("json body")
    }

    #[tokio::test]
    async fn catalog_joins_both_collections() {
        let server = MockServer::start().await;
        mount_cms(&server, 200).await;

        let (status, body) = send(state(&server, Duration::ZERO), "GET", "/api/catalog").await;
        assert_eq!(status, StatusCode::OK);
        let catalog: Catalog = decode(&body);
        assert_eq!(catalog.apps.len(), 5);
        assert_eq!(catalog.categories.len(), 3);
        assert_eq!(catalog.categories[2].name, "Finance");
        assert_eq!(catalog.featured_apps().count(), 3);
    }

    #[tokio::test]
    async fn catalog_fails_as_a_whole_when_one_query_fails() {
        let server = MockServer::start().await;
        mount_cms(&server, 500).await;

        let (status, body) = send(state(&server, Duration::ZERO), "GET", "/api/catalog").await;
        assert_eq!(status, StatusCode::BAD_GATEWAY);
        let error: ErrorResponse = decode(&body);
        assert_eq!(error.error, FETCH_FAILED_MESSAGE);
        assert_eq!(error.code, 502);
    }

    #[tokio::test]
    async fn apps_are_filtered_and_partitioned() {
        let server = MockServer::start().await;
        mount_cms(&server, 200).await;

        let (status, body) =
            send(state(&server, Duration::ZERO), "GET", "/api/apps?q=react&category=all-apps").await;
        assert_eq!(status, StatusCode::OK);
        let list: AppListResponse = decode(&body);
        let featured: Vec<&str> = list.featured.iter().map(|app| app.name.as_str()).collect();
        let other: Vec<&str> = list.other.iter().map(|app| app.name.as_str()).collect();
        assert_eq!(featured, vec!["TaskFlow", "FitTracker"]);
        assert_eq!(other, vec!["Expense Buddy"]);
        assert_eq!(list.total, 3);

        let (_, body) =
            send(state(&server, Duration::ZERO), "GET", "/api/apps?category=health").await;
        let health: AppListResponse = decode(&body);
        assert_eq!(health.total, 1);
        assert_eq!(health.featured[0].name, "FitTracker");
    }

    #[tokio::test]
    async fn single_app_lookup() {
        let server = MockServer::start().await;
        mount_cms(&server, 200).await;

        let (status, body) = send(state(&server, Duration::ZERO), "GET", "/api/apps/2").await;
        assert_eq!(status, StatusCode::OK);
        let app: appnest_shared::AppViewModel = decode(&body);
        assert_eq!(app.name, "WeatherPro");

        let (status, _) = send(state(&server, Duration::ZERO), "GET", "/api/apps/42").await;
        assert_eq!(status, StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn categories_strip_glyphs() {
        let server = MockServer::start().await;
        mount_cms(&server, 200).await;

        let (status, body) = send(state(&server, Duration::ZERO), "GET", "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        let response: CategoriesResponse = decode(&body);
        assert_eq!(response.categories[0].name, "Utility");
        assert_eq!(response.categories[0].icon, "📱");
        assert_eq!(response.categories[1].id, "health");
    }

    #[tokio::test]
    async fn cached_content_survives_until_invalidated() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories_body()))
            .expect(2)
            .mount(&server)
            .await;

        let state = state(&server, Duration::from_secs(300));
        for _ in 0..3 {
            let (status, _) = send(state.clone(), "GET", "/api/categories").await;
            assert_eq!(status, StatusCode::OK);
        }

        let (status, _) = send_request(state.clone(), invalidate_from("127.0.0.1:51000", &[])).await;
        assert_eq!(status, StatusCode::NO_CONTENT);

        let (status, _) = send(state, "GET", "/api/categories").await;
        assert_eq!(status, StatusCode::OK);
        // `expect(2)` is verified when the mock server drops.
    }

    fn invalidate_from(peer: &str, headers: &[(&str, &str)]) -> Request<Body> {
        let peer: SocketAddr = peer.parse().expect("peer address");
        let mut builder = Request::builder()
            .method("POST")
            .uri("/api/cache/invalidate")
            .extension(ConnectInfo(peer));
        for (name, value) in headers {
            builder = builder.header(*name, *value);
        }
        builder.body(Body::empty()).expect("request")
    }

    #[tokio::test]
    async fn cross_site_invalidation_is_refused_and_cache_is_kept() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(body_string_contains("categories"))
            .respond_with(ResponseTemplate::new(200).set_body_json(categories_body()))
            .expect(1)
            .mount(&server)
            .await;

        let state = state(&server, Duration::from_secs(300));
        let attempts = [
            invalidate_from("203.0.113.9:443", &[("origin", "https://evil.example")]),
            invalidate_from("127.0.0.1:51000", &[("origin", "https://evil.example")]),
            invalidate_from("127.0.0.1:51000", &[("x-forwarded-for", "203.0.113.9")]),
        ];
        for attempt in attempts {
            let (status, body) = send_request(state.clone(), attempt).await;
            assert_eq!(status, StatusCode::FORBIDDEN);
            let error: ErrorResponse = decode(&body);
            assert_eq!(error.code, 403);

            let (status, _) = send(state.clone(), "GET", "/api/categories").await;
            assert_eq!(status, StatusCode::OK);
        }

        // Without connection info the caller cannot be shown to be local.
        let (status, _) = send(state, "POST", "/api/cache/invalidate").await;
        assert_eq!(status, StatusCode::FORBIDDEN);
        // `expect(1)` is verified when the mock server drops.
    }

    #[tokio::test]
    async fn admin_token_lets_remote_caller_invalidate() {
        let server = MockServer::start().await;
        let state = state(&server, Duration::from_secs(300)).with_admin_token(Some("s3cret"));

        let (status, _) = send_request(
            state.clone(),
            invalidate_from("203.0.113.9:443", &[(ADMIN_TOKEN_HEADER, "wrong")]),
        )
        .await;
        assert_eq!(status, StatusCode::FORBIDDEN);

        let (status, _) = send_request(
            state,
            invalidate_from("203.0.113.9:443", &[(ADMIN_TOKEN_HEADER, "s3cret")]),
        )
        .await;
        assert_eq!(status, StatusCode::NO_CONTENT);
    }

    #[tokio::test]
    async fn request_id_is_echoed() {
        let server = MockServer::start().await;
        let response = create_router(state(&server, Duration::ZERO), "/nonexistent-appnest-dist")
            .oneshot(
                Request::builder()
                    .uri("/api/health")
                    .header(REQUEST_ID_HEADER, "req-test")
                    .body(Body::empty())
                    .expect("request"),
            )
            .await
            .expect("response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response
                .headers()
                .get(REQUEST_ID_HEADER)
                .and_then(|value| value.to_str().ok()),
            Some("req-test")
        );
    }
}
