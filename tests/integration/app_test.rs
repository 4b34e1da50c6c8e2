// Copyright 2025 Kirky.X
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

use super::helpers::{sqlite_pool, sqlite_settings};
use appbase::app;
use appbase::config::settings::{SecretKey, ServerSettings, Settings};
use appbase::infrastructure::database::session::DatabaseSessionManager;
use appbase::presentation::routes;
use axum::{
    body::Body,
    http::{Request, StatusCode},
    routing::get,
    Extension, Router,
};
use std::sync::Arc;
use tower::util::ServiceExt;

fn test_settings() -> Settings {
    Settings {
        database: sqlite_settings(),
        server: ServerSettings {
            host: "127.0.0.1".to_owned(),
            port: 0,
        },
        debug: true,
        secret_key: SecretKey::new("test-secret"),
    }
}

fn get_request(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

/// 健康检查测试
///
/// 验证健康检查端点是否正常工作
#[tokio::test]
async fn health_check_works() {
    let app = routes::routes();

    let response = app.oneshot(get_request("/health")).await.unwrap();

    assert_eq!(response.status(), StatusCode::OK);
}

/// 版本信息测试
#[tokio::test]
async fn version_returns_the_crate_version() {
    let app = routes::routes();

    let response = app.oneshot(get_request("/v1/version")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let body = axum::body::to_bytes(response.into_body(), 1024).await.unwrap();
    assert_eq!(&body[..], env!("CARGO_PKG_VERSION").as_bytes());
}

/// 应用工厂测试
///
/// 验证工厂合并外部API路由并注入会话管理器Extension
#[tokio::test]
async fn app_factory_mounts_scaffold_and_api_routes() {
    let settings = Arc::new(test_settings());
    let sessions = Arc::new(DatabaseSessionManager::from_connection(sqlite_pool().await));

    let api = Router::new().route(
        "/v1/ready",
        get(
            |Extension(sessions): Extension<Arc<DatabaseSessionManager>>| async move {
                if sessions.is_initialized().await {
                    (StatusCode::OK, "ready")
                } else {
                    (StatusCode::SERVICE_UNAVAILABLE, "not ready")
                }
            },
        ),
    );

    let server = app::app(settings, sessions.clone(), api);

    let response = server.clone().oneshot(get_request("/health")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    let response = server.clone().oneshot(get_request("/v1/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    // Shutdown path: dispose the pool, the injected manager reflects it
    sessions.close().await.unwrap();
    let response = server.oneshot(get_request("/v1/ready")).await.unwrap();
    assert_eq!(response.status(), StatusCode::SERVICE_UNAVAILABLE);
}

/// 未注册路由测试
#[tokio::test]
async fn unknown_routes_return_404() {
    let settings = Arc::new(test_settings());
    let sessions = Arc::new(DatabaseSessionManager::from_connection(sqlite_pool().await));

    let server = app::app(settings, sessions, Router::new());

    let response = server.oneshot(get_request("/v1/missing")).await.unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}
