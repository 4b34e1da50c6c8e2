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

use crate::config::settings::{ServerSettings, Settings};
use crate::infrastructure::database::session::DatabaseSessionManager;
use crate::presentation::routes;
use axum::{Extension, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;
use tracing::info;

/// 构建axum应用实例
///
/// 将脚手架自带的公共路由与外部提供的API路由合并，
/// 并把配置与会话管理器作为Extension注入请求管线
///
/// # 参数
///
/// * `settings` - 应用配置
/// * `sessions` - 数据库会话管理器
/// * `api` - 由使用方注册的API路由
///
/// # 返回值
///
/// 返回配置好的应用路由
pub fn app(
    settings: Arc<Settings>,
    sessions: Arc<DatabaseSessionManager>,
    api: Router,
) -> Router {
    Router::new()
        .merge(routes::routes())
        .merge(api)
        .layer(TraceLayer::new_for_http())
        .layer(Extension(settings))
        .layer(Extension(sessions))
}

/// 启动HTTP服务并管理生命周期
///
/// 收到退出信号后优雅停机；若会话管理器仍持有连接池则将其关闭
pub async fn serve(
    app: Router,
    settings: &ServerSettings,
    sessions: Arc<DatabaseSessionManager>,
) -> anyhow::Result<()> {
    let addr = format!("{}:{}", settings.host, settings.port);
    let listener = TcpListener::bind(&addr).await?;
    info!("Server listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    if sessions.is_initialized().await {
        sessions.close().await?;
        info!("Database connections disposed");
    }

    Ok(())
}

async fn shutdown_signal() {
    let ctrl_c = async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::warn!("Failed to install Ctrl+C handler: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate()) {
            Ok(mut sig) => {
                sig.recv().await;
            }
            Err(e) => {
                tracing::warn!("Failed to install SIGTERM handler: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => {},
        _ = terminate => {},
    }

    info!("Shutdown signal received");
}
