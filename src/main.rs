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

use appbase::app;
use appbase::config::settings::Settings;
use appbase::infrastructure::database::session::DatabaseSessionManager;
use appbase::utils::telemetry;
use axum::Router;
use std::sync::Arc;
use tracing::info;

/// 主函数
///
/// 应用程序入口点，负责初始化所有组件并启动服务
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // 1. Initialize logging
    telemetry::init_telemetry();
    info!("Starting appbase...");

    // 2. Load configuration
    let settings = Arc::new(Settings::new()?);
    info!("Configuration loaded");

    // 3. Connect to database
    let sessions = Arc::new(DatabaseSessionManager::connect(&settings.database).await?);
    info!("Database connection established");

    // 4. Build application
    // Route modules are registered by the consuming service; the scaffold
    // itself only mounts health and version.
    let api = Router::new();
    let server = app::app(settings.clone(), sessions.clone(), api);

    // 5. Start HTTP server
    app::serve(server, &settings.server, sessions).await
}
