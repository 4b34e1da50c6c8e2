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

use super::helpers::{count_records, sqlite_pool};
use appbase::infrastructure::database::session::DatabaseSessionManager;
use appbase::utils::errors::SessionError;
use sea_orm::{ConnectionTrait, DbErr};

const INSERT_ALPHA: &str =
    "INSERT INTO records (name, status, created_at) VALUES ('alpha', 'active', '2025-01-01T00:00:00Z')";

async fn setup() -> DatabaseSessionManager {
    DatabaseSessionManager::from_connection(sqlite_pool().await)
}

/// 会话提交测试
///
/// 闭包返回Ok时事务应当提交
#[tokio::test]
async fn session_commits_on_success() {
    let manager = setup().await;

    manager
        .session(|txn| {
            Box::pin(async move {
                txn.execute_unprepared(INSERT_ALPHA).await?;
                Ok(())
            })
        })
        .await
        .unwrap();

    let db = manager.connection().await.unwrap();
    assert_eq!(count_records(&db).await, 1);
}

/// 会话回滚测试
///
/// 闭包返回Err时事务应当回滚，错误向上传播
#[tokio::test]
async fn session_rolls_back_on_error() {
    let manager = setup().await;

    let result: Result<(), SessionError> = manager
        .session(|txn| {
            Box::pin(async move {
                txn.execute_unprepared(INSERT_ALPHA).await?;
                Err(DbErr::Custom("boom".to_owned()))
            })
        })
        .await;

    assert!(matches!(result, Err(SessionError::Database(_))));

    let db = manager.connection().await.unwrap();
    assert_eq!(count_records(&db).await, 0);
}

/// 手动事务提交测试
#[tokio::test]
async fn manual_transaction_commits_when_asked() {
    let manager = setup().await;

    let txn = manager.begin().await.unwrap();
    txn.execute_unprepared(INSERT_ALPHA).await.unwrap();
    txn.commit().await.unwrap();

    let db = manager.connection().await.unwrap();
    assert_eq!(count_records(&db).await, 1);
}

/// 手动事务丢弃回滚测试
///
/// 未提交的事务被丢弃时应当回滚
#[tokio::test]
async fn dropped_transaction_rolls_back() {
    let manager = setup().await;

    {
        let txn = manager.begin().await.unwrap();
        txn.execute_unprepared(INSERT_ALPHA).await.unwrap();
        // no commit
    }

    let db = manager.connection().await.unwrap();
    assert_eq!(count_records(&db).await, 0);
}

/// 未初始化管理器测试
///
/// close之后任何操作都应返回NotInitialized
#[tokio::test]
async fn closed_manager_reports_not_initialized() {
    let manager = setup().await;
    assert!(manager.is_initialized().await);

    manager.close().await.unwrap();
    assert!(!manager.is_initialized().await);

    let err = manager.close().await.unwrap_err();
    assert!(matches!(err, SessionError::NotInitialized));

    let err = manager.connection().await.unwrap_err();
    assert!(matches!(err, SessionError::NotInitialized));

    let err = manager.begin().await.unwrap_err();
    assert!(matches!(err, SessionError::NotInitialized));

    let result: Result<(), SessionError> = manager
        .session(|_txn| Box::pin(async { Ok(()) }))
        .await;
    assert!(matches!(result, Err(SessionError::NotInitialized)));
}
