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

use crate::config::settings::DatabaseSettings;
use crate::infrastructure::database::connection;
use crate::utils::errors::SessionError;
use sea_orm::{DatabaseConnection, DatabaseTransaction, DbErr, TransactionTrait};
use std::future::Future;
use std::pin::Pin;
use tokio::sync::RwLock;

/// 数据库会话管理器
///
/// 持有唯一的连接池并产生具备事务作用域的会话。
/// `close`之后任何操作都会返回[`SessionError::NotInitialized`]。
pub struct DatabaseSessionManager {
    /// 连接池，关闭后置为None
    pool: RwLock<Option<DatabaseConnection>>,
}

impl DatabaseSessionManager {
    /// 根据数据库配置建立连接池并创建管理器
    ///
    /// # 参数
    ///
    /// * `settings` - 数据库配置
    ///
    /// # 返回值
    ///
    /// * `Ok(DatabaseSessionManager)` - 新的会话管理器
    /// * `Err(DbErr)` - 连接池创建失败
    pub async fn connect(settings: &DatabaseSettings) -> Result<Self, DbErr> {
        let pool = connection::create_pool(settings).await?;
        Ok(Self::from_connection(pool))
    }

    /// 从已有连接池创建管理器
    pub fn from_connection(pool: DatabaseConnection) -> Self {
        Self {
            pool: RwLock::new(Some(pool)),
        }
    }

    /// 管理器是否仍持有连接池
    pub async fn is_initialized(&self) -> bool {
        self.pool.read().await.is_some()
    }

    /// 获取连接池句柄
    pub async fn connection(&self) -> Result<DatabaseConnection, SessionError> {
        self.pool
            .read()
            .await
            .clone()
            .ok_or(SessionError::NotInitialized)
    }

    /// 关闭并释放连接池
    ///
    /// 重复关闭会返回[`SessionError::NotInitialized`]
    pub async fn close(&self) -> Result<(), SessionError> {
        let pool = self
            .pool
            .write()
            .await
            .take()
            .ok_or(SessionError::NotInitialized)?;
        pool.close().await?;
        Ok(())
    }

    /// 开启手动作用域的事务
    ///
    /// 调用方负责`commit`；事务被直接丢弃时自动回滚
    pub async fn begin(&self) -> Result<DatabaseTransaction, SessionError> {
        let pool = self.connection().await?;
        Ok(pool.begin().await?)
    }

    /// 在事务作用域内执行闭包
    ///
    /// 闭包返回`Ok`时提交，返回`Err`时回滚
    ///
    /// # 参数
    ///
    /// * `callback` - 在事务中执行的异步闭包
    pub async fn session<F, T>(&self, callback: F) -> Result<T, SessionError>
    where
        F: for<'c> FnOnce(
                &'c DatabaseTransaction,
            )
                -> Pin<Box<dyn Future<Output = Result<T, DbErr>> + Send + 'c>>
            + Send,
        T: Send,
    {
        let pool = self.connection().await?;
        pool.transaction(callback).await.map_err(SessionError::from)
    }
}
