// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm::{DbErr, TransactionError};
use thiserror::Error;

/// 会话层错误类型
#[derive(Error, Debug)]
pub enum SessionError {
    /// 会话管理器未初始化或已关闭
    #[error("DatabaseSessionManager is not initialized")]
    NotInitialized,

    /// 数据库错误
    #[error("Database error: {0}")]
    Database(#[from] DbErr),
}

impl From<TransactionError<DbErr>> for SessionError {
    fn from(err: TransactionError<DbErr>) -> Self {
        match err {
            TransactionError::Connection(e) | TransactionError::Transaction(e) => {
                Self::Database(e)
            }
        }
    }
}
