// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 数据库基础设施
///
/// 提供连接池、会话管理和通用查询集
pub mod database;
