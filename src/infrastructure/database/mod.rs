// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

//! 数据库基础设施模块
//!
//! 使用SeaORM框架进行对象关系映射。实体由使用方定义，
//! 约定每张表携带自增主键`id`和带时区的`created_at`列，
//! 并通过[`queryset::Objects`]获得Django风格的`objects()`查询入口。

/// 连接池构建
pub mod connection;

/// 通用查询集
pub mod queryset;

/// 数据库会话管理
pub mod session;
