// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

/// 应用模块
///
/// 负责构建axum应用实例并管理服务的启动与关闭
pub mod app;

/// 配置模块
///
/// 处理应用程序的配置设置和环境变量
pub mod config;

/// 基础设施模块
///
/// 提供数据库连接池、会话管理和通用查询集
pub mod infrastructure;

/// 表示层模块
///
/// 提供脚手架自带的公共路由（健康检查、版本信息）
pub mod presentation;

/// 工具模块
///
/// 提供错误类型和遥测初始化
pub mod utils;
