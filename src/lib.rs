//! # 水果目录服务
//!
//! 基于 Axum 的内存 CRUD 服务：
//! - `GET /fruits` 列出全部水果
//! - `GET /fruits/:id` 按 id 查询
//! - `POST /fruits` 校验必填字段与名称唯一后创建
//!
//! 分层结构沿用 app / core / infrastructure 的划分。

pub mod app;
pub mod config;
pub mod core;
pub mod infrastructure;

pub use crate::app::fruit::{AppState, CatalogStore, CreateFruitRequest, Fruit, FruitService};
pub use crate::app::{build_app, create_routes};
pub use crate::config::{AppConfig, ConfigError};
pub use crate::core::error::{CoreError, ErrorResponse};
