//! 水果处理器

use axum::{
    extract::{
        rejection::{JsonRejection, PathRejection},
        Path, State,
    },
    http::StatusCode,
    response::Json,
};

use super::{
    model::{CreateFruitRequest, Fruit},
    service::FruitService,
};
use crate::core::error::CoreError;

#[derive(Clone)]
pub struct AppState {
    pub fruit_service: FruitService,
}

pub async fn list_fruits(State(state): State<AppState>) -> Json<Vec<Fruit>> {
    Json(state.fruit_service.list_fruits().await)
}

/// id 不是整数时同样返回 404
pub async fn get_fruit(
    State(state): State<AppState>,
    id: Result<Path<i64>, PathRejection>,
) -> Result<Json<Fruit>, CoreError> {
    let Path(id) = id?;
    let fruit = state.fruit_service.get_fruit(id).await?;
    Ok(Json(fruit))
}

pub async fn create_fruit(
    State(state): State<AppState>,
    payload: Result<Json<CreateFruitRequest>, JsonRejection>,
) -> Result<(StatusCode, Json<Fruit>), CoreError> {
    let Json(payload) = payload?;
    let fruit = state.fruit_service.create_fruit(payload).await?;
    Ok((StatusCode::CREATED, Json(fruit)))
}

/// 健康检查
pub async fn health_check(State(state): State<AppState>) -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "version": env!("CARGO_PKG_VERSION"),
        "catalog": {
            "type": "in-memory",
            "fruits_count": state.fruit_service.count().await
        }
    }))
}
