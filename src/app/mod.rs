//! 应用层：路由装配

pub mod fruit;

use axum::{middleware, routing::get, Router};
use std::time::Duration;
use tower::ServiceBuilder;
use tower_http::{
    cors::{Any, CorsLayer},
    timeout::TimeoutLayer,
    trace::TraceLayer,
};

use crate::core::middleware::request_logging_middleware;
use fruit::handler::{self, AppState};

/// 业务路由，不带中间件
pub fn create_routes() -> Router<AppState> {
    Router::new()
        .route("/fruits", get(handler::list_fruits).post(handler::create_fruit))
        .route("/fruits/:id", get(handler::get_fruit))
        .route("/health", get(handler::health_check))
}

/// 完整应用：路由 + 日志、追踪、CORS、超时
pub fn build_app(state: AppState, request_timeout: Duration) -> Router {
    create_routes()
        .layer(
            ServiceBuilder::new()
                .layer(TraceLayer::new_for_http())
                .layer(middleware::from_fn(request_logging_middleware))
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                )
                .layer(TimeoutLayer::new(request_timeout)),
        )
        .with_state(state)
}
