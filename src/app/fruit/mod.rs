//! 水果目录：模型、存储、校验、服务与处理器

pub mod handler;
pub mod model;
pub mod service;
pub mod store;
pub mod validation;

pub use handler::AppState;
pub use model::{CreateFruitRequest, Fruit, NewFruit};
pub use service::FruitService;
pub use store::CatalogStore;
