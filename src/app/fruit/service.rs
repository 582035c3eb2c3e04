//! 水果业务服务

use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, info};

use super::model::{CreateFruitRequest, Fruit};
use super::store::CatalogStore;
use super::validation::validate_new_fruit;
use crate::config::SeedFruit;
use crate::core::error::CoreError;

#[derive(Clone, Default)]
pub struct FruitService {
    store: Arc<RwLock<CatalogStore>>,
}

impl FruitService {
    pub fn new(store: CatalogStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub async fn list_fruits(&self) -> Vec<Fruit> {
        self.store.read().await.list().to_vec()
    }

    /// 负数 id 不可能存在，直接视为未找到
    pub async fn get_fruit(&self, id: i64) -> Result<Fruit, CoreError> {
        let not_found = || CoreError::NotFound(format!("水果 {} 不存在", id));
        let id = u64::try_from(id).map_err(|_| not_found())?;

        self.store
            .read()
            .await
            .get_by_id(id)
            .cloned()
            .ok_or_else(not_found)
    }

    /// 校验与写入在同一把写锁内完成，并发创建同名水果时只有一个成功
    pub async fn create_fruit(&self, request: CreateFruitRequest) -> Result<Fruit, CoreError> {
        let mut store = self.store.write().await;
        let new_fruit = validate_new_fruit(request, &store)?;
        let fruit = store.append(new_fruit);
        info!("✅ 已创建水果 id={} name={}", fruit.id, fruit.name);
        Ok(fruit)
    }

    /// 写入初始数据，走与 POST 相同的校验
    pub async fn seed(&self, seeds: &[SeedFruit]) -> Result<usize, CoreError> {
        for seed in seeds {
            self.create_fruit(CreateFruitRequest::new(seed.name.clone(), seed.price))
                .await?;
        }
        debug!("写入 {} 个初始水果", seeds.len());
        Ok(seeds.len())
    }

    pub async fn count(&self) -> usize {
        self.store.read().await.len()
    }

    pub async fn reset(&self) {
        self.store.write().await.clear();
    }
}
