//! 水果目录存储
//!
//! 进程内的有序列表，不做持久化。并发访问由上层服务的锁保证。

use super::model::{Fruit, NewFruit};

#[derive(Debug)]
pub struct CatalogStore {
    fruits: Vec<Fruit>,
    next_id: u64,
}

impl Default for CatalogStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogStore {
    pub fn new() -> Self {
        Self {
            fruits: Vec::new(),
            next_id: 1,
        }
    }

    /// 按插入顺序返回全部水果
    pub fn list(&self) -> &[Fruit] {
        &self.fruits
    }

    pub fn get_by_id(&self, id: u64) -> Option<&Fruit> {
        self.fruits.iter().find(|fruit| fruit.id == id)
    }

    /// 名称精确匹配，区分大小写
    pub fn contains_name(&self, name: &str) -> bool {
        self.fruits.iter().any(|fruit| fruit.name == name)
    }

    /// 追加一条记录并分配新的 id；调用方负责先完成校验
    pub fn append(&mut self, fruit: NewFruit) -> Fruit {
        let fruit = Fruit {
            id: self.next_id,
            name: fruit.name,
            price: fruit.price,
        };
        self.next_id += 1;
        self.fruits.push(fruit.clone());
        fruit
    }

    pub fn len(&self) -> usize {
        self.fruits.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fruits.is_empty()
    }

    /// 清空目录，id 重新从 1 开始
    pub fn clear(&mut self) {
        self.fruits.clear();
        self.next_id = 1;
    }
}
