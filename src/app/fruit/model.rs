//! 水果数据模型

use serde::{de, Deserialize, Deserializer, Serialize};
use validator::Validate;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Fruit {
    pub id: u64,
    pub name: String,
    pub price: f64,
}

/// 通过校验、等待写入目录的水果
#[derive(Debug, Clone, PartialEq)]
pub struct NewFruit {
    pub name: String,
    pub price: f64,
}

/// 创建水果请求
///
/// 字段都是 `Option`，缺失字段交给 `validate` 报 422，而不是在反序列化阶段失败。
#[derive(Debug, Default, Deserialize, Validate)]
pub struct CreateFruitRequest {
    #[validate(
        required(message = "name 是必填字段"),
        length(min = 1, message = "name 不能为空")
    )]
    pub name: Option<String>,

    #[serde(default, deserialize_with = "deserialize_price")]
    #[validate(required(message = "price 是必填字段"))]
    pub price: Option<f64>,
}

impl CreateFruitRequest {
    pub fn new(name: impl Into<String>, price: f64) -> Self {
        Self {
            name: Some(name.into()),
            price: Some(price),
        }
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum PriceInput {
    Number(f64),
    Text(String),
}

/// 价格既接受 JSON 数字，也接受能解析成有限数字的字符串
fn deserialize_price<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<PriceInput>::deserialize(deserializer)? {
        None => Ok(None),
        Some(PriceInput::Number(price)) => Ok(Some(price)),
        Some(PriceInput::Text(text)) => text
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|price| price.is_finite())
            .map(Some)
            .ok_or_else(|| de::Error::custom(format!("price 无法转换为数字: {:?}", text))),
    }
}
