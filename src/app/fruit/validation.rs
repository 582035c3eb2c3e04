//! 创建请求校验：必填字段与名称唯一

use tracing::warn;
use validator::Validate;

use super::model::{CreateFruitRequest, NewFruit};
use super::store::CatalogStore;
use crate::core::error::CoreError;

/// 校验创建请求，成功时返回可以直接写入目录的水果
///
/// 缺少字段返回 `UnprocessableEntity`，名称已存在返回 `Conflict`。
pub fn validate_new_fruit(
    request: CreateFruitRequest,
    store: &CatalogStore,
) -> Result<NewFruit, CoreError> {
    if let Err(errors) = request.validate() {
        let err = CoreError::from(errors);
        warn!("创建水果请求校验失败: {}", err);
        return Err(err);
    }

    let (name, price) = match (request.name, request.price) {
        (Some(name), Some(price)) => (name, price),
        _ => {
            return Err(CoreError::UnprocessableEntity(
                "name 和 price 都是必填字段".to_string(),
            ))
        }
    };

    if store.contains_name(&name) {
        warn!("水果名称重复: {}", name);
        return Err(CoreError::Conflict(format!("水果 {} 已存在", name)));
    }

    Ok(NewFruit { name, price })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn seeded_store() -> CatalogStore {
        let mut store = CatalogStore::new();
        store.append(NewFruit {
            name: "apple".to_string(),
            price: 200.0,
        });
        store
    }

    #[test]
    fn test_valid_request_passes() {
        let store = seeded_store();
        let fruit = validate_new_fruit(CreateFruitRequest::new("Banana", 200.0), &store).unwrap();
        assert_eq!(
            fruit,
            NewFruit {
                name: "Banana".to_string(),
                price: 200.0
            }
        );
    }

    #[test]
    fn test_duplicate_name_conflicts_regardless_of_price() {
        let store = seeded_store();
        for price in [200.0, 1.0, 0.0] {
            let result = validate_new_fruit(CreateFruitRequest::new("apple", price), &store);
            assert!(matches!(result, Err(CoreError::Conflict(_))));
        }
    }

    #[test]
    fn test_name_match_is_case_sensitive() {
        let store = seeded_store();
        assert!(validate_new_fruit(CreateFruitRequest::new("Apple", 200.0), &store).is_ok());
    }

    #[test]
    fn test_missing_fields_are_unprocessable() {
        let store = seeded_store();
        let cases = [
            CreateFruitRequest {
                name: Some("Banana".to_string()),
                price: None,
            },
            CreateFruitRequest {
                name: None,
                price: Some(123.0),
            },
            CreateFruitRequest::default(),
            CreateFruitRequest::new("", 10.0),
        ];

        for request in cases {
            let result = validate_new_fruit(request, &store);
            assert!(matches!(result, Err(CoreError::UnprocessableEntity(_))));
        }
    }

    #[test]
    fn test_missing_field_checked_before_uniqueness() {
        let store = seeded_store();
        let request = CreateFruitRequest {
            name: Some("apple".to_string()),
            price: None,
        };
        assert!(matches!(
            validate_new_fruit(request, &store),
            Err(CoreError::UnprocessableEntity(_))
        ));
    }

    #[test]
    fn test_error_message_lists_every_missing_field() {
        let store = CatalogStore::new();
        let err = validate_new_fruit(CreateFruitRequest::default(), &store).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("name 是必填字段"));
        assert!(message.contains("price 是必填字段"));
    }
}
