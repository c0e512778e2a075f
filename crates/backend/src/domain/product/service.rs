use std::sync::Arc;

use contracts::domain::product::aggregate::ProductRecord;

use super::mapper;
use super::repository::ProductGateway;
use crate::shared::error::ApiError;

/// Оркестрация операций каталога поверх шлюза хранилища.
/// Зависимость передаётся конструктором, без глобального реестра.
#[derive(Clone)]
pub struct ProductService {
    gateway: Arc<dyn ProductGateway>,
}

impl ProductService {
    pub fn new(gateway: Arc<dyn ProductGateway>) -> Self {
        Self { gateway }
    }

    /// Создание (id = null) или полная замена изменяемых полей (id задан).
    pub async fn save(&self, record: ProductRecord) -> Result<ProductRecord, ApiError> {
        let product = mapper::record_to_product(record);
        let saved = self.gateway.save(product).await?;
        Ok(mapper::product_to_record(saved))
    }

    pub async fn get_product(&self, id: &str) -> Result<ProductRecord, ApiError> {
        self.gateway
            .find_by_id(id)
            .await?
            .map(mapper::product_to_record)
            .ok_or_else(|| ApiError::RecordNotFound(not_found_message(id)))
    }

    /// Все документы в порядке хранения, включая мягко удалённые.
    pub async fn get_all_products(&self) -> Result<Vec<ProductRecord>, ApiError> {
        Ok(mapper::products_to_records(self.gateway.find_all().await?))
    }

    /// Мягкое удаление. Read-modify-write без блокировок: при гонке двух
    /// удалений одного id побеждает последняя запись.
    pub async fn delete_product(&self, id: &str) -> Result<(), ApiError> {
        let mut product = self
            .gateway
            .find_by_id(id)
            .await?
            .ok_or_else(|| ApiError::RecordNotFound(not_found_message(id)))?;
        product.mark_deleted();
        self.gateway.save(product).await?;
        Ok(())
    }
}

fn not_found_message(id: &str) -> String {
    format!("Product with ID [{id}] not found")
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use contracts::domain::product::aggregate::Product;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Mutex;

    /// In-memory шлюз вместо sqlite: та же семантика назначения id
    /// и отметок времени, что у репозитория.
    #[derive(Default)]
    struct InMemoryGateway {
        items: Mutex<Vec<Product>>,
        writes: AtomicUsize,
    }

    #[async_trait]
    impl ProductGateway for InMemoryGateway {
        async fn save(&self, mut product: Product) -> Result<Product, ApiError> {
            self.writes.fetch_add(1, Ordering::SeqCst);
            let now = chrono::Utc::now();
            let mut items = self.items.lock().unwrap();
            match product.id.clone() {
                None => {
                    product.id = Some(format!("id-{}", items.len() + 1));
                    product.created_on = Some(now);
                    product.updated_on = Some(now);
                    items.push(product.clone());
                }
                Some(id) => {
                    let existing = items
                        .iter_mut()
                        .find(|item| item.id.as_deref() == Some(id.as_str()));
                    match existing {
                        Some(existing) => {
                            product.created_on = existing.created_on;
                            product.updated_on = Some(now);
                            *existing = product.clone();
                        }
                        None => {
                            product.created_on = Some(now);
                            product.updated_on = Some(now);
                            items.push(product.clone());
                        }
                    }
                }
            }
            Ok(product)
        }

        async fn find_by_id(&self, id: &str) -> Result<Option<Product>, ApiError> {
            let items = self.items.lock().unwrap();
            Ok(items
                .iter()
                .find(|item| item.id.as_deref() == Some(id))
                .cloned())
        }

        async fn find_all(&self) -> Result<Vec<Product>, ApiError> {
            Ok(self.items.lock().unwrap().clone())
        }
    }

    fn record(name: &str, price: f64, short_desc: &str) -> ProductRecord {
        ProductRecord {
            id: None,
            name: Some(name.into()),
            price: Some(price),
            short_desc: Some(short_desc.into()),
            long_desc: Some("About this item".into()),
            thumbnail: Some("".into()),
            image: Some("".into()),
            created_on: None,
            updated_on: None,
            deleted_on: None,
            active: Some(true),
        }
    }

    fn service() -> (Arc<InMemoryGateway>, ProductService) {
        let gateway = Arc::new(InMemoryGateway::default());
        (gateway.clone(), ProductService::new(gateway))
    }

    #[tokio::test]
    async fn save_returns_record_with_assigned_identity() {
        let (_, service) = service();

        let saved = service
            .save(record("iPhone 14", 58999.0, "iPhone 14 (128 GB) - Midnight"))
            .await
            .unwrap();

        assert!(saved.id.is_some());
        assert!(saved.created_on.is_some());
        assert!(saved.updated_on.is_some());
        assert_eq!(saved.name.as_deref(), Some("iPhone 14"));
        assert_eq!(saved.price, Some(58999.0));
        assert_eq!(saved.short_desc.as_deref(), Some("iPhone 14 (128 GB) - Midnight"));
        assert_eq!(saved.long_desc.as_deref(), Some("About this item"));
        assert_eq!(saved.active, Some(true));
    }

    #[tokio::test]
    async fn save_with_id_replaces_fields_and_keeps_created_on() {
        let (_, service) = service();

        let created = service
            .save(record("iPhone 14", 58999.0, "iPhone 14 (128 GB) - Midnight"))
            .await
            .unwrap();

        let mut changed = created.clone();
        changed.name = Some("iPhone 14 Pro".into());
        let updated = service.save(changed).await.unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.created_on, created.created_on);
        assert_eq!(updated.name.as_deref(), Some("iPhone 14 Pro"));
    }

    #[tokio::test]
    async fn get_product_returns_mapped_record() {
        let (_, service) = service();
        let saved = service
            .save(record("iPhone 14", 58999.0, "iPhone 14 (128 GB) - Midnight"))
            .await
            .unwrap();

        let found = service.get_product(saved.id.as_deref().unwrap()).await.unwrap();
        assert_eq!(found, saved);
    }

    #[tokio::test]
    async fn get_product_unknown_id_fails_with_exact_message() {
        let (_, service) = service();

        let err = service.get_product("testID").await.unwrap_err();
        match err {
            ApiError::RecordNotFound(message) => {
                assert_eq!(message, "Product with ID [testID] not found");
            }
            other => panic!("expected RecordNotFound, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn get_all_products_includes_soft_deleted_in_order() {
        let (_, service) = service();
        let first = service
            .save(record("iPhone 14", 58999.0, "iPhone 14 (128 GB) - Midnight"))
            .await
            .unwrap();
        service
            .save(record("iPhone 13", 49999.0, "iPhone 13 (128GB) - Purple"))
            .await
            .unwrap();
        service
            .delete_product(first.id.as_deref().unwrap())
            .await
            .unwrap();

        let all = service.get_all_products().await.unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].id, first.id);
        assert_eq!(all[0].active, Some(false));
        assert_eq!(all[1].name.as_deref(), Some("iPhone 13"));
    }

    #[tokio::test]
    async fn delete_product_marks_inactive_and_persists() {
        let (_, service) = service();
        let saved = service
            .save(record("iPhone 14", 58999.0, "iPhone 14 (128 GB) - Midnight"))
            .await
            .unwrap();
        let id = saved.id.as_deref().unwrap().to_string();

        service.delete_product(&id).await.unwrap();

        // Документ не вычищается: он остаётся читаемым, но неактивным
        let found = service.get_product(&id).await.unwrap();
        assert_eq!(found.active, Some(false));
        assert!(found.deleted_on.is_some());
        assert_eq!(found.name.as_deref(), Some("iPhone 14"));
    }

    #[tokio::test]
    async fn delete_product_unknown_id_writes_nothing() {
        let (gateway, service) = service();

        let err = service.delete_product("testID").await.unwrap_err();
        match err {
            ApiError::RecordNotFound(message) => {
                assert_eq!(message, "Product with ID [testID] not found");
            }
            other => panic!("expected RecordNotFound, got {other:?}"),
        }
        assert_eq!(gateway.writes.load(Ordering::SeqCst), 0);
    }
}
