use async_trait::async_trait;
use chrono::Utc;
use contracts::domain::product::aggregate::Product;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sea_orm::entity::prelude::*;
use sea_orm::{ActiveValue::NotSet, EntityTrait, Set};

use crate::domain::product::validator;
use crate::shared::error::ApiError;

#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "product")]
pub struct Model {
    #[sea_orm(primary_key, auto_increment = false)]
    pub id: String,
    pub name: Option<String>,
    pub price: Option<f64>,
    pub short_desc: Option<String>,
    pub long_desc: Option<String>,
    pub thumbnail: Option<String>,
    pub image: Option<String>,
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,
    pub updated_on: Option<chrono::DateTime<chrono::Utc>>,
    pub deleted_on: Option<chrono::DateTime<chrono::Utc>>,
    pub active: Option<bool>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl From<Model> for Product {
    fn from(m: Model) -> Self {
        Product {
            id: Some(m.id),
            name: m.name,
            price: m.price,
            short_desc: m.short_desc,
            long_desc: m.long_desc,
            thumbnail: m.thumbnail,
            image: m.image,
            created_on: m.created_on,
            updated_on: m.updated_on,
            deleted_on: m.deleted_on,
            active: m.active,
        }
    }
}

/// Шлюз хранилища документов. id и отметки времени назначает слой
/// хранения: createdOn при вставке, updatedOn при каждой записи.
#[async_trait]
pub trait ProductGateway: Send + Sync {
    async fn save(&self, product: Product) -> Result<Product, ApiError>;
    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, ApiError>;
    async fn find_all(&self) -> Result<Vec<Product>, ApiError>;
}

pub struct ProductRepository {
    conn: DatabaseConnection,
}

impl ProductRepository {
    pub fn new(conn: DatabaseConnection) -> Self {
        Self { conn }
    }

    async fn insert(
        &self,
        id: String,
        product: &Product,
        now: chrono::DateTime<chrono::Utc>,
    ) -> Result<Product, ApiError> {
        let active = ActiveModel {
            id: Set(id),
            name: Set(product.name.clone()),
            price: Set(product.price),
            short_desc: Set(product.short_desc.clone()),
            long_desc: Set(product.long_desc.clone()),
            thumbnail: Set(product.thumbnail.clone()),
            image: Set(product.image.clone()),
            created_on: Set(Some(now)),
            updated_on: Set(Some(now)),
            deleted_on: Set(product.deleted_on),
            active: Set(product.active),
        };
        Ok(active.insert(&self.conn).await?.into())
    }
}

#[async_trait]
impl ProductGateway for ProductRepository {
    async fn save(&self, product: Product) -> Result<Product, ApiError> {
        // Повторная проверка ограничений на границе хранилища
        validator::validate_entity(&product).map_err(ApiError::ConstraintViolation)?;

        let now = Utc::now();
        match product.id.clone() {
            None => self.insert(Uuid::new_v4().to_string(), &product, now).await,
            Some(id) => {
                let exists = Entity::find_by_id(id.clone())
                    .one(&self.conn)
                    .await?
                    .is_some();
                if !exists {
                    // upsert-by-replace: неизвестный id вставляется как новый документ
                    return self.insert(id, &product, now).await;
                }

                let active = ActiveModel {
                    id: Set(id),
                    name: Set(product.name.clone()),
                    price: Set(product.price),
                    short_desc: Set(product.short_desc.clone()),
                    long_desc: Set(product.long_desc.clone()),
                    thumbnail: Set(product.thumbnail.clone()),
                    image: Set(product.image.clone()),
                    created_on: NotSet,
                    updated_on: Set(Some(now)),
                    deleted_on: Set(product.deleted_on),
                    active: Set(product.active),
                };
                Ok(active.update(&self.conn).await?.into())
            }
        }
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Product>, ApiError> {
        let result = Entity::find_by_id(id.to_string()).one(&self.conn).await?;
        Ok(result.map(Into::into))
    }

    async fn find_all(&self) -> Result<Vec<Product>, ApiError> {
        // Без фильтра по active: мягко удалённые документы тоже возвращаются
        let items = Entity::find().all(&self.conn).await?;
        Ok(items.into_iter().map(Into::into).collect())
    }
}
