use serde::{Deserialize, Serialize};

// ============================================================================
// Entity
// ============================================================================

/// Товар каталога (persisted entity).
///
/// Все поля опциональны на уровне типа: обязательность `name` / `price` /
/// `shortDesc` обеспечивает валидатор, а `id` и отметки времени назначает
/// слой хранения при записи.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,

    #[serde(rename = "shortDesc")]
    pub short_desc: Option<String>,

    #[serde(rename = "longDesc")]
    pub long_desc: Option<String>,

    pub thumbnail: Option<String>,
    pub image: Option<String>,

    #[serde(rename = "createdOn")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedOn")]
    pub updated_on: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "deletedOn")]
    pub deleted_on: Option<chrono::DateTime<chrono::Utc>>,

    pub active: Option<bool>,
}

impl Product {
    /// Мягкое удаление: документ остаётся в хранилище.
    /// Обратного перехода в active нет.
    pub fn mark_deleted(&mut self) {
        self.deleted_on = Some(chrono::Utc::now());
        self.active = Some(false);
    }
}

// ============================================================================
// Forms / DTOs
// ============================================================================

/// Wire-представление товара. Поле в поле совпадает с [`Product`]:
/// `id = null` во входящем теле означает создание, не-null — полную замену
/// изменяемых полей существующего документа.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct ProductRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub price: Option<f64>,

    #[serde(rename = "shortDesc")]
    pub short_desc: Option<String>,

    #[serde(rename = "longDesc")]
    pub long_desc: Option<String>,

    pub thumbnail: Option<String>,
    pub image: Option<String>,

    #[serde(rename = "createdOn")]
    pub created_on: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "updatedOn")]
    pub updated_on: Option<chrono::DateTime<chrono::Utc>>,

    #[serde(rename = "deletedOn")]
    pub deleted_on: Option<chrono::DateTime<chrono::Utc>>,

    pub active: Option<bool>,
}
