use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::Json;
use contracts::domain::product::aggregate::ProductRecord;

use crate::domain::product::validator;
use crate::routes::AppState;
use crate::shared::error::ApiError;

/// POST /api/v1/product
///
/// id = null в теле — создание (201), иначе полная замена (200).
pub async fn save(
    State(state): State<AppState>,
    Json(record): Json<ProductRecord>,
) -> Result<impl IntoResponse, ApiError> {
    // Валидация до сервиса: при нарушении сервис не вызывается
    validator::validate(&record).map_err(ApiError::Validation)?;

    let is_update = record.id.is_some();
    let saved = state.products.save(record).await?;
    let status = if is_update {
        StatusCode::OK
    } else {
        StatusCode::CREATED
    };
    Ok((status, Json(saved)))
}

/// GET /api/v1/product/:id
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<ProductRecord>, ApiError> {
    Ok(Json(state.products.get_product(&id).await?))
}

/// GET /api/v1/product
pub async fn get_all_products(
    State(state): State<AppState>,
) -> Result<Json<Vec<ProductRecord>>, ApiError> {
    Ok(Json(state.products.get_all_products().await?))
}

/// DELETE /api/v1/product/:id
pub async fn delete_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<String, ApiError> {
    state.products.delete_product(&id).await?;
    // Текст подтверждения исторический: без разделителя перед id
    Ok(format!("Product Deleted with id{id}"))
}
