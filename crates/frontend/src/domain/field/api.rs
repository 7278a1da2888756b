use contracts::domain::common::EntityId;
use contracts::domain::field::{Field, FieldPayload};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

pub async fn fetch_fields() -> Result<Vec<Field>, ApiError> {
    get_json("/field").await
}

pub async fn fetch_field(id: EntityId) -> Result<Field, ApiError> {
    get_json(&format!("/field/{}", id)).await
}

pub async fn create_field(payload: &FieldPayload) -> Result<Field, ApiError> {
    post_json("/field", payload).await
}

pub async fn update_field(id: EntityId, payload: &FieldPayload) -> Result<(), ApiError> {
    put_json(&format!("/field/{}", id), payload).await
}

pub async fn delete_field(id: EntityId) -> Result<(), ApiError> {
    delete(&format!("/field/{}", id)).await
}
