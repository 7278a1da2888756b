use contracts::domain::common::EntityId;
use contracts::domain::machinery::{Machinery, MachineryPayload};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

pub async fn fetch_machinery() -> Result<Vec<Machinery>, ApiError> {
    get_json("/machinery").await
}

pub async fn create_machinery(payload: &MachineryPayload) -> Result<Machinery, ApiError> {
    post_json("/machinery", payload).await
}

pub async fn update_machinery(id: EntityId, payload: &MachineryPayload) -> Result<(), ApiError> {
    put_json(&format!("/machinery/{}", id), payload).await
}

pub async fn delete_machinery(id: EntityId) -> Result<(), ApiError> {
    delete(&format!("/machinery/{}", id)).await
}
