use contracts::domain::client::{Client, ClientPayload};
use contracts::domain::common::EntityId;

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

pub async fn fetch_clients() -> Result<Vec<Client>, ApiError> {
    get_json("/client").await
}

pub async fn fetch_client(id: EntityId) -> Result<Client, ApiError> {
    get_json(&format!("/client/{}", id)).await
}

pub async fn create_client(payload: &ClientPayload) -> Result<Client, ApiError> {
    post_json("/client", payload).await
}

pub async fn update_client(id: EntityId, payload: &ClientPayload) -> Result<(), ApiError> {
    put_json(&format!("/client/{}", id), payload).await
}

pub async fn delete_client(id: EntityId) -> Result<(), ApiError> {
    delete(&format!("/client/{}", id)).await
}
