use contracts::domain::common::EntityId;
use contracts::domain::lot::{Lot, LotPayload};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

pub async fn fetch_lots() -> Result<Vec<Lot>, ApiError> {
    get_json("/lot").await
}

pub async fn create_lot(payload: &LotPayload) -> Result<Lot, ApiError> {
    post_json("/lot", payload).await
}

pub async fn update_lot(id: EntityId, payload: &LotPayload) -> Result<(), ApiError> {
    put_json(&format!("/lot/{}", id), payload).await
}

pub async fn delete_lot(id: EntityId) -> Result<(), ApiError> {
    delete(&format!("/lot/{}", id)).await
}
