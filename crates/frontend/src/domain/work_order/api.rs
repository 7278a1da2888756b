use contracts::domain::common::EntityId;
use contracts::domain::work_order::{WorkOrder, WorkOrderPayload};

use crate::shared::api_utils::{delete, get_json, post_json, put_json, ApiError};

pub async fn fetch_work_orders() -> Result<Vec<WorkOrder>, ApiError> {
    get_json("/workorders").await
}

pub async fn create_work_order(payload: &WorkOrderPayload) -> Result<WorkOrder, ApiError> {
    post_json("/workorders", payload).await
}

pub async fn update_work_order(id: EntityId, payload: &WorkOrderPayload) -> Result<(), ApiError> {
    put_json(&format!("/workorders/{}", id), payload).await
}

pub async fn delete_work_order(id: EntityId) -> Result<(), ApiError> {
    delete(&format!("/workorders/{}", id)).await
}
