use contracts::domain::service::FieldService;

use crate::shared::api_utils::{get_json, ApiError};

/// Catálogo de servicios de campo; solo lectura desde este panel.
pub async fn fetch_services() -> Result<Vec<FieldService>, ApiError> {
    get_json("/service").await
}
