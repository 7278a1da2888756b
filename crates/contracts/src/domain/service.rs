use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, PickerItem};

/// Servicio de campo ofrecido por la empresa (siembra, pulverización,
/// cosecha...). Solo lectura desde este panel: las órdenes de trabajo lo
/// referencian por `serviceId`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FieldService {
    pub id: EntityId,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

impl PickerItem for FieldService {
    fn picker_id(&self) -> EntityId {
        self.id
    }

    fn picker_label(&self) -> String {
        self.name.clone()
    }
}
