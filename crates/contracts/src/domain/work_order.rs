use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::selection::SelectionChain;
use crate::shared::validation::{
    parse_date, parse_optional_price, require_text, FieldIssue, IssueList,
};

/// Estado de una orden de trabajo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum WorkOrderStatus {
    #[serde(rename = "Pendiente")]
    Pendiente,
    #[serde(rename = "En Proceso")]
    EnProceso,
    #[serde(rename = "Finalizada")]
    Finalizada,
    #[serde(rename = "Cancelada")]
    Cancelada,
}

impl WorkOrderStatus {
    pub const ALL: [WorkOrderStatus; 4] = [
        WorkOrderStatus::Pendiente,
        WorkOrderStatus::EnProceso,
        WorkOrderStatus::Finalizada,
        WorkOrderStatus::Cancelada,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            WorkOrderStatus::Pendiente => "Pendiente",
            WorkOrderStatus::EnProceso => "En Proceso",
            WorkOrderStatus::Finalizada => "Finalizada",
            WorkOrderStatus::Cancelada => "Cancelada",
        }
    }

    pub fn from_str_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == label)
    }
}

impl std::fmt::Display for WorkOrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Renglón de lote afectado a una orden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotDetail {
    #[serde(rename = "lotId")]
    pub lot_id: EntityId,
}

/// Renglón de maquinaria afectada a una orden.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MachineryDetail {
    #[serde(rename = "machineryId")]
    pub machinery_id: EntityId,
}

/// Orden de trabajo: vincula cliente, campo, lotes, maquinarias y servicio.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkOrder {
    pub id: EntityId,
    pub name: String,
    pub init_date: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<NaiveDate>,
    pub status: WorkOrderStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "clientId")]
    pub client_id: EntityId,
    #[serde(rename = "fieldId")]
    pub field_id: EntityId,
    #[serde(rename = "serviceId")]
    pub service_id: EntityId,
    #[serde(rename = "lotDetails", default)]
    pub lot_details: Vec<LotDetail>,
    #[serde(rename = "machineryDetails", default)]
    pub machinery_details: Vec<MachineryDetail>,
}

/// Cuerpo de alta/modificación para `/workorders`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WorkOrderPayload {
    pub name: String,
    pub init_date: NaiveDate,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub finish_date: Option<NaiveDate>,
    pub status: WorkOrderStatus,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub observation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
    #[serde(rename = "clientId")]
    pub client_id: EntityId,
    #[serde(rename = "fieldId")]
    pub field_id: EntityId,
    #[serde(rename = "serviceId")]
    pub service_id: EntityId,
    #[serde(rename = "lotDetails")]
    pub lot_details: Vec<LotDetail>,
    #[serde(rename = "machineryDetails")]
    pub machinery_details: Vec<MachineryDetail>,
}

/// Formulario de orden de trabajo. Cliente, campo y lotes no viven acá: se
/// toman de la [`SelectionChain`] al armar el payload, así el formulario no
/// puede mandar una combinación inconsistente.
#[derive(Debug, Clone)]
pub struct WorkOrderForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub init_date: String,
    pub finish_date: String,
    pub observation: String,
    pub price: String,
    pub status: WorkOrderStatus,
    pub service_id: Option<EntityId>,
}

impl Default for WorkOrderForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            init_date: String::new(),
            finish_date: String::new(),
            observation: String::new(),
            price: String::new(),
            status: WorkOrderStatus::Pendiente,
            service_id: None,
        }
    }
}

impl WorkOrderForm {
    pub fn from_work_order(order: &WorkOrder) -> Self {
        Self {
            id: Some(order.id),
            name: order.name.clone(),
            init_date: order.init_date.format("%Y-%m-%d").to_string(),
            finish_date: order
                .finish_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
            observation: order.observation.clone().unwrap_or_default(),
            price: order
                .price
                .map(|p| p.to_string())
                .unwrap_or_default(),
            status: order.status,
            service_id: Some(order.service_id),
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    /// Valida el formulario junto con la cadena de selección y arma el
    /// cuerpo para el backend. Sin lotes elegidos no hay orden: el rechazo
    /// es local y no llega a la red.
    pub fn to_payload(
        &self,
        chain: &SelectionChain,
        machinery_ids: &[EntityId],
    ) -> Result<WorkOrderPayload, Vec<FieldIssue>> {
        let mut issues = IssueList::new();

        let name = issues.check("name", require_text(&self.name, "El nombre"));
        let init_date = issues.check("init_date", parse_date(&self.init_date, "La fecha de inicio"));

        let finish_date = if self.finish_date.trim().is_empty() {
            None
        } else {
            issues.check(
                "finish_date",
                parse_date(&self.finish_date, "La fecha de fin"),
            )
        };
        if let (Some(init), Some(finish)) = (init_date, finish_date) {
            if finish < init {
                issues.push(
                    "finish_date",
                    "La fecha de fin no puede ser anterior a la de inicio",
                );
            }
        }

        let price = issues.check("price", parse_optional_price(&self.price));

        let client_id = match chain.client_id() {
            Some(id) => Some(id),
            None => {
                issues.push("client", "Hay que seleccionar un cliente");
                None
            }
        };
        let field_id = match chain.field_id() {
            Some(id) => Some(id),
            None => {
                issues.push("field", "Hay que seleccionar un campo");
                None
            }
        };
        if !chain.has_lots() {
            issues.push("lots", "Hay que seleccionar al menos un lote");
        }
        let service_id = match self.service_id {
            Some(id) => Some(id),
            None => {
                issues.push("service", "Hay que seleccionar un servicio");
                None
            }
        };

        if !issues.is_empty() {
            return Err(issues.into_vec());
        }

        let observation = {
            let trimmed = self.observation.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(WorkOrderPayload {
            name: name.unwrap(),
            init_date: init_date.unwrap(),
            finish_date,
            status: self.status,
            observation,
            price: price.unwrap(),
            client_id: client_id.unwrap(),
            field_id: field_id.unwrap(),
            service_id: service_id.unwrap(),
            lot_details: chain
                .lot_ids()
                .iter()
                .map(|&lot_id| LotDetail { lot_id })
                .collect(),
            machinery_details: machinery_ids
                .iter()
                .map(|&machinery_id| MachineryDetail { machinery_id })
                .collect(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn chain_with_lots() -> SelectionChain {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        chain.set_field(10).unwrap();
        chain.toggle_lot(100).unwrap();
        chain.toggle_lot(101).unwrap();
        chain
    }

    fn valid_form() -> WorkOrderForm {
        WorkOrderForm {
            name: "Siembra soja 24/25".to_string(),
            init_date: "2024-11-05".to_string(),
            service_id: Some(3),
            ..Default::default()
        }
    }

    #[test]
    fn payload_takes_hierarchy_from_the_chain() {
        let payload = valid_form().to_payload(&chain_with_lots(), &[7]).unwrap();
        assert_eq!(payload.client_id, 1);
        assert_eq!(payload.field_id, 10);
        assert_eq!(
            payload.lot_details,
            vec![LotDetail { lot_id: 100 }, LotDetail { lot_id: 101 }]
        );
        assert_eq!(
            payload.machinery_details,
            vec![MachineryDetail { machinery_id: 7 }]
        );
    }

    #[test]
    fn zero_lot_details_is_rejected_locally() {
        let mut chain = SelectionChain::new();
        chain.set_client(1);
        chain.set_field(10).unwrap();

        let err = valid_form().to_payload(&chain, &[]).unwrap_err();
        assert!(err.iter().any(|i| i.field == "lots"));
    }

    #[test]
    fn missing_client_and_field_both_reported() {
        let chain = SelectionChain::new();
        let err = valid_form().to_payload(&chain, &[]).unwrap_err();
        let fields: Vec<&str> = err.iter().map(|i| i.field.as_str()).collect();
        assert!(fields.contains(&"client"));
        assert!(fields.contains(&"field"));
        assert!(fields.contains(&"lots"));
    }

    #[test]
    fn finish_before_init_is_invalid() {
        let mut form = valid_form();
        form.finish_date = "2024-10-01".to_string();
        let err = form.to_payload(&chain_with_lots(), &[]).unwrap_err();
        assert!(err.iter().any(|i| i.field == "finish_date"));
    }

    #[test]
    fn machinery_is_optional() {
        let payload = valid_form().to_payload(&chain_with_lots(), &[]).unwrap();
        assert!(payload.machinery_details.is_empty());
    }

    #[test]
    fn wire_format_matches_backend_names() {
        let payload = valid_form().to_payload(&chain_with_lots(), &[7]).unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json.get("clientId").is_some());
        assert!(json.get("serviceId").is_some());
        assert_eq!(json["lotDetails"][0]["lotId"], serde_json::json!(100));
        assert_eq!(
            json["machineryDetails"][0]["machineryId"],
            serde_json::json!(7)
        );
        assert_eq!(json["init_date"], serde_json::json!("2024-11-05"));
        assert_eq!(json["status"], serde_json::json!("Pendiente"));
    }

    #[test]
    fn work_order_deserializes_with_missing_optionals() {
        let json = r#"{
            "id": 9, "name": "Cosecha", "init_date": "2024-12-01",
            "status": "En Proceso", "clientId": 1, "fieldId": 10, "serviceId": 3
        }"#;
        let order: WorkOrder = serde_json::from_str(json).unwrap();
        assert_eq!(order.status, WorkOrderStatus::EnProceso);
        assert!(order.lot_details.is_empty());
        assert_eq!(order.finish_date, None);
    }
}
