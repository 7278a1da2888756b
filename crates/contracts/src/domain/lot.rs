use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, PickerItem};
use crate::shared::validation::{parse_area, parse_coordinate, require_text, FieldIssue, IssueList};

/// Lote: subdivisión de un campo.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Lot {
    pub id: EntityId,
    pub name: String,
    /// Superficie en hectáreas.
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub active: bool,
    #[serde(rename = "fieldId")]
    pub field_id: EntityId,
}

impl PickerItem for Lot {
    fn picker_id(&self) -> EntityId {
        self.id
    }

    fn picker_label(&self) -> String {
        self.name.clone()
    }
}

/// Los lotes seleccionables son siempre los del campo elegido.
pub fn lots_of_field(lots: &[Lot], field_id: Option<EntityId>) -> Vec<Lot> {
    match field_id {
        Some(field_id) => lots
            .iter()
            .filter(|l| l.field_id == field_id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Cuerpo de alta/modificación para `/lot`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LotPayload {
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub active: bool,
    #[serde(rename = "fieldId")]
    pub field_id: EntityId,
}

/// Formulario de lote; el `field_id` viene del campo seleccionado.
#[derive(Debug, Clone, Default)]
pub struct LotForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub area: String,
    pub lat: String,
    pub long: String,
    pub active: bool,
}

impl LotForm {
    pub fn from_lot(lot: &Lot) -> Self {
        Self {
            id: Some(lot.id),
            name: lot.name.clone(),
            area: lot.area.to_string(),
            lat: lot.lat.to_string(),
            long: lot.long.to_string(),
            active: lot.active,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Vec<FieldIssue> {
        self.build_payload(0).err().unwrap_or_default()
    }

    pub fn to_payload(&self, field_id: EntityId) -> Result<LotPayload, Vec<FieldIssue>> {
        self.build_payload(field_id)
    }

    fn build_payload(&self, field_id: EntityId) -> Result<LotPayload, Vec<FieldIssue>> {
        let mut issues = IssueList::new();

        let name = issues.check("name", require_text(&self.name, "El nombre"));
        let area = issues.check("area", parse_area(&self.area));
        let lat = issues.check("lat", parse_coordinate(&self.lat, "La latitud"));
        let long = issues.check("long", parse_coordinate(&self.long, "La longitud"));

        if !issues.is_empty() {
            return Err(issues.into_vec());
        }

        Ok(LotPayload {
            name: name.unwrap(),
            area: area.unwrap(),
            lat: lat.unwrap(),
            long: long.unwrap(),
            active: self.active,
            field_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lot(id: EntityId, field_id: EntityId) -> Lot {
        Lot {
            id,
            name: format!("Lote {}", id),
            area: 40.0,
            lat: -34.7,
            long: -58.5,
            active: true,
            field_id,
        }
    }

    #[test]
    fn options_filtered_by_field() {
        let all = vec![lot(1, 5), lot(2, 5), lot(3, 8)];
        let options = lots_of_field(&all, Some(5));
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|l| l.field_id == 5));
        assert!(lots_of_field(&all, None).is_empty());
    }

    #[test]
    fn payload_carries_the_selected_field() {
        let form = LotForm {
            name: "Lote 3A".to_string(),
            area: "42".to_string(),
            lat: "-34.71".to_string(),
            long: "-58.52".to_string(),
            active: true,
            ..Default::default()
        };
        let payload = form.to_payload(5).unwrap();
        assert_eq!(payload.field_id, 5);
    }

    #[test]
    fn wire_format_uses_camel_case_field_id() {
        let json = serde_json::to_value(lot(1, 5)).unwrap();
        assert!(json.get("fieldId").is_some());
        assert!(json.get("field_id").is_none());
    }
}
