use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, PickerItem};
use crate::shared::validation::{parse_area, parse_coordinate, require_text, FieldIssue, IssueList};

/// Campo (establecimiento) de un cliente.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Field {
    pub id: EntityId,
    pub name: String,
    /// Superficie en hectáreas.
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub active: bool,
    #[serde(rename = "clientId")]
    pub client_id: EntityId,
}

impl PickerItem for Field {
    fn picker_id(&self) -> EntityId {
        self.id
    }

    fn picker_label(&self) -> String {
        self.name.clone()
    }
}

/// Los campos seleccionables son siempre los del cliente elegido; con
/// cliente en `None` no hay opciones (el selector además se deshabilita).
pub fn fields_of_client(fields: &[Field], client_id: Option<EntityId>) -> Vec<Field> {
    match client_id {
        Some(client_id) => fields
            .iter()
            .filter(|f| f.client_id == client_id)
            .cloned()
            .collect(),
        None => Vec::new(),
    }
}

/// Cuerpo de alta/modificación para `/field`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct FieldPayload {
    pub name: String,
    pub area: f64,
    pub lat: f64,
    pub long: f64,
    pub active: bool,
    #[serde(rename = "clientId")]
    pub client_id: EntityId,
}

/// Formulario de campo. El `client_id` no lo elige el formulario: viene del
/// cliente actualmente seleccionado, así el campo nunca puede crearse colgado
/// de otro cliente.
#[derive(Debug, Clone, Default)]
pub struct FieldForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub area: String,
    pub lat: String,
    pub long: String,
    pub active: bool,
}

impl FieldForm {
    pub fn from_field(field: &Field) -> Self {
        Self {
            id: Some(field.id),
            name: field.name.clone(),
            area: field.area.to_string(),
            lat: field.lat.to_string(),
            long: field.long.to_string(),
            active: field.active,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Vec<FieldIssue> {
        self.build_payload(0).err().unwrap_or_default()
    }

    pub fn to_payload(&self, client_id: EntityId) -> Result<FieldPayload, Vec<FieldIssue>> {
        self.build_payload(client_id)
    }

    fn build_payload(&self, client_id: EntityId) -> Result<FieldPayload, Vec<FieldIssue>> {
        let mut issues = IssueList::new();

        let name = issues.check("name", require_text(&self.name, "El nombre"));
        let area = issues.check("area", parse_area(&self.area));
        let lat = issues.check("lat", parse_coordinate(&self.lat, "La latitud"));
        let long = issues.check("long", parse_coordinate(&self.long, "La longitud"));

        if !issues.is_empty() {
            return Err(issues.into_vec());
        }

        Ok(FieldPayload {
            name: name.unwrap(),
            area: area.unwrap(),
            lat: lat.unwrap(),
            long: long.unwrap(),
            active: self.active,
            client_id,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field(id: EntityId, client_id: EntityId) -> Field {
        Field {
            id,
            name: format!("Campo {}", id),
            area: 120.0,
            lat: -34.6,
            long: -58.4,
            active: true,
            client_id,
        }
    }

    #[test]
    fn options_are_subset_of_selected_client() {
        let all = vec![field(1, 10), field(2, 10), field(3, 99)];
        let options = fields_of_client(&all, Some(10));
        assert_eq!(options.len(), 2);
        assert!(options.iter().all(|f| f.client_id == 10));
    }

    #[test]
    fn no_client_means_no_options() {
        let all = vec![field(1, 10)];
        assert!(fields_of_client(&all, None).is_empty());
    }

    #[test]
    fn payload_carries_the_selected_client() {
        let form = FieldForm {
            name: "Lote Norte".to_string(),
            area: "85.5".to_string(),
            lat: "-34.6037".to_string(),
            long: "-58.3816".to_string(),
            active: true,
            ..Default::default()
        };
        let payload = form.to_payload(10).unwrap();
        assert_eq!(payload.client_id, 10);
        assert_eq!(payload.area, 85.5);
    }

    #[test]
    fn bad_coordinates_and_area_both_reported() {
        let form = FieldForm {
            name: "X".to_string(),
            area: "-2".to_string(),
            lat: "sur".to_string(),
            long: "oeste".to_string(),
            ..Default::default()
        };
        let issues = form.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["area", "lat", "long"]);
    }

    #[test]
    fn wire_format_uses_camel_case_client_id() {
        let json = serde_json::to_value(field(1, 10)).unwrap();
        assert!(json.get("clientId").is_some());
        assert!(json.get("client_id").is_none());
    }
}
