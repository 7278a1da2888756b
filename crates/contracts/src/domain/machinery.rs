use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, PickerItem};
use crate::shared::validation::{require_text, FieldIssue, IssueList};

/// Estado operativo de una maquinaria, con los literales exactos que maneja
/// el backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum MachineryStatus {
    #[serde(rename = "Disponible")]
    Disponible,
    #[serde(rename = "En Uso")]
    EnUso,
    #[serde(rename = "Mantenimiento")]
    Mantenimiento,
    #[serde(rename = "Fuera de Servicio")]
    FueraDeServicio,
}

impl MachineryStatus {
    pub const ALL: [MachineryStatus; 4] = [
        MachineryStatus::Disponible,
        MachineryStatus::EnUso,
        MachineryStatus::Mantenimiento,
        MachineryStatus::FueraDeServicio,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MachineryStatus::Disponible => "Disponible",
            MachineryStatus::EnUso => "En Uso",
            MachineryStatus::Mantenimiento => "Mantenimiento",
            MachineryStatus::FueraDeServicio => "Fuera de Servicio",
        }
    }

    pub fn from_str_label(label: &str) -> Option<Self> {
        Self::ALL.iter().copied().find(|s| s.as_str() == label)
    }
}

impl std::fmt::Display for MachineryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Maquinaria del inventario. No participa de la jerarquía
/// cliente/campo/lote.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Machinery {
    pub id: EntityId,
    pub name: String,
    #[serde(rename = "type")]
    pub machinery_type: String,
    pub brand: String,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub patent: Option<String>,
    pub status: MachineryStatus,
}

impl PickerItem for Machinery {
    fn picker_id(&self) -> EntityId {
        self.id
    }

    fn picker_label(&self) -> String {
        format!("{} ({} {})", self.name, self.brand, self.model)
    }
}

/// Cuerpo de alta/modificación para `/machinery`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MachineryPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub machinery_type: String,
    pub brand: String,
    pub model: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub patent: Option<String>,
    pub status: MachineryStatus,
}

#[derive(Debug, Clone)]
pub struct MachineryForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub machinery_type: String,
    pub brand: String,
    pub model: String,
    pub patent: String,
    pub status: MachineryStatus,
}

impl Default for MachineryForm {
    fn default() -> Self {
        Self {
            id: None,
            name: String::new(),
            machinery_type: String::new(),
            brand: String::new(),
            model: String::new(),
            patent: String::new(),
            status: MachineryStatus::Disponible,
        }
    }
}

impl MachineryForm {
    pub fn from_machinery(m: &Machinery) -> Self {
        Self {
            id: Some(m.id),
            name: m.name.clone(),
            machinery_type: m.machinery_type.clone(),
            brand: m.brand.clone(),
            model: m.model.clone(),
            patent: m.patent.clone().unwrap_or_default(),
            status: m.status,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Vec<FieldIssue> {
        self.to_payload().err().unwrap_or_default()
    }

    pub fn to_payload(&self) -> Result<MachineryPayload, Vec<FieldIssue>> {
        let mut issues = IssueList::new();

        let name = issues.check("name", require_text(&self.name, "El nombre"));
        let machinery_type = issues.check("type", require_text(&self.machinery_type, "El tipo"));
        let brand = issues.check("brand", require_text(&self.brand, "La marca"));
        let model = issues.check("model", require_text(&self.model, "El modelo"));

        if !issues.is_empty() {
            return Err(issues.into_vec());
        }

        let patent = {
            let trimmed = self.patent.trim();
            if trimmed.is_empty() {
                None
            } else {
                Some(trimmed.to_string())
            }
        };

        Ok(MachineryPayload {
            name: name.unwrap(),
            machinery_type: machinery_type.unwrap(),
            brand: brand.unwrap(),
            model: model.unwrap(),
            patent,
            status: self.status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_with_backend_literals() {
        assert_eq!(
            serde_json::to_string(&MachineryStatus::EnUso).unwrap(),
            "\"En Uso\""
        );
        assert_eq!(
            serde_json::to_string(&MachineryStatus::FueraDeServicio).unwrap(),
            "\"Fuera de Servicio\""
        );
    }

    #[test]
    fn status_round_trips_every_variant() {
        for status in MachineryStatus::ALL {
            let json = serde_json::to_string(&status).unwrap();
            let back: MachineryStatus = serde_json::from_str(&json).unwrap();
            assert_eq!(back, status);
            assert_eq!(MachineryStatus::from_str_label(status.as_str()), Some(status));
        }
    }

    #[test]
    fn type_field_uses_reserved_wire_name() {
        let m = Machinery {
            id: 1,
            name: "Tractor 1".to_string(),
            machinery_type: "Tractor".to_string(),
            brand: "John Deere".to_string(),
            model: "6110J".to_string(),
            patent: None,
            status: MachineryStatus::Disponible,
        };
        let json = serde_json::to_value(&m).unwrap();
        assert!(json.get("type").is_some());
        assert!(json.get("patent").is_none());
    }

    #[test]
    fn empty_patent_becomes_none() {
        let form = MachineryForm {
            name: "Pulverizadora".to_string(),
            machinery_type: "Pulverizadora".to_string(),
            brand: "Metalfor".to_string(),
            model: "7040".to_string(),
            patent: "  ".to_string(),
            ..Default::default()
        };
        let payload = form.to_payload().unwrap();
        assert_eq!(payload.patent, None);
    }

    #[test]
    fn missing_required_fields_all_reported() {
        let form = MachineryForm::default();
        let issues = form.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "type", "brand", "model"]);
    }
}
