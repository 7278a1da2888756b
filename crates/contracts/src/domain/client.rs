use serde::{Deserialize, Serialize};

use crate::domain::common::{EntityId, PickerItem};
use crate::shared::validation::{
    check_email, check_phone, parse_cuit, require_text, FieldIssue, IssueList,
};

/// Cliente de la empresa de servicios agropecuarios.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Client {
    pub id: EntityId,
    pub name: String,
    pub cuit: i64,
    pub active: bool,
    pub email: String,
    pub phone: String,
    pub address: String,
}

impl PickerItem for Client {
    fn picker_id(&self) -> EntityId {
        self.id
    }

    fn picker_label(&self) -> String {
        self.name.clone()
    }
}

/// Cuerpo de alta/modificación que espera el backend en `/client`.
/// El CUIT viaja como entero, ya normalizado.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ClientPayload {
    pub name: String,
    pub cuit: i64,
    pub active: bool,
    pub email: String,
    pub phone: String,
    pub address: String,
}

/// Formulario de cliente con los valores crudos tal como los tipeó el
/// usuario. La validación corre completa y reporta todos los campos
/// inválidos de una vez.
#[derive(Debug, Clone, Default)]
pub struct ClientForm {
    pub id: Option<EntityId>,
    pub name: String,
    pub cuit: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub active: bool,
}

impl ClientForm {
    pub fn from_client(client: &Client) -> Self {
        Self {
            id: Some(client.id),
            name: client.name.clone(),
            cuit: client.cuit.to_string(),
            email: client.email.clone(),
            phone: client.phone.clone(),
            address: client.address.clone(),
            active: client.active,
        }
    }

    pub fn is_edit(&self) -> bool {
        self.id.is_some()
    }

    pub fn validate(&self) -> Vec<FieldIssue> {
        self.build_payload().err().unwrap_or_default()
    }

    /// Valida y arma el cuerpo para el backend en un solo paso.
    pub fn to_payload(&self) -> Result<ClientPayload, Vec<FieldIssue>> {
        self.build_payload()
    }

    fn build_payload(&self) -> Result<ClientPayload, Vec<FieldIssue>> {
        let mut issues = IssueList::new();

        let name = issues.check("name", require_text(&self.name, "El nombre"));
        let cuit = issues.check("cuit", parse_cuit(&self.cuit));
        let email = issues.check("email", check_email(&self.email));
        let phone = issues.check("phone", check_phone(&self.phone));
        let address = issues.check("address", require_text(&self.address, "La dirección"));

        if !issues.is_empty() {
            return Err(issues.into_vec());
        }

        Ok(ClientPayload {
            name: name.unwrap(),
            cuit: cuit.unwrap(),
            active: self.active,
            email: email.unwrap(),
            phone: phone.unwrap(),
            address: address.unwrap(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn valid_form() -> ClientForm {
        ClientForm {
            id: None,
            name: "Finca Test".to_string(),
            cuit: "20-12345678-9".to_string(),
            email: "a@b.com".to_string(),
            phone: "+54 11 1234-5678".to_string(),
            address: "Av. Siempre Viva 123".to_string(),
            active: true,
        }
    }

    #[test]
    fn valid_form_normalizes_cuit_to_integer() {
        let payload = valid_form().to_payload().unwrap();
        assert_eq!(payload.cuit, 20123456789);
        assert_eq!(payload.name, "Finca Test");
        assert!(payload.active);
    }

    #[test]
    fn payload_serializes_cuit_as_number() {
        let payload = valid_form().to_payload().unwrap();
        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["cuit"], serde_json::json!(20123456789_i64));
    }

    #[test]
    fn invalid_form_reports_every_failing_field() {
        let form = ClientForm {
            name: " ".to_string(),
            cuit: "123".to_string(),
            email: "malo".to_string(),
            phone: "12".to_string(),
            address: "".to_string(),
            ..Default::default()
        };
        let issues = form.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(fields, vec!["name", "cuit", "email", "phone", "address"]);
    }

    #[test]
    fn client_json_round_trips() {
        let json = r#"{"id":3,"name":"Estancia La Sofía","cuit":30712345670,"active":true,"email":"sofia@campo.com","phone":"1155550000","address":"Ruta 5 km 120"}"#;
        let client: Client = serde_json::from_str(json).unwrap();
        assert_eq!(client.id, 3);
        assert_eq!(client.cuit, 30712345670);
    }
}
