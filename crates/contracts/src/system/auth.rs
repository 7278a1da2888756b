use serde::{Deserialize, Serialize};

use crate::domain::common::EntityId;
use crate::shared::validation::{check_email, require_text, FieldIssue, IssueList};

/// Usuario autenticado, como lo devuelve `/users/me`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct UserInfo {
    pub id: EntityId,
    pub name: String,
    pub email: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SignupRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

/// Cuerpo de `PUT /users/:id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserUpdate {
    pub name: String,
    pub email: String,
}

/// Formulario de registro; valida completo como el resto.
#[derive(Debug, Clone, Default)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub password_confirm: String,
}

impl SignupForm {
    pub fn validate(&self) -> Vec<FieldIssue> {
        self.to_request().err().unwrap_or_default()
    }

    pub fn to_request(&self) -> Result<SignupRequest, Vec<FieldIssue>> {
        let mut issues = IssueList::new();

        let name = issues.check("name", require_text(&self.name, "El nombre"));
        let email = issues.check("email", check_email(&self.email));
        if self.password.len() < 6 {
            issues.push("password", "La contraseña debe tener al menos 6 caracteres");
        }
        if self.password != self.password_confirm {
            issues.push("password_confirm", "Las contraseñas no coinciden");
        }

        if !issues.is_empty() {
            return Err(issues.into_vec());
        }

        Ok(SignupRequest {
            name: name.unwrap(),
            email: email.unwrap(),
            password: self.password.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn signup_reports_all_problems_at_once() {
        let form = SignupForm {
            name: " ".to_string(),
            email: "x".to_string(),
            password: "123".to_string(),
            password_confirm: "456".to_string(),
        };
        let issues = form.validate();
        let fields: Vec<&str> = issues.iter().map(|i| i.field.as_str()).collect();
        assert_eq!(
            fields,
            vec!["name", "email", "password", "password_confirm"]
        );
    }

    #[test]
    fn valid_signup_builds_request() {
        let form = SignupForm {
            name: "Ana".to_string(),
            email: "ana@campo.com".to_string(),
            password: "secreto1".to_string(),
            password_confirm: "secreto1".to_string(),
        };
        let request = form.to_request().unwrap();
        assert_eq!(request.email, "ana@campo.com");
    }
}
