//! Validación sincrónica de formularios.
//!
//! Cada formulario ejecuta todas sus reglas en una sola pasada (sin
//! cortocircuito) y devuelve la lista completa de campos inválidos, de modo
//! que la vista pueda mostrar cada mensaje debajo de su campo.

/// Un campo inválido y su mensaje para mostrar en línea.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldIssue {
    pub field: String,
    pub message: String,
}

impl FieldIssue {
    pub fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

/// Acumulador de errores de validación de un formulario.
#[derive(Debug, Default)]
pub struct IssueList {
    issues: Vec<FieldIssue>,
}

impl IssueList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, field: &str, message: impl Into<String>) {
        self.issues.push(FieldIssue::new(field, message));
    }

    /// Registra el error de `result` bajo `field`, si lo hay.
    pub fn check<T>(&mut self, field: &str, result: Result<T, String>) -> Option<T> {
        match result {
            Ok(value) => Some(value),
            Err(message) => {
                self.push(field, message);
                None
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn into_vec(self) -> Vec<FieldIssue> {
        self.issues
    }
}

/// Mensaje en línea para `field`, si ese campo falló.
pub fn issue_message(issues: &[FieldIssue], field: &str) -> Option<String> {
    issues
        .iter()
        .find(|i| i.field == field)
        .map(|i| i.message.clone())
}

/// Texto obligatorio: no vacío después de recortar espacios.
pub fn require_text(value: &str, label: &str) -> Result<String, String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(format!("{} no puede estar vacío", label));
    }
    Ok(trimmed.to_string())
}

/// Deja solo los dígitos de `raw` (quita guiones, espacios, etc.).
pub fn digits_only(raw: &str) -> String {
    raw.chars().filter(|c| c.is_ascii_digit()).collect()
}

/// CUIT: exactamente 11 dígitos una vez quitado el formato.
/// El backend espera el CUIT como número entero.
pub fn parse_cuit(raw: &str) -> Result<i64, String> {
    let digits = digits_only(raw);
    if digits.len() != 11 {
        return Err(format!(
            "El CUIT debe tener 11 dígitos (tiene {})",
            digits.len()
        ));
    }
    digits
        .parse::<i64>()
        .map_err(|_| "CUIT inválido".to_string())
}

/// Teléfono: al menos 7 dígitos una vez quitado el formato.
pub fn check_phone(raw: &str) -> Result<String, String> {
    let digits = digits_only(raw);
    if digits.len() < 7 {
        return Err("El teléfono debe tener al menos 7 dígitos".to_string());
    }
    Ok(raw.trim().to_string())
}

/// Chequeo estructural de email: una sola `@`, parte local no vacía y un
/// punto en el dominio. Sin crate de regex, igual que el resto de contracts.
pub fn check_email(raw: &str) -> Result<String, String> {
    let value = raw.trim();
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let domain = parts.next().unwrap_or_default();
    let valid = !local.is_empty()
        && !domain.is_empty()
        && !domain.starts_with('.')
        && !domain.ends_with('.')
        && domain.contains('.')
        && !domain.contains('@')
        && !value.contains(' ');
    if !valid {
        return Err("Email inválido".to_string());
    }
    Ok(value.to_string())
}

/// Coordenada geográfica: número de punto flotante.
pub fn parse_coordinate(raw: &str, label: &str) -> Result<f64, String> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| format!("{} debe ser un número", label))
}

/// Superficie en hectáreas: número estrictamente mayor que cero.
pub fn parse_area(raw: &str) -> Result<f64, String> {
    let area = raw
        .trim()
        .parse::<f64>()
        .map_err(|_| "La superficie debe ser un número".to_string())?;
    if area <= 0.0 {
        return Err("La superficie debe ser mayor que cero".to_string());
    }
    Ok(area)
}

/// Fecha en formato ISO (YYYY-MM-DD), como la entrega un `<input type="date">`.
pub fn parse_date(raw: &str, label: &str) -> Result<chrono::NaiveDate, String> {
    chrono::NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d")
        .map_err(|_| format!("{} debe ser una fecha válida", label))
}

/// Precio opcional: vacío se acepta, si hay valor debe ser un número >= 0.
pub fn parse_optional_price(raw: &str) -> Result<Option<f64>, String> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    let price = trimmed
        .parse::<f64>()
        .map_err(|_| "El precio debe ser un número".to_string())?;
    if price < 0.0 {
        return Err("El precio no puede ser negativo".to_string());
    }
    Ok(Some(price))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cuit_with_dashes_normalizes() {
        assert_eq!(parse_cuit("20-12345678-9"), Ok(20123456789));
    }

    #[test]
    fn cuit_plain_digits_passes() {
        assert_eq!(parse_cuit("20123456789"), Ok(20123456789));
    }

    #[test]
    fn cuit_too_short_reports_digit_count() {
        let err = parse_cuit("123").unwrap_err();
        assert!(err.contains("11 dígitos"), "unexpected message: {}", err);
        assert!(err.contains("3"), "should mention the actual count: {}", err);
    }

    #[test]
    fn phone_accepts_formatted_number() {
        assert!(check_phone("+54 11 1234-5678").is_ok());
    }

    #[test]
    fn phone_rejects_short_number() {
        assert!(check_phone("123-45").is_err());
    }

    #[test]
    fn email_basic_cases() {
        assert!(check_email("a@b.com").is_ok());
        assert!(check_email("usuario@campo.com.ar").is_ok());
        assert!(check_email("sin-arroba").is_err());
        assert!(check_email("@dominio.com").is_err());
        assert!(check_email("a@sinpunto").is_err());
        assert!(check_email("a@b.com extra").is_err());
        assert!(check_email("a@@b.com").is_err());
    }

    #[test]
    fn area_must_be_positive() {
        assert_eq!(parse_area("12.5"), Ok(12.5));
        assert!(parse_area("0").is_err());
        assert!(parse_area("-3").is_err());
        assert!(parse_area("doce").is_err());
    }

    #[test]
    fn coordinate_parses_floats() {
        assert_eq!(parse_coordinate("-34.6037", "Latitud"), Ok(-34.6037));
        assert!(parse_coordinate("sur", "Latitud").is_err());
    }

    #[test]
    fn required_text_trims() {
        assert_eq!(require_text("  Finca Test  ", "Nombre"), Ok("Finca Test".to_string()));
        assert!(require_text("   ", "Nombre").is_err());
    }

    #[test]
    fn optional_price_empty_is_none() {
        assert_eq!(parse_optional_price(""), Ok(None));
        assert_eq!(parse_optional_price("1500.50"), Ok(Some(1500.50)));
        assert!(parse_optional_price("-1").is_err());
    }

    #[test]
    fn issue_list_collects_all_failures() {
        let mut issues = IssueList::new();
        issues.check("name", require_text("", "Nombre"));
        issues.check("cuit", parse_cuit("123").map(|_| ()));
        issues.check("email", check_email("malo").map(|_| ()));
        let collected = issues.into_vec();
        assert_eq!(collected.len(), 3);
        assert_eq!(collected[0].field, "name");
        assert_eq!(collected[1].field, "cuit");
        assert_eq!(collected[2].field, "email");
    }
}
