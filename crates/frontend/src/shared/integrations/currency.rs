use gloo_net::http::Request;
use serde::Deserialize;

const QUOTE_URL: &str = "https://dolarapi.com/v1/dolares/oficial";

/// Cotización del dólar oficial.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct DollarQuote {
    pub compra: f64,
    pub venta: f64,
    #[serde(rename = "fechaActualizacion")]
    pub updated_at: String,
}

pub async fn fetch_dollar_quote() -> Result<DollarQuote, String> {
    let response = Request::get(QUOTE_URL)
        .send()
        .await
        .map_err(|e| format!("No se pudo consultar la cotización: {}", e))?;

    if !response.ok() {
        return Err(format!("Cotización no disponible (HTTP {})", response.status()));
    }

    response
        .json::<DollarQuote>()
        .await
        .map_err(|e| format!("Respuesta de cotización inválida: {}", e))
}
