use gloo_net::http::Request;
use serde::Deserialize;

/// Estado del tiempo puntual para unas coordenadas.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct WeatherSnapshot {
    pub temperature: f64,
    pub windspeed: f64,
    #[serde(rename = "weathercode")]
    pub weather_code: u32,
}

#[derive(Debug, Clone, Deserialize)]
struct WeatherResponse {
    current_weather: WeatherSnapshot,
}

pub async fn fetch_weather(lat: f64, long: f64) -> Result<WeatherSnapshot, String> {
    let url = format!(
        "https://api.open-meteo.com/v1/forecast?latitude={}&longitude={}&current_weather=true",
        lat, long
    );
    let response = Request::get(&url)
        .send()
        .await
        .map_err(|e| format!("No se pudo consultar el clima: {}", e))?;

    if !response.ok() {
        return Err(format!("Clima no disponible (HTTP {})", response.status()));
    }

    response
        .json::<WeatherResponse>()
        .await
        .map(|r| r.current_weather)
        .map_err(|e| format!("Respuesta de clima inválida: {}", e))
}

/// Descripción corta del código de tiempo de Open-Meteo.
pub fn describe_weather_code(code: u32) -> &'static str {
    match code {
        0 => "Despejado",
        1..=3 => "Parcialmente nublado",
        45 | 48 => "Niebla",
        51..=67 => "Llovizna",
        71..=77 => "Nieve",
        80..=82 => "Chaparrones",
        95..=99 => "Tormenta",
        _ => "Variable",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weather_codes_have_labels() {
        assert_eq!(describe_weather_code(0), "Despejado");
        assert_eq!(describe_weather_code(2), "Parcialmente nublado");
        assert_eq!(describe_weather_code(96), "Tormenta");
        assert_eq!(describe_weather_code(40), "Variable");
    }
}
