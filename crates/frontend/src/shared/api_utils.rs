//! Comunicación con el backend REST.
//!
//! Helpers JSON sobre `gloo-net` con sesión por cookie
//! (`credentials: include`). Contrato de 401: un único reintento del pedido
//! original después de `POST /users/refresh`; si el reintento vuelve a dar
//! 401 se devuelve [`ApiError::Unauthorized`] y quien llama corta la sesión.
//! No hay más reintentos ni cancelación de pedidos en vuelo.

use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::RequestCredentials;

/// Error de una llamada al backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    /// La sesión no se pudo renovar; hay que volver al login.
    Unauthorized,
    /// Cualquier otro error de red o del backend, con su mensaje crudo.
    Message(String),
}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ApiError::Unauthorized => f.write_str("La sesión expiró"),
            ApiError::Message(message) => f.write_str(message),
        }
    }
}

/// Base del backend a partir de la ubicación actual de la ventana,
/// siempre al puerto 3000.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:3000", protocol, hostname)
}

pub fn api_url(path: &str) -> String {
    format!("{}/api{}", api_base(), path)
}

#[derive(Clone, Copy)]
enum Verb {
    Get,
    Post,
    Put,
    Delete,
}

async fn send_once(
    verb: Verb,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<Response, ApiError> {
    let url = api_url(path);
    let builder = match verb {
        Verb::Get => Request::get(&url),
        Verb::Post => Request::post(&url),
        Verb::Put => Request::put(&url),
        Verb::Delete => Request::delete(&url),
    }
    .credentials(RequestCredentials::Include)
    .header("Accept", "application/json");

    let result = match body {
        Some(json) => {
            builder
                .json(json)
                .map_err(|e| ApiError::Message(format!("No se pudo armar el pedido: {}", e)))?
                .send()
                .await
        }
        None => builder.send().await,
    };
    result.map_err(|e| ApiError::Message(format!("Error de red: {}", e)))
}

/// Renueva la sesión contra `/users/refresh`.
async fn refresh_session() -> Result<(), ApiError> {
    let response = send_once(Verb::Post, "/users/refresh", None).await?;
    if response.ok() {
        Ok(())
    } else {
        Err(ApiError::Unauthorized)
    }
}

async fn send(
    verb: Verb,
    path: &str,
    body: Option<&serde_json::Value>,
) -> Result<Response, ApiError> {
    let response = send_once(verb, path, body).await?;
    if response.status() != 401 {
        return into_result(response).await;
    }

    // Un solo reintento tras renovar la sesión.
    refresh_session().await?;
    let retry = send_once(verb, path, body).await?;
    if retry.status() == 401 {
        return Err(ApiError::Unauthorized);
    }
    into_result(retry).await
}

/// Convierte una respuesta no-ok en error, prefiriendo el mensaje que mande
/// el backend.
async fn into_result(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let message = match response.text().await {
        Ok(text) if !text.trim().is_empty() => {
            match serde_json::from_str::<serde_json::Value>(&text) {
                Ok(value) => value
                    .get("message")
                    .and_then(|m| m.as_str())
                    .map(|m| m.to_string())
                    .unwrap_or(text),
                Err(_) => text,
            }
        }
        _ => format!("HTTP {}", status),
    };
    Err(ApiError::Message(message))
}

async fn parse_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Message(format!("Respuesta inválida del servidor: {}", e)))
}

fn to_value<B: Serialize>(body: &B) -> Result<serde_json::Value, ApiError> {
    serde_json::to_value(body)
        .map_err(|e| ApiError::Message(format!("No se pudo serializar el pedido: {}", e)))
}

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, ApiError> {
    let response = send(Verb::Get, path, None).await?;
    parse_json(response).await
}

/// POST con cuerpo JSON, devolviendo la entidad creada.
pub async fn post_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: &B,
) -> Result<T, ApiError> {
    let value = to_value(body)?;
    let response = send(Verb::Post, path, Some(&value)).await?;
    parse_json(response).await
}

/// POST sin interés en el cuerpo de la respuesta (logout, refresh).
pub async fn post_unit<B: Serialize>(path: &str, body: Option<&B>) -> Result<(), ApiError> {
    let value = match body {
        Some(b) => Some(to_value(b)?),
        None => None,
    };
    send(Verb::Post, path, value.as_ref()).await?;
    Ok(())
}

/// PUT con cuerpo JSON; se ignora el cuerpo de la respuesta.
pub async fn put_json<B: Serialize>(path: &str, body: &B) -> Result<(), ApiError> {
    let value = to_value(body)?;
    send(Verb::Put, path, Some(&value)).await?;
    Ok(())
}

pub async fn delete(path: &str) -> Result<(), ApiError> {
    send(Verb::Delete, path, None).await?;
    Ok(())
}
