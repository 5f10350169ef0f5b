// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// Todas las peticiones del panel pasan por aquí: método según el cuerpo,
// bearer desde la sesión, y clasificación uniforme de la respuesta.
// ============================================================================

use gloo_net::http::{Request, RequestBuilder};
use serde::de::DeserializeOwned;
use serde::Serialize;
use web_sys::FormData;

use crate::config::CONFIG;
use crate::services::session_service;
use crate::utils::events;

/// Mensaje fijo cuando el backend devuelve 401
pub const SESSION_EXPIRED_MESSAGE: &str = "Your session has expired. Please log in again.";

const GENERIC_ERROR_MESSAGE: &str = "Something went wrong";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiMethod {
    Get,
    Post,
    Put,
    Patch,
    Delete,
}

/// Respuesta HTTP ya clasificada según el contrato del backend
#[derive(Debug, Clone, PartialEq)]
pub enum ApiOutcome {
    /// 401: la sesión dejó de valer
    Unauthorized,
    /// 2xx sin cuerpo (204)
    Empty,
    /// 2xx con cuerpo JSON (sin parsear todavía)
    Json(String),
    /// 2xx con cuerpo no JSON
    Text(String),
    /// No-2xx, con el mensaje de error ya extraído
    Failed(String),
}

/// Clasifica una respuesta por status, content-type y cuerpo.
/// El 401 manda sobre todo lo demás.
pub fn classify_response(status: u16, is_json: bool, body: String) -> ApiOutcome {
    if status == 401 {
        return ApiOutcome::Unauthorized;
    }

    let ok = (200..300).contains(&status);
    if !ok {
        let message = if is_json {
            serde_json::from_str::<serde_json::Value>(&body)
                .ok()
                .and_then(|value| {
                    value
                        .get("message")
                        .and_then(|m| m.as_str())
                        .filter(|m| !m.is_empty())
                        .map(String::from)
                })
                .unwrap_or_else(|| GENERIC_ERROR_MESSAGE.to_string())
        } else if body.is_empty() {
            GENERIC_ERROR_MESSAGE.to_string()
        } else {
            body
        };
        return ApiOutcome::Failed(message);
    }

    if status == 204 {
        ApiOutcome::Empty
    } else if is_json {
        ApiOutcome::Json(body)
    } else {
        ApiOutcome::Text(body)
    }
}

/// Convierte un outcome en un valor tipado.
/// Un 2xx no-JSON se entrega como { "message": texto }, igual que el backend legacy.
pub fn decode_outcome<T: DeserializeOwned>(outcome: ApiOutcome) -> Result<T, String> {
    match outcome {
        ApiOutcome::Json(body) => serde_json::from_str(&body)
            .map_err(|e| format!("Error parseando respuesta: {}", e)),
        ApiOutcome::Text(text) => {
            let wrapped = serde_json::json!({ "message": text });
            serde_json::from_value(wrapped).map_err(|e| format!("Error parseando respuesta: {}", e))
        }
        ApiOutcome::Empty => serde_json::from_value(serde_json::Value::Null)
            .map_err(|e| format!("Error parseando respuesta vacía: {}", e)),
        ApiOutcome::Failed(message) => Err(message),
        ApiOutcome::Unauthorized => Err(SESSION_EXPIRED_MESSAGE.to_string()),
    }
}

fn builder_for(method: ApiMethod, url: &str) -> RequestBuilder {
    match method {
        ApiMethod::Get => Request::get(url),
        ApiMethod::Post => Request::post(url),
        ApiMethod::Put => Request::put(url),
        ApiMethod::Patch => Request::patch(url),
        ApiMethod::Delete => Request::delete(url),
    }
}

fn with_bearer(builder: RequestBuilder) -> RequestBuilder {
    match session_service::access_token() {
        Some(token) => builder.header("Authorization", &format!("Bearer {}", token)),
        None => builder,
    }
}

/// Envía la petición ya construida y clasifica la respuesta.
/// El primer 401 tumba la sesión y avisa al resto de la app.
async fn perform(request: Result<gloo_net::http::Request, gloo_net::Error>) -> Result<ApiOutcome, String> {
    let request = request.map_err(|e| format!("Error construyendo request: {}", e))?;

    let response = request
        .send()
        .await
        .map_err(|e| format!("Error de red: {}", e))?;

    let status = response.status();
    let is_json = response
        .headers()
        .get("content-type")
        .map(|ct| ct.contains("application/json"))
        .unwrap_or(false);
    let body = response.text().await.unwrap_or_default();

    let outcome = classify_response(status, is_json, body);

    if outcome == ApiOutcome::Unauthorized {
        log::warn!("🔒 401 del backend, invalidando sesión");
        if session_service::invalidate_session() {
            events::broadcast_unauthorized();
        }
        return Err(SESSION_EXPIRED_MESSAGE.to_string());
    }

    Ok(outcome)
}

/// Núcleo del contrato: con cuerpo es POST, sin cuerpo es GET,
/// salvo que el endpoint pida otro método explícitamente.
async fn dispatch_json<B: Serialize, T: DeserializeOwned>(
    path: &str,
    body: Option<&B>,
    method: Option<ApiMethod>,
) -> Result<T, String> {
    let url = format!("{}{}", CONFIG.api_url(), path);
    let method = method.unwrap_or(if body.is_some() {
        ApiMethod::Post
    } else {
        ApiMethod::Get
    });

    let builder = with_bearer(builder_for(method, &url));

    let outcome = match body {
        Some(body) => {
            let request = builder
                .header("Content-Type", "application/json")
                .json(body);
            perform(request).await?
        }
        None => perform(builder.build()).await?,
    };

    decode_outcome(outcome)
}

fn accept_any_success(outcome: ApiOutcome) -> Result<(), String> {
    match outcome {
        ApiOutcome::Json(_) | ApiOutcome::Text(_) | ApiOutcome::Empty => Ok(()),
        ApiOutcome::Failed(message) => Err(message),
        ApiOutcome::Unauthorized => Err(SESSION_EXPIRED_MESSAGE.to_string()),
    }
}

// ============================================================================
// Helpers públicos por método
// ============================================================================

pub async fn get_json<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    dispatch_json::<(), T>(path, None, None).await
}

pub async fn post_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    dispatch_json(path, Some(body), None).await
}

pub async fn post_unit<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = format!("{}{}", CONFIG.api_url(), path);
    let builder = with_bearer(builder_for(ApiMethod::Post, &url));
    let request = builder.header("Content-Type", "application/json").json(body);
    accept_any_success(perform(request).await?)
}

pub async fn put_json<B: Serialize, T: DeserializeOwned>(path: &str, body: &B) -> Result<T, String> {
    dispatch_json(path, Some(body), Some(ApiMethod::Put)).await
}

/// PUT sin cuerpo con respuesta tipada (activar versión de plantilla)
pub async fn put_json_no_body<T: DeserializeOwned>(path: &str) -> Result<T, String> {
    dispatch_json::<(), T>(path, None, Some(ApiMethod::Put)).await
}

/// PUT sin cuerpo, respuesta ignorada (aprobar/cancelar reservas)
pub async fn put_unit(path: &str) -> Result<(), String> {
    let url = format!("{}{}", CONFIG.api_url(), path);
    let builder = with_bearer(builder_for(ApiMethod::Put, &url));
    accept_any_success(perform(builder.build()).await?)
}

/// PATCH sin cuerpo, respuesta ignorada (enable/disable)
pub async fn patch_unit(path: &str) -> Result<(), String> {
    let url = format!("{}{}", CONFIG.api_url(), path);
    let builder = with_bearer(builder_for(ApiMethod::Patch, &url));
    accept_any_success(perform(builder.build()).await?)
}

pub async fn delete_unit(path: &str) -> Result<(), String> {
    let url = format!("{}{}", CONFIG.api_url(), path);
    let builder = with_bearer(builder_for(ApiMethod::Delete, &url));
    accept_any_success(perform(builder.build()).await?)
}

/// DELETE con cuerpo JSON (borrar imágenes por URL)
pub async fn delete_unit_with_body<B: Serialize>(path: &str, body: &B) -> Result<(), String> {
    let url = format!("{}{}", CONFIG.api_url(), path);
    let builder = with_bearer(builder_for(ApiMethod::Delete, &url));
    let request = builder.header("Content-Type", "application/json").json(body);
    accept_any_success(perform(request).await?)
}

/// POST multipart: el navegador pone el Content-Type con su boundary
pub async fn post_multipart_unit(path: &str, form: FormData) -> Result<(), String> {
    let url = format!("{}{}", CONFIG.api_url(), path);
    let builder = with_bearer(builder_for(ApiMethod::Post, &url));
    let request = builder.body(form);
    accept_any_success(perform(request).await?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[test]
    fn test_401_overrides_any_body() {
        let outcome = classify_response(401, true, r#"{"message":"token caducado"}"#.to_string());
        assert_eq!(outcome, ApiOutcome::Unauthorized);
        assert_eq!(
            classify_response(401, false, String::new()),
            ApiOutcome::Unauthorized
        );
    }

    #[test]
    fn test_204_is_empty_success() {
        assert_eq!(classify_response(204, false, String::new()), ApiOutcome::Empty);
    }

    #[test]
    fn test_json_error_extracts_message_field() {
        let outcome = classify_response(500, true, r#"{"message":"cupo lleno"}"#.to_string());
        assert_eq!(outcome, ApiOutcome::Failed("cupo lleno".to_string()));
    }

    #[test]
    fn test_json_error_without_message_uses_generic() {
        assert_eq!(
            classify_response(400, true, r#"{"code":17}"#.to_string()),
            ApiOutcome::Failed(GENERIC_ERROR_MESSAGE.to_string())
        );
        assert_eq!(
            classify_response(400, true, r#"{"message":""}"#.to_string()),
            ApiOutcome::Failed(GENERIC_ERROR_MESSAGE.to_string())
        );
        assert_eq!(
            classify_response(400, true, "esto no es json".to_string()),
            ApiOutcome::Failed(GENERIC_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_text_error_returns_raw_body() {
        assert_eq!(
            classify_response(502, false, "Bad Gateway".to_string()),
            ApiOutcome::Failed("Bad Gateway".to_string())
        );
    }

    #[test]
    fn test_empty_text_error_uses_generic() {
        assert_eq!(
            classify_response(500, false, String::new()),
            ApiOutcome::Failed(GENERIC_ERROR_MESSAGE.to_string())
        );
    }

    #[test]
    fn test_json_success_keeps_body() {
        let outcome = classify_response(200, true, r#"{"id":3}"#.to_string());
        assert_eq!(outcome, ApiOutcome::Json(r#"{"id":3}"#.to_string()));
    }

    #[test]
    fn test_non_json_success_is_classified_as_text() {
        assert_eq!(
            classify_response(201, false, "creado".to_string()),
            ApiOutcome::Text("creado".to_string())
        );
    }

    #[derive(Debug, PartialEq, Deserialize)]
    struct Mensaje {
        message: String,
    }

    #[test]
    fn test_decodes_typed_json() {
        let result: Result<Mensaje, String> =
            decode_outcome(ApiOutcome::Json(r#"{"message":"hola"}"#.to_string()));
        assert_eq!(result.unwrap().message, "hola");
    }

    #[test]
    fn test_text_success_wraps_as_message() {
        let result: Result<Mensaje, String> =
            decode_outcome(ApiOutcome::Text("operación completada".to_string()));
        assert_eq!(result.unwrap().message, "operación completada");
    }

    #[test]
    fn test_empty_body_decodes_to_unit() {
        let result: Result<(), String> = decode_outcome(ApiOutcome::Empty);
        assert!(result.is_ok());
    }

    #[test]
    fn test_failure_propagates_as_err() {
        let result: Result<Mensaje, String> =
            decode_outcome(ApiOutcome::Failed("sin permisos".to_string()));
        assert_eq!(result.unwrap_err(), "sin permisos");
    }

    #[test]
    fn test_invalid_json_on_success_is_parse_error() {
        let result: Result<Mensaje, String> =
            decode_outcome(ApiOutcome::Json("{rotas".to_string()));
        assert!(result.unwrap_err().starts_with("Error parseando respuesta"));
    }
}
