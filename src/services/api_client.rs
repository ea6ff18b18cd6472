// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use async_trait::async_trait;
use gloo_net::http::{Request, Response};
use serde::de::DeserializeOwned;
use crate::config::CONFIG;
use crate::models::{Course, InfoRequest, InfoRequestResponse, UserProfile};
use crate::services::error::{ApiError, Resource};
use crate::utils::constants::{COURSES_PATH, INFO_REQUEST_PATH, USERS_PATH};

/// Operaciones remotas del catálogo
///
/// Los futures no son `Send`: en WASM todo corre en el hilo del navegador.
#[async_trait(?Send)]
pub trait CatalogApi {
    async fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError>;

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError>;

    async fn request_course_info(
        &self,
        request: &InfoRequest,
    ) -> Result<InfoRequestResponse, ApiError>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(&CONFIG.api_base_url)
    }

    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn user_url(&self, user_id: &str) -> String {
        format!("{}{}/{}", self.base_url, USERS_PATH, user_id)
    }

    pub fn courses_url(&self) -> String {
        format!("{}{}", self.base_url, COURSES_PATH)
    }

    pub fn info_request_url(&self) -> String {
        format!("{}{}", self.base_url, INFO_REQUEST_PATH)
    }

    /// GET + decodificación JSON; un status no-2xx lleva el cuerpo como texto
    async fn get_json<T: DeserializeOwned>(&self, url: &str, resource: Resource) -> Result<T, ApiError> {
        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = body_or_empty(response.text().await);
            return Err(ApiError::Http { resource, status, body });
        }

        decode(response).await
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait(?Send)]
impl CatalogApi for ApiClient {
    async fn get_user(&self, user_id: &str) -> Result<UserProfile, ApiError> {
        let url = self.user_url(user_id);
        log::info!("👤 [API] GET {}", url);
        self.get_json(&url, Resource::User).await
    }

    async fn list_courses(&self) -> Result<Vec<Course>, ApiError> {
        let url = self.courses_url();
        log::info!("📚 [API] GET {}", url);
        self.get_json(&url, Resource::Courses).await
    }

    async fn request_course_info(
        &self,
        request: &InfoRequest,
    ) -> Result<InfoRequestResponse, ApiError> {
        let url = self.info_request_url();
        log::info!("✉️ [API] POST {} (curso: {})", url, request.curso_id);

        let response = Request::post(&url)
            .json(request)
            .map_err(|e| ApiError::Serialization(e.to_string()))?
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let body = body_or_empty(response.text().await);
            return Err(ApiError::Rejected {
                status,
                message: rejection_message(status, &body),
            });
        }

        decode(response).await
    }
}

/// Cuerpo de una respuesta de error; si no se puede leer se deja vacío
fn body_or_empty(body: Result<String, gloo_net::Error>) -> String {
    body.unwrap_or_else(|e| {
        log::warn!("⚠️ [API] No se pudo leer el cuerpo de la respuesta: {}", e);
        String::new()
    })
}

async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Parse(e.to_string()))
}

/// Mensaje de un rechazo del backend: el campo `message` del JSON, o `Error: <status>`
pub fn rejection_message(status: u16, body: &str) -> String {
    serde_json::from_str::<InfoRequestResponse>(body)
        .ok()
        .and_then(|parsed| parsed.message)
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Error: {}", status))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn urls_are_built_from_base() {
        let client = ApiClient::with_base_url("https://api.example.com/dev/");
        assert_eq!(client.user_url("user001"), "https://api.example.com/dev/usuarios/user001");
        assert_eq!(client.courses_url(), "https://api.example.com/dev/cursos");
        assert_eq!(
            client.info_request_url(),
            "https://api.example.com/dev/solicitar-info-curso"
        );
    }

    #[test]
    fn rejection_prefers_server_message() {
        assert_eq!(
            rejection_message(400, r#"{"message":"El email no es válido"}"#),
            "El email no es válido"
        );
    }

    #[test]
    fn unreadable_error_body_becomes_empty() {
        let unreadable = Err(gloo_net::Error::GlooError("body already used".to_string()));
        assert_eq!(body_or_empty(unreadable), "");
        assert_eq!(body_or_empty(Ok("Not Found".to_string())), "Not Found");

        let body = body_or_empty(Err(gloo_net::Error::GlooError(String::new())));
        assert_eq!(rejection_message(500, &body), "Error: 500");
    }

    #[test]
    fn rejection_falls_back_to_status() {
        assert_eq!(rejection_message(502, "Bad Gateway"), "Error: 502");
        assert_eq!(rejection_message(400, "{}"), "Error: 400");
        assert_eq!(rejection_message(400, r#"{"message":""}"#), "Error: 400");
    }
}
