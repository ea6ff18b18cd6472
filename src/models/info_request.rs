use serde::{Deserialize, Serialize};

/// Cuerpo de `POST /solicitar-info-curso`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InfoRequest {
    pub curso_id: String,
    pub email: String,
}

/// Respuesta (éxito o error) del backend: `{ "message": "..." }`
#[derive(Debug, Clone, PartialEq, Default, Deserialize)]
pub struct InfoRequestResponse {
    #[serde(default)]
    pub message: Option<String>,
}
