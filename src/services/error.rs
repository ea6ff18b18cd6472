// ============================================================================
// API ERROR - Fallos de red/HTTP convertidos a texto legible
// ============================================================================

use std::fmt;
use thiserror::Error;

/// Recurso consultado, aparece en el mensaje de error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resource {
    User,
    Courses,
}

impl fmt::Display for Resource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Resource::User => "user",
            Resource::Courses => "courses",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// Fallo de transporte (DNS, CORS, conexión cortada...)
    #[error("Network error: {0}")]
    Network(String),

    /// Respuesta no-2xx de un GET; el cuerpo se muestra como texto
    #[error("Error fetching {resource}! Status: {status} - Message: {body}")]
    Http {
        resource: Resource,
        status: u16,
        body: String,
    },

    /// Respuesta no-2xx del POST; `message` viene del JSON del backend
    #[error("{message}")]
    Rejected { status: u16, message: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl ApiError {
    /// Código HTTP si el fallo vino del servidor
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Http { status, .. } | ApiError::Rejected { status, .. } => Some(*status),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_matches_fetch_convention() {
        let err = ApiError::Http {
            resource: Resource::User,
            status: 404,
            body: "{\"message\":\"Usuario no encontrado\"}".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Error fetching user! Status: 404 - Message: {\"message\":\"Usuario no encontrado\"}"
        );
        assert_eq!(err.status(), Some(404));

        let err = ApiError::Http {
            resource: Resource::Courses,
            status: 500,
            body: String::new(),
        };
        assert_eq!(err.to_string(), "Error fetching courses! Status: 500 - Message: ");
    }

    #[test]
    fn rejection_shows_only_server_text() {
        let err = ApiError::Rejected {
            status: 400,
            message: "Email inválido".to_string(),
        };
        assert_eq!(err.to_string(), "Email inválido");
        assert_eq!(err.status(), Some(400));
    }

    #[test]
    fn transport_errors_have_no_status() {
        let err = ApiError::Network("Failed to fetch".to_string());
        assert_eq!(err.to_string(), "Network error: Failed to fetch");
        assert_eq!(err.status(), None);
        assert_eq!(ApiError::Parse("eof".into()).status(), None);
    }
}
