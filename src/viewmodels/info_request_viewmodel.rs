// ============================================================================
// INFO REQUEST VIEWMODEL - "Solicitar información" de un curso
// ============================================================================
// Sin reintentos ni protección contra envíos solapados: cada click es una
// petición independiente.
// ============================================================================

use crate::models::InfoRequest;
use crate::services::{ApiClient, CatalogApi};
use crate::utils::i18n::t;

/// Resultado que la vista muestra en un alert
#[derive(Debug, Clone, PartialEq)]
pub enum InfoRequestOutcome {
    /// Email vacío: no se llamó a la red
    MissingEmail,
    /// Mensaje devuelto por el backend (si lo hubo)
    Sent(Option<String>),
    Failed(String),
}

impl InfoRequestOutcome {
    pub fn alert_text(&self, lang: &str) -> String {
        match self {
            InfoRequestOutcome::MissingEmail => t("email_required", lang),
            InfoRequestOutcome::Sent(Some(message)) => message.clone(),
            InfoRequestOutcome::Sent(None) => t("request_sent", lang),
            InfoRequestOutcome::Failed(reason) => format!("{} {}", t("request_failed", lang), reason),
        }
    }
}

/// Validación síncrona: solo exige un email no vacío
pub fn prepare(course_id: &str, email: &str) -> Result<InfoRequest, InfoRequestOutcome> {
    if email.is_empty() {
        log::warn!("⚠️ [INFO-REQUEST] Email vacío, no se envía nada");
        return Err(InfoRequestOutcome::MissingEmail);
    }
    Ok(InfoRequest {
        curso_id: course_id.to_string(),
        email: email.to_string(),
    })
}

pub struct InfoRequestViewModel<A: CatalogApi = ApiClient> {
    api: A,
}

impl InfoRequestViewModel<ApiClient> {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl Default for InfoRequestViewModel<ApiClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: CatalogApi> InfoRequestViewModel<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    pub async fn send(&self, request: InfoRequest) -> InfoRequestOutcome {
        log::info!("✉️ [INFO-REQUEST] Enviando solicitud para curso {}", request.curso_id);
        match self.api.request_course_info(&request).await {
            Ok(response) => {
                log::info!("✅ [INFO-REQUEST] Solicitud aceptada: {:?}", response.message);
                InfoRequestOutcome::Sent(response.message.filter(|m| !m.is_empty()))
            }
            Err(e) => {
                log::error!("❌ [INFO-REQUEST] Error (status {:?}): {}", e.status(), e);
                InfoRequestOutcome::Failed(e.to_string())
            }
        }
    }

    /// `prepare` + `send` en un solo future
    ///
    /// La tarjeta de curso hace los mismos dos pasos por separado: el guard
    /// corre dentro del click y solo el POST va a `spawn_local`. Esta es la
    /// entrada que se ejercita en los tests de host.
    pub async fn submit(&self, course_id: &str, email: &str) -> InfoRequestOutcome {
        match prepare(course_id, email) {
            Ok(request) => self.send(request).await,
            Err(outcome) => outcome,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::models::InfoRequestResponse;
    use crate::services::ApiError;
    use crate::viewmodels::fake_api::{user, FakeApi};

    fn api() -> FakeApi {
        FakeApi::ok(user("user001"), Vec::new())
    }

    #[test]
    fn empty_email_never_hits_network() {
        let vm = InfoRequestViewModel::with_api(api());

        let outcome = block_on(vm.submit("c1", ""));

        assert_eq!(outcome, InfoRequestOutcome::MissingEmail);
        assert!(vm.api.calls().is_empty());
        assert_eq!(prepare("c1", ""), Err(InfoRequestOutcome::MissingEmail));
        assert_eq!(
            outcome.alert_text("ES"),
            "Por favor, introduce tu email para solicitar información."
        );
    }

    #[test]
    fn success_shows_server_message() {
        let vm = InfoRequestViewModel::with_api(api());

        let outcome = block_on(vm.submit("c1", "ana@example.com"));

        assert_eq!(outcome, InfoRequestOutcome::Sent(Some("Solicitud registrada".to_string())));
        assert_eq!(outcome.alert_text("ES"), "Solicitud registrada");
        assert_eq!(vm.api.calls(), ["POST c1 ana@example.com"]);
    }

    #[test]
    fn success_without_message_uses_fallback() {
        let mut fake = api();
        fake.info = Ok(InfoRequestResponse::default());
        let vm = InfoRequestViewModel::with_api(fake);

        let outcome = block_on(vm.submit("c1", "ana@example.com"));

        assert_eq!(outcome.alert_text("EN"), "Request sent successfully.");
    }

    #[test]
    fn client_error_surfaces_server_text() {
        let mut fake = api();
        fake.info = Err(ApiError::Rejected {
            status: 400,
            message: "El curso c9 no existe".to_string(),
        });
        let vm = InfoRequestViewModel::with_api(fake);

        let outcome = block_on(vm.submit("c9", "ana@example.com"));

        assert_eq!(outcome, InfoRequestOutcome::Failed("El curso c9 no existe".to_string()));
        assert!(outcome.alert_text("ES").contains("El curso c9 no existe"));
    }

    #[test]
    fn overlapping_submissions_are_not_deduplicated() {
        let vm = InfoRequestViewModel::with_api(api());

        block_on(async {
            vm.submit("c1", "ana@example.com").await;
            vm.submit("c1", "ana@example.com").await;
        });

        assert_eq!(vm.api.calls().len(), 2);
    }
}
