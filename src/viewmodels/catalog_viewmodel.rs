// ============================================================================
// CATALOG VIEWMODEL - Carga inicial (usuario y luego cursos)
// ============================================================================
// Las dos peticiones son secuenciales: la segunda empieza cuando termina la
// primera. Cualquier fallo corta el ciclo y queda como RequestState::Error.
// ============================================================================

use crate::services::{ApiClient, ApiError, CatalogApi};
use crate::state::{AppState, RequestState};

/// ViewModel del catálogo - SOLO lógica, sin DOM
pub struct CatalogViewModel<A: CatalogApi = ApiClient> {
    api: A,
}

impl CatalogViewModel<ApiClient> {
    pub fn new() -> Self {
        Self::with_api(ApiClient::new())
    }
}

impl Default for CatalogViewModel<ApiClient> {
    fn default() -> Self {
        Self::new()
    }
}

impl<A: CatalogApi> CatalogViewModel<A> {
    pub fn with_api(api: A) -> Self {
        Self { api }
    }

    /// Ejecuta un ciclo completo de carga sobre `state`
    pub async fn load(&self, state: &AppState, user_id: &str) {
        log::info!("🔄 [LOADER] Cargando usuario {} y catálogo", user_id);
        state.set_request_state(RequestState::Loading);

        match self.fetch_into(state, user_id).await {
            Ok(course_count) => {
                log::info!("✅ [LOADER] Carga completa: {} cursos", course_count);
                state.set_request_state(RequestState::Success);
            }
            Err(e) => {
                log::error!("❌ [LOADER] Error durante las llamadas al API: {}", e);
                state.set_request_state(RequestState::Error(e.to_string()));
            }
        }
    }

    async fn fetch_into(&self, state: &AppState, user_id: &str) -> Result<usize, ApiError> {
        let user = self.api.get_user(user_id).await?;
        log::info!("👤 [LOADER] Usuario recibido: {}", user.usuario_id);
        state.set_user(Some(user));

        let courses = self.api.list_courses().await?;
        let count = courses.len();
        state.set_courses(courses);
        Ok(count)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use crate::services::Resource;
    use crate::viewmodels::fake_api::{course, user, FakeApi};

    #[test]
    fn success_fills_both_datasets_in_order() {
        let api = FakeApi::ok(user("user001"), vec![course("c2", "Rust"), course("c1", "SQL")]);
        let vm = CatalogViewModel::with_api(api);
        let state = AppState::default();

        block_on(vm.load(&state, "user001"));

        assert_eq!(state.get_request_state(), RequestState::Success);
        assert_eq!(state.get_user().map(|u| u.usuario_id), Some("user001".to_string()));
        let ids: Vec<_> = state.get_courses().into_iter().map(|c| c.curso_id).collect();
        assert_eq!(ids, ["c2", "c1"]);
        assert_eq!(vm.api.calls(), ["GET /usuarios/user001", "GET /cursos"]);
    }

    #[test]
    fn user_failure_skips_course_fetch() {
        let mut api = FakeApi::ok(user("user001"), vec![course("c1", "SQL")]);
        api.user = Err(ApiError::Http {
            resource: Resource::User,
            status: 404,
            body: "Not Found".to_string(),
        });
        let vm = CatalogViewModel::with_api(api);
        let state = AppState::default();

        block_on(vm.load(&state, "user001"));

        assert_eq!(
            state.get_request_state(),
            RequestState::Error("Error fetching user! Status: 404 - Message: Not Found".to_string())
        );
        assert!(!state.get_request_state().is_loading());
        assert!(state.get_courses().is_empty());
        assert_eq!(vm.api.calls(), ["GET /usuarios/user001"]);
    }

    #[test]
    fn course_failure_surfaces_after_user_loaded() {
        let mut api = FakeApi::ok(user("user001"), Vec::new());
        api.courses = Err(ApiError::Http {
            resource: Resource::Courses,
            status: 500,
            body: "Internal".to_string(),
        });
        let vm = CatalogViewModel::with_api(api);
        let state = AppState::default();

        block_on(vm.load(&state, "user001"));

        let request = state.get_request_state();
        assert_eq!(
            request.error(),
            Some("Error fetching courses! Status: 500 - Message: Internal")
        );
        assert!(state.get_user().is_some());
    }

    #[test]
    fn reload_clears_previous_error() {
        let api = FakeApi::ok(user("user001"), Vec::new());
        let vm = CatalogViewModel::with_api(api);
        let state = AppState::default();
        state.set_request_state(RequestState::Error("viejo".to_string()));

        block_on(vm.load(&state, "user001"));

        assert_eq!(state.get_request_state(), RequestState::Success);
    }

    #[test]
    fn transport_error_becomes_message() {
        let mut api = FakeApi::ok(user("user001"), Vec::new());
        api.user = Err(ApiError::Network("Failed to fetch".to_string()));
        let vm = CatalogViewModel::with_api(api);
        let state = AppState::default();

        block_on(vm.load(&state, "user001"));

        assert_eq!(
            state.get_request_state(),
            RequestState::Error("Network error: Failed to fetch".to_string())
        );
    }
}
