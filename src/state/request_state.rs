// ============================================================================
// REQUEST STATE - Ciclo de vida de la carga (compartido por usuario y cursos)
// ============================================================================

/// Estado de la carga inicial; no hay granularidad por sección
#[derive(Clone, Debug, PartialEq, Default)]
pub enum RequestState {
    /// Antes de que se ejecute el efecto de montaje
    #[default]
    Idle,
    Loading,
    Success,
    Error(String),
}

impl RequestState {
    /// `Idle` cuenta como cargando: todavía no hay nada que mostrar
    pub fn is_loading(&self) -> bool {
        matches!(self, RequestState::Idle | RequestState::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            RequestState::Error(message) => Some(message),
            _ => None,
        }
    }
}
