// ============================================================================
// STATE MODULE - State Management con Rc<RefCell> + notificaciones
// ============================================================================

pub mod request_state;
pub mod app_state;

pub use request_state::*;
pub use app_state::*;
