// ============================================================================
// APP STATE - Estado global de la aplicación
// ============================================================================

use std::cell::RefCell;
use std::rc::Rc;
use crate::models::{Course, UserProfile};
use crate::state::request_state::RequestState;

/// Estado global de la aplicación
///
/// Clonar comparte las mismas celdas; los closures de la vista guardan clones.
#[derive(Clone)]
pub struct AppState {
    pub user: Rc<RefCell<Option<UserProfile>>>,
    pub courses: Rc<RefCell<Vec<Course>>>,
    pub request: Rc<RefCell<RequestState>>,

    // Input del formulario, compartido por todas las tarjetas
    pub email: Rc<RefCell<String>>,
    pub language: Rc<RefCell<String>>,

    // Reactivity: callbacks para notificar cambios
    pub change_subscribers: Rc<RefCell<Vec<Rc<dyn Fn()>>>>,
}

impl AppState {
    /// Crear nuevo estado de aplicación
    pub fn new(language: &str) -> Self {
        Self {
            user: Rc::new(RefCell::new(None)),
            courses: Rc::new(RefCell::new(Vec::new())),
            request: Rc::new(RefCell::new(RequestState::Idle)),
            email: Rc::new(RefCell::new(String::new())),
            language: Rc::new(RefCell::new(language.to_string())),
            change_subscribers: Rc::new(RefCell::new(Vec::new())),
        }
    }

    pub fn get_user(&self) -> Option<UserProfile> {
        self.user.borrow().clone()
    }

    pub fn set_user(&self, user: Option<UserProfile>) {
        *self.user.borrow_mut() = user;
        self.notify_subscribers();
    }

    pub fn get_courses(&self) -> Vec<Course> {
        self.courses.borrow().clone()
    }

    pub fn set_courses(&self, courses: Vec<Course>) {
        *self.courses.borrow_mut() = courses;
        self.notify_subscribers();
    }

    pub fn get_request_state(&self) -> RequestState {
        self.request.borrow().clone()
    }

    pub fn set_request_state(&self, state: RequestState) {
        *self.request.borrow_mut() = state;
        self.notify_subscribers();
    }

    pub fn get_email(&self) -> String {
        self.email.borrow().clone()
    }

    /// Sin notificar: escribir en el input no debe re-renderizar
    pub fn set_email(&self, email: &str) {
        *self.email.borrow_mut() = email.to_string();
    }

    pub fn get_language(&self) -> String {
        self.language.borrow().clone()
    }

    /// Suscribirse a cambios de estado
    pub fn subscribe_to_changes<F>(&self, callback: F)
    where
        F: Fn() + 'static,
    {
        self.change_subscribers.borrow_mut().push(Rc::new(callback));
    }

    /// Notificar a todos los subscribers
    pub fn notify_subscribers(&self) {
        // Copia para que un callback pueda suscribir sin pánico de RefCell
        let subscribers: Vec<Rc<dyn Fn()>> = self.change_subscribers.borrow().clone();
        for callback in subscribers {
            callback();
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new(crate::utils::constants::DEFAULT_LANGUAGE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn clones_share_cells() {
        let state = AppState::default();
        let clone = state.clone();
        clone.set_request_state(RequestState::Loading);
        assert_eq!(state.get_request_state(), RequestState::Loading);
    }

    #[test]
    fn data_changes_notify_but_email_does_not() {
        let state = AppState::default();
        let hits = Rc::new(Cell::new(0));
        {
            let hits = hits.clone();
            state.subscribe_to_changes(move || hits.set(hits.get() + 1));
        }

        state.set_email("ana@example.com");
        assert_eq!(hits.get(), 0);
        assert_eq!(state.get_email(), "ana@example.com");

        state.set_courses(Vec::new());
        state.set_user(None);
        state.set_request_state(RequestState::Success);
        assert_eq!(hits.get(), 3);
    }
}
