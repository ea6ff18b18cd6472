// ============================================================================
// RENDER STATE - Qué debe mostrar cada sección (sin DOM)
// ============================================================================
// Las dos secciones derivan su estado del mismo RequestState: cargando,
// error o éxito son mutuamente excluyentes.
// ============================================================================

use crate::models::{Course, UserProfile};
use crate::state::{AppState, RequestState};
use crate::utils::format::{format_duration, format_price, format_registration_date};
use crate::utils::i18n::t;

#[derive(Debug, Clone, PartialEq)]
pub struct UserCardModel {
    pub id: String,
    pub name: String,
    pub email: String,
    pub registered: String,
    pub raw_json: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum UserSection {
    Loading,
    Error(String),
    /// Éxito pero sin usuario: no se pinta nada
    Missing,
    Ready(UserCardModel),
}

#[derive(Debug, Clone, PartialEq)]
pub struct CourseCardModel {
    pub id: String,
    pub title: String,
    pub duration: String,
    pub price: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq)]
pub enum CoursesSection {
    Loading,
    Error(String),
    Empty,
    Grid(Vec<CourseCardModel>),
}

/// ID mostrado en el título: `...` cargando, `N/A` con error o sin usuario
pub fn header_user_id(request: &RequestState, user: Option<&UserProfile>, lang: &str) -> String {
    if request.is_loading() {
        return "...".to_string();
    }
    match (request, user) {
        (RequestState::Error(_), _) | (_, None) => t("not_available", lang),
        (_, Some(user)) => user.usuario_id.clone(),
    }
}

pub fn user_section(request: &RequestState, user: Option<&UserProfile>, lang: &str) -> UserSection {
    if request.is_loading() {
        return UserSection::Loading;
    }
    if let Some(message) = request.error() {
        return UserSection::Error(message.to_string());
    }
    match user {
        Some(user) => UserSection::Ready(UserCardModel {
            id: user.usuario_id.clone(),
            name: user.nombre.clone(),
            email: user.email.clone(),
            registered: user
                .fecha_registro
                .as_deref()
                .map(format_registration_date)
                .unwrap_or_else(|| t("not_available", lang)),
            raw_json: user.to_pretty_json(),
        }),
        None => UserSection::Missing,
    }
}

pub fn courses_section(request: &RequestState, courses: &[Course], lang: &str) -> CoursesSection {
    if request.is_loading() {
        return CoursesSection::Loading;
    }
    if let Some(message) = request.error() {
        return CoursesSection::Error(message.to_string());
    }
    if courses.is_empty() {
        return CoursesSection::Empty;
    }
    CoursesSection::Grid(courses.iter().map(|course| course_card(course, lang)).collect())
}

pub fn course_card(course: &Course, lang: &str) -> CourseCardModel {
    CourseCardModel {
        id: course.curso_id.clone(),
        title: course.titulo.clone(),
        duration: format_duration(course.duracion_horas, lang),
        price: format_price(course.precio, lang),
        description: course.descripcion.clone(),
    }
}

/// Snapshot completo para la vista
#[derive(Debug, Clone, PartialEq)]
pub struct PageModel {
    pub header_user_id: String,
    pub user: UserSection,
    pub courses: CoursesSection,
}

impl PageModel {
    pub fn from_state(state: &AppState) -> Self {
        let request = state.get_request_state();
        let user = state.get_user();
        let lang = state.get_language();
        let courses = state.courses.borrow();

        Self {
            header_user_id: header_user_id(&request, user.as_ref(), &lang),
            user: user_section(&request, user.as_ref(), &lang),
            courses: courses_section(&request, &courses, &lang),
        }
    }
}
